//! The automated player
//!
//! Wraps the alpha-beta [`Searcher`] with timing and logging. The engine
//! holds no game state: every call is a pure function of the board it is
//! given and the side to move.
//!
//! # Example
//!
//! ```
//! use othello::{AIEngine, Board, Player};
//!
//! let mut engine = AIEngine::new();
//! let board = Board::new();
//!
//! let result = engine.get_move_with_stats(&board, Player::White);
//! println!("Best move: {:?}", result.best_move);
//! println!("Time: {}ms", result.time_ms);
//! ```

use std::time::Instant;

use tracing::debug;

use crate::board::{Board, Player, Pos};
use crate::search::{SearchResult, Searcher, DEFAULT_DEPTH};

/// Result of a move search with detailed statistics.
#[derive(Debug, Clone)]
pub struct MoveResult {
    /// Best move found, None if the side has no legal move
    pub best_move: Option<Pos>,
    /// Material differential the search expects after the move
    pub score: i32,
    /// Time taken in milliseconds
    pub time_ms: u64,
    /// Number of nodes searched
    pub nodes: u64,
    /// Alpha-beta cutoffs during the search
    pub cutoffs: u64,
}

impl MoveResult {
    #[inline]
    fn from_search(result: SearchResult, time_ms: u64) -> Self {
        Self {
            best_move: result.best_move,
            score: result.score,
            time_ms,
            nodes: result.nodes,
            cutoffs: result.stats.cutoffs,
        }
    }
}

/// Main AI engine.
pub struct AIEngine {
    searcher: Searcher,
}

impl AIEngine {
    /// Engine searching [`DEFAULT_DEPTH`] plies past each candidate move.
    #[must_use]
    pub fn new() -> Self {
        Self::with_depth(DEFAULT_DEPTH)
    }

    /// Create an AI engine with a custom lookahead.
    ///
    /// ```
    /// use othello::AIEngine;
    ///
    /// let engine = AIEngine::with_depth(5);
    /// assert_eq!(engine.depth(), 5);
    /// ```
    #[must_use]
    pub fn with_depth(depth: u8) -> Self {
        Self {
            searcher: Searcher::with_depth(depth),
        }
    }

    /// Get the best move for `player`, or None if it has no legal move.
    pub fn get_move(&mut self, board: &Board, player: Player) -> Option<Pos> {
        self.get_move_with_stats(board, player).best_move
    }

    /// Get the best move along with search statistics.
    pub fn get_move_with_stats(&mut self, board: &Board, player: Player) -> MoveResult {
        let start = Instant::now();
        let result = self.searcher.best_move(board, player);
        let time_ms = start.elapsed().as_millis() as u64;

        debug!(
            %player,
            best_move = ?result.best_move,
            score = result.score,
            nodes = result.nodes,
            cutoffs = result.stats.cutoffs,
            time_ms,
            "search complete"
        );

        MoveResult::from_search(result, time_ms)
    }

    pub fn set_depth(&mut self, depth: u8) {
        self.searcher.set_depth(depth);
    }

    pub fn depth(&self) -> u8 {
        self.searcher.depth()
    }
}

impl Default for AIEngine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Stone;
    use crate::rules::legal_moves;

    #[test]
    fn test_engine_creation() {
        let engine = AIEngine::new();
        assert_eq!(engine.depth(), DEFAULT_DEPTH);
    }

    #[test]
    fn test_engine_returns_legal_move() {
        let mut engine = AIEngine::new();
        let board = Board::new();
        let mov = engine.get_move(&board, Player::White).expect("White can move");
        assert!(legal_moves(&board, Player::White).contains(&mov));
    }

    #[test]
    fn test_engine_no_move() {
        let mut engine = AIEngine::new();
        let mut board = Board::empty();
        board.set(Pos::new(4, 4), Stone::White);

        let result = engine.get_move_with_stats(&board, Player::Black);
        assert_eq!(result.best_move, None);
        assert_eq!(result.score, -1);
    }

    #[test]
    fn test_engine_set_depth() {
        let mut engine = AIEngine::default();
        engine.set_depth(1);
        assert_eq!(engine.depth(), 1);

        let result = engine.get_move_with_stats(&Board::new(), Player::Black);
        // Four root moves, each followed by White's replies at depth 1
        assert!(result.best_move.is_some());
        assert!(result.nodes >= 4);
    }

    #[test]
    fn test_engine_alternating_colors() {
        let mut engine = AIEngine::new();
        let mut board = Board::new();
        let mut player = Player::Black;

        for _ in 0..6 {
            let mov = engine.get_move(&board, player).expect("opening has moves");
            assert!(legal_moves(&board, player).contains(&mov));
            crate::rules::apply_move(&mut board, mov, player);
            player = player.opponent();
        }
        assert_eq!(board.stone_count(), 10);
    }
}
