//! Minimax search with alpha-beta pruning
//!
//! The automated player looks at each of its legal moves, then searches the
//! opponent's reply and a fixed number of further plies below it. Leaves are
//! scored by material differential from the root player's side: the root
//! player maximizes, its opponent minimizes.
//!
//! Pruning only skips work. For any position and depth the value is identical
//! to a plain minimax over the same tree, because every root move is searched
//! with a full `(-INF, INF)` window.
//!
//! # Example
//!
//! ```
//! use othello::board::{Board, Player, Pos};
//! use othello::search::Searcher;
//!
//! let mut searcher = Searcher::new();
//! let result = searcher.best_move(&Board::new(), Player::Black);
//! assert!(result.best_move.is_some());
//! ```

use crate::board::{Board, Player, Pos, TOTAL_CELLS};
use crate::eval::evaluate;
use crate::rules::{apply_move, legal_moves, undo_move};

/// Infinity score for alpha-beta bounds (material never exceeds 64)
pub const INF: i32 = TOTAL_CELLS as i32 + 1;

/// Plies searched below the root move
pub const DEFAULT_DEPTH: u8 = 3;

/// Search statistics for diagnostics.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Sibling loops abandoned because alpha met beta
    pub cutoffs: u64,
    /// Positions scored by the static evaluator
    pub leaves: u64,
}

/// Search result containing the best move found and associated statistics.
#[derive(Debug, Clone)]
pub struct SearchResult {
    /// Best move found, None if the player has no legal move
    pub best_move: Option<Pos>,
    /// Value of the best move (material, root player's side)
    pub score: i32,
    /// Total nodes visited
    pub nodes: u64,
    /// Search diagnostics
    pub stats: SearchStats,
}

/// Depth-limited alpha-beta searcher.
///
/// Holds no position state between calls; only the configured depth and
/// the counters of the last search.
#[derive(Debug, Clone)]
pub struct Searcher {
    depth: u8,
    nodes: u64,
    stats: SearchStats,
}

impl Searcher {
    #[must_use]
    pub fn new() -> Self {
        Self::with_depth(DEFAULT_DEPTH)
    }

    /// Searcher looking `depth` plies past each candidate move.
    #[must_use]
    pub fn with_depth(depth: u8) -> Self {
        Self {
            depth,
            nodes: 0,
            stats: SearchStats::default(),
        }
    }

    #[inline]
    pub fn depth(&self) -> u8 {
        self.depth
    }

    pub fn set_depth(&mut self, depth: u8) {
        self.depth = depth;
    }

    /// Choose the move for `player`.
    ///
    /// Every legal move is tried in row-major order and scored by searching
    /// the opponent's reply at the configured depth. The first move with the
    /// strictly greatest score wins, so ties go to the earlier move.
    #[must_use]
    pub fn best_move(&mut self, board: &Board, player: Player) -> SearchResult {
        self.reset_counters();

        let mut work_board = board.clone();
        let mut best_move = None;
        let mut best_score = -INF;

        for mov in legal_moves(&work_board, player) {
            let flipped = apply_move(&mut work_board, mov, player);
            let score = self.alpha_beta(
                &mut work_board,
                self.depth,
                -INF,
                INF,
                player.opponent(),
                player,
            );
            undo_move(&mut work_board, mov, flipped);

            if score > best_score {
                best_score = score;
                best_move = Some(mov);
            }
        }

        if best_move.is_none() {
            best_score = evaluate(board, player);
        }

        SearchResult {
            best_move,
            score: best_score,
            nodes: self.nodes,
            stats: self.stats.clone(),
        }
    }

    /// Value of `board` with `to_move` on turn, searched `depth` plies deep.
    ///
    /// `maximizer` is the side whose material differential is being
    /// maximized; the other side minimizes. The board is not modified.
    #[must_use]
    pub fn search(
        &mut self,
        board: &Board,
        depth: u8,
        alpha: i32,
        beta: i32,
        to_move: Player,
        maximizer: Player,
    ) -> i32 {
        self.reset_counters();
        let mut work_board = board.clone();
        self.alpha_beta(&mut work_board, depth, alpha, beta, to_move, maximizer)
    }

    /// Nodes visited by the last search
    #[inline]
    pub fn nodes(&self) -> u64 {
        self.nodes
    }

    /// Statistics of the last search
    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }

    fn reset_counters(&mut self) {
        self.nodes = 0;
        self.stats = SearchStats::default();
    }

    /// Make/unmake alpha-beta. `board` is restored before returning.
    fn alpha_beta(
        &mut self,
        board: &mut Board,
        depth: u8,
        mut alpha: i32,
        mut beta: i32,
        to_move: Player,
        maximizer: Player,
    ) -> i32 {
        self.nodes += 1;

        // Leaf: depth exhausted, or the side to move is stuck
        let moves = if depth == 0 {
            Vec::new()
        } else {
            legal_moves(board, to_move)
        };
        if moves.is_empty() {
            self.stats.leaves += 1;
            return evaluate(board, maximizer);
        }

        let maximizing = to_move == maximizer;
        let mut value = if maximizing { -INF } else { INF };

        for mov in moves {
            let flipped = apply_move(board, mov, to_move);
            let child = self.alpha_beta(board, depth - 1, alpha, beta, to_move.opponent(), maximizer);
            undo_move(board, mov, flipped);

            if maximizing {
                value = value.max(child);
                alpha = alpha.max(child);
            } else {
                value = value.min(child);
                beta = beta.min(child);
            }

            if alpha >= beta {
                self.stats.cutoffs += 1;
                break;
            }
        }

        value
    }
}

impl Default for Searcher {
    fn default() -> Self {
        Self::new()
    }
}
