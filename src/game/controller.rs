//! Turn orchestration for a single game
//!
//! [`GameController`] owns the authoritative board and moves between three
//! phases:
//!
//! ```text
//!   HumanTurn(p) --legal move--> HumanTurn(q) | AutoTurn(q) | GameOver
//!   AutoTurn(p)  --request_auto_move--> HumanTurn(q) | AutoTurn(q) | GameOver
//!   GameOver     (terminal)
//! ```
//!
//! After every move the opponent is on turn if it has a legal move. If it
//! has none, it passes and the mover plays again. The game ends only when
//! neither side can move.

use tracing::{debug, info, warn};

use super::config::{GameConfig, GameMode};
use crate::board::{Bitboard, Board, Player, Pos};
use crate::engine::{AIEngine, MoveResult};
use crate::eval::{score, Score};
use crate::rules::{self, GameOutcome};

/// Controller state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// Waiting for a move from the human playing this color
    HumanTurn(Player),
    /// Waiting for the presentation layer to call `request_auto_move`
    AutoTurn(Player),
    GameOver,
}

/// One applied move, with enough data to take it back
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveRecord {
    pub pos: Pos,
    pub player: Player,
    pub flipped: Bitboard,
}

pub struct GameController {
    board: Board,
    phase: GamePhase,
    config: GameConfig,
    engine: AIEngine,
    history: Vec<MoveRecord>,
    last_ai_result: Option<MoveResult>,
}

impl GameController {
    /// New game from the standard opening, Black to move.
    pub fn new(config: GameConfig) -> Self {
        Self::from_position(Board::new(), Player::Black, config)
    }

    /// Start from an arbitrary position with `to_move` on turn.
    ///
    /// A stuck `to_move` passes straight away; a finished position starts
    /// in [`GamePhase::GameOver`].
    pub fn from_position(board: Board, to_move: Player, config: GameConfig) -> Self {
        let engine = AIEngine::with_depth(config.search_depth);
        let mut controller = Self {
            board,
            phase: GamePhase::GameOver,
            config,
            engine,
            history: Vec::new(),
            last_ai_result: None,
        };
        controller.settle(to_move);
        controller
    }

    /// Back to the opening position, keeping the configuration.
    pub fn reset(&mut self) {
        self.board = Board::new();
        self.history.clear();
        self.last_ai_result = None;
        self.settle(Player::Black);
        info!(mode = ?self.config.mode, "new game");
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    #[inline]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Side on turn, None once the game is over
    pub fn current_player(&self) -> Option<Player> {
        match self.phase {
            GamePhase::HumanTurn(p) | GamePhase::AutoTurn(p) => Some(p),
            GamePhase::GameOver => None,
        }
    }

    /// Legal moves of `player` on the current board
    pub fn legal_moves(&self, player: Player) -> Vec<Pos> {
        rules::legal_moves(&self.board, player)
    }

    /// Legal moves of the side on turn (empty once the game is over)
    pub fn current_legal_moves(&self) -> Vec<Pos> {
        self.current_player()
            .map(|p| self.legal_moves(p))
            .unwrap_or_default()
    }

    #[inline]
    pub fn is_game_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }

    #[inline]
    pub fn is_auto_turn(&self) -> bool {
        matches!(self.phase, GamePhase::AutoTurn(_))
    }

    pub fn score(&self) -> Score {
        score(&self.board)
    }

    /// Final result, None while the game is running
    pub fn outcome(&self) -> Option<GameOutcome> {
        if self.is_game_over() {
            rules::outcome(&self.board)
        } else {
            None
        }
    }

    pub fn history(&self) -> &[MoveRecord] {
        &self.history
    }

    pub fn last_move(&self) -> Option<Pos> {
        self.history.last().map(|r| r.pos)
    }

    /// Stones flipped by the most recent move
    pub fn last_flips(&self) -> Bitboard {
        self.history.last().map(|r| r.flipped).unwrap_or_default()
    }

    pub fn last_ai_result(&self) -> Option<&MoveResult> {
        self.last_ai_result.as_ref()
    }

    /// Play a human move.
    ///
    /// Returns false and leaves the game unchanged if it is not a human's
    /// turn or the move is illegal.
    pub fn apply_human_move(&mut self, pos: Pos) -> bool {
        let player = match self.phase {
            GamePhase::HumanTurn(p) => p,
            phase => {
                debug!(%pos, ?phase, "ignored move outside a human turn");
                return false;
            }
        };

        if !rules::is_legal(&self.board, pos, player) {
            debug!(%pos, %player, "ignored illegal move");
            return false;
        }

        self.play(pos, player);
        true
    }

    /// Coordinate form of [`apply_human_move`](Self::apply_human_move);
    /// off-board coordinates are ignored the same way illegal moves are.
    pub fn apply_human_move_at(&mut self, row: i32, col: i32) -> bool {
        match Pos::try_new(row, col) {
            Ok(pos) => self.apply_human_move(pos),
            Err(err) => {
                debug!(%err, "ignored move");
                false
            }
        }
    }

    /// Search and play the automated side's move.
    ///
    /// Does nothing outside [`GamePhase::AutoTurn`]. Returns the move played.
    pub fn request_auto_move(&mut self) -> Option<Pos> {
        let player = match self.phase {
            GamePhase::AutoTurn(p) => p,
            _ => return None,
        };

        let result = self.engine.get_move_with_stats(&self.board, player);
        let best_move = result.best_move;
        self.last_ai_result = Some(result);

        match best_move {
            Some(pos) => {
                self.play(pos, player);
                Some(pos)
            }
            None => {
                // Unreachable while passes are resolved in `settle`
                warn!(%player, "automated side has no legal move; passing");
                self.settle(player.opponent());
                None
            }
        }
    }

    /// Take back the last move (PvP) or everything since the last human
    /// move (PvE). Returns false if there is nothing to undo.
    pub fn undo(&mut self) -> bool {
        let human = match self.config.mode {
            GameMode::PvE { human } => Some(human),
            GameMode::PvP => None,
        };
        if let Some(human) = human {
            if !self.history.iter().any(|r| r.player == human) {
                return false;
            }
        }

        let mut undone = None;
        while let Some(record) = self.history.pop() {
            rules::undo_move(&mut self.board, record.pos, record.flipped);
            undone = Some(record);
            if human.map_or(true, |h| record.player == h) {
                break;
            }
        }

        match undone {
            Some(record) => {
                debug!(pos = %record.pos, player = %record.player, "undo");
                self.last_ai_result = None;
                self.settle(record.player);
                true
            }
            None => false,
        }
    }

    fn play(&mut self, pos: Pos, player: Player) {
        let flipped = rules::apply_move(&mut self.board, pos, player);
        self.history.push(MoveRecord { pos, player, flipped });
        debug!(%pos, %player, flips = flipped.count(), score = %self.score(), "move applied");
        self.settle(player.opponent());
    }

    /// Put `candidate` on turn, passing to the other side if it is stuck.
    fn settle(&mut self, candidate: Player) {
        if rules::is_game_over(&self.board) {
            self.phase = GamePhase::GameOver;
            info!(score = %self.score(), outcome = ?rules::outcome(&self.board), "game over");
            return;
        }

        let next = if rules::has_legal_move(&self.board, candidate) {
            candidate
        } else {
            debug!(player = %candidate, "no legal move; passing");
            candidate.opponent()
        };

        self.phase = if self.config.mode.is_automated(next) {
            GamePhase::AutoTurn(next)
        } else {
            GamePhase::HumanTurn(next)
        };
    }
}

impl Default for GameController {
    fn default() -> Self {
        Self::new(GameConfig::default())
    }
}
