//! Terminal detection and game result

use super::moves::has_legal_move;
use crate::board::{Board, Player};

/// Final result of a finished game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    Win(Player),
    Draw,
}

impl GameOutcome {
    pub fn winner(self) -> Option<Player> {
        match self {
            GameOutcome::Win(player) => Some(player),
            GameOutcome::Draw => None,
        }
    }
}

/// The game is over when neither color has a legal move.
///
/// A full board is the common case, but wipe-outs and locked positions
/// also end the game early.
pub fn is_game_over(board: &Board) -> bool {
    !has_legal_move(board, Player::Black) && !has_legal_move(board, Player::White)
}

/// Result by stone count, or None while either side can still move.
pub fn outcome(board: &Board) -> Option<GameOutcome> {
    if !is_game_over(board) {
        return None;
    }

    let black = board.count(Player::Black);
    let white = board.count(Player::White);
    Some(match black.cmp(&white) {
        std::cmp::Ordering::Greater => GameOutcome::Win(Player::Black),
        std::cmp::Ordering::Less => GameOutcome::Win(Player::White),
        std::cmp::Ordering::Equal => GameOutcome::Draw,
    })
}
