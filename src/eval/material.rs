//! Material count evaluation

use crate::board::{Board, Player};

/// Stone count per color. Derived from the board on demand, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Score {
    pub black: u32,
    pub white: u32,
}

impl Score {
    /// Stones owned by `player`
    #[inline]
    pub fn of(&self, player: Player) -> u32 {
        match player {
            Player::Black => self.black,
            Player::White => self.white,
        }
    }

    /// Material differential from `player`'s side
    #[inline]
    pub fn differential(&self, player: Player) -> i32 {
        self.of(player) as i32 - self.of(player.opponent()) as i32
    }
}

impl From<Score> for (u32, u32) {
    fn from(score: Score) -> Self {
        (score.black, score.white)
    }
}

impl std::fmt::Display for Score {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Black: {}, White: {}", self.black, self.white)
    }
}

/// Count stones per color.
#[inline]
pub fn score(board: &Board) -> Score {
    Score {
        black: board.count(Player::Black),
        white: board.count(Player::White),
    }
}

/// Evaluate the board from the perspective of `player`.
///
/// Returns own count minus opponent count, in `-64..=64`.
/// Antisymmetric: `evaluate(b, p) == -evaluate(b, p.opponent())`.
#[must_use]
#[inline]
pub fn evaluate(board: &Board, player: Player) -> i32 {
    score(board).differential(player)
}
