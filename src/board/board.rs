//! Board structure: one bitboard per color

use std::fmt;
use std::str::FromStr;

use super::bitboard::Bitboard;
use super::{Player, Pos, Stone, BOARD_SIZE};
use crate::error::{BoardError, BoardResult};

/// Game board.
///
/// `clone()` is a deep copy (two `u64`s); mutations on the copy never reach
/// the original.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    /// Black stones bitboard
    pub black: Bitboard,
    /// White stones bitboard
    pub white: Bitboard,
}

impl Board {
    /// Standard starting position: White on (3,3) and (4,4), Black on (3,4) and (4,3).
    pub fn new() -> Self {
        let mut board = Self::empty();
        board.set(Pos::new(3, 3), Stone::White);
        board.set(Pos::new(4, 4), Stone::White);
        board.set(Pos::new(3, 4), Stone::Black);
        board.set(Pos::new(4, 3), Stone::Black);
        board
    }

    /// Board with no stones at all
    pub const fn empty() -> Self {
        Self {
            black: Bitboard::new(),
            white: Bitboard::new(),
        }
    }

    #[inline]
    pub fn size(&self) -> usize {
        BOARD_SIZE
    }

    /// Get stone at position
    #[inline]
    pub fn get(&self, pos: Pos) -> Stone {
        if self.black.get(pos) {
            Stone::Black
        } else if self.white.get(pos) {
            Stone::White
        } else {
            Stone::Empty
        }
    }

    /// Check if position is empty
    #[inline]
    pub fn is_empty(&self, pos: Pos) -> bool {
        !self.black.get(pos) && !self.white.get(pos)
    }

    /// Overwrite one cell. `Stone::Empty` clears it.
    #[inline]
    pub fn set(&mut self, pos: Pos, stone: Stone) {
        self.black.clear(pos);
        self.white.clear(pos);
        match stone {
            Stone::Black => self.black.set(pos),
            Stone::White => self.white.set(pos),
            Stone::Empty => {}
        }
    }

    /// Coordinate-checked read
    pub fn cell(&self, row: i32, col: i32) -> BoardResult<Stone> {
        Pos::try_new(row, col).map(|pos| self.get(pos))
    }

    /// Coordinate-checked write
    pub fn set_cell(&mut self, row: i32, col: i32, stone: Stone) -> BoardResult<()> {
        let pos = Pos::try_new(row, col)?;
        self.set(pos, stone);
        Ok(())
    }

    /// Swap the color of every stone in `mask`.
    /// Every cell in `mask` must hold a stone.
    #[inline]
    pub fn flip(&mut self, mask: Bitboard) {
        debug_assert_eq!(mask.bits() & !self.occupied().bits(), 0);
        self.black = Bitboard::from_bits(self.black.bits() ^ mask.bits());
        self.white = Bitboard::from_bits(self.white.bits() ^ mask.bits());
    }

    /// Get bitboard for a player
    #[inline]
    pub fn stones(&self, player: Player) -> Bitboard {
        match player {
            Player::Black => self.black,
            Player::White => self.white,
        }
    }

    /// Number of stones a player has on the board
    #[inline]
    pub fn count(&self, player: Player) -> u32 {
        self.stones(player).count()
    }

    #[inline]
    pub fn occupied(&self) -> Bitboard {
        self.black.union(self.white)
    }

    /// Total stones on board
    #[inline]
    pub fn stone_count(&self) -> u32 {
        self.occupied().count()
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        self.stone_count() as usize == BOARD_SIZE * BOARD_SIZE
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..BOARD_SIZE {
            for col in 0..BOARD_SIZE {
                let ch = match self.get(Pos::new(row as u8, col as u8)) {
                    Stone::Black => 'B',
                    Stone::White => 'W',
                    Stone::Empty => '.',
                };
                write!(f, "{}", ch)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Parses eight lines of `B`, `W` and `.`; whitespace inside a line is ignored.
impl FromStr for Board {
    type Err = BoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rows: Vec<&str> = s.lines().map(str::trim).filter(|l| !l.is_empty()).collect();
        if rows.len() != BOARD_SIZE {
            return Err(BoardError::Parse {
                line: rows.len(),
                message: format!("expected {} rows, found {}", BOARD_SIZE, rows.len()),
            });
        }

        let mut board = Board::empty();
        for (row, line) in rows.iter().enumerate() {
            let cells: Vec<char> = line.chars().filter(|c| !c.is_whitespace()).collect();
            if cells.len() != BOARD_SIZE {
                return Err(BoardError::Parse {
                    line: row + 1,
                    message: format!("expected {} cells, found {}", BOARD_SIZE, cells.len()),
                });
            }
            for (col, ch) in cells.into_iter().enumerate() {
                let stone = match ch {
                    'B' | 'b' | 'X' | 'x' => Stone::Black,
                    'W' | 'w' | 'O' | 'o' => Stone::White,
                    '.' | '-' | '_' => Stone::Empty,
                    other => {
                        return Err(BoardError::Parse {
                            line: row + 1,
                            message: format!("unexpected character {:?}", other),
                        })
                    }
                };
                board.set(Pos::new(row as u8, col as u8), stone);
            }
        }
        Ok(board)
    }
}
