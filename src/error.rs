//! Error types for board access and parsing

use crate::board::BOARD_SIZE;

/// Errors raised by coordinate-checked board operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    /// Coordinates outside the 8x8 grid
    #[error("coordinates ({row}, {col}) are outside the {size}x{size} board", size = BOARD_SIZE)]
    OutOfRange { row: i32, col: i32 },

    /// Malformed textual board
    #[error("invalid board text at line {line}: {message}")]
    Parse { line: usize, message: String },
}

/// Result type alias for board operations
pub type BoardResult<T> = Result<T, BoardError>;
