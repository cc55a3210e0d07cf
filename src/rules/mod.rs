//! Game rules for Othello
//!
//! - Move legality (bracketing in any of eight directions)
//! - Flip computation, application and exact undo
//! - Terminal detection (neither side can move)

pub mod flips;
pub mod moves;
pub mod outcome;

// Re-exports for convenient access
pub use flips::{apply_move, count_flips, flipped_cells, undo_move};
pub use moves::{has_legal_move, is_legal, legal_moves};
pub use outcome::{is_game_over, outcome, GameOutcome};
