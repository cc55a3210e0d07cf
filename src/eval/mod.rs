//! Evaluation module for Othello positions
//!
//! The only signal is material: stones owned minus stones owned by the
//! opponent. No positional, mobility or parity weighting.

pub mod material;

pub use material::{evaluate, score, Score};
