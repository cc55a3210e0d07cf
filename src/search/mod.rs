//! Search module for the Othello AI
//!
//! Contains:
//! - Depth-limited minimax with alpha-beta pruning
//! - Root move selection for the automated player

pub mod alphabeta;

pub use alphabeta::{SearchResult, SearchStats, Searcher, DEFAULT_DEPTH, INF};
