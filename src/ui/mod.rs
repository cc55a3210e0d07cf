//! GUI module for the Othello game
//!
//! Native GUI using egui/eframe. Holds no game rules: every decision goes
//! through [`crate::game::GameController`].

mod app;
mod board_view;
mod theme;

pub use app::OthelloApp;
pub use board_view::{BoardOverlay, BoardView};
