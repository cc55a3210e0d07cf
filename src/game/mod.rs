//! Game orchestration: configuration and the turn state machine

pub mod config;
pub mod controller;

pub use config::{GameConfig, GameMode, DEFAULT_AUTO_MOVE_DELAY_MS};
pub use controller::{GameController, GamePhase, MoveRecord};
