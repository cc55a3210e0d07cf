//! Othello (Reversi) engine with an alpha-beta AI opponent
//!
//! - Standard 8x8 board, Black moves first
//! - A move must bracket at least one run of opponent stones; every
//!   bracketed run in all eight directions flips
//! - A side with no legal move passes; the game ends when neither can move
//!
//! # Architecture
//!
//! - [`board`]: Board representation with bitboards
//! - [`rules`]: Legality, flipping, terminal detection
//! - [`eval`]: Material count evaluation
//! - [`search`]: Minimax with alpha-beta pruning
//! - [`engine`]: The automated player
//! - [`game`]: Turn state machine consumed by the GUI
//! - [`ui`]: egui front end
//!
//! # Quick Start
//!
//! ```
//! use othello::{GameConfig, GameController, GamePhase, Player, Pos};
//!
//! let mut game = GameController::new(GameConfig::default());
//!
//! // Human plays Black
//! assert!(game.apply_human_move(Pos::new(2, 3)));
//! assert_eq!(game.phase(), GamePhase::AutoTurn(Player::White));
//!
//! // AI answers as White
//! if let Some(pos) = game.request_auto_move() {
//!     println!("AI plays at {}", pos);
//! }
//! println!("{}", game.score());
//! ```

pub mod board;
pub mod engine;
pub mod error;
pub mod eval;
pub mod game;
pub mod rules;
pub mod search;
pub mod ui;

// Re-export commonly used types for convenience
pub use board::{Board, Player, Pos, Stone, BOARD_SIZE};
pub use engine::{AIEngine, MoveResult};
pub use error::{BoardError, BoardResult};
pub use eval::Score;
pub use game::{GameConfig, GameController, GameMode, GamePhase};
pub use rules::GameOutcome;
