//! Game configuration: who plays which side, and how the AI behaves

use std::time::Duration;

use crate::board::Player;
use crate::search::DEFAULT_DEPTH;

/// Delay before the automated side replies, in milliseconds
pub const DEFAULT_AUTO_MOVE_DELAY_MS: u64 = 500;

/// Game mode selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameMode {
    /// Player vs AI; the AI takes the other color
    PvE { human: Player },
    /// Player vs Player (hotseat), no automated side
    PvP,
}

impl GameMode {
    /// True if `player`'s moves come from the search engine
    #[inline]
    pub fn is_automated(self, player: Player) -> bool {
        match self {
            GameMode::PvE { human } => player != human,
            GameMode::PvP => false,
        }
    }

    /// Color played by the engine, if any
    pub fn auto_player(self) -> Option<Player> {
        match self {
            GameMode::PvE { human } => Some(human.opponent()),
            GameMode::PvP => None,
        }
    }
}

impl Default for GameMode {
    fn default() -> Self {
        GameMode::PvE { human: Player::Black }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    pub mode: GameMode,
    /// Plies searched below each candidate move
    pub search_depth: u8,
    /// Pause the presentation layer waits before requesting the AI move
    pub auto_move_delay: Duration,
}

impl GameConfig {
    pub fn new(mode: GameMode) -> Self {
        Self {
            mode,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_search_depth(mut self, depth: u8) -> Self {
        self.search_depth = depth;
        self
    }

    #[must_use]
    pub fn with_auto_move_delay(mut self, delay: Duration) -> Self {
        self.auto_move_delay = delay;
        self
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            mode: GameMode::default(),
            search_depth: DEFAULT_DEPTH,
            auto_move_delay: Duration::from_millis(DEFAULT_AUTO_MOVE_DELAY_MS),
        }
    }
}
