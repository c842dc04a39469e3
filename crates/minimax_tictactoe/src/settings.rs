//! Engine settings: who opens the first game.

use serde::{Deserialize, Serialize};
use tracing::instrument;

use super::Player;

/// Which side takes the first move (X) in a game.
///
/// Defaults to [`FirstPlayer::Human`] so the human moves first in the
/// opening game. The engine toggles it on every new game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FirstPlayer {
    /// The human plays X and moves first.
    #[default]
    Human,
    /// The computer plays X and moves first.
    Computer,
}

impl FirstPlayer {
    /// Returns the display label for this option.
    pub fn label(self) -> &'static str {
        match self {
            Self::Human => "Human",
            Self::Computer => "Computer",
        }
    }

    /// Toggles between `Human` and `Computer`.
    #[instrument]
    pub fn toggle(self) -> Self {
        match self {
            Self::Human => Self::Computer,
            Self::Computer => Self::Human,
        }
    }

    /// Symbol the human plays under this option.
    pub fn human_symbol(self) -> Player {
        match self {
            Self::Human => Player::X,
            Self::Computer => Player::O,
        }
    }
}

/// Settings for a new [`GameEngine`](super::GameEngine).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Settings {
    /// Who takes the first move in the opening game.
    #[serde(default)]
    pub first_player: FirstPlayer,
}

impl Settings {
    /// Creates a new `Settings` with defaults.
    #[instrument]
    pub fn new() -> Self {
        Self::default()
    }
}
