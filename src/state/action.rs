//! Player input events.
//!
//! A presentation layer can call the session operations directly or forward
//! input as [`GameAction`] values, e.g. decoded from JSON.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Player actions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum GameAction {
    Reset,
    UpdateGuess { guess: String },
    CheckGuess,
    Skip,
}

impl fmt::Display for GameAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Reset => write!(f, "Reset"),
            Self::UpdateGuess { guess } => write!(f, "UpdateGuess({})", guess),
            Self::CheckGuess => write!(f, "CheckGuess"),
            Self::Skip => write!(f, "Skip"),
        }
    }
}

/// What an action did to the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuessOutcome {
    /// Game restarted at round 1
    Reset,
    /// Guess text replaced, nothing published
    Updated,
    /// Correct guess, next round started
    Correct,
    /// Wrong guess, flag raised
    Wrong,
    /// Word skipped, next round started
    Skipped,
    /// No rounds left; score may still have changed
    GameOver,
}

impl GuessOutcome {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Reset => "reset",
            Self::Updated => "updated",
            Self::Correct => "correct",
            Self::Wrong => "wrong",
            Self::Skipped => "skipped",
            Self::GameOver => "game_over",
        }
    }

    /// Check if a new round was started.
    pub fn advanced(&self) -> bool {
        matches!(self, Self::Reset | Self::Correct | Self::Skipped)
    }
}
