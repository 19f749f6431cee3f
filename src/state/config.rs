//! Game configuration.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Number of words (rounds) in one game.
pub const MAX_NO_OF_WORDS: usize = 10;

/// Points awarded for a correct guess.
pub const SCORE_INCREASE: u32 = 20;

/// Tunables for a game session.
///
/// Missing fields fall back to the defaults when deserializing, so
/// `{"max_words": 5}` is a valid config.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Rounds per game
    pub max_words: usize,

    /// Points per correct guess
    pub score_increase: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            max_words: MAX_NO_OF_WORDS,
            score_increase: SCORE_INCREASE,
        }
    }
}

impl GameConfig {
    pub fn new(max_words: usize, score_increase: u32) -> Self {
        Self {
            max_words,
            score_increase,
        }
    }

    /// Parse and validate a JSON config.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_words == 0 {
            return Err(ConfigError::ZeroMaxWords);
        }
        if self.score_increase == 0 {
            return Err(ConfigError::ZeroScoreIncrease);
        }
        Ok(())
    }

    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "max_words": self.max_words,
            "score_increase": self.score_increase
        })
    }
}

/// Configuration errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    ZeroMaxWords,
    ZeroScoreIncrease,
    Parse(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroMaxWords => write!(f, "max_words must be at least 1"),
            Self::ZeroScoreIncrease => write!(f, "score_increase must be at least 1"),
            Self::Parse(msg) => write!(f, "Invalid config: {}", msg),
        }
    }
}

impl std::error::Error for ConfigError {}
