//! Published game state.
//!
//! [`GameUiState`] is the snapshot a presentation layer renders from. It is
//! replaced wholesale on every update, never mutated in place by consumers.

use serde::{Deserialize, Serialize};

/// Coarse status derived from the snapshot flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GameStatus {
    /// Waiting for a guess
    #[default]
    InProgress,
    /// Last guess was wrong, still waiting for a guess
    GuessedWrong,
    /// All rounds played
    Over,
}

impl GameStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::InProgress => "in_progress",
            Self::GuessedWrong => "guessed_wrong",
            Self::Over => "over",
        }
    }

    /// Check if game is terminal (rounds can no longer change).
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Over)
    }
}

/// Snapshot of externally visible game progress.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameUiState {
    /// Shuffled form of the active word
    pub current_scrambled_word: String,

    /// Current round (1-indexed)
    pub current_word_count: u32,

    /// Cumulative points
    pub score: u32,

    /// Set by a wrong guess, cleared by the next advance
    pub is_guessed_word_wrong: bool,

    pub is_game_over: bool,
}

impl Default for GameUiState {
    fn default() -> Self {
        Self::new(String::new())
    }
}

impl GameUiState {
    /// Fresh state for the first round.
    pub fn new(current_scrambled_word: String) -> Self {
        Self {
            current_scrambled_word,
            current_word_count: 1,
            score: 0,
            is_guessed_word_wrong: false,
            is_game_over: false,
        }
    }

    pub fn status(&self) -> GameStatus {
        if self.is_game_over {
            GameStatus::Over
        } else if self.is_guessed_word_wrong {
            GameStatus::GuessedWrong
        } else {
            GameStatus::InProgress
        }
    }

    /// Copy with the wrong-guess flag set.
    pub(crate) fn with_wrong_guess(&self) -> Self {
        Self {
            is_guessed_word_wrong: true,
            ..self.clone()
        }
    }

    /// Copy for the next round.
    pub(crate) fn next_round(&self, current_scrambled_word: String, score: u32) -> Self {
        Self {
            current_scrambled_word,
            current_word_count: self.current_word_count + 1,
            score,
            is_guessed_word_wrong: false,
            is_game_over: self.is_game_over,
        }
    }

    /// Copy frozen at game over. Word and round stay as they were.
    pub(crate) fn finished(&self, score: u32) -> Self {
        Self {
            score,
            is_guessed_word_wrong: false,
            is_game_over: true,
            ..self.clone()
        }
    }

    /// Convert to JSON snapshot for clients.
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "current_scrambled_word": self.current_scrambled_word,
            "current_word_count": self.current_word_count,
            "score": self.score,
            "is_guessed_word_wrong": self.is_guessed_word_wrong,
            "is_game_over": self.is_game_over,
            "status": self.status().as_str()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_new_state() {
        let state = GameUiState::new("tca".to_string());
        assert_eq!(state.current_word_count, 1);
        assert_eq!(state.score, 0);
        assert!(!state.is_guessed_word_wrong);
        assert!(!state.is_game_over);
        assert_eq!(state.status(), GameStatus::InProgress);
    }

    #[test]
    fn test_wrong_guess_keeps_fields() {
        let state = GameUiState::new("tca".to_string());
        let wrong = state.with_wrong_guess();
        assert_eq!(wrong.status(), GameStatus::GuessedWrong);
        assert_eq!(
            wrong,
            GameUiState {
                is_guessed_word_wrong: true,
                ..state
            }
        );
    }

    #[test]
    fn test_next_round() {
        let state = GameUiState::new("tca".to_string()).with_wrong_guess();
        let next = state.next_round("god".to_string(), 20);
        assert_eq!(
            next,
            GameUiState {
                current_scrambled_word: "god".to_string(),
                current_word_count: 2,
                score: 20,
                is_guessed_word_wrong: false,
                is_game_over: false,
            }
        );
    }

    #[test]
    fn test_finished_freezes_round() {
        let state = GameUiState::new("tca".to_string()).with_wrong_guess();
        let over = state.finished(40);
        assert_eq!(over.current_scrambled_word, "tca");
        assert_eq!(over.current_word_count, 1);
        assert_eq!(over.score, 40);
        assert!(!over.is_guessed_word_wrong);
        assert!(over.status().is_terminal());
    }

    #[test]
    fn test_to_json() {
        let json = GameUiState::new("tca".to_string()).to_json();
        assert_eq!(json["current_scrambled_word"], "tca");
        assert_eq!(json["current_word_count"], 1);
        assert_eq!(json["score"], 0);
        assert_eq!(json["status"], "in_progress");
    }

    #[test]
    fn test_serde_field_names() {
        let state: GameUiState = serde_json::from_str(
            r#"{"current_scrambled_word":"odg","current_word_count":3,"score":40,
                "is_guessed_word_wrong":true,"is_game_over":false}"#,
        )
        .unwrap();
        assert_eq!(state.current_word_count, 3);
        assert_eq!(state.status(), GameStatus::GuessedWrong);
    }
}
