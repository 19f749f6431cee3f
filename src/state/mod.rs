//! State management module for Unscramble.
//!
//! This module provides the core state types and the session manager:
//!
//! - `game` - Published snapshot (`GameUiState`)
//! - `session` - Session manager applying player operations
//! - `words` - Word source and shuffling
//! - `observer` - Snapshot subscriptions
//! - `action` - Player input events
//! - `config` - Rounds per game and points per guess
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                        GameSession                            │
//! │                                                               │
//! │  ┌──────────────┐   pick + shuffle   ┌─────────────────────┐  │
//! │  │  WordSource  │───────────────────▶│ current_word        │  │
//! │  └──────────────┘                    │ used_words          │  │
//! │                                      │ user_guess          │  │
//! │                                      └──────────┬──────────┘  │
//! │                                                 │ publish     │
//! │                                                 ▼             │
//! │  ┌──────────────┐    on change       ┌─────────────────────┐  │
//! │  │  Observers   │◀───────────────────│ GameUiState         │  │
//! │  └──────────────┘                    └─────────────────────┘  │
//! └──────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust
//! use unscramble_state::state::{GameConfig, GameSession, WordSource};
//!
//! let words = WordSource::parse("apple\nbread\nchair\ndance\neagle\nflame\ngrape\nhouse\nigloo\njelly").unwrap();
//! let mut session = GameSession::new(GameConfig::default(), words).unwrap();
//!
//! session.update_user_guess("not it");
//! session.check_user_guess();
//! assert!(session.ui_state().is_guessed_word_wrong);
//!
//! session.skip_word();
//! assert_eq!(session.ui_state().current_word_count, 2);
//! ```

pub mod action;
pub mod config;
pub mod game;
pub mod observer;
pub mod session;
pub mod words;

// Re-export commonly used types
pub use action::{GameAction, GuessOutcome};
pub use config::{ConfigError, GameConfig, MAX_NO_OF_WORDS, SCORE_INCREASE};
pub use game::{GameStatus, GameUiState};
pub use observer::{Observers, SubscriptionId};
pub use session::{GameError, GameSession};
pub use words::{has_distinct_permutation, shuffle_word, WordSource, WordSourceError};
