//! Unscramble State Library
//!
//! This crate provides state management for Unscramble game logic: a single
//! player is shown a scrambled word and either guesses it or skips it, for a
//! fixed number of rounds.
//!
//! # Overview
//!
//! The state module provides:
//!
//! - **Game Session** - Owns the answer, the words already used and the
//!   player's guess, and applies guesses, skips and resets.
//!
//! - **Published Snapshot** - `GameUiState` holds what a screen renders:
//!   scrambled word, round, score, wrong-guess flag, game-over flag.
//!
//! - **Subscriptions** - Observers get the current snapshot on subscribe and
//!   every changed snapshot after that.
//!
//! - **Word Source** - Validated list of candidate words.
//!
//! # Design Principles
//!
//! 1. **Single writer** - Every change goes through a named operation on
//!    `GameSession`; consumers only read snapshots.
//!
//! 2. **Validated up front** - Word lists that could never fill a game, or
//!    words with no distinct shuffle, are rejected when the session is built.
//!
//! 3. **No I/O** - This crate is pure state, no rendering, storage or network.
//!
//! 4. **Serialization-ready** - Snapshots, actions and config convert to JSON.
//!
//! # Example
//!
//! ```rust
//! use std::sync::{Arc, Mutex};
//! use unscramble_state::{GameAction, GameConfig, GameSession, GameUiState, WordSource};
//!
//! let words = WordSource::new(["animal", "auto", "anecdote", "alphabet"]).unwrap();
//! let config = GameConfig::new(3, 20);
//! let mut session = GameSession::new(config, words).unwrap();
//!
//! let rounds = Arc::new(Mutex::new(Vec::new()));
//! let seen = Arc::clone(&rounds);
//! session.subscribe(move |state: &GameUiState| {
//!     seen.lock().unwrap().push(state.current_word_count);
//! });
//!
//! session.apply(GameAction::Skip);
//! session.apply(GameAction::Skip);
//! session.apply(GameAction::Skip);
//!
//! assert!(session.ui_state().is_game_over);
//! assert_eq!(*rounds.lock().unwrap(), vec![1, 2, 3, 3]);
//! ```

pub mod state;

// Re-export everything from state module at crate root
pub use state::*;
