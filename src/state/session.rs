//! Game session management.
//!
//! [`GameSession`] owns the authoritative game state: the published
//! [`GameUiState`] snapshot plus private bookkeeping (the answer for the
//! current round, words already shown, the player's in-progress guess).
//! Every change goes through one of the operations below, and observers are
//! notified whenever the snapshot changes.
//!
//! # Round flow
//!
//! ```text
//!   reset_game ──▶ round N ──check (wrong)──▶ round N, flag set
//!                    │  ▲                          │
//!                    │  └──────────────────────────┘
//!                    │ check (correct) / skip
//!                    ▼
//!        used_words == max_words? ──no──▶ round N+1
//!                    │ yes
//!                    ▼
//!               game over (frozen)
//! ```

use std::collections::HashSet;
use std::fmt;

use chrono::{DateTime, Utc};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::action::{GameAction, GuessOutcome};
use super::config::{ConfigError, GameConfig};
use super::game::GameUiState;
use super::observer::{Observers, SubscriptionId};
use super::words::{shuffle_word, WordSource, WordSourceError};

/// Errors creating a session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    Config(ConfigError),
    Words(WordSourceError),
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config(e) => write!(f, "Invalid game config: {}", e),
            Self::Words(e) => write!(f, "Invalid word source: {}", e),
        }
    }
}

impl std::error::Error for GameError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Config(e) => Some(e),
            Self::Words(e) => Some(e),
        }
    }
}

impl From<ConfigError> for GameError {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}

impl From<WordSourceError> for GameError {
    fn from(e: WordSourceError) -> Self {
        Self::Words(e)
    }
}

/// Single-player game session.
///
/// All mutation takes `&mut self`; hosts that share a session across threads
/// must serialize access themselves (a `Mutex`, or a single owning task).
#[derive(Debug)]
pub struct GameSession<R = StdRng> {
    config: GameConfig,
    words: WordSource,
    rng: R,

    /// Published snapshot
    ui_state: GameUiState,

    /// Answer for the active round
    current_word: String,

    /// Words shown this game
    used_words: HashSet<String>,

    /// Player's in-progress input, not part of the snapshot
    user_guess: String,

    started_at: DateTime<Utc>,
    finished_at: Option<DateTime<Utc>>,

    observers: Observers,
}

impl GameSession<StdRng> {
    /// Create a session seeded from the OS, with the first round ready.
    pub fn new(config: GameConfig, words: WordSource) -> Result<Self, GameError> {
        Self::with_rng(config, words, StdRng::from_os_rng())
    }
}

impl<R: Rng> GameSession<R> {
    /// Create a session drawing randomness from `rng`.
    pub fn with_rng(config: GameConfig, words: WordSource, rng: R) -> Result<Self, GameError> {
        config.validate()?;
        words.ensure_capacity(config.max_words)?;

        let mut session = Self {
            config,
            words,
            rng,
            ui_state: GameUiState::default(),
            current_word: String::new(),
            used_words: HashSet::new(),
            user_guess: String::new(),
            started_at: Utc::now(),
            finished_at: None,
            observers: Observers::new(),
        };
        session.reset_game();
        Ok(session)
    }

    /// Start over: clear used words, pick a new word, round 1, score 0.
    pub fn reset_game(&mut self) {
        self.used_words.clear();
        self.user_guess.clear();
        self.started_at = Utc::now();
        self.finished_at = None;

        let scrambled = self.pick_random_word_and_shuffle();
        log::debug!("Game reset, {} rounds", self.config.max_words);
        self.publish(GameUiState::new(scrambled));
    }

    /// Replace the in-progress guess. Nothing is published.
    pub fn update_user_guess(&mut self, guess: impl Into<String>) {
        self.user_guess = guess.into();
    }

    /// Check the in-progress guess against the answer, ignoring case.
    pub fn check_user_guess(&mut self) -> GuessOutcome {
        let outcome = if guesses_match(&self.user_guess, &self.current_word) {
            let score = self.ui_state.score.saturating_add(self.config.score_increase);
            log::debug!("Correct guess, score now {}", score);
            if self.update_game_state(score) {
                GuessOutcome::Correct
            } else {
                GuessOutcome::GameOver
            }
        } else {
            log::debug!("Wrong guess in round {}", self.ui_state.current_word_count);
            let next = self.ui_state.with_wrong_guess();
            self.publish(next);
            GuessOutcome::Wrong
        };

        self.user_guess.clear();
        outcome
    }

    /// Move on to the next word without changing the score.
    pub fn skip_word(&mut self) -> GuessOutcome {
        log::debug!("Skipped round {}", self.ui_state.current_word_count);
        let advanced = self.update_game_state(self.ui_state.score);
        self.user_guess.clear();

        if advanced {
            GuessOutcome::Skipped
        } else {
            GuessOutcome::GameOver
        }
    }

    /// Apply a player action.
    pub fn apply(&mut self, action: GameAction) -> GuessOutcome {
        log::trace!("Applying {}", action);
        match action {
            GameAction::Reset => {
                self.reset_game();
                GuessOutcome::Reset
            }
            GameAction::UpdateGuess { guess } => {
                self.update_user_guess(guess);
                GuessOutcome::Updated
            }
            GameAction::CheckGuess => self.check_user_guess(),
            GameAction::Skip => self.skip_word(),
        }
    }

    /// Advance to the next round with `score`, or end the game if every word
    /// has been used. Returns whether a new round started.
    fn update_game_state(&mut self, score: u32) -> bool {
        if self.used_words.len() == self.config.max_words {
            if self.finished_at.is_none() {
                self.finished_at = Some(Utc::now());
                log::info!("Game over, final score {}", score);
            }
            let next = self.ui_state.finished(score);
            self.publish(next);
            false
        } else {
            let scrambled = self.pick_random_word_and_shuffle();
            let next = self.ui_state.next_round(scrambled, score);
            self.publish(next);
            true
        }
    }

    /// Pick a word not used yet this game and return it shuffled.
    fn pick_random_word_and_shuffle(&mut self) -> String {
        let word = loop {
            let candidate = self.words.pick(&mut self.rng);
            if !self.used_words.contains(candidate) {
                break candidate.to_string();
            }
        };

        log::trace!("Selected word {:?}", word);
        let scrambled = shuffle_word(&word, &mut self.rng);
        self.used_words.insert(word.clone());
        self.current_word = word;
        scrambled
    }
}

impl<R> GameSession<R> {
    /// Current published snapshot.
    pub fn ui_state(&self) -> &GameUiState {
        &self.ui_state
    }

    pub fn user_guess(&self) -> &str {
        &self.user_guess
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn is_game_over(&self) -> bool {
        self.ui_state.is_game_over
    }

    /// When the current game was (re)started.
    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    /// When the game ended, if it has.
    pub fn finished_at(&self) -> Option<DateTime<Utc>> {
        self.finished_at
    }

    /// Register an observer. It receives the current snapshot immediately
    /// and every changed snapshot after that.
    pub fn subscribe<F>(&mut self, callback: F) -> SubscriptionId
    where
        F: FnMut(&GameUiState) + Send + 'static,
    {
        let id = self.observers.add(callback);
        self.observers.notify_one(id, &self.ui_state);
        id
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.observers.remove(id)
    }

    /// Snapshot plus session metadata.
    pub fn summary_json(&self) -> serde_json::Value {
        serde_json::json!({
            "state": self.ui_state.to_json(),
            "config": self.config.to_json(),
            "words_played": self.used_words.len(),
            "started_at": self.started_at,
            "finished_at": self.finished_at
        })
    }

    /// Replace the snapshot, notifying observers if it changed.
    fn publish(&mut self, next: GameUiState) {
        if next == self.ui_state {
            return;
        }
        self.ui_state = next;
        self.observers.notify(&self.ui_state);
    }

    #[cfg(test)]
    pub(crate) fn current_word(&self) -> &str {
        &self.current_word
    }

    #[cfg(test)]
    pub(crate) fn used_word_count(&self) -> usize {
        self.used_words.len()
    }
}

fn guesses_match(guess: &str, word: &str) -> bool {
    guess.to_lowercase() == word.to_lowercase()
}
