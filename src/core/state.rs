//! Game state and the guess transition.
//!
//! ## Lifecycle
//!
//! - `GameState::new` draws the secret and starts `InProgress`
//! - `submit_guess` returns a *new* state with one more attempt
//! - the game ends `Won` on a correct guess, or `Lost` once the attempt
//!   budget is used up; both are terminal
//!
//! States are values. The attempt list is an `im::Vector`, so each
//! transition shares structure with its predecessor while leaving it
//! untouched. Keeping old states around is all it takes to undo.

use chrono::{DateTime, Utc};
use im::Vector;
use serde::Serialize;

use super::attempt::Attempt;
use super::config::GameConfig;
use super::digits::DigitSeq;
use super::error::{GuessError, ValidationError};
use super::judge::{judge, Judgment};
use super::rng::GameRng;
use super::secret::generate_secret;
use super::stats::Statistics;
use super::validate::validate_guess;

/// Where a game stands.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum GameStatus {
    /// Accepting guesses.
    InProgress,
    /// The secret was guessed.
    Won,
    /// The attempt budget ran out.
    Lost,
}

impl GameStatus {
    /// Check if no more guesses are accepted.
    #[must_use]
    pub fn is_finished(self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }
}

/// A single game session.
#[derive(Clone, Debug, Serialize)]
pub struct GameState {
    config: GameConfig,
    secret: DigitSeq,
    attempts: Vector<Attempt>,
    status: GameStatus,
    started_at: DateTime<Utc>,
}

impl GameState {
    /// Start a new game, drawing the secret from `rng`.
    #[must_use]
    pub fn new(config: GameConfig, rng: &mut GameRng) -> Self {
        Self::new_at(config, rng, Utc::now())
    }

    /// Start a new game with an explicit start time.
    #[must_use]
    pub fn new_at(config: GameConfig, rng: &mut GameRng, started_at: DateTime<Utc>) -> Self {
        let secret = generate_secret(&config, rng);
        Self::from_secret(config, secret, started_at)
    }

    /// Build a game around a known secret.
    ///
    /// The secret must pass the same rules as a guess under `config`: exact
    /// length, digits only, no leading zero unless allowed, no repeats.
    pub fn with_secret(
        config: GameConfig,
        secret: &str,
        started_at: DateTime<Utc>,
    ) -> Result<Self, ValidationError> {
        let secret = validate_guess(secret, &config)?;
        Ok(Self::from_secret(config, secret, started_at))
    }

    fn from_secret(config: GameConfig, secret: DigitSeq, started_at: DateTime<Utc>) -> Self {
        Self {
            config,
            secret,
            attempts: Vector::new(),
            status: GameStatus::InProgress,
            started_at,
        }
    }

    /// Submit a guess, stamped with the current time.
    pub fn submit_guess(&self, raw: &str) -> Result<GameState, GuessError> {
        self.submit_guess_at(raw, Utc::now())
    }

    /// Submit a guess with an explicit timestamp.
    ///
    /// On error `self` is the state to keep; nothing is recorded and the
    /// attempt counter does not advance.
    pub fn submit_guess_at(&self, raw: &str, at: DateTime<Utc>) -> Result<GameState, GuessError> {
        if self.is_finished() {
            return Err(GuessError::GameAlreadyFinished);
        }

        let guess = validate_guess(raw, &self.config)?;
        let judgment = judge(&self.secret, &guess)
            .expect("validated guess has the configured length");

        let mut attempts = self.attempts.clone();
        attempts.push_back(Attempt::new(guess, judgment, attempts.len() + 1, at));

        let status = if judgment.is_correct {
            GameStatus::Won
        } else if attempts.len() >= self.config.max_attempts() {
            GameStatus::Lost
        } else {
            GameStatus::InProgress
        };

        Ok(GameState {
            config: self.config,
            secret: self.secret.clone(),
            attempts,
            status,
            started_at: self.started_at,
        })
    }

    // === Accessors ===

    /// Configuration the game was created with.
    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// The secret. Presentation should only reveal it once finished.
    #[must_use]
    pub fn secret(&self) -> &DigitSeq {
        &self.secret
    }

    /// Attempts in chronological order.
    #[must_use]
    pub fn attempts(&self) -> &Vector<Attempt> {
        &self.attempts
    }

    /// Number of accepted guesses.
    #[must_use]
    pub fn attempt_count(&self) -> usize {
        self.attempts.len()
    }

    /// Most recent attempt.
    #[must_use]
    pub fn last_attempt(&self) -> Option<&Attempt> {
        self.attempts.last()
    }

    /// Most recent judgment.
    #[must_use]
    pub fn last_judgment(&self) -> Option<Judgment> {
        self.last_attempt().map(|a| a.judgment)
    }

    /// Guesses left before the game is lost.
    #[must_use]
    pub fn remaining_attempts(&self) -> usize {
        self.config.max_attempts().saturating_sub(self.attempts.len())
    }

    /// Current status.
    #[must_use]
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Check if the game has ended, won or lost.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.status.is_finished()
    }

    /// Check if the secret was guessed.
    #[must_use]
    pub fn is_won(&self) -> bool {
        self.status == GameStatus::Won
    }

    /// When the game started.
    #[must_use]
    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    /// Whole seconds from start to the last attempt, or zero without attempts.
    #[must_use]
    pub fn elapsed_seconds(&self) -> u64 {
        self.last_attempt()
            .map(|a| (a.timestamp - self.started_at).num_seconds().max(0) as u64)
            .unwrap_or(0)
    }

    /// Derived statistics over the attempt history.
    #[must_use]
    pub fn statistics(&self) -> Statistics {
        Statistics::from_attempts(self.attempts.iter())
    }
}
