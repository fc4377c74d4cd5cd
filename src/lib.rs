//! # number-baseball
//!
//! A deterministic engine for number baseball (also known as bulls and cows).
//!
//! A secret of unique digits is drawn; the player guesses, and each guess is
//! judged in strikes (right digit, right place) and balls (right digit, wrong
//! place) until the secret is found or the attempt budget runs out.
//!
//! ## Design Principles
//!
//! 1. **Values, not mutation**: `GameState::submit_guess` returns a new state.
//!    History is a persistent `im::Vector`, so old states stay valid and cheap
//!    to keep for undo or replay.
//!
//! 2. **Injected randomness**: secrets come from a seedable `GameRng`, so a
//!    seed fully determines a game's secret.
//!
//! 3. **No I/O in the core**: presentation, memo widgets and leaderboards are
//!    collaborators. The engine only notifies `WinObserver`s.
//!
//! ## Example
//!
//! ```
//! use number_baseball::{GameConfig, GameEngine};
//!
//! let mut engine = GameEngine::seeded(42);
//! let state = engine.new_game(GameConfig::default());
//!
//! let state = engine.submit_guess(&state, "123").unwrap();
//! assert_eq!(state.attempt_count(), 1);
//! ```
//!
//! ## Modules
//!
//! - `core`: digits, configuration, RNG, secret generation, validation,
//!   judging, attempts, state, statistics
//! - `rules`: `GameEngine` facade with logging and win notification
//! - `records`: win records and leaderboard ordering
//! - `memo`: the player's digit scratchpad

pub mod core;
pub mod rules;
pub mod records;
pub mod memo;

// Re-export commonly used types
pub use crate::core::{
    Digit, DigitSeq,
    GameConfig, MAX_ATTEMPTS,
    GameRng,
    generate_secret, validate_guess, judge, Judgment,
    Attempt, GameState, GameStatus, Statistics,
    ConfigError, GuessError, JudgeError, ValidationError,
};

pub use crate::rules::GameEngine;

pub use crate::records::{rank_records, WinObserver, WinRecord, LEADERBOARD_SIZE};

pub use crate::memo::{DigitMark, DigitMemo, DigitNote};
