//! Core engine: digits, configuration, RNG, secret generation, validation,
//! judging, attempts, state and statistics.
//!
//! Everything here is a pure value or a pure function. Nothing logs, nothing
//! performs I/O; see `rules::GameEngine` for the instrumented facade.

pub mod digits;
pub mod error;
pub mod config;
pub mod rng;
pub mod secret;
pub mod validate;
pub mod judge;
pub mod attempt;
pub mod state;
pub mod stats;

pub use digits::{Digit, DigitSeq, DIGIT_SYMBOLS};
pub use error::{ConfigError, GuessError, JudgeError, ValidationError};
pub use config::{GameConfig, DEFAULT_DIGITS, MAX_ATTEMPTS, MAX_DIGITS, MIN_DIGITS};
pub use rng::GameRng;
pub use secret::generate_secret;
pub use validate::validate_guess;
pub use judge::{judge, Judgment};
pub use attempt::Attempt;
pub use state::{GameState, GameStatus};
pub use stats::Statistics;
