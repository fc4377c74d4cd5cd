//! Error types for configuration, guess validation and judging.
//!
//! All failures are local and synchronous. None of them are retried by the
//! engine; callers re-prompt the player and keep their current state.

use serde::{Deserialize, Serialize};

use super::digits::Digit;

/// Invalid game configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// Digit count outside `1..=10`.
    #[error("invalid configuration: digit count must be between 1 and 10, got {digit_count}")]
    InvalidConfiguration { digit_count: usize },
}

/// Reason a raw guess was rejected.
///
/// Variants are listed in the order the validator checks them; only the
/// first failing rule is reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, thiserror::Error)]
pub enum ValidationError {
    #[error("please enter a guess")]
    EmptyInput,

    #[error("guess must be exactly {expected} digits, got {actual}")]
    WrongLength { expected: usize, actual: usize },

    #[error("only digits are allowed, found {ch:?} at position {position}")]
    NonDigitCharacter { position: usize, ch: char },

    #[error("guess cannot start with 0")]
    LeadingZero,

    #[error("digit {digit} is used more than once")]
    DuplicateDigit { digit: Digit },
}

/// Failure to apply a guess to a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum GuessError {
    #[error(transparent)]
    Invalid(#[from] ValidationError),

    #[error("game is already finished")]
    GameAlreadyFinished,
}

/// Judge precondition violation.
///
/// Callers validate guesses before judging, so this signals a programming
/// error rather than bad user input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum JudgeError {
    #[error("cannot judge: secret has {secret} digits, guess has {guess}")]
    LengthMismatch { secret: usize, guess: usize },
}
