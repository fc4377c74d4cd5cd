//! Game configuration.
//!
//! A `GameConfig` fixes the shape of every secret and guess in a game:
//! - `digit_count`: how many digits, 1 to 10
//! - `allow_leading_zero`: whether the first digit may be `0`
//!
//! The digit count is validated once, at construction, so the rest of the
//! engine can rely on it being in range.

use serde::{Deserialize, Serialize};

use super::digits::DIGIT_SYMBOLS;
use super::error::ConfigError;

/// Maximum number of accepted guesses before a game is lost.
pub const MAX_ATTEMPTS: usize = 31;

/// Smallest supported digit count.
pub const MIN_DIGITS: usize = 1;

/// Largest supported digit count (every digit symbol used once).
pub const MAX_DIGITS: usize = DIGIT_SYMBOLS;

/// Digit count used when none is chosen.
pub const DEFAULT_DIGITS: usize = 3;

/// Configuration for a single game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawGameConfig")]
pub struct GameConfig {
    digit_count: usize,
    allow_leading_zero: bool,
}

impl GameConfig {
    /// Create a configuration, checking the digit count.
    pub fn new(digit_count: usize, allow_leading_zero: bool) -> Result<Self, ConfigError> {
        if !(MIN_DIGITS..=MAX_DIGITS).contains(&digit_count) {
            return Err(ConfigError::InvalidConfiguration { digit_count });
        }
        Ok(Self {
            digit_count,
            allow_leading_zero,
        })
    }

    /// Change the digit count.
    pub fn with_digit_count(self, digit_count: usize) -> Result<Self, ConfigError> {
        Self::new(digit_count, self.allow_leading_zero)
    }

    /// Set whether secrets and guesses may start with `0`.
    #[must_use]
    pub fn with_leading_zero(mut self, allow: bool) -> Self {
        self.allow_leading_zero = allow;
        self
    }

    /// Number of digits in the secret and in every guess.
    #[must_use]
    pub const fn digit_count(&self) -> usize {
        self.digit_count
    }

    /// Whether the first digit may be `0`.
    #[must_use]
    pub const fn allow_leading_zero(&self) -> bool {
        self.allow_leading_zero
    }

    /// Attempt budget. Currently the same for every configuration.
    #[must_use]
    pub const fn max_attempts(&self) -> usize {
        MAX_ATTEMPTS
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            digit_count: DEFAULT_DIGITS,
            allow_leading_zero: false,
        }
    }
}

/// Unchecked wire form, validated on deserialize.
#[derive(Deserialize)]
struct RawGameConfig {
    digit_count: usize,
    #[serde(default)]
    allow_leading_zero: bool,
}

impl TryFrom<RawGameConfig> for GameConfig {
    type Error = ConfigError;

    fn try_from(raw: RawGameConfig) -> Result<Self, Self::Error> {
        Self::new(raw.digit_count, raw.allow_leading_zero)
    }
}
