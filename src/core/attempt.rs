//! Attempt records: one accepted guess and how it was judged.
//!
//! Attempts are append-only history. They are used for:
//! - Rendering the guess history
//! - Statistics
//! - Win records (attempt count)

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::digits::DigitSeq;
use super::judge::Judgment;

/// A recorded guess with its judgment.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attempt {
    /// The validated guess.
    pub guess: DigitSeq,

    /// How the guess was judged.
    pub judgment: Judgment,

    /// 1-based position in the game's history.
    pub number: usize,

    /// When the guess was accepted.
    pub timestamp: DateTime<Utc>,
}

impl Attempt {
    /// Create a new attempt record.
    #[must_use]
    pub fn new(
        guess: DigitSeq,
        judgment: Judgment,
        number: usize,
        timestamp: DateTime<Utc>,
    ) -> Self {
        Self {
            guess,
            judgment,
            number,
            timestamp,
        }
    }
}
