//! Strike and ball judging.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::digits::DigitSeq;
use super::error::JudgeError;

/// Outcome of comparing a guess to the secret.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Judgment {
    /// Right digit, right position.
    pub strike: usize,
    /// Right digit, wrong position.
    pub ball: usize,
    /// Every position is a strike.
    pub is_correct: bool,
}

impl Judgment {
    /// No strike and no ball.
    #[must_use]
    pub fn is_out(&self) -> bool {
        self.strike == 0 && self.ball == 0
    }
}

impl fmt::Display for Judgment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_out() {
            write!(f, "OUT")
        } else {
            write!(f, "{}S {}B", self.strike, self.ball)
        }
    }
}

/// Judge `guess` against `secret`.
///
/// Only lengths are checked. Uniqueness and leading zero are the validator's
/// job; with unique digits each guess digit is either a strike, a ball, or
/// neither, so `strike + ball <= len`.
pub fn judge(secret: &DigitSeq, guess: &DigitSeq) -> Result<Judgment, JudgeError> {
    if secret.is_empty() || secret.len() != guess.len() {
        return Err(JudgeError::LengthMismatch {
            secret: secret.len(),
            guess: guess.len(),
        });
    }

    let mut strike = 0;
    let mut ball = 0;
    for (s, g) in secret.iter().zip(guess.iter()) {
        if s == g {
            strike += 1;
        } else if secret.contains(g) {
            ball += 1;
        }
    }

    Ok(Judgment {
        strike,
        ball,
        is_correct: strike == secret.len(),
    })
}
