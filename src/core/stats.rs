//! Statistics derived from a game's attempt history.

use serde::{Deserialize, Serialize};

use super::attempt::Attempt;
use super::judge::Judgment;

/// Summary of the attempts made so far.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Statistics {
    /// Number of accepted guesses.
    pub total_attempts: usize,

    /// Best judgment: most strikes, then most balls. Earliest wins ties.
    pub best: Option<Judgment>,

    /// Mean strikes per attempt.
    pub average_strike: f64,

    /// Mean balls per attempt.
    pub average_ball: f64,
}

impl Statistics {
    /// Fold a sequence of attempts into statistics.
    pub fn from_attempts<'a>(attempts: impl IntoIterator<Item = &'a Attempt>) -> Self {
        let mut total_attempts = 0;
        let mut total_strike = 0;
        let mut total_ball = 0;
        let mut best: Option<Judgment> = None;

        for attempt in attempts {
            let j = attempt.judgment;
            total_attempts += 1;
            total_strike += j.strike;
            total_ball += j.ball;

            if best.map_or(true, |b| (j.strike, j.ball) > (b.strike, b.ball)) {
                best = Some(j);
            }
        }

        if total_attempts == 0 {
            return Self::default();
        }

        Self {
            total_attempts,
            best,
            average_strike: total_strike as f64 / total_attempts as f64,
            average_ball: total_ball as f64 / total_attempts as f64,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn attempt(strike: usize, ball: usize, number: usize) -> Attempt {
        let judgment = Judgment { strike, ball, is_correct: false };
        Attempt::new("123".parse().unwrap(), judgment, number, Utc::now())
    }

    #[test]
    fn test_empty() {
        let stats = Statistics::from_attempts(&[] as &[Attempt]);
        assert_eq!(stats.total_attempts, 0);
        assert_eq!(stats.best, None);
        assert_eq!(stats.average_strike, 0.0);
        assert_eq!(stats.average_ball, 0.0);
    }

    #[test]
    fn test_averages() {
        let attempts = [attempt(0, 2, 1), attempt(1, 1, 2), attempt(2, 0, 3), attempt(1, 1, 4)];
        let stats = Statistics::from_attempts(&attempts);

        assert_eq!(stats.total_attempts, 4);
        assert_eq!(stats.average_strike, 1.0);
        assert_eq!(stats.average_ball, 1.0);
    }

    #[test]
    fn test_best_prefers_strikes_then_balls() {
        let attempts = [attempt(0, 3, 1), attempt(1, 0, 2), attempt(1, 2, 3), attempt(0, 0, 4)];
        let best = Statistics::from_attempts(&attempts).best.unwrap();
        assert_eq!((best.strike, best.ball), (1, 2));
    }

    #[test]
    fn test_best_keeps_first_on_tie() {
        let first = attempt(1, 1, 1);
        let mut second = attempt(1, 1, 2);
        second.judgment.is_correct = true;

        let best = Statistics::from_attempts(&[first, second]).best.unwrap();
        assert!(!best.is_correct);
    }
}
