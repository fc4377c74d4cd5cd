//! Win records and leaderboard ordering.
//!
//! The crate owns no storage. When a game is won, `GameEngine` hands a
//! `WinRecord` to every registered `WinObserver`; persisting it is the
//! observer's business. Ranking is plain sorting and lives here so every
//! store orders records the same way: fewer attempts first, then faster.

use std::cmp::Ordering;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::core::GameState;

/// Number of records a leaderboard shows per digit count.
pub const LEADERBOARD_SIZE: usize = 10;

/// A finished, won game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WinRecord {
    pub player_name: String,
    pub digit_count: usize,
    pub attempts: usize,
    pub duration_seconds: u64,
    pub achieved_at: DateTime<Utc>,
}

impl WinRecord {
    /// Build a record from a won game. Returns `None` unless `state` is won.
    #[must_use]
    pub fn from_state(player_name: impl Into<String>, state: &GameState) -> Option<Self> {
        if !state.is_won() {
            return None;
        }
        let last = state.last_attempt()?;
        Some(Self {
            player_name: player_name.into(),
            digit_count: state.config().digit_count(),
            attempts: state.attempt_count(),
            duration_seconds: state.elapsed_seconds(),
            achieved_at: last.timestamp,
        })
    }

    /// Leaderboard order: attempts ascending, then duration ascending.
    #[must_use]
    pub fn rank_cmp(&self, other: &Self) -> Ordering {
        (self.attempts, self.duration_seconds).cmp(&(other.attempts, other.duration_seconds))
    }
}

/// Best `limit` records for `digit_count`, best first.
///
/// Records that tie keep their input order.
pub fn rank_records<I>(records: I, digit_count: usize, limit: usize) -> Vec<WinRecord>
where
    I: IntoIterator<Item = WinRecord>,
{
    let mut ranked: Vec<_> = records
        .into_iter()
        .filter(|r| r.digit_count == digit_count)
        .collect();
    ranked.sort_by(WinRecord::rank_cmp);
    ranked.truncate(limit);
    ranked
}

/// Notified when a game is won.
pub trait WinObserver {
    fn on_game_won(&self, record: &WinRecord);
}

impl<F> WinObserver for F
where
    F: Fn(&WinRecord),
{
    fn on_game_won(&self, record: &WinRecord) {
        self(record)
    }
}
