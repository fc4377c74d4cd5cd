//! Digit memo: the player's scratchpad of deductions.
//!
//! Purely a note-taking aid. It is keyed by digit symbol, knows nothing about
//! the secret or the game state, and has no effect on judging.
//!
//! Each digit carries a mark that cycles
//! `Unknown -> Excluded -> Possible -> Confirmed -> Unknown`
//! and, for `Possible` and `Confirmed`, the positions the player suspects.

use serde::{Deserialize, Serialize};

use crate::core::{Digit, DIGIT_SYMBOLS};

/// What the player believes about a digit.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DigitMark {
    #[default]
    Unknown,
    Excluded,
    Possible,
    Confirmed,
}

impl DigitMark {
    /// Next mark in the click cycle.
    #[must_use]
    pub fn next(self) -> Self {
        match self {
            DigitMark::Unknown => DigitMark::Excluded,
            DigitMark::Excluded => DigitMark::Possible,
            DigitMark::Possible => DigitMark::Confirmed,
            DigitMark::Confirmed => DigitMark::Unknown,
        }
    }

    /// Whether positions can be attached to this mark.
    #[must_use]
    pub fn takes_positions(self) -> bool {
        matches!(self, DigitMark::Possible | DigitMark::Confirmed)
    }
}

/// Note for a single digit.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DigitNote {
    pub mark: DigitMark,
    /// Bit `i` set means position `i` is suspected.
    positions: u16,
}

impl DigitNote {
    /// Suspected positions, ascending.
    pub fn positions(&self) -> impl Iterator<Item = usize> + '_ {
        (0..DIGIT_SYMBOLS).filter(move |&p| self.has_position(p))
    }

    /// Check if `position` is suspected.
    #[must_use]
    pub fn has_position(&self, position: usize) -> bool {
        position < DIGIT_SYMBOLS && self.positions & (1 << position) != 0
    }
}

/// Scratchpad for one game's worth of digits.
///
/// Every operation returns a new memo.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DigitMemo {
    digit_count: usize,
    notes: [DigitNote; DIGIT_SYMBOLS],
}

impl DigitMemo {
    /// Blank memo for sequences of `digit_count` digits.
    #[must_use]
    pub fn new(digit_count: usize) -> Self {
        Self {
            digit_count: digit_count.min(DIGIT_SYMBOLS),
            notes: [DigitNote::default(); DIGIT_SYMBOLS],
        }
    }

    /// Number of positions notes can refer to.
    #[must_use]
    pub fn digit_count(&self) -> usize {
        self.digit_count
    }

    /// Note for `digit`.
    #[must_use]
    pub fn note(&self, digit: Digit) -> DigitNote {
        self.notes[digit.index()]
    }

    /// Advance `digit` to its next mark.
    ///
    /// Moving to `Unknown` or `Excluded` drops its positions.
    #[must_use]
    pub fn cycle(&self, digit: Digit) -> Self {
        let mut memo = *self;
        let note = &mut memo.notes[digit.index()];
        note.mark = note.mark.next();
        if !note.mark.takes_positions() {
            note.positions = 0;
        }
        memo
    }

    /// Toggle a suspected position for `digit`.
    ///
    /// A `Possible` digit may hold several positions; a `Confirmed` digit
    /// holds at most one, so selecting a new one replaces the old. Ignored
    /// for other marks and out-of-range positions.
    #[must_use]
    pub fn toggle_position(&self, digit: Digit, position: usize) -> Self {
        let mut memo = *self;
        if position >= self.digit_count {
            return memo;
        }

        let note = &mut memo.notes[digit.index()];
        let bit = 1u16 << position;
        let selected = note.positions & bit != 0;
        match note.mark {
            _ if selected => note.positions &= !bit,
            DigitMark::Possible => note.positions |= bit,
            DigitMark::Confirmed => note.positions = bit,
            DigitMark::Unknown | DigitMark::Excluded => {}
        }
        memo
    }

    /// Digits carrying `mark`, ascending.
    pub fn digits_marked(&self, mark: DigitMark) -> impl Iterator<Item = Digit> + '_ {
        Digit::all().filter(move |&d| self.note(d).mark == mark)
    }

    /// Blank memo with the same digit count.
    #[must_use]
    pub fn reset(&self) -> Self {
        Self::new(self.digit_count)
    }
}
