//! Digit symbols and digit sequences.
//!
//! Secrets and guesses are both `DigitSeq`s: short ordered runs of the ten
//! decimal digit symbols. A sequence never exceeds ten digits in a valid game,
//! so it lives inline in a `SmallVec` without heap allocation.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::error::ValidationError;

/// Number of distinct digit symbols (`0`-`9`).
pub const DIGIT_SYMBOLS: usize = 10;

/// A single decimal digit, `0` through `9`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Digit(u8);

impl Digit {
    /// The digit zero.
    pub const ZERO: Digit = Digit(0);

    /// Create a digit from its numeric value.
    ///
    /// Returns `None` for values above 9.
    #[must_use]
    pub const fn new(value: u8) -> Option<Self> {
        if value < DIGIT_SYMBOLS as u8 {
            Some(Self(value))
        } else {
            None
        }
    }

    /// Parse an ASCII digit character.
    #[must_use]
    pub fn from_char(ch: char) -> Option<Self> {
        ch.to_digit(10).map(|v| Self(v as u8))
    }

    /// All ten digits in ascending order.
    pub fn all() -> impl Iterator<Item = Digit> {
        (0..DIGIT_SYMBOLS as u8).map(Digit)
    }

    /// Numeric value.
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }

    /// Index into per-digit tables.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Character representation.
    #[must_use]
    pub fn to_char(self) -> char {
        char::from(b'0' + self.0)
    }

    /// Bit for this digit in a `u16` digit set.
    const fn bit(self) -> u16 {
        1 << self.0
    }
}

impl fmt::Display for Digit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Ordered sequence of digits (a secret or a guess).
///
/// Serializes as its string form, e.g. `"0427"`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct DigitSeq(SmallVec<[Digit; DIGIT_SYMBOLS]>);

impl DigitSeq {
    /// Create an empty sequence.
    #[must_use]
    pub fn new() -> Self {
        Self(SmallVec::new())
    }

    /// Create a sequence from a slice of digits.
    #[must_use]
    pub fn from_digits(digits: &[Digit]) -> Self {
        Self(SmallVec::from_slice(digits))
    }

    /// Append a digit.
    pub fn push(&mut self, digit: Digit) {
        self.0.push(digit);
    }

    /// Number of digits.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Check if the sequence is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Digit at `position`, if any.
    #[must_use]
    pub fn get(&self, position: usize) -> Option<Digit> {
        self.0.get(position).copied()
    }

    /// First digit, if any.
    #[must_use]
    pub fn first(&self) -> Option<Digit> {
        self.0.first().copied()
    }

    /// Check if `digit` occurs anywhere in the sequence.
    #[must_use]
    pub fn contains(&self, digit: Digit) -> bool {
        self.0.contains(&digit)
    }

    /// Iterate over digits in order.
    pub fn iter(&self) -> impl Iterator<Item = Digit> + '_ {
        self.0.iter().copied()
    }

    /// Digits as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[Digit] {
        &self.0
    }

    /// First digit that occurs more than once, scanning left to right.
    #[must_use]
    pub fn first_duplicate(&self) -> Option<Digit> {
        let mut seen = 0u16;
        for digit in self.iter() {
            if seen & digit.bit() != 0 {
                return Some(digit);
            }
            seen |= digit.bit();
        }
        None
    }

    /// Check that every digit occurs at most once.
    #[must_use]
    pub fn has_unique_digits(&self) -> bool {
        self.first_duplicate().is_none()
    }
}

impl fmt::Display for DigitSeq {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for digit in self.iter() {
            write!(f, "{}", digit)?;
        }
        Ok(())
    }
}

/// Parses a string of ASCII digits.
///
/// Only the character class is checked here; length, leading zero and
/// uniqueness rules belong to the guess validator.
impl FromStr for DigitSeq {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(ValidationError::EmptyInput);
        }
        s.chars()
            .enumerate()
            .map(|(position, ch)| {
                Digit::from_char(ch).ok_or(ValidationError::NonDigitCharacter { position, ch })
            })
            .collect::<Result<SmallVec<_>, _>>()
            .map(Self)
    }
}

impl From<DigitSeq> for String {
    fn from(seq: DigitSeq) -> Self {
        seq.to_string()
    }
}

impl TryFrom<String> for DigitSeq {
    type Error = ValidationError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl FromIterator<Digit> for DigitSeq {
    fn from_iter<I: IntoIterator<Item = Digit>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
