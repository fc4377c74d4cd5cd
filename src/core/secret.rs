//! Secret generation.
//!
//! Digits are drawn without replacement from a pool of the ten symbols, so
//! uniqueness holds by construction. When leading zero is disallowed the
//! first draw skips `0`; every later draw is from whatever remains.

use smallvec::SmallVec;

use super::config::GameConfig;
use super::digits::{Digit, DigitSeq, DIGIT_SYMBOLS};
use super::rng::GameRng;

/// Generate a secret for `config`.
///
/// The result has exactly `config.digit_count()` pairwise distinct digits and
/// starts with a nonzero digit unless the config allows leading zero.
#[must_use]
pub fn generate_secret(config: &GameConfig, rng: &mut GameRng) -> DigitSeq {
    let mut pool: SmallVec<[Digit; DIGIT_SYMBOLS]> = Digit::all().collect();
    let mut secret = DigitSeq::new();

    if !config.allow_leading_zero() {
        // Pool is ascending, so index 0 is '0' and 1.. are the nonzero digits.
        let index = 1 + rng.gen_index(pool.len() - 1);
        secret.push(pool.remove(index));
    }

    while secret.len() < config.digit_count() {
        let index = rng.gen_index(pool.len());
        secret.push(pool.remove(index));
    }

    secret
}
