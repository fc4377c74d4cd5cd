//! Guess validation.
//!
//! Rules are checked in a fixed order and the first failure wins:
//!
//! 1. non-empty
//! 2. exact length
//! 3. digits only
//! 4. no leading zero (unless allowed)
//! 5. no repeated digit
//!
//! Emptiness is judged on the raw input; whitespace is trimmed only for the
//! later rules. The secret is never consulted.

use super::config::GameConfig;
use super::digits::{Digit, DigitSeq};
use super::error::ValidationError;

/// Validate a raw guess against `config`.
///
/// Surrounding whitespace is ignored after the empty check, so blank input
/// reports a length error. On success the parsed digits are
/// returned so callers do not parse twice.
pub fn validate_guess(raw: &str, config: &GameConfig) -> Result<DigitSeq, ValidationError> {
    if raw.is_empty() {
        return Err(ValidationError::EmptyInput);
    }

    let guess = raw.trim();

    let actual = guess.chars().count();
    if actual != config.digit_count() {
        return Err(ValidationError::WrongLength {
            expected: config.digit_count(),
            actual,
        });
    }

    let digits: DigitSeq = guess.parse()?;

    if !config.allow_leading_zero() && digits.first() == Some(Digit::ZERO) {
        return Err(ValidationError::LeadingZero);
    }

    if let Some(digit) = digits.first_duplicate() {
        return Err(ValidationError::DuplicateDigit { digit });
    }

    Ok(digits)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(digits: usize, allow: bool) -> GameConfig {
        GameConfig::new(digits, allow).unwrap()
    }

    #[test]
    fn test_valid_guess() {
        let guess = validate_guess("123", &config(3, false)).unwrap();
        assert_eq!(guess.to_string(), "123");
    }

    #[test]
    fn test_trims_whitespace() {
        let guess = validate_guess("  482\n", &config(3, false)).unwrap();
        assert_eq!(guess.to_string(), "482");
    }

    #[test]
    fn test_empty() {
        assert_eq!(validate_guess("", &config(3, false)), Err(ValidationError::EmptyInput));
        assert_eq!(
            validate_guess("   ", &config(3, false)),
            Err(ValidationError::WrongLength { expected: 3, actual: 0 })
        );
    }

    #[test]
    fn test_wrong_length() {
        assert_eq!(
            validate_guess("1234", &config(3, false)),
            Err(ValidationError::WrongLength { expected: 3, actual: 4 })
        );
        // Multi-byte characters count once.
        assert_eq!(
            validate_guess("1é", &config(3, false)),
            Err(ValidationError::WrongLength { expected: 3, actual: 2 })
        );
    }

    #[test]
    fn test_non_digit() {
        assert_eq!(
            validate_guess("1a3", &config(3, false)),
            Err(ValidationError::NonDigitCharacter { position: 1, ch: 'a' })
        );
        assert_eq!(
            validate_guess("-12", &config(3, true)),
            Err(ValidationError::NonDigitCharacter { position: 0, ch: '-' })
        );
    }

    #[test]
    fn test_leading_zero() {
        assert_eq!(validate_guess("012", &config(3, false)), Err(ValidationError::LeadingZero));
        assert!(validate_guess("012", &config(3, true)).is_ok());
    }

    #[test]
    fn test_duplicate_digit() {
        assert_eq!(
            validate_guess("112", &config(3, false)),
            Err(ValidationError::DuplicateDigit { digit: Digit::new(1).unwrap() })
        );
    }

    #[test]
    fn test_check_order() {
        // Wrong length beats duplicates.
        assert!(matches!(
            validate_guess("1122", &config(3, false)),
            Err(ValidationError::WrongLength { .. })
        ));
        // Non-digit beats leading zero.
        assert!(matches!(
            validate_guess("0x1", &config(3, false)),
            Err(ValidationError::NonDigitCharacter { .. })
        ));
        // Leading zero beats duplicates.
        assert_eq!(validate_guess("002", &config(3, false)), Err(ValidationError::LeadingZero));
    }

    #[test]
    fn test_idempotent() {
        let cfg = config(4, false);
        for raw in ["1234", "0123", "1123", "12", "12a4", ""] {
            assert_eq!(validate_guess(raw, &cfg), validate_guess(raw, &cfg));
        }
    }
}
