//! Property tests for secret generation, judging, validation and the
//! guess transition.

use proptest::prelude::*;

use number_baseball::{
    generate_secret, judge, validate_guess, Digit, DigitSeq, GameConfig, GameRng, GameState,
    GuessError,
};

/// Any valid configuration.
fn config_strategy() -> impl Strategy<Value = GameConfig> {
    (1usize..=10, any::<bool>()).prop_map(|(n, allow)| GameConfig::new(n, allow).unwrap())
}

/// Two unique-digit sequences of the same length.
fn secret_and_guess() -> impl Strategy<Value = (DigitSeq, DigitSeq)> {
    (1usize..=10).prop_flat_map(|n| {
        let pick = Just((0u8..10).collect::<Vec<_>>()).prop_shuffle();
        (pick.clone(), pick).prop_map(move |(a, b)| (to_seq(&a[..n]), to_seq(&b[..n])))
    })
}

fn to_seq(values: &[u8]) -> DigitSeq {
    values.iter().map(|&v| Digit::new(v).unwrap()).collect()
}

proptest! {
    #[test]
    fn secret_has_configured_shape(config in config_strategy(), seed in any::<u64>()) {
        let secret = generate_secret(&config, &mut GameRng::new(seed));

        prop_assert_eq!(secret.len(), config.digit_count());
        prop_assert!(secret.has_unique_digits());
        if !config.allow_leading_zero() {
            prop_assert_ne!(secret.first(), Some(Digit::ZERO));
        }
    }

    #[test]
    fn secret_is_a_valid_guess(config in config_strategy(), seed in any::<u64>()) {
        let secret = generate_secret(&config, &mut GameRng::new(seed));
        prop_assert_eq!(validate_guess(&secret.to_string(), &config), Ok(secret));
    }

    #[test]
    fn strikes_and_balls_bounded((secret, guess) in secret_and_guess()) {
        let j = judge(&secret, &guess).unwrap();

        prop_assert!(j.strike + j.ball <= secret.len());
        prop_assert_eq!(j.is_correct, secret == guess);
        prop_assert_eq!(j.strike == secret.len(), secret == guess);
    }

    #[test]
    fn judging_is_symmetric((secret, guess) in secret_and_guess()) {
        // With unique digits, swapping roles keeps the counts.
        prop_assert_eq!(judge(&secret, &guess).unwrap(), judge(&guess, &secret).unwrap());
    }

    #[test]
    fn validation_is_idempotent(config in config_strategy(), raw in "[0-9a ]{0,12}") {
        prop_assert_eq!(validate_guess(&raw, &config), validate_guess(&raw, &config));
    }

    #[test]
    fn submit_never_mutates_input(
        seed in any::<u64>(),
        guesses in prop::collection::vec("[0-9]{3}", 1..40),
    ) {
        let mut state = GameState::new(GameConfig::default(), &mut GameRng::new(seed));

        for raw in &guesses {
            let before = state.attempts().clone();
            let was_finished = state.is_finished();

            match state.submit_guess(raw) {
                Ok(next) => {
                    prop_assert!(!was_finished);
                    prop_assert_eq!(state.attempts(), &before);
                    prop_assert_eq!(next.attempt_count(), before.len() + 1);
                    prop_assert!(next.attempts().iter().take(before.len()).eq(before.iter()));
                    prop_assert_eq!(next.secret(), state.secret());
                    state = next;
                }
                Err(GuessError::GameAlreadyFinished) => {
                    prop_assert!(was_finished);
                }
                Err(GuessError::Invalid(_)) => {
                    prop_assert_eq!(state.attempts(), &before);
                }
            }
        }
    }
}
