//! Game engine facade.
//!
//! `GameEngine` owns the randomness source and the win observers and wraps
//! the pure core with tracing:
//! - `new_game`: draw a secret and start a game
//! - `submit_guess`: validate, judge and record a guess
//! - `statistics`: summarize a game's history
//!
//! Game states are still plain values returned to the caller. The engine
//! keeps no per-game data, so one engine can serve any number of sessions.

use tracing::{debug, info};

use crate::core::{GameConfig, GameRng, GameState, GuessError, Statistics};
use crate::records::{WinObserver, WinRecord};

/// Name used in win records when none is set.
pub const DEFAULT_PLAYER_NAME: &str = "Player";

/// Entry point for running games.
pub struct GameEngine {
    rng: GameRng,
    player_name: String,
    observers: Vec<Box<dyn WinObserver>>,
}

impl GameEngine {
    /// Create an engine drawing secrets from `rng`.
    #[must_use]
    pub fn new(rng: GameRng) -> Self {
        Self {
            rng,
            player_name: DEFAULT_PLAYER_NAME.to_string(),
            observers: Vec::new(),
        }
    }

    /// Create an engine with a deterministic seed.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self::new(GameRng::new(seed))
    }

    /// Create an engine seeded from the operating system.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(GameRng::from_entropy())
    }

    /// Set the player name put on win records.
    #[must_use]
    pub fn with_player_name(mut self, name: impl Into<String>) -> Self {
        self.player_name = name.into();
        self
    }

    /// Register an observer for won games.
    #[must_use]
    pub fn with_observer(mut self, observer: impl WinObserver + 'static) -> Self {
        self.observers.push(Box::new(observer));
        self
    }

    /// Player name put on win records.
    #[must_use]
    pub fn player_name(&self) -> &str {
        &self.player_name
    }

    /// Seed of the underlying RNG.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    /// Start a new game.
    pub fn new_game(&mut self, config: GameConfig) -> GameState {
        let state = GameState::new(config, &mut self.rng);
        info!(
            digits = config.digit_count(),
            allow_leading_zero = config.allow_leading_zero(),
            "New game started"
        );
        state
    }

    /// Submit a guess against `state`, returning the next state.
    ///
    /// `state` itself is never modified. Observers are notified when the
    /// returned state is a win.
    pub fn submit_guess(&self, state: &GameState, raw: &str) -> Result<GameState, GuessError> {
        let next = match state.submit_guess(raw) {
            Ok(next) => next,
            Err(err) => {
                debug!(attempts = state.attempt_count(), error = %err, "Guess rejected");
                return Err(err);
            }
        };

        if let Some(attempt) = next.last_attempt() {
            debug!(
                number = attempt.number,
                strike = attempt.judgment.strike,
                ball = attempt.judgment.ball,
                "Guess judged"
            );
        }

        if next.is_won() {
            info!(attempts = next.attempt_count(), seconds = next.elapsed_seconds(), "Game won");
            if let Some(record) = WinRecord::from_state(self.player_name.as_str(), &next) {
                for observer in &self.observers {
                    observer.on_game_won(&record);
                }
            }
        } else if next.is_finished() {
            info!(attempts = next.attempt_count(), "Game lost, attempt budget exhausted");
        }

        Ok(next)
    }

    /// Statistics for `state`.
    #[must_use]
    pub fn statistics(&self, state: &GameState) -> Statistics {
        state.statistics()
    }
}

impl std::fmt::Debug for GameEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GameEngine")
            .field("seed", &self.rng.seed())
            .field("player_name", &self.player_name)
            .field("observers", &self.observers.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{GameStatus, ValidationError};
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn test_seeded_engines_agree() {
        let mut a = GameEngine::seeded(11);
        let mut b = GameEngine::seeded(11);
        let config = GameConfig::new(5, true).unwrap();

        for _ in 0..5 {
            assert_eq!(a.new_game(config).secret(), b.new_game(config).secret());
        }
    }

    #[test]
    fn test_successive_games_use_fresh_secrets() {
        let mut engine = GameEngine::seeded(3);
        let config = GameConfig::new(6, false).unwrap();
        let secrets: Vec<_> = (0..5).map(|_| engine.new_game(config).secret().clone()).collect();
        assert!(secrets.windows(2).any(|w| w[0] != w[1]));
    }

    #[test]
    fn test_submit_and_win_notifies() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);

        let mut engine = GameEngine::seeded(42)
            .with_player_name("lee")
            .with_observer(move |r: &WinRecord| sink.borrow_mut().push(r.clone()));

        let state = engine.new_game(GameConfig::default());
        let secret = state.secret().to_string();

        let state = engine.submit_guess(&state, &secret).unwrap();
        assert_eq!(state.status(), GameStatus::Won);

        let seen = seen.borrow();
        assert_eq!(seen.len(), 1);
        assert_eq!(seen[0].player_name, "lee");
        assert_eq!(seen[0].attempts, 1);
        assert_eq!(seen[0].digit_count, 3);
    }

    #[test]
    fn test_rejected_guess_does_not_notify() {
        let calls = Rc::new(RefCell::new(0));
        let sink = Rc::clone(&calls);
        let mut engine =
            GameEngine::seeded(1).with_observer(move |_: &WinRecord| *sink.borrow_mut() += 1);

        let state = engine.new_game(GameConfig::default());
        let err = engine.submit_guess(&state, "abc").unwrap_err();
        assert_eq!(
            err,
            GuessError::Invalid(ValidationError::NonDigitCharacter { position: 0, ch: 'a' })
        );
        assert_eq!(*calls.borrow(), 0);
    }

    #[test]
    fn test_statistics_passthrough() {
        let mut engine = GameEngine::seeded(8);
        let state = engine.new_game(GameConfig::default());
        assert_eq!(engine.statistics(&state).total_attempts, 0);
        assert_eq!(engine.player_name(), DEFAULT_PLAYER_NAME);
    }
}
