//! Engine facade tying the pure core to randomness, logging and win
//! notification.

pub mod engine;

pub use engine::{GameEngine, DEFAULT_PLAYER_NAME};
