//! Core engine types: players, RNG, errors, configuration.
//!
//! These are the game-agnostic building blocks; board geometry and rules
//! live in `board` and `moves`.

pub mod config;
pub mod error;
pub mod player;
pub mod rng;

pub use config::{EnvConfig, RewardConfig, DEFAULT_NUM_PIECES};
pub use error::UrError;
pub use player::{PlayerId, PlayerPair};
pub use rng::{GameRng, GameRngState};
