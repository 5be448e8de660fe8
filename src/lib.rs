//! # ur-engine
//!
//! A Royal Game of Ur rules engine built as a deterministic state-transition
//! environment for RL training and scripted drivers.
//!
//! ## Design Principles
//!
//! 1. **Pure enumeration, single mutation point**: `legal_moves` never
//!    writes; `step` is the only operation that changes the board, and it
//!    validates the chosen candidate before touching anything.
//!
//! 2. **Explicit geometry**: positions are a tagged `OffBoard`/`On(square)`
//!    type and occupancy is a square-keyed index; no sentinel values, no
//!    linear scans.
//!
//! 3. **Configuration over constants**: dice faces and reward shaping live
//!    in `EnvConfig`, so policies can be swapped without touching rules.
//!
//! ## Architecture
//!
//! - Deterministic seeded dice via `GameRng` (forkable for rollouts).
//! - Canonical, order-independent observations (`Eq + Hash`) for
//!   state-keyed caching and learning tables.
//! - Cheap environment cloning (`im` history) for tree search.
//!
//! ## Modules
//!
//! - `core`: players, RNG, errors, configuration
//! - `dice`: configurable dice face sets
//! - `board`: tracks, squares, positions, board state
//! - `moves`: move candidates and legal-move generation
//! - `env`: the reset/roll/legal_moves/step surface
//!
//! ## Example
//!
//! ```
//! use ur_engine::core::PlayerId;
//! use ur_engine::env::UrEnv;
//!
//! let mut env = UrEnv::with_seed(42);
//! env.reset(None);
//!
//! let dice = env.roll();
//! let moves = env.legal_moves(PlayerId::P0, dice).unwrap();
//! if let Some(&chosen) = moves.moves().first() {
//!     let outcome = env.step(&chosen, dice).unwrap();
//!     assert!(!outcome.done);
//! } // an empty set forfeits the turn
//! ```

pub mod board;
pub mod core;
pub mod dice;
pub mod env;
pub mod moves;

// Re-export commonly used types
pub use crate::core::{
    EnvConfig, GameRng, GameRngState, PlayerId, PlayerPair, RewardConfig, UrError,
};

pub use crate::board::{BoardState, Position, Square, Track, ROSETTES, SAFE_SQUARE};

pub use crate::dice::DiceProfile;

pub use crate::moves::{generate, MoveCandidate, MoveSet};

pub use crate::env::{MoveRecord, Observation, PlayerObservation, StepOutcome, UrEnv};
