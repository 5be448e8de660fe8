//! Move candidates and legal-move generation.

pub mod candidate;
pub mod generator;

pub use candidate::{MoveCandidate, MoveSet};
pub use generator::generate;
