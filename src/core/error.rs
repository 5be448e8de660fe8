//! Engine error conditions.
//!
//! Board-geometry edge cases (overshoot, blocked squares, safe-square
//! collisions) are rule outcomes, not errors: they produce blocked or
//! filtered candidates and never surface here. Errors are reserved for
//! contract violations at the environment boundary.

use thiserror::Error;

/// Errors produced by the environment boundary.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum UrError {
    /// A dice value outside the configured face set was passed in.
    #[error("dice value {value} is not in the configured face set")]
    InvalidDiceValue { value: u8 },

    /// A move that the current position does not admit was passed to `step`.
    /// State is never partially mutated on this error.
    #[error("invalid move: {reason}")]
    InvalidMove { reason: String },

    /// An internal consistency check failed. Programmer error; reported
    /// immediately and never suppressed.
    #[error("board invariant violated: {0}")]
    InvariantViolation(String),

    /// A configuration value the engine cannot run with.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

impl UrError {
    /// Shorthand for an `InvalidMove` with a formatted reason.
    pub fn invalid_move(reason: impl Into<String>) -> Self {
        Self::InvalidMove {
            reason: reason.into(),
        }
    }
}
