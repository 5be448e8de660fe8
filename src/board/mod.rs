//! Board geometry and state.

pub mod square;
pub mod state;

pub use square::{
    Position, Square, Track, ENTRY_OFFSET, FINISH_OFFSET, MAX_OFFSET, MIN_OFFSET, ROSETTES,
    SAFE_SQUARE,
};
pub use state::BoardState;
