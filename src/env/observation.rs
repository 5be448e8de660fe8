//! Canonical observation of a board position.
//!
//! The observation is order-independent: per player it keeps a count of
//! pieces still at the entry/off-board stage plus a *sorted* list of the
//! remaining on-board squares, with finished pieces excluded. Two boards
//! whose pieces are permuted across indices produce identical observations,
//! which is what lets state-keyed caches and learning tables work.

use serde::{Deserialize, Serialize};

use crate::board::{BoardState, Position, Square};
use crate::core::{PlayerId, PlayerPair};

/// One player's projected state.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerObservation {
    /// Pieces off-board or waiting on the entry square.
    pub start_count: u8,
    /// Squares of all other unfinished pieces, sorted.
    pub on_board: Vec<Square>,
}

/// Canonical summary of the whole board.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Observation {
    pub players: PlayerPair<PlayerObservation>,
}

impl Observation {
    /// Project a board into its canonical observation.
    #[must_use]
    pub fn from_board(board: &BoardState) -> Self {
        Self {
            players: PlayerPair::new(|player| project_player(board, player)),
        }
    }

    /// One player's side of the observation.
    #[must_use]
    pub fn player(&self, player: PlayerId) -> &PlayerObservation {
        &self.players[player]
    }
}

fn project_player(board: &BoardState, player: PlayerId) -> PlayerObservation {
    let entry = Square::entry_of(player);
    let mut start_count = 0u8;
    let mut on_board = Vec::new();

    for pos in board.positions(player) {
        match pos {
            Position::OffBoard => start_count += 1,
            Position::On(sq) if *sq == entry => start_count += 1,
            Position::On(_) if pos.is_finished(player) => {}
            Position::On(sq) => on_board.push(*sq),
        }
    }

    on_board.sort();
    PlayerObservation {
        start_count,
        on_board,
    }
}
