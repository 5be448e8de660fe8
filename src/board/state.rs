//! Board state: per-player piece positions plus an occupancy index.
//!
//! Two fixed-length position vectors (one per player) are the source of
//! truth. A square-keyed index answers occupancy queries in O(1) instead of
//! scanning piece lists.
//!
//! ## Stacking exemption
//!
//! Two home-track squares are staging zones and never tracked for
//! occupancy: the entry square (offset 5), where any number of waiting or
//! captured pieces rest, and the finish square (offset 6), where retired
//! pieces accumulate. Every other square holds at most one piece; a
//! mutation that would double-occupy a tracked square is an
//! `InvariantViolation`.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use super::square::{Position, Square, ENTRY_OFFSET, FINISH_OFFSET};
use crate::core::{PlayerId, PlayerPair, UrError};

/// Is a square subject to single-occupancy tracking?
const fn is_tracked(square: Square) -> bool {
    !(square.track.is_home()
        && (square.offset == ENTRY_OFFSET || square.offset == FINISH_OFFSET))
}

/// Positions of both players' pieces.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct BoardState {
    pieces: PlayerPair<Vec<Position>>,
    /// Occupant of each tracked square: (owner, piece index).
    #[serde(skip)]
    occupancy: FxHashMap<Square, (PlayerId, u8)>,
    num_pieces: usize,
}

impl BoardState {
    /// Create a fresh board with all pieces off-board.
    #[must_use]
    pub fn new(num_pieces: usize) -> Self {
        assert!(num_pieces > 0, "Must have at least 1 piece");
        Self {
            pieces: PlayerPair::new(|_| vec![Position::OffBoard; num_pieces]),
            occupancy: FxHashMap::default(),
            num_pieces,
        }
    }

    /// Pieces per player.
    #[must_use]
    pub fn num_pieces(&self) -> usize {
        self.num_pieces
    }

    /// Reset all pieces off-board.
    pub fn reset(&mut self) {
        for player in PlayerId::both() {
            self.pieces[player].fill(Position::OffBoard);
        }
        self.occupancy.clear();
    }

    /// Position of one piece.
    #[must_use]
    pub fn position(&self, player: PlayerId, piece: u8) -> Position {
        self.pieces[player][piece as usize]
    }

    /// All positions of one player, in piece-index order.
    #[must_use]
    pub fn positions(&self, player: PlayerId) -> &[Position] {
        &self.pieces[player]
    }

    /// Occupant of a tracked square, if any.
    ///
    /// Staging squares (entry/finish) always report `None`.
    #[must_use]
    pub fn occupant(&self, square: Square) -> Option<(PlayerId, u8)> {
        self.occupancy.get(&square).copied()
    }

    /// Does the given player have a piece resting on this square?
    #[must_use]
    pub fn is_occupied_by(&self, player: PlayerId, square: Square) -> bool {
        matches!(self.occupant(square), Some((p, _)) if p == player)
    }

    /// Move one piece to a new position, updating the occupancy index.
    ///
    /// The caller resolves captures first: moving onto a tracked square
    /// that still holds a piece is an `InvariantViolation`, and the board
    /// is left unchanged.
    pub fn move_piece(
        &mut self,
        player: PlayerId,
        piece: u8,
        to: Position,
    ) -> Result<(), UrError> {
        let idx = piece as usize;
        if idx >= self.num_pieces {
            return Err(UrError::invalid_move(format!(
                "piece index {} out of range for {} pieces",
                piece, self.num_pieces
            )));
        }

        if let Position::On(sq) = to {
            if is_tracked(sq) {
                if let Some(occupant) = self.occupancy.get(&sq) {
                    if *occupant != (player, piece) {
                        return Err(UrError::InvariantViolation(format!(
                            "square {} already occupied by {} piece {}",
                            sq, occupant.0, occupant.1
                        )));
                    }
                }
            }
        }

        let from = self.pieces[player][idx];
        if let Position::On(sq) = from {
            if is_tracked(sq) && self.occupancy.get(&sq) == Some(&(player, piece)) {
                self.occupancy.remove(&sq);
            }
        }

        self.pieces[player][idx] = to;
        if let Position::On(sq) = to {
            if is_tracked(sq) {
                self.occupancy.insert(sq, (player, piece));
            }
        }
        Ok(())
    }

    /// Has this player retired every piece to their finish square?
    #[must_use]
    pub fn is_win(&self, player: PlayerId) -> bool {
        self.pieces[player].iter().all(|p| p.is_finished(player))
    }

    /// Verify internal consistency: every tracked square holds at most one
    /// piece and the occupancy index matches the position vectors.
    pub fn check_invariants(&self) -> Result<(), UrError> {
        let mut rebuilt: FxHashMap<Square, (PlayerId, u8)> = FxHashMap::default();
        for player in PlayerId::both() {
            for (idx, pos) in self.pieces[player].iter().enumerate() {
                if let Position::On(sq) = pos {
                    if !is_tracked(*sq) {
                        continue;
                    }
                    if let Some(other) = rebuilt.insert(*sq, (player, idx as u8)) {
                        return Err(UrError::InvariantViolation(format!(
                            "square {} occupied by both {} piece {} and {} piece {}",
                            sq, other.0, other.1, player, idx
                        )));
                    }
                }
            }
        }
        if rebuilt != self.occupancy {
            return Err(UrError::InvariantViolation(
                "occupancy index out of sync with piece positions".into(),
            ));
        }
        Ok(())
    }

    /// Rebuild the occupancy index from the position vectors.
    ///
    /// Needed after deserialization, which skips the index.
    pub fn rebuild_occupancy(&mut self) -> Result<(), UrError> {
        self.occupancy.clear();
        for player in PlayerId::both() {
            for (idx, pos) in self.pieces[player].iter().enumerate() {
                if let Position::On(sq) = pos {
                    if !is_tracked(*sq) {
                        continue;
                    }
                    if self.occupancy.insert(*sq, (player, idx as u8)).is_some() {
                        return Err(UrError::InvariantViolation(format!(
                            "square {} doubly occupied in serialized state",
                            sq
                        )));
                    }
                }
            }
        }
        Ok(())
    }
}
