//! Move candidates: fully-resolved legal moves for one dice roll.
//!
//! Candidates are transient: regenerated every turn, never persisted.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::board::{Position, Square};
use crate::core::PlayerId;

/// One legal move, fully resolved against the current board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MoveCandidate {
    /// The player moving.
    pub player: PlayerId,
    /// Index of the piece being moved.
    pub piece: u8,
    /// Where the piece currently is.
    pub from: Position,
    /// Where it lands.
    pub to: Square,
    /// Does this move send an opponent piece back to its entry square?
    pub captures: bool,
    /// Does the destination grant an extra turn (rosette)?
    pub extra_turn: bool,
    /// Flat board index (`1..=24`) of the source square, for action-space
    /// encodings. `None` for entry moves from off-board.
    pub board_index: Option<u8>,
}

/// The legal moves for one (player, dice) query, with lookup maps.
///
/// `by_piece` maps each movable piece index to its candidate. `by_board_index`
/// maps the source square's flat index to its candidate; only on-board
/// sources appear, and if two pieces share a staging square the later piece
/// wins the slot.
#[derive(Clone, Debug, Default)]
pub struct MoveSet {
    moves: SmallVec<[MoveCandidate; 7]>,
    by_piece: FxHashMap<u8, usize>,
    by_board_index: FxHashMap<u8, usize>,
}

impl MoveSet {
    /// Create an empty set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a candidate, registering it in the lookup maps.
    pub(crate) fn push(&mut self, candidate: MoveCandidate) {
        let idx = self.moves.len();
        self.by_piece.insert(candidate.piece, idx);
        if let Some(board_index) = candidate.board_index {
            self.by_board_index.insert(board_index, idx);
        }
        self.moves.push(candidate);
    }

    /// All candidates, in piece-index order.
    #[must_use]
    pub fn moves(&self) -> &[MoveCandidate] {
        &self.moves
    }

    /// Number of legal moves.
    #[must_use]
    pub fn len(&self) -> usize {
        self.moves.len()
    }

    /// True when no piece can move, which forfeits the turn.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    /// Look up the candidate moving a given piece.
    #[must_use]
    pub fn by_piece(&self, piece: u8) -> Option<&MoveCandidate> {
        self.by_piece.get(&piece).map(|&idx| &self.moves[idx])
    }

    /// Look up the candidate whose source square has the given flat index.
    #[must_use]
    pub fn by_board_index(&self, board_index: u8) -> Option<&MoveCandidate> {
        self.by_board_index
            .get(&board_index)
            .map(|&idx| &self.moves[idx])
    }

    /// Iterate over candidates.
    pub fn iter(&self) -> impl Iterator<Item = &MoveCandidate> {
        self.moves.iter()
    }
}

impl<'a> IntoIterator for &'a MoveSet {
    type Item = &'a MoveCandidate;
    type IntoIter = std::slice::Iter<'a, MoveCandidate>;

    fn into_iter(self) -> Self::IntoIter {
        self.moves.iter()
    }
}
