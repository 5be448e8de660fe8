//! Legal-move enumeration.
//!
//! `generate` is pure: it reads the board and never mutates it. Blocked and
//! out-of-range moves resolve to the piece's current square and are filtered
//! out, so a returned candidate always changes the board. An empty `MoveSet`
//! means the turn is forfeit.
//!
//! ## Movement summary
//!
//! A player's path runs down their home track from the entry square
//! (offset 5 to 1), wraps onto the shared war track (offset 1 to 8), then
//! exits back onto the home tail (offsets 8/7) and retires on the finish
//! square (offset 6). Home-track offsets count *down* with the dice; war
//! offsets count *up*.

use crate::board::{BoardState, Position, Square, Track, ENTRY_OFFSET, FINISH_OFFSET, MAX_OFFSET, MIN_OFFSET};
use crate::core::PlayerId;

use super::candidate::{MoveCandidate, MoveSet};

/// Enumerate every legal move for `player` with the given dice value.
///
/// Dice validation is the environment boundary's job; any value is accepted
/// here (a `0` simply yields no entries and no-op home/war moves).
#[must_use]
pub fn generate(board: &BoardState, player: PlayerId, dice: u8) -> MoveSet {
    let mut set = MoveSet::new();

    for piece in 0..board.num_pieces() as u8 {
        let from = board.position(player, piece);
        if from.is_finished(player) {
            continue;
        }

        let resolved = match from {
            Position::OffBoard => entry_move(player, dice),
            Position::On(sq) if sq.track.is_home() => {
                let (to, captures) = home_move(board, player, sq, dice);
                (to != sq).then_some((to, captures))
            }
            Position::On(sq) => {
                let (to, captures) = war_move(board, player, sq, dice);
                (to != sq).then_some((to, captures))
            }
        };

        if let Some((to, captures)) = resolved {
            set.push(MoveCandidate {
                player,
                piece,
                from,
                to,
                captures,
                extra_turn: to.is_rosette(),
                board_index: from.square().map(Square::board_index),
            });
        }
    }

    set
}

/// Entry from off-board: any positive roll places the piece on its home
/// entry square, consuming the whole roll. The entry square is a staging
/// square, so entry is never blocked.
fn entry_move(player: PlayerId, dice: u8) -> Option<(Square, bool)> {
    (dice > 0).then_some((Square::entry_of(player), false))
}

/// Move along the player's own home track.
///
/// Returns the resolved destination and capture flag; a destination equal to
/// `sq` means the move is blocked or out of range.
pub(crate) fn home_move(
    board: &BoardState,
    player: PlayerId,
    sq: Square,
    dice: u8,
) -> (Square, bool) {
    let col = i16::from(sq.offset);
    let dice = i16::from(dice);

    if col - dice >= i16::from(MIN_OFFSET) {
        if sq.offset <= ENTRY_OFFSET {
            // descending the approach squares
            let dest = Square::new(sq.track, (col - dice) as u8);
            if board.is_occupied_by(player, dest) {
                (sq, false)
            } else {
                (dest, false)
            }
        } else if col - dice == i16::from(FINISH_OFFSET) {
            // tail squares (7/8) retire only on an exact landing
            (Square::finish_of(player), false)
        } else {
            (sq, false)
        }
    } else {
        // wrap off the home track onto the shared war track
        let wrap_offset = 1 + (col - dice).abs();
        if wrap_offset > i16::from(MAX_OFFSET) {
            return (sq, false);
        }
        let wrap = Square::new(Track::B, wrap_offset as u8);
        if board.is_occupied_by(player, wrap) {
            (sq, false)
        } else {
            // pure placement: capture resolution at the wrap square
            advance_onto(board, player, sq, wrap.offset)
        }
    }
}

/// Move along the shared war track, or exit it onto the home tail.
pub(crate) fn war_move(
    board: &BoardState,
    player: PlayerId,
    sq: Square,
    dice: u8,
) -> (Square, bool) {
    let col = i16::from(sq.offset);
    let dice = i16::from(dice);

    if col + dice <= i16::from(MAX_OFFSET) {
        advance_onto(board, player, sq, (col + dice) as u8)
    } else {
        // exit arithmetic: reflect past the end of the war track onto the
        // home tail
        let exit_col = 17 - col - dice;
        match exit_col.cmp(&i16::from(FINISH_OFFSET)) {
            std::cmp::Ordering::Equal => (Square::finish_of(player), false),
            // overshoot blocks: a piece cannot exit on a roll past the board
            std::cmp::Ordering::Less => (sq, false),
            std::cmp::Ordering::Greater => {
                let dest = Square::new(Track::home_of(player), exit_col as u8);
                if board.is_occupied_by(player, dest) {
                    (sq, false)
                } else {
                    (dest, false)
                }
            }
        }
    }
}

/// Resolve a landing on war-track square `target_col`.
///
/// - opponent on a non-safe square: capture
/// - opponent on the safe square: bounce one square past it, resolving that
///   square the same way (own piece blocks, opponent piece is captured)
/// - own piece: blocked (`origin` returned)
/// - empty: plain landing
fn advance_onto(
    board: &BoardState,
    player: PlayerId,
    origin: Square,
    target_col: u8,
) -> (Square, bool) {
    let dest = Square::new(Track::B, target_col);
    match board.occupant(dest) {
        Some((occupant, _)) if occupant != player => {
            if dest.is_safe() {
                let past = Square::new(Track::B, target_col + 1);
                match board.occupant(past) {
                    Some((p, _)) if p != player => (past, true),
                    Some(_) => (origin, false),
                    None => (past, false),
                }
            } else {
                (dest, true)
            }
        }
        Some(_) => (origin, false),
        None => (dest, false),
    }
}
