//! Board geometry: tracks, squares, positions.
//!
//! The board is three rows of eight squares. Rows `a` and `c` are the
//! players' private home tracks; row `b` is the shared war track where
//! captures happen. A piece is either off-board or on a square; offset 5 on
//! a home track is the entry square and offset 6 the finish square.
//!
//! `Track` derives `Ord` with `A < B < C` so sorted square lists match the
//! row-letter ordering used by state-keyed tables.

use serde::{Deserialize, Serialize};

use crate::core::PlayerId;

/// Lowest valid square offset on any track.
pub const MIN_OFFSET: u8 = 1;
/// Highest valid square offset on any track.
pub const MAX_OFFSET: u8 = 8;
/// Home-track offset where pieces enter the board.
pub const ENTRY_OFFSET: u8 = 5;
/// Home-track offset where pieces retire.
pub const FINISH_OFFSET: u8 = 6;

/// One of the three board rows.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Track {
    /// Player 0's home track (row `a`).
    A,
    /// The shared war track (row `b`).
    B,
    /// Player 1's home track (row `c`).
    C,
}

impl Track {
    /// The home track of a player.
    #[must_use]
    pub const fn home_of(player: PlayerId) -> Track {
        match player.index() {
            0 => Track::A,
            _ => Track::C,
        }
    }

    /// Is this a private home track (row `a` or `c`)?
    #[must_use]
    pub const fn is_home(self) -> bool {
        matches!(self, Track::A | Track::C)
    }

    /// Row letter, for display.
    #[must_use]
    pub const fn letter(self) -> char {
        match self {
            Track::A => 'a',
            Track::B => 'b',
            Track::C => 'c',
        }
    }

    const fn rank(self) -> u8 {
        match self {
            Track::A => 0,
            Track::B => 1,
            Track::C => 2,
        }
    }
}

impl std::fmt::Display for Track {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.letter())
    }
}

/// A board square: (track, offset) with offset `1..=8`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Square {
    pub track: Track,
    pub offset: u8,
}

/// The single war-track square immune to capture.
pub const SAFE_SQUARE: Square = Square {
    track: Track::B,
    offset: 4,
};

/// Rosette squares: landing on one grants an extra turn.
pub const ROSETTES: [Square; 5] = [
    Square { track: Track::A, offset: 1 },
    Square { track: Track::A, offset: 7 },
    Square { track: Track::B, offset: 4 },
    Square { track: Track::C, offset: 1 },
    Square { track: Track::C, offset: 7 },
];

impl Square {
    /// Create a square. Debug-asserts the offset range.
    #[must_use]
    pub const fn new(track: Track, offset: u8) -> Self {
        debug_assert!(MIN_OFFSET <= offset && offset <= MAX_OFFSET);
        Self { track, offset }
    }

    /// The entry square of a player's home track.
    #[must_use]
    pub const fn entry_of(player: PlayerId) -> Self {
        Self::new(Track::home_of(player), ENTRY_OFFSET)
    }

    /// The finish square of a player's home track.
    #[must_use]
    pub const fn finish_of(player: PlayerId) -> Self {
        Self::new(Track::home_of(player), FINISH_OFFSET)
    }

    /// Is this the capture-immune war-track square?
    #[must_use]
    pub const fn is_safe(self) -> bool {
        matches!(self.track, Track::B) && self.offset == SAFE_SQUARE.offset
    }

    /// Does landing here grant an extra turn?
    #[must_use]
    pub const fn is_rosette(self) -> bool {
        match self.track {
            Track::A | Track::C => self.offset == 1 || self.offset == 7,
            Track::B => self.offset == 4,
        }
    }

    /// Is this a home-track square of the given player?
    #[must_use]
    pub const fn is_home_of(self, player: PlayerId) -> bool {
        matches!(
            (self.track, Track::home_of(player)),
            (Track::A, Track::A) | (Track::C, Track::C)
        )
    }

    /// Flat board encoding `1..=24`: `a1..a8 = 1..8`, `b = 9..16`,
    /// `c = 17..24`. Used as a compact action-space tag.
    #[must_use]
    pub const fn board_index(self) -> u8 {
        self.track.rank() * MAX_OFFSET + self.offset
    }
}

impl std::fmt::Display for Square {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.track, self.offset)
    }
}

/// Where a piece is: off the board or on a square.
///
/// An explicit tagged variant so comparisons and pattern matches are
/// exhaustive; there is no sentinel value mixed into square coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Position {
    /// Not yet entered (or conceptually waiting to re-enter).
    OffBoard,
    /// Resting on a board square.
    On(Square),
}

impl Position {
    /// The square this position rests on, if any.
    #[must_use]
    pub const fn square(self) -> Option<Square> {
        match self {
            Position::OffBoard => None,
            Position::On(sq) => Some(sq),
        }
    }

    /// Is this the off-board state?
    #[must_use]
    pub const fn is_off_board(self) -> bool {
        matches!(self, Position::OffBoard)
    }

    /// Is this the finish square of the given player?
    #[must_use]
    pub const fn is_finished(self, player: PlayerId) -> bool {
        match self {
            Position::OffBoard => false,
            Position::On(sq) => sq.is_home_of(player) && sq.offset == FINISH_OFFSET,
        }
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Position::OffBoard => write!(f, "off"),
            Position::On(sq) => write!(f, "{}", sq),
        }
    }
}
