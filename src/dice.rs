//! Dice: a uniform draw from a configured finite face set.
//!
//! The historical game uses four tetrahedral dice, modeled here as a uniform
//! draw over `{0, 1, 2, 3, 4}`. A simplified `{1, 2}` profile is also
//! provided. The face set is a configuration choice, not part of the rules:
//! move logic accepts any value and dice validation happens only at this
//! boundary.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{GameRng, UrError};

/// A finite set of dice faces drawn from uniformly.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiceProfile {
    faces: SmallVec<[u8; 8]>,
}

impl DiceProfile {
    /// Four-tetrahedral-dice profile: faces `0..=4`.
    #[must_use]
    pub fn tetra() -> Self {
        Self {
            faces: SmallVec::from_slice(&[0, 1, 2, 3, 4]),
        }
    }

    /// Simplified two-face profile: faces `{1, 2}`.
    #[must_use]
    pub fn binary() -> Self {
        Self {
            faces: SmallVec::from_slice(&[1, 2]),
        }
    }

    /// Create a profile from an explicit face set.
    ///
    /// Fails with `InvalidConfig` if the set is empty.
    pub fn from_faces(faces: &[u8]) -> Result<Self, UrError> {
        if faces.is_empty() {
            return Err(UrError::InvalidConfig("dice face set is empty".into()));
        }
        Ok(Self {
            faces: SmallVec::from_slice(faces),
        })
    }

    /// The configured faces.
    #[must_use]
    pub fn faces(&self) -> &[u8] {
        &self.faces
    }

    /// Roll: draw one face uniformly.
    pub fn roll(&self, rng: &mut GameRng) -> u8 {
        // from_faces and the presets guarantee a non-empty set
        *rng.choose(&self.faces).unwrap_or(&0)
    }

    /// Check a dice value against the face set.
    ///
    /// This is the boundary where out-of-range dice are rejected; move
    /// logic itself never validates dice.
    pub fn validate(&self, value: u8) -> Result<(), UrError> {
        if self.faces.contains(&value) {
            Ok(())
        } else {
            Err(UrError::InvalidDiceValue { value })
        }
    }
}

impl Default for DiceProfile {
    fn default() -> Self {
        Self::tetra()
    }
}
