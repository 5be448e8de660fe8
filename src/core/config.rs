//! Environment configuration.
//!
//! Reward shaping constants are externalized here so a reward policy can be
//! swapped without touching rules logic. Defaults match the tuned values of
//! the training environment this engine replaces.

use serde::{Deserialize, Serialize};

use crate::dice::DiceProfile;

/// Default number of pieces per player.
pub const DEFAULT_NUM_PIECES: usize = 7;

/// Reward shaping constants.
///
/// All rewards are `i64`. The per-move reward is additive: a capture that
/// lands on a generic war-track square earns `capture_bonus +
/// war_track_penalty`. A win overrides the move total with `win_reward`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RewardConfig {
    /// Bonus for capturing an opponent piece.
    pub capture_bonus: i64,
    /// Bonus for landing exactly on the contested safe square.
    pub safe_square_bonus: i64,
    /// Penalty for landing on any other war-track square.
    pub war_track_penalty: i64,
    /// Terminal reward for winning the game.
    pub win_reward: i64,
}

impl Default for RewardConfig {
    fn default() -> Self {
        Self {
            capture_bonus: 10,
            safe_square_bonus: 20,
            war_track_penalty: -1,
            win_reward: 100,
        }
    }
}

/// Complete environment configuration.
///
/// ## Example
///
/// ```
/// use ur_engine::core::EnvConfig;
/// use ur_engine::dice::DiceProfile;
///
/// let config = EnvConfig::new()
///     .with_num_pieces(5)
///     .with_dice(DiceProfile::binary());
/// assert_eq!(config.num_pieces, 5);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnvConfig {
    /// Pieces per player (default 7).
    pub num_pieces: usize,
    /// Dice face set to draw from.
    pub dice: DiceProfile,
    /// Reward shaping constants.
    pub rewards: RewardConfig,
}

impl Default for EnvConfig {
    fn default() -> Self {
        Self {
            num_pieces: DEFAULT_NUM_PIECES,
            dice: DiceProfile::tetra(),
            rewards: RewardConfig::default(),
        }
    }
}

impl EnvConfig {
    /// Create a configuration with defaults.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the number of pieces per player.
    #[must_use]
    pub fn with_num_pieces(mut self, num_pieces: usize) -> Self {
        assert!(num_pieces > 0, "Must have at least 1 piece");
        self.num_pieces = num_pieces;
        self
    }

    /// Set the dice profile.
    #[must_use]
    pub fn with_dice(mut self, dice: DiceProfile) -> Self {
        self.dice = dice;
        self
    }

    /// Set the reward constants.
    #[must_use]
    pub fn with_rewards(mut self, rewards: RewardConfig) -> Self {
        self.rewards = rewards;
        self
    }
}
