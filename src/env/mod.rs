//! The environment: the single mutating surface over the rules engine.
//!
//! A session owns one `UrEnv`. The control flow per turn is:
//!
//! 1. the driver calls [`UrEnv::roll`] (or supplies its own dice value),
//! 2. [`UrEnv::legal_moves`] enumerates candidates for the active player,
//! 3. the driver picks one and passes it to [`UrEnv::step`], the sole
//!    mutating entry point.
//!
//! An empty candidate set (always the case for a roll of 0) means the turn
//! is forfeit; the driver simply moves on to the other player. Turn order
//! and rosette extra turns are the driver's concern; `extra_turn` on the
//! candidate carries the signal.
//!
//! `step` validates before mutating: a candidate that the current board and
//! dice do not admit fails with `InvalidMove` and the state is untouched.

pub mod observation;

use im::Vector;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::board::{BoardState, Position, Square, Track};
use crate::core::{EnvConfig, GameRng, GameRngState, PlayerId, UrError};
use crate::moves::{generate, MoveCandidate, MoveSet};

pub use observation::{Observation, PlayerObservation};

/// One applied move, kept in the session history for replay and training.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRecord {
    pub player: PlayerId,
    pub piece: u8,
    pub from: Position,
    pub to: Square,
    pub dice: u8,
    pub captures: bool,
    pub extra_turn: bool,
    /// 0-based count of moves applied before this one.
    pub sequence: u32,
}

/// What `step` returns: the RL-style transition tuple.
#[derive(Clone, Debug)]
pub struct StepOutcome {
    /// Canonical observation of the position after the move.
    pub observation: Observation,
    /// Shaped move reward; the terminal win value when `done`.
    pub reward: i64,
    /// True once the mover has retired every piece.
    pub done: bool,
    /// Extra metadata. Currently always empty.
    pub info: FxHashMap<String, i64>,
}

/// A Royal Game of Ur session.
#[derive(Clone, Debug)]
pub struct UrEnv {
    config: EnvConfig,
    board: BoardState,
    rng: GameRng,
    history: Vector<MoveRecord>,
    done: bool,
}

impl UrEnv {
    /// Create an environment with the given configuration and dice seed.
    #[must_use]
    pub fn new(config: EnvConfig, seed: u64) -> Self {
        let board = BoardState::new(config.num_pieces);
        Self {
            config,
            board,
            rng: GameRng::new(seed),
            history: Vector::new(),
            done: false,
        }
    }

    /// Default configuration (7 pieces, tetrahedral dice).
    #[must_use]
    pub fn with_seed(seed: u64) -> Self {
        Self::new(EnvConfig::default(), seed)
    }

    /// Resume from an existing board position.
    ///
    /// The board must agree with the configured piece count and pass the
    /// occupancy invariants.
    pub fn from_board(config: EnvConfig, board: BoardState, seed: u64) -> Result<Self, UrError> {
        if board.num_pieces() != config.num_pieces {
            return Err(UrError::InvalidConfig(format!(
                "board has {} pieces per player, config expects {}",
                board.num_pieces(),
                config.num_pieces
            )));
        }
        board.check_invariants()?;
        Ok(Self {
            config,
            board,
            rng: GameRng::new(seed),
            history: Vector::new(),
            done: false,
        })
    }

    /// The environment configuration.
    #[must_use]
    pub fn config(&self) -> &EnvConfig {
        &self.config
    }

    /// Read-only view of the board.
    #[must_use]
    pub fn board(&self) -> &BoardState {
        &self.board
    }

    /// Moves applied so far this session.
    #[must_use]
    pub fn history(&self) -> &Vector<MoveRecord> {
        &self.history
    }

    /// Has a player won?
    #[must_use]
    pub fn is_done(&self) -> bool {
        self.done
    }

    /// Reinitialize: all pieces off-board, history cleared.
    ///
    /// With `Some(seed)` the dice RNG is reseeded; with `None` it keeps
    /// rolling its current sequence.
    pub fn reset(&mut self, seed: Option<u64>) -> Observation {
        self.board.reset();
        self.history.clear();
        self.done = false;
        if let Some(seed) = seed {
            self.rng = GameRng::new(seed);
        }
        self.observe()
    }

    /// Roll the dice: a uniform draw from the configured face set.
    pub fn roll(&mut self) -> u8 {
        self.config.dice.roll(&mut self.rng)
    }

    /// Snapshot the dice RNG for checkpointing.
    ///
    /// Together with a serialized board and history this makes a session
    /// fully resumable; restoring replays the exact roll sequence.
    #[must_use]
    pub fn rng_state(&self) -> GameRngState {
        self.rng.state()
    }

    /// Restore the dice RNG from a snapshot taken with [`UrEnv::rng_state`].
    pub fn restore_rng(&mut self, state: &GameRngState) {
        self.rng = GameRng::from_state(state);
    }

    /// Enumerate legal moves for a player and dice value.
    ///
    /// The dice value is checked against the configured face set here, at
    /// the boundary; enumeration itself is pure and repeatable.
    pub fn legal_moves(&self, player: PlayerId, dice: u8) -> Result<MoveSet, UrError> {
        self.config.dice.validate(dice)?;
        Ok(generate(&self.board, player, dice))
    }

    /// Canonical observation of the current position.
    #[must_use]
    pub fn observe(&self) -> Observation {
        Observation::from_board(&self.board)
    }

    /// Apply a chosen candidate. The sole mutating entry point.
    ///
    /// The candidate is re-derived from the current board and compared
    /// before anything is written; a stale or fabricated candidate fails
    /// with `InvalidMove` and leaves the state untouched. A capture resets
    /// the opponent piece to its entry square. The win check runs after the
    /// move and overrides the reward with the terminal win value.
    pub fn step(
        &mut self,
        candidate: &MoveCandidate,
        dice: u8,
    ) -> Result<StepOutcome, UrError> {
        if self.done {
            return Err(UrError::invalid_move("game is already over"));
        }
        self.config.dice.validate(dice)?;

        let current = generate(&self.board, candidate.player, dice);
        match current.by_piece(candidate.piece) {
            Some(expected) if expected == candidate => {}
            _ => {
                return Err(UrError::invalid_move(format!(
                    "candidate for piece {} does not match the current position",
                    candidate.piece
                )))
            }
        }

        // capture first so the destination square is free for the mover
        if candidate.captures {
            let (opponent, opp_piece) = self
                .board
                .occupant(candidate.to)
                .filter(|(p, _)| *p == candidate.player.opponent())
                .ok_or_else(|| {
                    UrError::InvariantViolation(format!(
                        "capture flagged but no opponent piece on {}",
                        candidate.to
                    ))
                })?;
            self.board.move_piece(
                opponent,
                opp_piece,
                Position::On(Square::entry_of(opponent)),
            )?;
        }

        self.board
            .move_piece(candidate.player, candidate.piece, Position::On(candidate.to))?;
        self.board.check_invariants()?;

        let mut reward = self.move_reward(candidate);
        self.done = self.board.is_win(candidate.player);
        if self.done {
            reward = self.config.rewards.win_reward;
        }

        self.history.push_back(MoveRecord {
            player: candidate.player,
            piece: candidate.piece,
            from: candidate.from,
            to: candidate.to,
            dice,
            captures: candidate.captures,
            extra_turn: candidate.extra_turn,
            sequence: self.history.len() as u32,
        });

        Ok(StepOutcome {
            observation: self.observe(),
            reward,
            done: self.done,
            info: FxHashMap::default(),
        })
    }

    /// Clone this environment with an independently-seeded RNG.
    ///
    /// Board, config, and history are shared copies; only the dice stream
    /// diverges. Used to branch rollouts in tree search.
    #[must_use]
    pub fn fork(&mut self) -> Self {
        let mut forked = self.clone();
        forked.rng = self.rng.fork();
        forked
    }

    /// Additive shaped reward for a non-terminal move.
    fn move_reward(&self, candidate: &MoveCandidate) -> i64 {
        let rewards = &self.config.rewards;
        let mut reward = 0;
        if candidate.captures {
            reward += rewards.capture_bonus;
        }
        if candidate.to.is_safe() {
            reward += rewards.safe_square_bonus;
        } else if candidate.to.track == Track::B {
            reward += rewards.war_track_penalty;
        }
        reward
    }
}
