//! The move-selection contract and the difficulty-tiered selector.
//!
//! Any selector must satisfy the same contract: given a state with at least
//! one legal line, return one of them, within a bounded budget. Strategy is
//! free; legality is not.

use crate::core::grid::LineId;
use crate::core::player::{Difficulty, Player};
use crate::core::rng::GameRng;
use crate::core::state::GameState;
use crate::engine::legal_moves;

use super::heuristic::greedy_random;
use super::playout::playout_pick;

/// Move selection for a computer-controlled seat.
pub trait MoveSelector {
    /// Pick one currently-legal line.
    ///
    /// Conforming implementations never return a drawn or out-of-bounds
    /// line, return `Some` whenever a legal line exists, and complete within
    /// a bounded search budget. `None` means no legal move exists, which a
    /// correct driver only sees on a finished match.
    fn select(&mut self, state: &GameState) -> Option<LineId>;
}

/// The built-in selector, tiered by [`Difficulty`]:
///
/// - easy: uniform random legal line
/// - medium: capture when possible, otherwise a random safe line, falling
///   back to any legal line
/// - hard: medium's capture rule, plus playout scoring among the safe lines
///
/// Deterministic for a given seed.
pub struct HeuristicSelector {
    difficulty: Difficulty,
    rng: GameRng,
}

impl HeuristicSelector {
    #[must_use]
    pub fn new(difficulty: Difficulty, seed: u64) -> Self {
        Self {
            difficulty,
            rng: GameRng::new(seed),
        }
    }

    /// Selector for a roster seat, using its configured difficulty.
    /// Seats without one get the default tier.
    #[must_use]
    pub fn for_seat(player: &Player, seed: u64) -> Self {
        Self::new(player.difficulty.unwrap_or_default(), seed)
    }

    #[must_use]
    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }
}

impl MoveSelector for HeuristicSelector {
    fn select(&mut self, state: &GameState) -> Option<LineId> {
        let legal = legal_moves(state);
        if legal.is_empty() {
            return None;
        }

        match self.difficulty {
            Difficulty::Easy => self.rng.choose(&legal).copied(),
            Difficulty::Medium => greedy_random(state, &legal, &mut self.rng),
            Difficulty::Hard => playout_pick(state, &legal, &mut self.rng),
        }
    }
}

/// Pick a move for the active seat, panicking if the selector and the engine
/// disagree about moves remaining. That disagreement is an
/// internal-consistency defect, not a recoverable error, and must not be
/// swallowed.
pub fn require_move(selector: &mut dyn MoveSelector, state: &GameState) -> LineId {
    match selector.select(state) {
        Some(line) => line,
        None if legal_moves(state).is_empty() => {
            panic!("move requested on a finished match")
        }
        None => panic!("selector returned no move while legal moves remain"),
    }
}
