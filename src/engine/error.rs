//! Error taxonomy for match setup and move application.
//!
//! Two families, surfaced synchronously and never leaving partial state
//! behind:
//! - [`ConfigError`]: rejected `initialize` parameters
//! - [`MoveError`]: rejected `apply_move` preconditions

use thiserror::Error;

use crate::core::grid::LineId;
use crate::core::player::PlayerId;

/// Rejected `initialize` parameters. No state is created.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("grid size must be at least 1 (got {0})")]
    GridTooSmall(usize),

    #[error("roster must have 2 to 4 players (got {0})")]
    RosterSize(usize),

    #[error("duplicate id in roster: {0}")]
    DuplicatePlayerId(PlayerId),
}

/// Rejected `apply_move` preconditions. The input state is left unchanged.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum MoveError {
    #[error("line {0} is outside a {1}x{1} board")]
    OutOfBounds(LineId, usize),

    #[error("line {0} is already drawn")]
    AlreadyDrawn(LineId),

    #[error("the match is already over")]
    MatchOver,
}

/// Top-level engine error.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum EngineError {
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(#[from] ConfigError),

    #[error("illegal move: {0}")]
    IllegalMove(#[from] MoveError),
}
