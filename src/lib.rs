//! # boxlink
//!
//! A Dots and Boxes rules engine with heuristic AI opponents.
//!
//! ## Design Principles
//!
//! 1. **Pure state machine**: [`apply_move`] consumes a state and returns
//!    the next one; rejected moves surface a typed error and leave the input
//!    untouched. The presentation layer dispatches intents and re-renders
//!    from the returned state, never mutating it directly.
//!
//! 2. **N-Player first**: rosters of 2-4 seats in a fixed turn order, any
//!    grid size >= 1.
//!
//! 3. **Cheap snapshots**: persistent data structures make state clones
//!    O(1), so move application copies freely and the hard AI tier can
//!    afford playout scoring.
//!
//! ## Modules
//!
//! - `core`: grid coordinates, players, match state, RNG
//! - `engine`: match setup, move application, terminal detection, errors
//! - `ai`: move selection for computer-controlled seats
//!
//! ## External boundary
//!
//! The engine is the authority on line ownership, box completion, scoring,
//! turn order, and game over. It is not an authority on identity: a hosting
//! collaborator decides which client may submit for the active seat and
//! relays only those calls. States serialize losslessly (serde; see
//! [`GameState::to_bytes`]) for broadcast or resume.

pub mod ai;
pub mod core;
pub mod engine;

// Re-export commonly used types
pub use crate::core::{
    BoxCell, BoxId, Difficulty, GameOutcome, GameRng, GameRngState, GameState, Line, LineId,
    Orientation, ParseIdError, Player, PlayerId, MAX_PLAYERS, MIN_PLAYERS, SUPPORTED_SIZES,
};

pub use crate::engine::{
    apply_move, initialize, legal_moves, reset_game, ConfigError, EngineError, MoveError,
    MoveReport,
};

pub use crate::ai::{require_move, HeuristicSelector, MoveSelector};
