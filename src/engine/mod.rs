//! The rules state machine and its error taxonomy.
//!
//! This is the engine's whole public contract: [`initialize`] a match,
//! [`apply_move`] for the active seat, [`legal_moves`] for drivers and
//! selectors, [`reset_game`] to start over.

pub mod error;
pub mod rules;

pub use error::{ConfigError, EngineError, MoveError};
pub use rules::{apply_move, initialize, legal_moves, reset_game, MoveReport};
