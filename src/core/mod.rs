//! Core types: grid coordinates, players, match state, RNG.
//!
//! These are the building blocks the rules and AI modules operate on. Nothing
//! here enforces the rules of play; ownership transitions are driven by the
//! `engine` module.

pub mod grid;
pub mod player;
pub mod rng;
pub mod state;

pub use grid::{BoxId, LineId, Orientation, ParseIdError, SUPPORTED_SIZES};
pub use player::{Difficulty, Player, PlayerId, MAX_PLAYERS, MIN_PLAYERS};
pub use rng::{GameRng, GameRngState};
pub use state::{BoxCell, GameOutcome, GameState, Line};
