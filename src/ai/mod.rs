//! Move selection for computer-controlled seats.
//!
//! The engine's contract with any AI is narrow: return one legal line,
//! within a bounded budget, whenever at least one exists. The built-in
//! [`HeuristicSelector`] fulfils it at three strength tiers.

pub mod heuristic;
pub mod playout;
pub mod selector;

pub use selector::{require_move, HeuristicSelector, MoveSelector};
