//! The rules state machine: match setup, move application, terminal
//! detection.
//!
//! `apply_move` is pure: it takes a state by reference and returns the next
//! state (persistent collections make the copy cheap), or an error leaving
//! the input untouched. A single external driver serializes calls; the
//! engine holds no locks and performs no I/O.
//!
//! Effect order for an accepted move:
//! 1. the line becomes owned by the active player
//! 2. each adjacent box whose four sides are now drawn is claimed by the
//!    mover (a single move can close zero, one, or two boxes)
//! 3. the mover keeps the turn if anything was closed, otherwise the next
//!    seat in roster order becomes active, wrapping around
//! 4. once every line is drawn the match ends and the outcome is decided:
//!    strictly highest score wins, a shared top score is a tie
//! 5. a description of the move is appended to the history log

use smallvec::SmallVec;

use crate::core::grid::{BoxId, LineId};
use crate::core::player::{Player, PlayerId, MAX_PLAYERS, MIN_PLAYERS};
use crate::core::state::{GameOutcome, GameState};

use super::error::{ConfigError, EngineError, MoveError};

/// What one accepted move did to the board.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MoveReport {
    /// The seat that moved.
    pub player: PlayerId,
    /// The line drawn.
    pub line: LineId,
    /// Boxes closed by this move: zero, one, or two entries.
    pub completed: SmallVec<[BoxId; 2]>,
    /// The mover keeps the turn after closing at least one box. Still set on
    /// the final move of a match, where it is moot: no move can follow.
    pub extra_turn: bool,
}

/// Set up a fresh match.
///
/// Builds `2 * size * (size + 1)` undrawn lines and `size * size` unclaimed
/// boxes, seat 0 active, history empty. Scores in the roster are zeroed.
///
/// # Errors
///
/// [`ConfigError`] for `size < 1`, a roster outside 2-4 seats, or duplicate
/// player ids. No state is created on error.
pub fn initialize(size: usize, players: Vec<Player>) -> Result<GameState, EngineError> {
    if size < 1 {
        return Err(ConfigError::GridTooSmall(size).into());
    }
    if !(MIN_PLAYERS..=MAX_PLAYERS).contains(&players.len()) {
        return Err(ConfigError::RosterSize(players.len()).into());
    }
    for (i, player) in players.iter().enumerate() {
        if players[..i].iter().any(|other| other.id == player.id) {
            return Err(ConfigError::DuplicatePlayerId(player.id).into());
        }
    }

    Ok(GameState::new(size, players))
}

/// Discard a match and start over. A full replacement, not a mutation:
/// equivalent to [`initialize`] with the same arguments.
pub fn reset_game(size: usize, players: Vec<Player>) -> Result<GameState, EngineError> {
    initialize(size, players)
}

/// Every line the active player may draw, in the stable enumeration order of
/// [`LineId::all`]. Empty exactly when the match is over.
#[must_use]
pub fn legal_moves(state: &GameState) -> Vec<LineId> {
    if state.is_game_over() {
        return Vec::new();
    }
    state.undrawn_lines().collect()
}

/// Apply one move for the active player.
///
/// Returns the next state and a [`MoveReport`]; the input state is never
/// modified. The engine is the authority on line ownership and turn order;
/// deciding *which* client may submit for the active seat is the hosting
/// collaborator's job.
///
/// # Errors
///
/// [`MoveError`] if the match is over, the line is out of bounds, or the
/// line is already drawn. Nothing is partially applied.
pub fn apply_move(
    state: &GameState,
    line: LineId,
) -> Result<(GameState, MoveReport), EngineError> {
    if state.is_game_over() {
        return Err(MoveError::MatchOver.into());
    }
    if !line.in_bounds(state.size()) {
        return Err(MoveError::OutOfBounds(line, state.size()).into());
    }
    if state.line_owner(line).is_some() {
        return Err(MoveError::AlreadyDrawn(line).into());
    }

    let mover = state.active_player().id;
    let mover_name = state.active_player().name.clone();

    let mut next = state.clone();
    next.draw_line(line, mover);

    // A line borders at most two boxes; both can close on the same move.
    let mut completed: SmallVec<[BoxId; 2]> = SmallVec::new();
    for box_id in line.adjacent_boxes(next.size()) {
        if next.box_owner(box_id).is_none() && next.sides_drawn(box_id) == 4 {
            next.claim_box(box_id, mover);
            completed.push(box_id);
        }
    }

    let extra_turn = !completed.is_empty();
    if !extra_turn {
        next.advance_turn();
    }

    next.push_history(format!("{mover_name} drew {line}"));
    match completed.len() {
        1 => next.push_history(format!("{mover_name} closed a box")),
        2 => next.push_history(format!("{mover_name} closed two boxes at once")),
        _ => {}
    }

    if next.all_lines_drawn() {
        let outcome = decide_outcome(next.players());
        match &outcome {
            GameOutcome::Winner(id) => {
                let (name, score) = next
                    .player(*id)
                    .map(|p| (p.name.clone(), p.score))
                    .unwrap_or_default();
                next.push_history(format!("{name} wins with {score} boxes"));
            }
            GameOutcome::Tie(_) => {
                next.push_history("The match ends in a tie".to_string());
            }
        }
        next.finish(outcome);
    }

    Ok((
        next,
        MoveReport {
            player: mover,
            line,
            completed,
            extra_turn,
        },
    ))
}

/// Decide the outcome of a finished match: the strictly highest score wins;
/// a shared top score is a tie listing the tied seats.
fn decide_outcome(players: &[Player]) -> GameOutcome {
    let top = players.iter().map(|p| p.score).max().unwrap_or(0);
    let leaders: Vec<PlayerId> = players
        .iter()
        .filter(|p| p.score == top)
        .map(|p| p.id)
        .collect();

    if leaders.len() == 1 {
        GameOutcome::Winner(leaders[0])
    } else {
        GameOutcome::Tie(leaders)
    }
}
