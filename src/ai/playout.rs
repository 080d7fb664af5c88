//! Bounded Monte-Carlo scoring for the hard tier.
//!
//! Each candidate line is evaluated by applying it, then finishing the match
//! with greedy-random play for every seat and recording the mover's final
//! share of the boxes. Persistent state makes the per-move snapshots cheap,
//! and the fixed budget keeps a selection well under the interactive bound
//! even on a 10x10 board.

use rustc_hash::FxHashMap;

use crate::core::grid::LineId;
use crate::core::player::PlayerId;
use crate::core::rng::GameRng;
use crate::core::state::GameState;
use crate::engine::{apply_move, legal_moves};

use super::heuristic::{capturing_lines, completions, greedy_random, safe_lines};

/// Candidates evaluated per selection. Larger pools are sampled down.
const MAX_CANDIDATES: usize = 24;

/// Playouts run per candidate.
const PLAYOUTS_PER_CANDIDATE: u32 = 24;

/// Pick the best line by playout scoring. `None` only when `legal` is empty.
///
/// Captures are taken without search (maximizing boxes closed). Otherwise
/// safe lines are scored; when every line gives something away, the full
/// legal set is scored so the least damaging line is found.
pub(crate) fn playout_pick(
    state: &GameState,
    legal: &[LineId],
    rng: &mut GameRng,
) -> Option<LineId> {
    if legal.is_empty() {
        return None;
    }

    let capturing = capturing_lines(state, legal);
    if !capturing.is_empty() {
        return best_capture(state, &capturing, rng);
    }

    let mut pool = safe_lines(state, legal);
    if pool.is_empty() {
        pool = legal.to_vec();
    }
    if pool.len() > MAX_CANDIDATES {
        rng.shuffle(&mut pool);
        pool.truncate(MAX_CANDIDATES);
    }

    let mover = state.active_player().id;
    let mut scores: FxHashMap<LineId, f64> = FxHashMap::default();
    for &line in &pool {
        scores.insert(line, score_candidate(state, line, mover, rng));
    }

    pool.iter().copied().max_by(|a, b| {
        scores[a]
            .partial_cmp(&scores[b])
            .unwrap_or(std::cmp::Ordering::Equal)
    })
}

/// Among capturing lines, take the one closing the most boxes.
fn best_capture(state: &GameState, capturing: &[LineId], rng: &mut GameRng) -> Option<LineId> {
    let most = capturing
        .iter()
        .map(|line| completions(state, *line))
        .max()?;
    let best: Vec<LineId> = capturing
        .iter()
        .copied()
        .filter(|line| completions(state, *line) == most)
        .collect();
    rng.choose(&best).copied()
}

/// Mean share of the boxes the mover ends the match with, after drawing
/// `line`, over greedy-random playouts.
fn score_candidate(state: &GameState, line: LineId, mover: PlayerId, rng: &mut GameRng) -> f64 {
    let total_boxes = (state.size() * state.size()) as f64;
    let mut total_share = 0.0;

    for _ in 0..PLAYOUTS_PER_CANDIDATE {
        let mut playout_rng = rng.fork();
        let (mut sim, _) = apply_move(state, line).expect("playout only draws legal lines");

        while !sim.is_game_over() {
            let remaining = legal_moves(&sim);
            let choice = greedy_random(&sim, &remaining, &mut playout_rng)
                .expect("live match has legal moves");
            sim = apply_move(&sim, choice)
                .expect("playout only draws legal lines")
                .0;
        }

        let mover_boxes = sim.player(mover).map(|p| p.score).unwrap_or(0) as f64;
        total_share += mover_boxes / total_boxes;
    }

    total_share / f64::from(PLAYOUTS_PER_CANDIDATE)
}
