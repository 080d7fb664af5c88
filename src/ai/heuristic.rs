//! Board analysis shared by the selector tiers.
//!
//! The vocabulary of Dots and Boxes tactics at the level this crate plays:
//! a line *captures* when it closes a box now, and it *gives away* a box when
//! it leaves an adjacent box with three sides for the next player to take.

use crate::core::grid::LineId;
use crate::core::rng::GameRng;
use crate::core::state::GameState;

/// Number of boxes drawing this line would close right now: 0, 1, or 2.
///
/// Assumes `line` is undrawn; a drawn line trivially closes nothing.
#[must_use]
pub fn completions(state: &GameState, line: LineId) -> u8 {
    line.adjacent_boxes(state.size())
        .iter()
        .filter(|b| state.box_owner(**b).is_none() && state.sides_drawn(**b) == 3)
        .count() as u8
}

/// Drawing this line would leave an adjacent box with three sides, handing
/// the next player a free capture.
#[must_use]
pub fn gives_away_box(state: &GameState, line: LineId) -> bool {
    line.adjacent_boxes(state.size())
        .iter()
        .any(|b| state.box_owner(*b).is_none() && state.sides_drawn(*b) == 2)
}

/// The subset of `candidates` that capture a box now.
#[must_use]
pub fn capturing_lines(state: &GameState, candidates: &[LineId]) -> Vec<LineId> {
    candidates
        .iter()
        .copied()
        .filter(|line| completions(state, *line) > 0)
        .collect()
}

/// The subset of `candidates` that neither capture nor give a box away.
#[must_use]
pub fn safe_lines(state: &GameState, candidates: &[LineId]) -> Vec<LineId> {
    candidates
        .iter()
        .copied()
        .filter(|line| completions(state, *line) == 0 && !gives_away_box(state, *line))
        .collect()
}

/// The one-ply greedy policy: capture when possible, otherwise a random safe
/// line, falling back to any legal line. `None` only when `legal` is empty.
///
/// This is the medium tier's whole strategy and the rollout policy inside
/// hard-tier playouts.
pub fn greedy_random(state: &GameState, legal: &[LineId], rng: &mut GameRng) -> Option<LineId> {
    let capturing = capturing_lines(state, legal);
    if let Some(line) = rng.choose(&capturing) {
        return Some(*line);
    }

    let safe = safe_lines(state, legal);
    if let Some(line) = rng.choose(&safe) {
        return Some(*line);
    }

    rng.choose(legal).copied()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::grid::BoxId;
    use crate::core::player::{Player, PlayerId};
    use crate::engine::{apply_move, initialize, legal_moves};

    fn roster() -> Vec<Player> {
        vec![
            Player::human(PlayerId::new(0), "P0", "?", "--player-1"),
            Player::human(PlayerId::new(1), "P1", "?", "--player-2"),
        ]
    }

    fn play(state: GameState, lines: &[LineId]) -> GameState {
        lines.iter().fold(state, |s, &line| {
            apply_move(&s, line).expect("scripted move must be legal").0
        })
    }

    #[test]
    fn test_completions_counts_closable_boxes() {
        let state = initialize(2, roster()).unwrap();
        assert_eq!(completions(&state, LineId::horizontal(0, 0)), 0);

        // Three sides of the top-left box drawn: its fourth line captures.
        let state = play(
            state,
            &[
                LineId::horizontal(0, 0),
                LineId::vertical(0, 0),
                LineId::vertical(0, 1),
            ],
        );
        assert_eq!(completions(&state, LineId::horizontal(1, 0)), 1);
        assert_eq!(completions(&state, LineId::horizontal(0, 1)), 0);
    }

    #[test]
    fn test_completions_sees_double_capture() {
        let state = initialize(2, roster()).unwrap();
        let state = play(
            state,
            &[
                LineId::horizontal(0, 0),
                LineId::vertical(0, 0),
                LineId::vertical(0, 1),
                LineId::horizontal(2, 0),
                LineId::vertical(1, 0),
                LineId::vertical(1, 1),
            ],
        );

        assert_eq!(completions(&state, LineId::horizontal(1, 0)), 2);
    }

    #[test]
    fn test_gives_away_detection() {
        let state = initialize(3, roster()).unwrap();
        let state = play(state, &[LineId::horizontal(0, 0), LineId::vertical(0, 0)]);

        // Top-left box has two sides: its remaining lines give it away.
        assert_eq!(state.sides_drawn(BoxId::new(0, 0)), 2);
        assert!(gives_away_box(&state, LineId::horizontal(1, 0)));
        assert!(gives_away_box(&state, LineId::vertical(0, 1)));

        // A line far from it is safe.
        assert!(!gives_away_box(&state, LineId::horizontal(3, 2)));
    }

    #[test]
    fn test_safe_lines_exclude_captures_and_giveaways() {
        let state = initialize(2, roster()).unwrap();
        let state = play(
            state,
            &[
                LineId::horizontal(0, 0),
                LineId::vertical(0, 0),
                LineId::vertical(0, 1),
            ],
        );

        let legal = legal_moves(&state);
        let capturing = capturing_lines(&state, &legal);
        let safe = safe_lines(&state, &legal);

        assert_eq!(capturing, vec![LineId::horizontal(1, 0)]);
        assert!(!safe.contains(&LineId::horizontal(1, 0)));
        // Everything classified either captures, gives away, or is safe.
        for line in legal {
            let captures = completions(&state, line) > 0;
            let unsafe_line = gives_away_box(&state, line);
            assert_eq!(safe.contains(&line), !captures && !unsafe_line);
        }
    }
}
