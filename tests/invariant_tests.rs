//! Property tests: the engine's invariants hold at every point of every
//! reachable game.

use boxlink::{
    apply_move, initialize, legal_moves, EngineError, GameOutcome, GameRng, GameState, LineId,
    MoveError, Player, PlayerId,
};
use proptest::prelude::*;

fn roster(count: usize) -> Vec<Player> {
    (0..count)
        .map(|i| {
            Player::human(
                PlayerId::new(i as u8),
                format!("P{i}"),
                "?",
                format!("--player-{}", i + 1),
            )
        })
        .collect()
}

/// Check the cross-cutting invariants between one state and its successor.
fn check_step(before: &GameState, after: &GameState, report: &boxlink::MoveReport) {
    // Scores always account for exactly the owned boxes.
    assert_eq!(after.score_total() as usize, after.owned_box_count());

    // Ownership is monotonic: nothing owned ever reverts or changes hands.
    for (id, line) in before.lines() {
        if let Some(owner) = line.owner {
            assert_eq!(after.line_owner(*id), Some(owner));
        }
    }
    for (id, cell) in before.boxes() {
        if let Some(owner) = cell.owner {
            assert_eq!(after.box_owner(*id), Some(owner));
        }
    }

    // Completed boxes belong to the mover.
    for box_id in &report.completed {
        assert_eq!(after.box_owner(*box_id), Some(report.player));
    }

    // Turn rule: keep the seat on a capture, advance with wrap otherwise.
    assert_eq!(report.extra_turn, !report.completed.is_empty());
    if report.extra_turn {
        assert_eq!(after.active_player_index(), before.active_player_index());
    } else {
        assert_eq!(
            after.active_player_index(),
            (before.active_player_index() + 1) % before.players().len()
        );
    }

    // A box is owned iff its four sides are drawn (reachable states only;
    // a fourth side is always drawn by the claiming move).
    for (id, cell) in after.boxes() {
        assert_eq!(cell.owner.is_some(), after.sides_drawn(*id) == 4);
    }

    // Game over exactly when every line is drawn; monotonic.
    assert_eq!(after.is_game_over(), after.all_lines_drawn());
    assert!(!before.is_game_over() || after.is_game_over());
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(48))]

    #[test]
    fn random_games_preserve_invariants(
        size in 1usize..=3,
        player_count in 2usize..=4,
        seed in any::<u64>(),
    ) {
        let mut rng = GameRng::new(seed);
        let mut state = initialize(size, roster(player_count)).unwrap();

        prop_assert_eq!(state.lines().len(), 2 * size * (size + 1));
        prop_assert_eq!(state.boxes().len(), size * size);
        prop_assert_eq!(state.score_total(), 0);

        let mut moves = 0;
        while !state.is_game_over() {
            let legal = legal_moves(&state);
            prop_assert!(!legal.is_empty());

            let line = *rng.choose(&legal).unwrap();
            let (next, report) = apply_move(&state, line).unwrap();
            check_step(&state, &next, &report);

            state = next;
            moves += 1;
            prop_assert!(moves <= 2 * size * (size + 1));
        }

        // Terminal state: every line drawn, every box owned, outcome decided.
        prop_assert_eq!(moves, 2 * size * (size + 1));
        prop_assert_eq!(state.owned_box_count(), size * size);
        prop_assert!(legal_moves(&state).is_empty());

        let top = state.players().iter().map(|p| p.score).max().unwrap();
        let leaders: Vec<PlayerId> = state
            .players()
            .iter()
            .filter(|p| p.score == top)
            .map(|p| p.id)
            .collect();
        match state.outcome().unwrap() {
            GameOutcome::Winner(id) => prop_assert_eq!(&leaders, &vec![*id]),
            GameOutcome::Tie(tied) => {
                prop_assert!(leaders.len() >= 2);
                prop_assert_eq!(tied, &leaders);
            }
        }
    }

    #[test]
    fn rejected_moves_leave_state_unchanged(
        size in 1usize..=3,
        prefix_len in 0usize..8,
        seed in any::<u64>(),
    ) {
        let mut rng = GameRng::new(seed);
        let mut state = initialize(size, roster(2)).unwrap();

        for _ in 0..prefix_len {
            if state.is_game_over() {
                break;
            }
            let legal = legal_moves(&state);
            let line = *rng.choose(&legal).unwrap();
            state = apply_move(&state, line).unwrap().0;
        }

        let snapshot = state.clone();

        // Redrawing any drawn line is rejected without effect.
        for line in LineId::all(size) {
            if state.line_owner(line).is_some() {
                let err = apply_move(&state, line).unwrap_err();
                if state.is_game_over() {
                    prop_assert_eq!(err, EngineError::IllegalMove(MoveError::MatchOver));
                } else {
                    prop_assert_eq!(
                        err,
                        EngineError::IllegalMove(MoveError::AlreadyDrawn(line))
                    );
                }
            }
        }

        // Out-of-bounds is rejected without effect, game over or not.
        let outside = LineId::horizontal(0, size as u16);
        prop_assert!(apply_move(&state, outside).is_err());

        prop_assert_eq!(&state, &snapshot);
    }
}
