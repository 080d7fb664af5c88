//! Benchmarks for move application and AI selection.
//!
//! The interesting numbers: how long a full greedy-random game takes (the
//! unit of work inside hard-tier scoring), and how long one hard selection
//! takes on the largest supported board.

use boxlink::{
    apply_move, initialize, legal_moves, Difficulty, GameRng, GameState, HeuristicSelector,
    MoveSelector, Player, PlayerId,
};
use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;

fn roster() -> Vec<Player> {
    vec![
        Player::bot(PlayerId::new(0), "A", "?", "--player-1", Difficulty::Medium),
        Player::bot(PlayerId::new(1), "B", "?", "--player-2", Difficulty::Medium),
    ]
}

fn play_out(mut state: GameState, rng: &mut GameRng) -> GameState {
    while !state.is_game_over() {
        let legal = legal_moves(&state);
        let line = *rng.choose(&legal).expect("live match has legal moves");
        state = apply_move(&state, line).expect("chosen move is legal").0;
    }
    state
}

fn bench_apply_move(c: &mut Criterion) {
    let state = initialize(10, roster()).unwrap();
    let line = legal_moves(&state)[0];

    c.bench_function("engine/apply_move_10x10", |b| {
        b.iter(|| black_box(apply_move(black_box(&state), line).unwrap()))
    });
}

fn bench_full_game(c: &mut Criterion) {
    for size in [5usize, 10] {
        c.bench_function(&format!("engine/random_game_{size}x{size}"), |b| {
            let mut rng = GameRng::new(1337);
            b.iter(|| {
                let state = initialize(size, roster()).unwrap();
                black_box(play_out(state, &mut rng))
            })
        });
    }
}

fn bench_hard_selection(c: &mut Criterion) {
    for size in [5usize, 10] {
        c.bench_function(&format!("ai/hard_first_move_{size}x{size}"), |b| {
            let state = initialize(size, roster()).unwrap();
            b.iter(|| {
                let mut selector = HeuristicSelector::new(Difficulty::Hard, 42);
                black_box(selector.select(black_box(&state)))
            })
        });
    }
}

criterion_group!(benches, bench_apply_move, bench_full_game, bench_hard_selection);
criterion_main!(benches);
