use criterion::{black_box, criterion_group, criterion_main, Criterion};

use rust_kalah::ai::{choose_move, HeuristicPolicy};
use rust_kalah::core::{Board, GameRng, MatchConfig, Side};
use rust_kalah::game::MatchDriver;
use rust_kalah::rules::GameState;

fn bench_choose_move(c: &mut Criterion) {
    let opening = Board::new();
    let midgame = Board::from_pits([0, 3, 1, 7, 0, 2, 9, 5, 0, 1, 6, 0, 4, 10]);
    let mut rng = GameRng::new(42);

    c.bench_function("choose_move/opening", |b| {
        b.iter(|| choose_move(black_box(&opening), Side::A, &mut rng))
    });
    c.bench_function("choose_move/midgame", |b| {
        b.iter(|| choose_move(black_box(&midgame), Side::B, &mut rng))
    });
}

fn bench_full_match(c: &mut Criterion) {
    let driver = MatchDriver::new(MatchConfig::default());
    let mut seed = 0u64;

    c.bench_function("match/heuristic_vs_heuristic", |b| {
        b.iter(|| {
            seed += 1;
            let mut state = GameState::new(true);
            let mut side_a = HeuristicPolicy::new(seed);
            let mut side_b = HeuristicPolicy::new(seed ^ 0xFF);
            driver.play(&mut state, &mut side_a, &mut side_b)
        })
    });
}

criterion_group!(benches, bench_choose_move, bench_full_match);
criterion_main!(benches);
