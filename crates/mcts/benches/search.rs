//! MCTS benchmarks for performance profiling.
//!
//! Run with: `cargo bench -p uct-mcts`
//!
//! These benchmarks measure:
//! - Full search with varying iteration budgets
//! - Eager versus lazy expansion
//! - Search from opening, midgame and near-terminal positions
//! - A single random playout

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use uct_core::Game;
use uct_mcts::{
    games::{TicTacToe, TicTacToeMove, TicTacToeState},
    Expansion, Mcts, MctsConfig, RandomPlayout, Simulator,
};

fn position(cells: &[u8]) -> TicTacToeState {
    let game = TicTacToe;
    cells.iter().fold(game.initial_state(), |state, &cell| {
        game.apply(&state, TicTacToeMove(cell)).unwrap()
    })
}

// =============================================================================
// Full Search Benchmarks
// =============================================================================

fn bench_search_iterations(c: &mut Criterion) {
    let mut group = c.benchmark_group("search_iterations");
    let game = TicTacToe;
    let state = game.initial_state();

    for iterations in [100, 400, 1600] {
        group.throughput(Throughput::Elements(iterations as u64));
        group.bench_with_input(BenchmarkId::new("tictactoe", iterations), &iterations, |b, &n| {
            b.iter(|| {
                let mut mcts = Mcts::new(
                    MctsConfig::with_iterations(n),
                    RandomPlayout::new(),
                    ChaCha8Rng::seed_from_u64(42),
                );
                black_box(mcts.search(&game, &state).unwrap())
            });
        });
    }

    group.finish();
}

fn bench_expansion_discipline(c: &mut Criterion) {
    let mut group = c.benchmark_group("expansion_discipline");
    let game = TicTacToe;
    let state = game.initial_state();

    for (name, expansion) in [("eager", Expansion::Eager), ("lazy", Expansion::Lazy)] {
        group.bench_function(name, |b| {
            let config = MctsConfig::with_iterations(400).with_expansion(expansion);
            b.iter(|| {
                let mut mcts = Mcts::new(config.clone(), RandomPlayout::new(), ChaCha8Rng::seed_from_u64(7));
                black_box(mcts.search(&game, &state).unwrap())
            });
        });
    }

    group.finish();
}

fn bench_search_positions(c: &mut Criterion) {
    let mut group = c.benchmark_group("search_positions");
    let game = TicTacToe;

    let positions = [
        ("opening", position(&[])),
        ("midgame", position(&[4, 0, 8])),
        ("near_terminal", position(&[0, 3, 1, 4])),
    ];

    for (name, state) in &positions {
        group.bench_with_input(BenchmarkId::from_parameter(name), state, |b, state| {
            b.iter(|| {
                let mut mcts = Mcts::new(
                    MctsConfig::with_iterations(400),
                    RandomPlayout::new(),
                    ChaCha8Rng::seed_from_u64(42),
                );
                black_box(mcts.search(&game, state).unwrap())
            });
        });
    }

    group.finish();
}

// =============================================================================
// Phase Benchmarks
// =============================================================================

fn bench_random_playout(c: &mut Criterion) {
    let game = TicTacToe;
    let state = game.initial_state();
    let playout = RandomPlayout::new();
    let mut rng = ChaCha8Rng::seed_from_u64(1);

    c.bench_function("random_playout_tictactoe", |b| {
        b.iter(|| black_box(playout.simulate(&game, &state, &mut rng).unwrap()));
    });
}

criterion_group!(
    benches,
    bench_search_iterations,
    bench_expansion_discipline,
    bench_search_positions,
    bench_random_playout,
);
criterion_main!(benches);
