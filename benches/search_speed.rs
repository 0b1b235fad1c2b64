use std::str::FromStr;

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::{rngs::StdRng, SeedableRng};

use noughty::core::{Board, PlayerMark};
use noughty::engine::{blocking_move, minimax_move};

fn minimax_reply_to_center() {
    // The deepest search the engine ever runs for real: one opposing mark
    // down, eight plies to the bottom.
    let board = Board::from_str("    x    ").unwrap();
    let mut rng = StdRng::seed_from_u64(123);
    let after = minimax_move(&board, PlayerMark::Naught, PlayerMark::Cross, &mut rng);
    black_box(after);
}

fn blocking_reply_to_center() {
    let board = Board::from_str("    x    ").unwrap();
    let mut rng = StdRng::seed_from_u64(123);
    let after = blocking_move(&board, PlayerMark::Cross, PlayerMark::Naught, &mut rng);
    black_box(after);
}

fn criterion_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("search");
    group.sample_size(50);
    group.bench_function("minimax-reply-to-center", |b| {
        b.iter(|| {
            minimax_reply_to_center();
            black_box(())
        })
    });
    group.sample_size(300);
    group.bench_function("blocking-reply-to-center", |b| {
        b.iter(|| {
            blocking_reply_to_center();
            black_box(())
        })
    });
    group.finish();
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
