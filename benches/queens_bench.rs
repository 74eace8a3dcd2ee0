//! Criterion benchmarks for fitness evaluation and full GA runs.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use queens_ga::board::{Board, EncodingMode};
use queens_ga::ga::{GaConfig, GaRunner};
use queens_ga::random::create_rng;

// ===========================================================================
// Benchmarks
// ===========================================================================

fn bench_attacking_pairs(c: &mut Criterion) {
    let mut group = c.benchmark_group("attacking_pairs");

    for &n in &[8usize, 32, 128] {
        let board = Board::new(n);
        let mut rng = create_rng(42);
        let encoding = board.generate_encoding(EncodingMode::Free, &mut rng);
        group.bench_with_input(BenchmarkId::from_parameter(n), &encoding, |b, enc| {
            b.iter(|| black_box(board.attacking_pairs(black_box(enc))))
        });
    }
    group.finish();
}

fn bench_ga_run(c: &mut Criterion) {
    let mut group = c.benchmark_group("ga_run");
    group.sample_size(10);

    for mode in [EncodingMode::Free, EncodingMode::Permutation] {
        for (n, pop, gen) in [(8usize, 100usize, 50usize), (16, 200, 30)] {
            let config = GaConfig::default()
                .with_board_size(n)
                .with_population_size(pop)
                .with_iterations(gen)
                .with_encoding_mode(mode)
                .with_mutation_rate(0.05)
                .with_seed(42);
            group.bench_with_input(
                BenchmarkId::new(format!("{mode:?}"), format!("n{n}_p{pop}_g{gen}")),
                &config,
                |b, cfg| b.iter(|| black_box(GaRunner::run(black_box(cfg)))),
            );
        }
    }
    group.finish();
}

criterion_group!(benches, bench_attacking_pairs, bench_ga_run);
criterion_main!(benches);
