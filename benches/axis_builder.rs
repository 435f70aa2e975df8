//! Axis construction benchmarks
//!
//! Toyota Way: Genchi Genbutsu (measure, don't guess)
//!
//! Run with: cargo bench --bench axis_builder

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use trueno_parcoords::axis::AxisBuilder;
use trueno_parcoords::study::TrialRecord;

const SMALL_SIZE: usize = 100; // 100 trials
const LARGE_SIZE: usize = 100_000; // 100K trials

const OPTIMIZERS: [&str; 4] = ["adam", "sgd", "rmsprop", "adagrad"];

/// Trials with one log-scaled, one categorical and one numeric parameter
fn generate_trials(count: usize) -> Vec<TrialRecord> {
    let mut rng = StdRng::seed_from_u64(42);
    (0..count)
        .map(|i| {
            let lr = 10f64.powf(rng.gen_range(-5.0..-1.0));
            let optimizer = OPTIMIZERS[rng.gen_range(0..OPTIMIZERS.len())];
            let dropout: f64 = rng.gen_range(0.0..0.5);
            TrialRecord::builder(i as u64)
                .param("lr", lr)
                .param("optimizer", optimizer)
                .param("dropout", dropout)
                .value(rng.gen())
                .build()
        })
        .collect()
}

fn bench_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("axis_builder");

    for size in [SMALL_SIZE, LARGE_SIZE] {
        let trials = generate_trials(size);
        group.bench_with_input(BenchmarkId::new("all_params", size), &trials, |b, trials| {
            let builder = AxisBuilder::new();
            b.iter(|| builder.build(black_box(trials)));
        });
        group.bench_with_input(BenchmarkId::new("categorical_only", size), &trials, |b, trials| {
            let builder = AxisBuilder::new().params(["optimizer"]);
            b.iter(|| builder.build(black_box(trials)));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_build);
criterion_main!(benches);
