//! Metrics Benchmarks
//!
//! Benchmarks for the regression and classification scores over flat slices
//! and single-column tables.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use mlscore::{accuracy_score, mse, rsq, DataFrame};
use std::hint::black_box;

/// Create a synthetic (predicted, known) pair
fn create_regression_pair(n_samples: usize) -> (Vec<f64>, Vec<f64>) {
    // Simple LCG random generator for reproducibility
    let mut rng_state: u64 = 42;
    let mut rand_f64 = || -> f64 {
        rng_state = rng_state.wrapping_mul(6364136223846793005).wrapping_add(1);
        (rng_state >> 33) as f64 / (u32::MAX as f64)
    };

    let known: Vec<f64> = (0..n_samples).map(|i| i as f64 * 0.5).collect();
    let predicted: Vec<f64> = known.iter().map(|k| k + rand_f64() - 0.5).collect();
    (predicted, known)
}

fn bench_regression(c: &mut Criterion) {
    let mut group = c.benchmark_group("regression");

    for size in [1_000usize, 10_000, 100_000] {
        let (predicted, known) = create_regression_pair(size);
        let mut table = DataFrame::new();
        table.add_column("y", known.clone()).unwrap();

        group.bench_with_input(BenchmarkId::new("mse_slice", size), &size, |b, _| {
            b.iter(|| mse(black_box(&predicted), black_box(&known)).unwrap())
        });
        group.bench_with_input(BenchmarkId::new("mse_table", size), &size, |b, _| {
            b.iter(|| mse(black_box(&predicted), black_box(&table)).unwrap())
        });
        group.bench_with_input(BenchmarkId::new("rsq_slice", size), &size, |b, _| {
            b.iter(|| rsq(black_box(&predicted), black_box(&known)).unwrap())
        });
    }

    group.finish();
}

fn bench_accuracy(c: &mut Criterion) {
    let y_pred: Vec<i64> = (0..100_000).map(|i| i % 3).collect();
    let y_actual: Vec<i64> = (0..100_000).map(|i| i % 2).collect();

    c.bench_function("accuracy_score_100k", |b| {
        b.iter(|| accuracy_score(black_box(&y_pred), black_box(&y_actual)).unwrap())
    });
}

criterion_group!(benches, bench_regression, bench_accuracy);
criterion_main!(benches);
