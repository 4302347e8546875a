//! Benchmarks for seqstats estimators
//!
//! Run with: cargo bench

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};

use seqstats::statistics::{
    DynEstimator, FullEstimator, MaxEstimator, MeanEstimator, MeanVarianceEstimator, Selection,
};

const N: usize = 100_000;

/// Simple xorshift64 stream, roughly centred on 5 with spread 2
fn input(seed: u64) -> Vec<f64> {
    let mut state = seed;
    (0..N)
        .map(|_| {
            state ^= state << 13;
            state ^= state >> 7;
            state ^= state << 17;
            let unit = (state >> 11) as f64 / (1u64 << 53) as f64;
            5.0 + 4.0 * (unit - 0.5)
        })
        .collect()
}

// ============================================================================
// Compile-time selection
// ============================================================================

fn bench_stream_estimator(c: &mut Criterion) {
    let data = input(19_260_817);
    let mut group = c.benchmark_group("stream_estimator");
    group.throughput(Throughput::Elements(N as u64));

    group.bench_function("full", |b| {
        b.iter(|| {
            let mut est = FullEstimator::new();
            for &v in &data {
                est.append(v);
            }
            black_box(est)
        });
    });

    group.bench_function("mean_variance", |b| {
        b.iter(|| {
            let mut est = MeanVarianceEstimator::new();
            for &v in &data {
                est.append(v);
            }
            black_box(est)
        });
    });

    group.bench_function("mean", |b| {
        b.iter(|| {
            let mut est = MeanEstimator::new();
            for &v in &data {
                est.append(v);
            }
            black_box(est)
        });
    });

    group.bench_function("max", |b| {
        b.iter(|| {
            let mut est = MaxEstimator::new();
            for &v in &data {
                est.append(v);
            }
            black_box(est)
        });
    });

    group.finish();
}

// ============================================================================
// Runtime selection
// ============================================================================

fn bench_dyn_estimator(c: &mut Criterion) {
    let data = input(19_260_817);
    let mut group = c.benchmark_group("dyn_estimator");
    group.throughput(Throughput::Elements(N as u64));

    for (name, selection) in [
        ("full", Selection::ALL),
        ("mean", Selection::MEAN),
        ("max", Selection::MAX),
    ] {
        group.bench_function(name, |b| {
            b.iter(|| {
                let mut est = DynEstimator::new(black_box(selection));
                for &v in &data {
                    est.append(v);
                }
                black_box(est)
            });
        });
    }

    group.bench_function("try_append", |b| {
        b.iter(|| {
            let mut est = DynEstimator::new(Selection::ALL);
            for &v in &data {
                let _ = est.try_append(v);
            }
            black_box(est)
        });
    });

    group.finish();
}

criterion_group!(benches, bench_stream_estimator, bench_dyn_estimator);
criterion_main!(benches);
