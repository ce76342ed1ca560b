//! Criterion benchmarks for the three assignment strategies.
//!
//! Uses seeded random colonies: shuffled preference lists and a fixed
//! conflict density, so only colony size varies between runs.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use u_colony::exhaustive::{ExhaustiveConfig, ExhaustiveRunner};
use u_colony::greedy::GreedyRunner;
use u_colony::jealousy::Instance;
use u_colony::local_search::{LocalSearchConfig, LocalSearchRunner};

// ===========================================================================
// Random colony: each pair conflicts with probability 0.3
// ===========================================================================

fn random_instance(n: usize, seed: u64) -> Instance {
    let mut rng = StdRng::seed_from_u64(seed);
    let preferences = (0..n)
        .map(|_| {
            let mut row: Vec<usize> = (0..n).collect();
            row.shuffle(&mut rng);
            row
        })
        .collect();
    let mut conflicts = Vec::new();
    for a in 0..n {
        for b in (a + 1)..n {
            if rng.random_bool(0.3) {
                conflicts.push((a, b));
            }
        }
    }
    Instance::new(n, preferences, &conflicts).expect("generated instance is valid")
}

// ===========================================================================
// Benchmarks
// ===========================================================================

fn bench_greedy(c: &mut Criterion) {
    let mut group = c.benchmark_group("greedy");

    for &n in &[10, 50, 200] {
        let instance = random_instance(n, 42);
        group.bench_with_input(BenchmarkId::from_parameter(n), &instance, |b, inst| {
            b.iter(|| black_box(GreedyRunner::run(black_box(inst))))
        });
    }
    group.finish();
}

fn bench_local_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("local_search");
    group.sample_size(10);

    for &n in &[10, 30, 60] {
        let instance = random_instance(n, 42);
        let config = LocalSearchConfig::default().with_restarts(2).with_seed(42);
        group.bench_with_input(
            BenchmarkId::from_parameter(n),
            &(instance, config),
            |b, (inst, cfg)| {
                b.iter(|| {
                    let result = LocalSearchRunner::run(black_box(inst), black_box(cfg));
                    black_box(result)
                })
            },
        );
    }
    group.finish();
}

fn bench_exhaustive(c: &mut Criterion) {
    let mut group = c.benchmark_group("exhaustive");
    group.sample_size(10);

    for &n in &[6, 8, 9] {
        let instance = random_instance(n, 42);
        let config = ExhaustiveConfig::default().with_short_circuit(false);
        group.bench_with_input(
            BenchmarkId::from_parameter(n),
            &(instance, config),
            |b, (inst, cfg)| {
                b.iter(|| {
                    let result = ExhaustiveRunner::run(black_box(inst), black_box(cfg));
                    black_box(result)
                })
            },
        );
    }
    group.finish();
}

criterion_group!(benches, bench_greedy, bench_local_search, bench_exhaustive);
criterion_main!(benches);
