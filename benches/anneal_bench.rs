//! Criterion benchmarks for the annealing loop.
//!
//! The number of objective evaluations per run is roughly `t0 / (1 - a)`,
//! so the groups scale the initial temperature.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use u_anneal::sa::{Annealer, FnObjective, SaConfig};

fn cubic(x: f64) -> f64 {
    -2.0 * x * x * x + 8.0 * x + 3.0
}

fn bench_cubic_minimize(c: &mut Criterion) {
    let mut group = c.benchmark_group("cubic_minimize");
    group.sample_size(10);

    let objective = FnObjective::minimize(cubic);
    for &t0 in &[10.0, 100.0, 1000.0] {
        let config = SaConfig::default()
            .with_initial_temperature(t0)
            .with_cooling_rate(0.99)
            .with_bounds(-2.0, 2.0)
            .with_seed(42);
        group.bench_with_input(
            BenchmarkId::from_parameter(t0),
            &config,
            |b, config| {
                b.iter(|| {
                    let mut annealer = Annealer::new(1000);
                    let result = annealer.run(black_box(&objective), black_box(config));
                    black_box(result)
                })
            },
        );
    }
    group.finish();
}

fn bench_rastrigin_1d(c: &mut Criterion) {
    let mut group = c.benchmark_group("rastrigin_1d");
    group.sample_size(10);

    let objective = FnObjective::minimize(|x: f64| {
        10.0 + x * x - 10.0 * (2.0 * std::f64::consts::PI * x).cos()
    });
    for &niter in &[100usize, 500, 1000] {
        let config = SaConfig::default()
            .with_initial_temperature(50.0)
            .with_cooling_rate(0.98)
            .with_bounds(-5.12, 5.12)
            .with_seed(42);
        group.bench_with_input(BenchmarkId::from_parameter(niter), &niter, |b, &n| {
            b.iter(|| {
                let mut annealer = Annealer::new(n);
                let result = annealer.run(black_box(&objective), black_box(&config));
                black_box(result)
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_cubic_minimize, bench_rastrigin_1d);
criterion_main!(benches);
