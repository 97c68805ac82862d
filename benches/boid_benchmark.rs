/*
 * Boid Simulation Benchmark
 *
 * Measures the neighbor gather (sequential and parallel) and the full
 * per-frame update for a few flock sizes.
 */

use boid_flock::physics::{gather_all, reset_boids, update_boids};
use boid_flock::{Boid, RngSource, ScreenSize, SimulationParams};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::time::Duration;

const SIZES: [usize; 4] = [50, 100, 250, 500];

fn flock(n: usize) -> (Vec<Boid>, ScreenSize) {
    let screen = ScreenSize::new(800, 600);
    let mut rng = StdRng::seed_from_u64(n as u64);
    let mut boids = Vec::with_capacity(n);
    reset_boids(&mut boids, n, &screen, &mut rng);
    (boids, screen)
}

// Benchmark the neighbor gather pass
fn bench_gather(c: &mut Criterion) {
    let mut group = c.benchmark_group("gather");

    for &n in SIZES.iter() {
        let (boids, _) = flock(n);

        let sequential = SimulationParams { enable_parallel: false, ..SimulationParams::default() };
        group.bench_with_input(BenchmarkId::new("sequential", n), &boids, |b, boids| {
            b.iter(|| black_box(gather_all(boids, &sequential)));
        });

        let parallel = SimulationParams { enable_parallel: true, ..SimulationParams::default() };
        group.bench_with_input(BenchmarkId::new("parallel", n), &boids, |b, boids| {
            b.iter(|| black_box(gather_all(boids, &parallel)));
        });
    }

    group.finish();
}

// Benchmark the overall update loop
fn bench_update_loop(c: &mut Criterion) {
    let mut group = c.benchmark_group("update_loop");

    for &n in SIZES.iter() {
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, &n| {
            let (mut boids, screen) = flock(n);
            let params = SimulationParams::default();
            let mut source = RngSource::new(StdRng::seed_from_u64(7));

            b.iter(|| {
                update_boids(&mut boids, &params, &screen, &mut source);
                black_box(&boids);
            });
        });
    }

    group.finish();
}

// Configure the benchmarks
criterion_group! {
    name = benches;
    config = Criterion::default()
        .sample_size(10)
        .measurement_time(Duration::from_secs(5))
        .warm_up_time(Duration::from_secs(1));
    targets = bench_gather, bench_update_loop
}

criterion_main!(benches);
