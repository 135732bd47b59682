//! Benchmarks for the year step.
//!
//! Covers a full reference-length run and a single year on a mature pool.

#![allow(missing_docs)]
#![allow(clippy::unwrap_used)]

use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};
use cursus::{Simulation, SimulationConfig};

fn seeded_config(horizon_years: u32) -> SimulationConfig {
    SimulationConfig {
        horizon_years,
        seed: Some(42),
        ..SimulationConfig::default()
    }
}

fn bench_full_run(c: &mut Criterion) {
    let config = seeded_config(200);

    c.bench_function("run_200_years", |b| {
        b.iter(|| {
            let mut sim = Simulation::new(black_box(config.clone())).unwrap();
            black_box(sim.run())
        });
    });
}

fn bench_single_year(c: &mut Criterion) {
    // Let the candidate pool reach a steady size first.
    let mut mature = Simulation::new(seeded_config(400)).unwrap();
    for _ in 0..150 {
        mature.step();
    }

    c.bench_function("step_mature_pool", |b| {
        b.iter_batched(
            || mature.clone(),
            |mut sim| black_box(sim.step()),
            criterion::BatchSize::SmallInput,
        );
    });
}

criterion_group!(benches, bench_full_run, bench_single_year);
criterion_main!(benches);
