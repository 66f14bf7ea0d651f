//! Criterion benchmarks for the tick loop.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use lotsim_bench::{busy_profile, reference_profile};
use lotsim_engine::{NullSink, Simulator};

fn bench_full_day(c: &mut Criterion) {
    c.bench_function("full_day_reference", |b| {
        b.iter(|| {
            let (lot, config) = reference_profile(42);
            let mut sim = Simulator::new(lot, config).unwrap();
            black_box(sim.simulate(&mut NullSink).entries);
        });
    });
}

fn bench_single_tick(c: &mut Criterion) {
    let (lot, config) = busy_profile(42);
    let mut sim = Simulator::new(lot, config.with_steps(u64::MAX)).unwrap();

    // Fill the lot so every tick scans a full grid.
    for _ in 0..5_000 {
        sim.step(&mut NullSink);
    }

    c.bench_function("tick_full_lot", |b| {
        b.iter(|| {
            black_box(sim.step(&mut NullSink));
        });
    });
}

criterion_group!(benches, bench_full_day, bench_single_tick);
criterion_main!(benches);
