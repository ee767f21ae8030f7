//! Benchmarks for energy evaluation: full recompute vs swap delta.
//!
//! Run:
//! - cargo bench

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use ledlayout::core::correlation::CorrelationMatrix;
use ledlayout::core::energy::EnergyFunction;
use ledlayout::core::topology::Topology;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

const GRIDS: [(usize, usize, usize); 3] = [(8, 8, 1), (8, 8, 3), (16, 16, 3)];

fn random_correlations(d: usize, seed: u64) -> CorrelationMatrix {
    let mut rng = rand::rngs::StdRng::seed_from_u64(seed);
    let mut values = vec![0.0f64; d * d];
    for i in 0..d {
        values[i * d + i] = 1.0;
        for j in (i + 1)..d {
            let r = rng.random_range(-1.0..1.0);
            values[i * d + j] = r;
            values[j * d + i] = r;
        }
    }
    CorrelationMatrix::from_values(d, values)
}

fn bench_energy(c: &mut Criterion) {
    let mut group = c.benchmark_group("energy");
    for (h, w, planes) in GRIDS {
        let d = h * w * planes;
        let corr = random_correlations(d, 7);
        let topology = Topology::grid2d(h, w, planes);
        let energy = EnergyFunction::new(&corr, &topology);
        let mut rng = rand::rngs::StdRng::seed_from_u64(11);
        let mut order: Vec<usize> = (0..d).collect();
        order.shuffle(&mut rng);
        let i = rng.random_range(0..d);
        let mut j = rng.random_range(0..d);
        while j == i {
            j = rng.random_range(0..d);
        }

        group.bench_with_input(BenchmarkId::new("full", d), &d, |b, _| {
            b.iter(|| black_box(energy.full(black_box(&order))));
        });
        group.bench_with_input(BenchmarkId::new("swap_delta", d), &d, |b, _| {
            b.iter(|| black_box(energy.swap_delta(black_box(&order), i, j)));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_energy);
criterion_main!(benches);
