//! Criterion micro-benchmarks for point evaluations.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use eckart_core::{DensityType, FourVector, PdgCode, ThreeVector};
use eckart_density::{
    current_eckart, density_factor, unnormalized_smearing_factor, DensityParameters,
};
use eckart_test_utils::{random_ensembles, species, EnsembleShape};

/// Benchmark: kernel value and gradient for one boosted particle.
fn bench_smearing_factor(c: &mut Criterion) {
    let par = DensityParameters::builder().build().unwrap();
    let p = FourVector::new(1.0, 0.0, 0.0, 0.0).lorentz_boost(ThreeVector::new(0.3, -0.2, 0.1));
    let r = ThreeVector::new(0.4, 0.7, -0.3);

    c.bench_function("smearing_factor_with_gradient", |b| {
        b.iter(|| unnormalized_smearing_factor(black_box(r), black_box(p), 1.0, &par, true));
    });
}

/// Benchmark: weight lookup over every density kind.
fn bench_density_factor(c: &mut Criterion) {
    let proton = species(PdgCode::PROTON);

    c.bench_function("density_factor_all_kinds", |b| {
        b.iter(|| {
            for kind in DensityType::ALL {
                black_box(density_factor(proton.as_ref(), black_box(kind)));
            }
        });
    });
}

/// Benchmark: Eckart current at the origin from 20 × 200 particles.
fn bench_current_eckart(c: &mut Criterion) {
    let par = DensityParameters::builder().ensembles(20).build().unwrap();
    let ensembles = random_ensembles(&EnsembleShape::default(), 20, 42);

    c.bench_function("current_eckart_4k_particles", |b| {
        b.iter(|| {
            current_eckart(
                black_box(ThreeVector::ZERO),
                ensembles.iter().flatten(),
                &par,
                DensityType::Baryon,
                true,
                true,
            )
        });
    });
}

criterion_group!(
    benches,
    bench_smearing_factor,
    bench_density_factor,
    bench_current_eckart
);
criterion_main!(benches);
