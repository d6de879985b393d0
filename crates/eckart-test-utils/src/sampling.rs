//! Seeded random ensembles.
//!
//! All samplers use `ChaCha8Rng::seed_from_u64`, so a seed reproduces the
//! same particles on every platform.

use eckart_core::{ParticleData, PdgCode, ThreeVector};
use rand::prelude::*;
use rand_chacha::ChaCha8Rng;

use crate::fixtures::at_rest;

/// `n` particles of `pdg` at rest, uniformly distributed inside a sphere of
/// `radius` around the origin.
pub fn uniform_sphere(pdg: PdgCode, n: usize, radius: f64, seed: u64) -> Vec<ParticleData> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..n)
        .map(|_| {
            let r = point_in_ball(&mut rng) * radius;
            at_rest(pdg, r.to_array())
        })
        .collect()
}

/// Shape of a random ensemble for [`random_ensembles`].
#[derive(Clone, Debug)]
pub struct EnsembleShape {
    /// Species drawn uniformly for each particle.
    pub species: Vec<PdgCode>,
    /// Particles per ensemble.
    pub particles: usize,
    /// Radius of the ball the positions are drawn from.
    pub radius: f64,
    /// Upper bound on the particle speed (units of c, below 1).
    pub max_speed: f64,
}

impl Default for EnsembleShape {
    fn default() -> Self {
        Self {
            species: vec![PdgCode::PROTON, PdgCode::NEUTRON, PdgCode::PI_PLUS, PdgCode::PI_MINUS],
            particles: 200,
            radius: 3.0,
            max_speed: 0.7,
        }
    }
}

/// `count` independent ensembles drawn from `shape`.
///
/// Ensemble `i` is seeded with `seed + i`.
pub fn random_ensembles(shape: &EnsembleShape, count: usize, seed: u64) -> Vec<Vec<ParticleData>> {
    (0..count as u64)
        .map(|i| {
            let mut rng = ChaCha8Rng::seed_from_u64(seed.wrapping_add(i));
            (0..shape.particles)
                .map(|_| {
                    let pdg = shape.species[rng.random_range(0..shape.species.len())];
                    let r = point_in_ball(&mut rng) * shape.radius;
                    let v = point_in_ball(&mut rng) * shape.max_speed;
                    at_rest(pdg, r.to_array()).with_velocity(v)
                })
                .collect()
        })
        .collect()
}

/// Uniform point in the unit ball by rejection from the enclosing cube.
fn point_in_ball(rng: &mut ChaCha8Rng) -> ThreeVector {
    loop {
        let p = ThreeVector::new(
            rng.random_range(-1.0..1.0),
            rng.random_range(-1.0..1.0),
            rng.random_range(-1.0..1.0),
        );
        if p.sqr() <= 1.0 {
            return p;
        }
    }
}
