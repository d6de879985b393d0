//! Read-only particle view and its concrete value type.

use std::sync::Arc;

use crate::species::{ParticleType, Species};
use crate::vector::{FourVector, ThreeVector};

/// Read-only access to one particle of an ensemble.
///
/// The smearing engine never mutates particles, so this is all it asks of
/// whatever particle container the caller uses.
pub trait ParticleView {
    /// The species handle type.
    type Species: Species + ?Sized;

    /// Space-time position `(t, x⃗)`.
    fn position(&self) -> FourVector;

    /// Four-momentum `(E, p⃗)`.
    fn momentum(&self) -> FourVector;

    /// Species handle, used for density weights.
    fn species(&self) -> &Self::Species;

    /// Effective (invariant) mass. Defaults to `|p|`.
    fn effective_mass(&self) -> f64 {
        self.momentum().abs()
    }
}

/// A particle snapshot: position, momentum and a shared species handle.
#[derive(Clone, Debug, PartialEq)]
pub struct ParticleData {
    position: FourVector,
    momentum: FourVector,
    species: Arc<ParticleType>,
}

impl ParticleData {
    /// Create a particle from its species, position and momentum.
    pub fn new(species: Arc<ParticleType>, position: FourVector, momentum: FourVector) -> Self {
        Self {
            position,
            momentum,
            species,
        }
    }

    /// A particle at rest at spatial position `r` and time `t`, on its pole mass.
    pub fn at_rest(species: Arc<ParticleType>, t: f64, r: ThreeVector) -> Self {
        let momentum = FourVector::new(species.mass, 0.0, 0.0, 0.0);
        Self::new(species, FourVector::from_parts(t, r), momentum)
    }

    /// Replace the momentum with the on-shell momentum for velocity `v`.
    pub fn with_velocity(mut self, v: ThreeVector) -> Self {
        self.momentum = FourVector::new(self.species.mass, 0.0, 0.0, 0.0).lorentz_boost(-v);
        self
    }
}

impl ParticleView for ParticleData {
    type Species = ParticleType;

    fn position(&self) -> FourVector {
        self.position
    }

    fn momentum(&self) -> FourVector {
        self.momentum
    }

    fn species(&self) -> &ParticleType {
        &self.species
    }
}
