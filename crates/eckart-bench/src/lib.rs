//! Benchmark profiles for the Eckart smearing engine.
//!
//! - [`reference_profile`]: 20 ensembles of 200 particles on a 20³ lattice
//! - [`stress_profile`]: 20 ensembles of 1000 particles on a 40³ lattice
//!
//! Ensembles are drawn with a fixed seed so runs are comparable.

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use eckart_core::ParticleData;
use eckart_density::{DensityOnLattice, DensityParameters, DerivativesMode};
use eckart_lattice::{EdgeBehavior, LatticeUpdate, RectangularLattice};
use eckart_test_utils::{centred_cube, random_ensembles, EnsembleShape};

/// Everything one lattice-update benchmark needs.
pub struct Profile {
    /// Smearing parameters matching the ensemble count.
    pub params: DensityParameters,
    /// The particle ensembles.
    pub ensembles: Vec<Vec<ParticleData>>,
    /// An empty lattice covering the ensembles.
    pub lattice: RectangularLattice<DensityOnLattice>,
}

fn profile(
    particles: usize,
    cells: usize,
    derivatives: DerivativesMode,
    seed: u64,
) -> Profile {
    let n_ens = 20;
    let shape = EnsembleShape {
        particles,
        radius: 5.0,
        ..EnsembleShape::default()
    };
    let params = DensityParameters::builder()
        .ensembles(n_ens as u32)
        .derivatives(derivatives)
        .build()
        .expect("benchmark parameters are valid");
    Profile {
        params,
        ensembles: random_ensembles(&shape, n_ens, seed),
        lattice: centred_cube(
            cells,
            20.0 / cells as f64,
            EdgeBehavior::Clamp,
            LatticeUpdate::EveryTimestep,
        ),
    }
}

/// 20 ensembles × 200 particles on a 20³ lattice of 1 fm cells.
pub fn reference_profile(derivatives: DerivativesMode, seed: u64) -> Profile {
    profile(200, 20, derivatives, seed)
}

/// 20 ensembles × 1000 particles on a 40³ lattice of 0.5 fm cells.
pub fn stress_profile(derivatives: DerivativesMode, seed: u64) -> Profile {
    profile(1000, 40, derivatives, seed)
}
