//! Smeared densities and Eckart four-currents of relativistic particle ensembles.
//!
//! Each particle is spread over a Lorentz-contracted Gaussian and weighted
//! by the quantity being counted (baryon number, charge, ...). The
//! resulting four-current is evaluated either at single points
//! ([`current_eckart`]) or on every cell of a lattice ([`LatticeUpdater`]).
//!
//! # Pipeline
//!
//! 1. [`density_factor`]: per-species weight for a [`DensityType`](eckart_core::DensityType)
//! 2. [`unnormalized_smearing_factor`]: Gaussian kernel value and gradient
//! 3. [`EckartAccumulator`]: sign-split sum of the particle currents
//! 4. [`LatticeUpdater`]: per-cell evaluation, optionally with
//!    finite-difference derivatives between two lattice snapshots

#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod eckart;
pub mod error;
pub mod metrics;
pub mod on_lattice;
pub mod params;
pub mod smearing;
pub mod update;
pub mod weight;

pub use eckart::{current_eckart, rho_eckart, EckartAccumulator, EckartCurrent};
pub use error::ConfigError;
pub use metrics::UpdateMetrics;
pub use on_lattice::DensityOnLattice;
pub use params::{DensityParameters, DensityParametersBuilder, DerivativesMode};
pub use smearing::unnormalized_smearing_factor;
pub use update::{
    update_lattice_cells, CurrentLattice, LatticeUpdateOutcome, LatticeUpdater, SkipReason,
    UpdateConfig, UpdateRequest,
};
pub use weight::density_factor;
