//! Eckart: relativistic particle-to-field smearing.
//!
//! This is the top-level facade crate that re-exports the public API from all
//! Eckart sub-crates. For most users, adding `eckart` as a single dependency
//! is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use eckart::prelude::*;
//!
//! let types = ParticleTypeList::standard();
//! let proton = types.find(PdgCode::PROTON).unwrap().clone();
//! let ensembles = vec![vec![
//!     ParticleData::at_rest(proton.clone(), 0.0, ThreeVector::new(0.5, 0.0, 0.0)),
//!     ParticleData::at_rest(proton, 0.0, ThreeVector::new(-0.5, 0.0, 0.0))
//!         .with_velocity(ThreeVector::new(0.0, 0.3, 0.0)),
//! ]];
//!
//! let par = DensityParameters::builder()
//!     .gaussian_sigma(1.0)
//!     .cutoff_in_sigma(4.0)
//!     .derivatives(DerivativesMode::FiniteDifference)
//!     .build()
//!     .unwrap();
//!
//! // Point evaluation.
//! let j = current_eckart(ThreeVector::ZERO, &ensembles[0], &par, DensityType::Baryon, true, true);
//! assert!(j.rho > 0.0);
//!
//! // Lattice of 10³ cells of 1 fm around the origin.
//! let mut lattice: RectangularLattice<DensityOnLattice> = RectangularLattice::new(
//!     [10.0; 3],
//!     [10; 3],
//!     [-5.0; 3],
//!     EdgeBehavior::Clamp,
//!     LatticeUpdate::EveryTimestep,
//! )
//! .unwrap();
//! let mut updater = LatticeUpdater::new(UpdateConfig::default());
//! let request = UpdateRequest {
//!     trigger: LatticeUpdate::EveryTimestep,
//!     density_type: DensityType::Baryon,
//!     time_step: 0.1,
//!     compute_gradient: true,
//! };
//! let outcome = updater.update(Some(&mut lattice), &request, &par, &ensembles);
//! assert!(outcome.is_updated());
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate. Use them for types not in the prelude:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `eckart-core` | Vectors, PDG codes, species, particles, density kinds |
//! | [`lattice`] | `eckart-lattice` | Rectangular lattice and four-gradient operator |
//! | [`density`] | `eckart-density` | Smearing kernel, Eckart currents, lattice updates |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core value types and traits (`eckart-core`).
///
/// Contains [`types::FourVector`], the [`types::Species`] and
/// [`types::ParticleView`] traits and the species registry.
pub use eckart_core as types;

/// Lattice storage (`eckart-lattice`).
pub use eckart_lattice as lattice;

/// Smearing and current evaluation (`eckart-density`).
///
/// Point evaluations through [`density::current_eckart`], lattice refreshes
/// through [`density::LatticeUpdater`].
pub use eckart_density as density;

/// Common imports for typical Eckart usage.
///
/// ```rust
/// use eckart::prelude::*;
/// ```
pub mod prelude {
    // Core types and traits
    pub use eckart_core::{
        DensityType, FourVector, ParticleData, ParticleType, ParticleTypeList, ParticleView,
        PdgCode, Species, ThreeVector,
    };

    // Lattice
    pub use eckart_lattice::{EdgeBehavior, FourGradient, LatticeUpdate, RectangularLattice};

    // Density
    pub use eckart_density::{
        current_eckart, density_factor, rho_eckart, CurrentLattice, DensityOnLattice,
        DensityParameters, DerivativesMode, EckartCurrent, LatticeUpdateOutcome, LatticeUpdater,
        UpdateConfig, UpdateMetrics, UpdateRequest,
    };

    // Errors
    pub use eckart_core::SpeciesError;
    pub use eckart_density::ConfigError;
    pub use eckart_lattice::LatticeError;
}
