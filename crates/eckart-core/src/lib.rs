//! Core types and traits for the Eckart smearing engine.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the fundamental value types used throughout the workspace:
//! three- and four-vectors, PDG codes, particle species and their
//! registry, the read-only particle view, and the density kind tag.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod density_type;
pub mod error;
pub mod particle;
pub mod pdg;
pub mod species;
pub mod vector;

pub use density_type::DensityType;
pub use error::SpeciesError;
pub use particle::{ParticleData, ParticleView};
pub use pdg::PdgCode;
pub use species::{ParticleType, ParticleTypeList, Species};
pub use vector::{FourVector, ThreeVector};

/// Threshold below which a weight or an invariant mass is treated as zero.
pub const REALLY_SMALL: f64 = 1.0e-6;
