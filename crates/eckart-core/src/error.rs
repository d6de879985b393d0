//! Error types for species registration.

use std::error::Error;
use std::fmt;

use crate::pdg::PdgCode;

/// Errors from building a [`ParticleTypeList`](crate::ParticleTypeList).
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SpeciesError {
    /// A species with this PDG code is already registered.
    Duplicate {
        /// The code that was registered twice.
        pdg: PdgCode,
    },
    /// The species definition is internally inconsistent.
    InvalidSpecies {
        /// The offending code.
        pdg: PdgCode,
        /// What is wrong with it.
        reason: String,
    },
}

impl fmt::Display for SpeciesError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Duplicate { pdg } => write!(f, "species {pdg} is already registered"),
            Self::InvalidSpecies { pdg, reason } => {
                write!(f, "invalid species {pdg}: {reason}")
            }
        }
    }
}

impl Error for SpeciesError {}
