//! Configuration errors for density evaluation.

use std::error::Error;
use std::fmt;

/// Errors detected while building [`DensityParameters`](crate::DensityParameters).
#[derive(Clone, Debug, PartialEq)]
pub enum ConfigError {
    /// Gaussian width is NaN, infinite, zero, or negative.
    InvalidSigma {
        /// The invalid value.
        value: f64,
    },
    /// Cutoff (in units of the width) is NaN, infinite, zero, or negative.
    InvalidCutoff {
        /// The invalid value.
        value: f64,
    },
    /// Number of test particles per physical particle is zero.
    ZeroTestparticles,
    /// Number of parallel ensembles is zero.
    ZeroEnsembles,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidSigma { value } => {
                write!(f, "gaussian_sigma must be finite and positive, got {value}")
            }
            Self::InvalidCutoff { value } => {
                write!(f, "cutoff_in_sigma must be finite and positive, got {value}")
            }
            Self::ZeroTestparticles => write!(f, "testparticles must be at least 1"),
            Self::ZeroEnsembles => write!(f, "ensembles must be at least 1"),
        }
    }
}

impl Error for ConfigError {}
