//! Error types for lattice construction and gradient evaluation.

use std::fmt;

/// Errors arising from lattice construction or lattice-wide operations.
#[derive(Debug, Clone, PartialEq)]
pub enum LatticeError {
    /// Attempted to construct a lattice with zero cells along an axis.
    EmptyLattice,
    /// A box edge length is not finite and positive.
    InvalidSize {
        /// Axis index (0, 1, 2).
        axis: usize,
        /// The offending length.
        value: f64,
    },
    /// The total cell count does not fit in `usize`.
    TooManyCells,
    /// A field slice does not match the lattice cell count.
    ShapeMismatch {
        /// Which argument was mis-sized.
        name: &'static str,
        /// Cells in the lattice.
        expected: usize,
        /// Elements supplied.
        actual: usize,
    },
    /// Two lattices that must share a geometry do not.
    GeometryMismatch,
    /// The time step is not finite and positive.
    InvalidTimeStep {
        /// The offending time step.
        value: f64,
    },
}

impl fmt::Display for LatticeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyLattice => write!(f, "lattice must have at least one cell per axis"),
            Self::InvalidSize { axis, value } => {
                write!(f, "box size along axis {axis} must be finite and positive, got {value}")
            }
            Self::TooManyCells => write!(f, "cell count overflows usize"),
            Self::ShapeMismatch {
                name,
                expected,
                actual,
            } => write!(
                f,
                "{name} has {actual} elements, lattice has {expected} cells"
            ),
            Self::GeometryMismatch => write!(f, "lattices do not share the same geometry"),
            Self::InvalidTimeStep { value } => {
                write!(f, "time step must be finite and positive, got {value}")
            }
        }
    }
}

impl std::error::Error for LatticeError {}
