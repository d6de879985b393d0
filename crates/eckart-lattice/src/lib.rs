//! Lattice storage for smeared fields.
//!
//! This crate provides [`RectangularLattice`], a box of equally sized cells
//! carrying one value of type `T` each, along with the finite-difference
//! [four-gradient](RectangularLattice::compute_four_gradient) operator used
//! to differentiate four-current fields in space and time.
//!
//! # Boundaries
//!
//! Boundary handling of the gradient is controlled by [`EdgeBehavior`]:
//! one-sided differences on the faces ([`EdgeBehavior::Clamp`]) or periodic
//! wrap-around ([`EdgeBehavior::Wrap`]).

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod edge;
pub mod error;
pub mod rectangular;
pub mod update;

pub use edge::EdgeBehavior;
pub use error::LatticeError;
pub use rectangular::{FourGradient, RectangularLattice};
pub use update::LatticeUpdate;
