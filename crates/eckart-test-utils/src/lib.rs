//! Test utilities for Eckart development.
//!
//! Provides species and particle fixtures ([`fixtures`]), seeded ensemble
//! samplers ([`sampling`]) and a small lattice constructor shared by the
//! integration tests and benchmarks.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;
pub mod sampling;

use eckart_lattice::{EdgeBehavior, LatticeUpdate, RectangularLattice};

pub use fixtures::{at_rest, moving, species, standard_types};
pub use sampling::{random_ensembles, uniform_sphere, EnsembleShape};

/// A cubic lattice of `n` cells per axis and spacing `h`, centred on the origin.
///
/// # Panics
///
/// Panics if `n` is zero or `h` is not positive.
pub fn centred_cube<T: Clone + Default>(
    n: usize,
    h: f64,
    edge: EdgeBehavior,
    when_update: LatticeUpdate,
) -> RectangularLattice<T> {
    let side = n as f64 * h;
    RectangularLattice::new(
        [side; 3],
        [n; 3],
        [-0.5 * side; 3],
        edge,
        when_update,
    )
    .expect("valid cube lattice")
}
