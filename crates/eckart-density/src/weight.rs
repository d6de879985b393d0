//! Per-species density weights.

use eckart_core::{DensityType, Species};

/// Weight of one particle of `species` in a density of kind `dens_type`.
///
/// Pure and total: every [`DensityType`] maps to a value, and
/// [`DensityType::None`] weighs every species zero.
pub fn density_factor<S: Species + ?Sized>(species: &S, dens_type: DensityType) -> f64 {
    match dens_type {
        DensityType::Hadron => {
            if species.is_hadron() {
                1.0
            } else {
                0.0
            }
        }
        DensityType::Baryon => f64::from(species.baryon_number()),
        DensityType::BaryonicIsospin => {
            if species.is_baryon() || species.is_nucleus() {
                species.isospin3_rel()
            } else {
                0.0
            }
        }
        DensityType::Pion => {
            if species.is_pion() {
                1.0
            } else {
                0.0
            }
        }
        DensityType::Isospin3Tot => {
            if species.is_hadron() {
                f64::from(species.isospin3())
            } else {
                0.0
            }
        }
        DensityType::Charge => f64::from(species.charge()),
        DensityType::Strangeness => f64::from(species.strangeness()),
        DensityType::None => 0.0,
    }
}
