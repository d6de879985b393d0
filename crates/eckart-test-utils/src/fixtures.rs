//! Species lookups and particle constructors.

use std::sync::{Arc, OnceLock};

use eckart_core::{ParticleData, ParticleType, ParticleTypeList, PdgCode, ThreeVector};

/// The shared standard species table.
pub fn standard_types() -> &'static ParticleTypeList {
    static TYPES: OnceLock<ParticleTypeList> = OnceLock::new();
    TYPES.get_or_init(ParticleTypeList::standard)
}

/// Species handle for `pdg` from the standard table.
///
/// # Panics
///
/// Panics if `pdg` is not in the standard table.
pub fn species(pdg: PdgCode) -> Arc<ParticleType> {
    standard_types()
        .find(pdg)
        .unwrap_or_else(|| panic!("{pdg:?} not in the standard table"))
        .clone()
}

/// A particle of `pdg` at rest at `r`, at time zero.
pub fn at_rest(pdg: PdgCode, r: [f64; 3]) -> ParticleData {
    ParticleData::at_rest(species(pdg), 0.0, ThreeVector::from(r))
}

/// A particle of `pdg` at `r` moving with velocity `v`.
pub fn moving(pdg: PdgCode, r: [f64; 3], v: [f64; 3]) -> ParticleData {
    at_rest(pdg, r).with_velocity(ThreeVector::from(v))
}
