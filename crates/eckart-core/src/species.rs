//! Particle species, the [`Species`] trait, and the species registry.

use std::sync::Arc;

use indexmap::IndexMap;

use crate::error::SpeciesError;
use crate::pdg::PdgCode;

/// Quantum numbers and classifiers of a particle species.
///
/// This is everything the density weights need to know about a particle
/// type. Isospin values are stored as integers in units of one half, the
/// same convention the PDG tables use.
pub trait Species {
    /// Baryon number.
    fn baryon_number(&self) -> i32;

    /// Electric charge in units of the elementary charge.
    fn charge(&self) -> i32;

    /// Strangeness.
    fn strangeness(&self) -> i32;

    /// Twice the isospin-3 projection (`2·I3`).
    fn isospin3(&self) -> i32;

    /// Isospin-3 projection relative to the total isospin (`I3 / I`),
    /// zero for isosinglets.
    fn isospin3_rel(&self) -> f64;

    /// Baryon or meson.
    fn is_hadron(&self) -> bool;

    /// One of π⁺, π⁰, π⁻.
    fn is_pion(&self) -> bool;

    /// Baryon or antibaryon.
    fn is_baryon(&self) -> bool;

    /// Nucleus (deuteron, triton, ...).
    fn is_nucleus(&self) -> bool;
}

/// A particle species with its pole mass and quantum numbers.
#[derive(Clone, Debug, PartialEq)]
pub struct ParticleType {
    /// Human-readable name, e.g. `"π⁺"`.
    pub name: String,
    /// PDG code.
    pub pdg: PdgCode,
    /// Pole mass in GeV.
    pub mass: f64,
    /// Electric charge.
    pub charge: i32,
    /// Baryon number.
    pub baryon_number: i32,
    /// Strangeness.
    pub strangeness: i32,
    /// Twice the total isospin (`2·I`).
    pub isospin: i32,
    /// Twice the isospin-3 projection (`2·I3`).
    pub isospin3: i32,
}

impl ParticleType {
    /// Structural validation of the quantum numbers.
    pub fn validate(&self) -> Result<(), SpeciesError> {
        let invalid = |reason: String| SpeciesError::InvalidSpecies {
            pdg: self.pdg,
            reason,
        };
        if !self.mass.is_finite() || self.mass < 0.0 {
            return Err(invalid(format!("mass must be finite and >= 0, got {}", self.mass)));
        }
        if self.isospin < 0 {
            return Err(invalid(format!("isospin must be >= 0, got {}", self.isospin)));
        }
        if self.isospin3.abs() > self.isospin {
            return Err(invalid(format!(
                "|isospin3| ({}) exceeds isospin ({})",
                self.isospin3, self.isospin
            )));
        }
        if (self.isospin - self.isospin3) % 2 != 0 {
            return Err(invalid(format!(
                "isospin ({}) and isospin3 ({}) differ by a half-integer",
                self.isospin, self.isospin3
            )));
        }
        Ok(())
    }

    /// The charge-conjugate species: every additive quantum number flips sign.
    pub fn antiparticle(&self, name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            pdg: self.pdg.antiparticle(),
            mass: self.mass,
            charge: -self.charge,
            baryon_number: -self.baryon_number,
            strangeness: -self.strangeness,
            isospin: self.isospin,
            isospin3: -self.isospin3,
        }
    }
}

impl Species for ParticleType {
    fn baryon_number(&self) -> i32 {
        self.baryon_number
    }

    fn charge(&self) -> i32 {
        self.charge
    }

    fn strangeness(&self) -> i32 {
        self.strangeness
    }

    fn isospin3(&self) -> i32 {
        self.isospin3
    }

    fn isospin3_rel(&self) -> f64 {
        if self.isospin == 0 {
            0.0
        } else {
            f64::from(self.isospin3) / f64::from(self.isospin)
        }
    }

    fn is_hadron(&self) -> bool {
        self.pdg.is_hadron()
    }

    fn is_pion(&self) -> bool {
        self.pdg.is_pion()
    }

    fn is_baryon(&self) -> bool {
        self.pdg.is_baryon()
    }

    fn is_nucleus(&self) -> bool {
        self.pdg.is_nucleus()
    }
}

/// Registry of particle species keyed by PDG code.
///
/// Iteration follows insertion order. Entries are handed out as
/// `Arc<ParticleType>` so particles can hold a cheap shared handle to
/// their species.
#[derive(Clone, Debug, Default)]
pub struct ParticleTypeList {
    types: IndexMap<PdgCode, Arc<ParticleType>>,
}

impl ParticleTypeList {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a species.
    ///
    /// Returns `Err(SpeciesError::Duplicate)` if the code is already known,
    /// or `Err(SpeciesError::InvalidSpecies)` if validation fails.
    pub fn insert(&mut self, species: ParticleType) -> Result<Arc<ParticleType>, SpeciesError> {
        species.validate()?;
        if self.types.contains_key(&species.pdg) {
            return Err(SpeciesError::Duplicate { pdg: species.pdg });
        }
        let pdg = species.pdg;
        let handle = Arc::new(species);
        self.types.insert(pdg, Arc::clone(&handle));
        Ok(handle)
    }

    /// Look up a species by code.
    pub fn find(&self, pdg: PdgCode) -> Option<&Arc<ParticleType>> {
        self.types.get(&pdg)
    }

    /// Number of registered species.
    pub fn len(&self) -> usize {
        self.types.len()
    }

    /// `true` if no species are registered.
    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    /// Iterate in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Arc<ParticleType>> {
        self.types.values()
    }

    /// Common hadrons, the electron, the photon and the deuteron.
    ///
    /// Antibaryons and negative mesons are the charge conjugates of their
    /// partners, built with [`ParticleType::antiparticle`].
    pub fn standard() -> Self {
        let ty = |name: &str, pdg: i32, mass, charge, baryon, strange, iso, iso3| ParticleType {
            name: name.to_string(),
            pdg: PdgCode(pdg),
            mass,
            charge,
            baryon_number: baryon,
            strangeness: strange,
            isospin: iso,
            isospin3: iso3,
        };
        let proton = ty("p", 2212, 0.938, 1, 1, 0, 1, 1);
        let neutron = ty("n", 2112, 0.938, 0, 1, 0, 1, -1);
        let pi_plus = ty("π⁺", 211, 0.138, 1, 0, 0, 2, 2);
        let k_plus = ty("K⁺", 321, 0.494, 1, 0, 1, 1, 1);
        let k_zero = ty("K⁰", 311, 0.494, 0, 0, 1, 1, -1);
        let anti_proton = proton.antiparticle("p̄");
        let anti_neutron = neutron.antiparticle("n̄");
        let pi_minus = pi_plus.antiparticle("π⁻");
        let k_minus = k_plus.antiparticle("K⁻");
        let anti_k_zero = k_zero.antiparticle("K̄⁰");

        let mut list = Self::new();
        for species in [
            proton,
            neutron,
            anti_proton,
            anti_neutron,
            pi_plus,
            ty("π⁰", 111, 0.138, 0, 0, 0, 2, 0),
            pi_minus,
            k_plus,
            k_zero,
            k_minus,
            anti_k_zero,
            ty("Λ", 3122, 1.116, 0, 1, -1, 0, 0),
            ty("Σ⁺", 3222, 1.189, 1, 1, -1, 2, 2),
            ty("Σ⁻", 3112, 1.197, -1, 1, -1, 2, -2),
            ty("Ξ⁻", 3312, 1.322, -1, 1, -2, 1, -1),
            ty("Δ⁺⁺", 2224, 1.232, 2, 1, 0, 3, 3),
            ty("Δ⁻", 1114, 1.232, -1, 1, 0, 3, -3),
            ty("e⁻", 11, 0.000511, -1, 0, 0, 0, 0),
            ty("γ", 22, 0.0, 0, 0, 0, 0, 0),
            ty("d", 1_000_010_020, 1.8756, 1, 2, 0, 0, 0),
        ] {
            let inserted = list.insert(species);
            debug_assert!(inserted.is_ok(), "bad standard species: {inserted:?}");
        }
        list
    }
}
