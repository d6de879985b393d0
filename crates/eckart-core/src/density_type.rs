//! The closed set of physical quantities a density can be built from.

use std::fmt;

/// Which conserved (or counted) quantity a density accumulates.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DensityType {
    /// Number of hadrons.
    Hadron,
    /// Net baryon number.
    Baryon,
    /// Isospin-3 of baryons and nuclei, relative to their total isospin.
    BaryonicIsospin,
    /// Number of pions.
    Pion,
    /// Total isospin-3 projection of all hadrons.
    Isospin3Tot,
    /// Electric charge.
    Charge,
    /// Net strangeness.
    Strangeness,
    /// No quantity; every species weighs zero.
    None,
}

impl DensityType {
    /// All variants, in declaration order.
    pub const ALL: [Self; 8] = [
        Self::Hadron,
        Self::Baryon,
        Self::BaryonicIsospin,
        Self::Pion,
        Self::Isospin3Tot,
        Self::Charge,
        Self::Strangeness,
        Self::None,
    ];
}

impl fmt::Display for DensityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Hadron => "hadron density",
            Self::Baryon => "baryon density",
            Self::BaryonicIsospin => "baryonic isospin density",
            Self::Pion => "pion density",
            Self::Isospin3Tot => "total isospin3 density",
            Self::Charge => "charge density",
            Self::Strangeness => "strangeness density",
            Self::None => "none",
        };
        f.write_str(name)
    }
}
