//! PDG Monte-Carlo particle codes and their quark-digit classifiers.

use std::fmt;

/// A particle code in the PDG Monte-Carlo numbering scheme.
///
/// Hadrons carry their quark content in the last digits: `n_q1 n_q2 n_q3 n_J`
/// (baryons have all three quark digits set, mesons have `n_q1 == 0`).
/// Nuclei use the ten-digit form `10LZZZAAAI`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PdgCode(pub i32);

impl PdgCode {
    /// Proton.
    pub const PROTON: Self = Self(2212);
    /// Neutron.
    pub const NEUTRON: Self = Self(2112);
    /// Positive pion.
    pub const PI_PLUS: Self = Self(211);
    /// Neutral pion.
    pub const PI_ZERO: Self = Self(111);
    /// Negative pion.
    pub const PI_MINUS: Self = Self(-211);
    /// Photon.
    pub const PHOTON: Self = Self(22);
    /// Electron.
    pub const ELECTRON: Self = Self(11);

    /// Smallest absolute value of a nucleus code.
    const NUCLEUS_MIN: u32 = 1_000_000_000;

    fn digit(&self, position: u32) -> u32 {
        (self.0.unsigned_abs() / 10u32.pow(position)) % 10
    }

    /// `true` for nuclei (`10LZZZAAAI` codes).
    pub fn is_nucleus(&self) -> bool {
        self.0.unsigned_abs() >= Self::NUCLEUS_MIN
    }

    /// `true` for baryons and antibaryons (three quark digits).
    pub fn is_baryon(&self) -> bool {
        !self.is_nucleus() && self.digit(3) != 0 && self.digit(2) != 0 && self.digit(1) != 0
    }

    /// `true` for mesons (a quark-antiquark pair, `n_q1 == 0`).
    pub fn is_meson(&self) -> bool {
        !self.is_nucleus()
            && self.0.unsigned_abs() >= 100
            && self.digit(3) == 0
            && self.digit(2) != 0
            && self.digit(1) != 0
    }

    /// `true` for baryons and mesons.
    pub fn is_hadron(&self) -> bool {
        self.is_baryon() || self.is_meson()
    }

    /// `true` for the three pions.
    pub fn is_pion(&self) -> bool {
        matches!(self.0, 111 | 211 | -211)
    }

    /// Code of the antiparticle. Self-conjugate neutral mesons and the
    /// photon map onto themselves.
    pub fn antiparticle(&self) -> Self {
        let self_conjugate = self.0 == 22
            || (self.is_meson() && self.digit(2) == self.digit(1));
        if self_conjugate {
            *self
        } else {
            Self(-self.0)
        }
    }
}

impl fmt::Display for PdgCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i32> for PdgCode {
    fn from(v: i32) -> Self {
        Self(v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nucleons_are_baryons() {
        assert!(PdgCode::PROTON.is_baryon());
        assert!(PdgCode::NEUTRON.is_baryon());
        assert!(PdgCode(-2212).is_baryon());
        assert!(PdgCode::PROTON.is_hadron());
        assert!(!PdgCode::PROTON.is_meson());
    }

    #[test]
    fn pions_are_mesons() {
        for code in [PdgCode::PI_PLUS, PdgCode::PI_ZERO, PdgCode::PI_MINUS] {
            assert!(code.is_pion());
            assert!(code.is_meson());
            assert!(code.is_hadron());
            assert!(!code.is_baryon());
        }
        assert!(!PdgCode(321).is_pion());
    }

    #[test]
    fn leptons_and_photon_are_not_hadrons() {
        assert!(!PdgCode::ELECTRON.is_hadron());
        assert!(!PdgCode::PHOTON.is_hadron());
        assert!(!PdgCode(-13).is_hadron());
    }

    #[test]
    fn deuteron_is_a_nucleus_not_a_baryon() {
        let deuteron = PdgCode(1_000_010_020);
        assert!(deuteron.is_nucleus());
        assert!(!deuteron.is_baryon());
        assert!(!deuteron.is_hadron());
    }

    #[test]
    fn antiparticles() {
        assert_eq!(PdgCode::PI_PLUS.antiparticle(), PdgCode::PI_MINUS);
        assert_eq!(PdgCode::PI_ZERO.antiparticle(), PdgCode::PI_ZERO);
        assert_eq!(PdgCode::PHOTON.antiparticle(), PdgCode::PHOTON);
        assert_eq!(PdgCode::PROTON.antiparticle(), PdgCode(-2212));
        assert_eq!(PdgCode(311).antiparticle(), PdgCode(-311));
    }
}
