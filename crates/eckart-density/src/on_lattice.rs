//! Per-cell record of a density lattice.

use eckart_core::{FourVector, ThreeVector};
use eckart_lattice::FourGradient;

use crate::eckart::{curl, EckartAccumulator, EckartCurrent};

/// The four-current and its derivatives stored in one lattice cell.
///
/// All values are already normalized.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct DensityOnLattice {
    jmu_pos: FourVector,
    jmu_neg: FourVector,
    djmu_dx: FourGradient,
}

impl DensityOnLattice {
    /// Cell value from a finished accumulator and the normalization factor.
    pub fn from_accumulator(acc: &EckartAccumulator, norm: f64) -> Self {
        let d = acc.djmu_dx();
        Self {
            jmu_pos: acc.jmu_pos() * norm,
            jmu_neg: acc.jmu_neg() * norm,
            djmu_dx: [d[0] * norm, d[1] * norm, d[2] * norm, d[3] * norm],
        }
    }

    /// Current of the positively weighted particles.
    pub fn jmu_pos(&self) -> FourVector {
        self.jmu_pos
    }

    /// Current of the negatively weighted particles.
    pub fn jmu_neg(&self) -> FourVector {
        self.jmu_neg
    }

    /// Eckart rest-frame density.
    pub fn rho(&self) -> f64 {
        self.jmu_pos.abs() - self.jmu_neg.abs()
    }

    /// Net four-current.
    pub fn jmu_net(&self) -> FourVector {
        self.jmu_pos + self.jmu_neg
    }

    /// Derivatives `[∂_t, ∂_x, ∂_y, ∂_z]` of the net current.
    pub fn djmu_dx(&self) -> FourGradient {
        self.djmu_dx
    }

    /// Spatial gradient of the density (time components of the spatial derivatives).
    pub fn grad_rho(&self) -> ThreeVector {
        ThreeVector::new(
            self.djmu_dx[1].x0(),
            self.djmu_dx[2].x0(),
            self.djmu_dx[3].x0(),
        )
    }

    /// Time derivative of the spatial current.
    pub fn dj_dt(&self) -> ThreeVector {
        self.djmu_dx[0].threevec()
    }

    /// Curl of the spatial current.
    pub fn curl_vecj(&self) -> ThreeVector {
        curl(&self.djmu_dx)
    }

    /// Replace all four derivative four-vectors.
    pub fn overwrite_djmu_dxnu(&mut self, djmu_dx: FourGradient) {
        self.djmu_dx = djmu_dx;
    }

    /// The cell as a point evaluation.
    pub fn to_eckart_current(&self) -> EckartCurrent {
        EckartCurrent {
            rho: self.rho(),
            jmu: self.jmu_net(),
            grad_rho: self.grad_rho(),
            dj_dt: self.dj_dt(),
            curl_j: self.curl_vecj(),
        }
    }
}
