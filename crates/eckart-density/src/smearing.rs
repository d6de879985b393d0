//! Lorentz-covariant Gaussian smearing kernel.

use eckart_core::{FourVector, ThreeVector};

use crate::params::DensityParameters;

/// Unnormalized smearing weight of a particle at displacement `r`, and its
/// gradient with respect to the evaluation point.
///
/// `r` is the particle position minus the evaluation point, `p` the
/// particle four-momentum and `m_inv` the inverse of its invariant mass.
/// The Gaussian is evaluated in the particle rest frame,
/// `r_rest² = r² + (r · u⃗)²`, and multiplied by `u⁰ = γ`.
///
/// Returns `(0, 0⃗)` when either the lab-frame or the rest-frame distance
/// exceeds the cutoff. The gradient is the zero vector unless
/// `compute_gradient` is set.
pub fn unnormalized_smearing_factor(
    r: ThreeVector,
    p: FourVector,
    m_inv: f64,
    par: &DensityParameters,
    compute_gradient: bool,
) -> (f64, ThreeVector) {
    let r_sqr = r.sqr();
    if r_sqr > par.r_cut_sqr() {
        return (0.0, ThreeVector::ZERO);
    }

    let u = p * m_inv;
    let u_r = r.dot(&u.threevec());
    let r_rest_sqr = r_sqr + u_r * u_r;

    // Lorentz-contracted distance beyond the cutoff.
    if r_rest_sqr > par.r_cut_sqr() {
        return (0.0, ThreeVector::ZERO);
    }

    let sf = (-r_rest_sqr * par.two_sig_sqr_inv()).exp() * u.x0();
    let sf_grad = if compute_gradient {
        (r + u.threevec() * u_r) * (sf * par.two_sig_sqr_inv() * 2.0)
    } else {
        ThreeVector::ZERO
    };
    (sf, sf_grad)
}
