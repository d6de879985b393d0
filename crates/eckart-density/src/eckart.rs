//! Eckart density and four-current of a particle ensemble at one point.
//!
//! Particles with positive and negative weight are summed into separate
//! currents and only combined at the end: two opposite charges flying apart
//! give a space-like net current whose invariant length is undefined, while
//! `|j⁺| − |j⁻|` stays finite and reduces to the naive density at rest.

use eckart_core::{DensityType, FourVector, ParticleView, ThreeVector, REALLY_SMALL};

use crate::params::DensityParameters;
use crate::smearing::unnormalized_smearing_factor;
use crate::weight::density_factor;

/// Normalized Eckart quantities at one point.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct EckartCurrent {
    /// Eckart rest-frame density `(|j⁺| − |j⁻|) · norm`.
    pub rho: f64,
    /// Net four-current `(j⁺ + j⁻) · norm`.
    pub jmu: FourVector,
    /// Spatial gradient of the density.
    pub grad_rho: ThreeVector,
    /// Time derivative of the spatial current.
    pub dj_dt: ThreeVector,
    /// Curl of the spatial current.
    pub curl_j: ThreeVector,
}

/// Running, unnormalized sums over the particles seen so far.
///
/// `djmu_dx[0]` is the time derivative of the net current and
/// `djmu_dx[1..=3]` its derivatives along x, y and z.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct EckartAccumulator {
    jmu_pos: FourVector,
    jmu_neg: FourVector,
    djmu_dx: [FourVector; 4],
}

impl EckartAccumulator {
    /// An empty accumulator.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one particle, evaluated at the point `r`.
    ///
    /// Particles whose weight or invariant mass is below [`REALLY_SMALL`]
    /// are skipped. With `smearing` off the particle current is added
    /// without the kernel factor.
    pub fn add_particle<P: ParticleView + ?Sized>(
        &mut self,
        r: ThreeVector,
        particle: &P,
        par: &DensityParameters,
        dens_type: DensityType,
        compute_gradient: bool,
        smearing: bool,
    ) {
        let weight = density_factor(particle.species(), dens_type);
        if weight.abs() < REALLY_SMALL {
            return;
        }
        let mom = particle.momentum();
        let m = mom.abs();
        if m < REALLY_SMALL {
            return;
        }

        let (sf, sf_grad) = unnormalized_smearing_factor(
            particle.position().threevec() - r,
            mom,
            1.0 / m,
            par,
            compute_gradient,
        );
        let tmp = mom * (weight / mom.x0());
        let contribution = if smearing { tmp * sf } else { tmp };
        if weight > 0.0 {
            self.jmu_pos += contribution;
        } else {
            self.jmu_neg += contribution;
        }

        if compute_gradient {
            let v = mom.velocity();
            for k in 0..3 {
                self.djmu_dx[k + 1] += tmp * sf_grad[k];
                self.djmu_dx[0] -= tmp * (sf_grad[k] * v[k]);
            }
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

    /// Derivatives `[∂_t, ∂_x, ∂_y, ∂_z]` of the net current.
    pub fn djmu_dx(&self) -> [FourVector; 4] {
        self.djmu_dx
    }

    /// Normalize the sums into the Eckart quantities.
    ///
    /// The derivative outputs are exact zeros unless `compute_gradient` is set.
    pub fn finish(&self, par: &DensityParameters, compute_gradient: bool) -> EckartCurrent {
        let norm = par.norm_factor_sf();
        let mut out = EckartCurrent {
            rho: (self.jmu_pos.abs() - self.jmu_neg.abs()) * norm,
            jmu: (self.jmu_pos + self.jmu_neg) * norm,
            ..EckartCurrent::default()
        };
        if compute_gradient {
            out.dj_dt = self.djmu_dx[0].threevec() * norm;
            out.grad_rho = ThreeVector::new(
                self.djmu_dx[1].x0(),
                self.djmu_dx[2].x0(),
                self.djmu_dx[3].x0(),
            ) * norm;
            out.curl_j = curl(&self.djmu_dx) * norm;
        }
        out
    }
}

/// Curl of the spatial current from its spatial derivatives.
pub(crate) fn curl(djmu_dx: &[FourVector; 4]) -> ThreeVector {
    ThreeVector::new(
        djmu_dx[2].x3() - djmu_dx[3].x2(),
        djmu_dx[3].x1() - djmu_dx[1].x3(),
        djmu_dx[1].x2() - djmu_dx[2].x1(),
    )
}

/// Eckart density, net current and (optionally) their derivatives at `r`.
///
/// `particles` may be any iterator over particle references: a slice, a
/// `Vec`, or several ensembles chained with `flat_map`.
///
/// ```
/// use eckart_core::{DensityType, ParticleData, ParticleTypeList, PdgCode, ThreeVector};
/// use eckart_density::{current_eckart, DensityParameters};
///
/// let types = ParticleTypeList::standard();
/// let proton = types.find(PdgCode::PROTON).unwrap().clone();
/// let particles = vec![ParticleData::at_rest(proton, 0.0, ThreeVector::ZERO)];
/// let par = DensityParameters::builder().build().unwrap();
///
/// let j = current_eckart(ThreeVector::ZERO, &particles, &par, DensityType::Baryon, false, true);
/// assert!(j.rho > 0.0);
/// assert_eq!(j.grad_rho, ThreeVector::ZERO);
/// ```
pub fn current_eckart<'a, P, I>(
    r: ThreeVector,
    particles: I,
    par: &DensityParameters,
    dens_type: DensityType,
    compute_gradient: bool,
    smearing: bool,
) -> EckartCurrent
where
    P: ParticleView + 'a,
    I: IntoIterator<Item = &'a P>,
{
    let mut acc = EckartAccumulator::new();
    for p in particles {
        acc.add_particle(r, p, par, dens_type, compute_gradient, smearing);
    }
    acc.finish(par, compute_gradient)
}

/// Smeared Eckart density at `r` and its gradient.
pub fn rho_eckart<'a, P, I>(
    r: ThreeVector,
    particles: I,
    par: &DensityParameters,
    dens_type: DensityType,
    compute_gradient: bool,
) -> (f64, ThreeVector)
where
    P: ParticleView + 'a,
    I: IntoIterator<Item = &'a P>,
{
    let j = current_eckart(r, particles, par, dens_type, compute_gradient, true);
    (j.rho, j.grad_rho)
}
