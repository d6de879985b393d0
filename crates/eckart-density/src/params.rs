//! Smearing parameters and the derivatives mode.
//!
//! [`DensityParameters`] is built once per run through
//! [`DensityParameters::builder`] and then passed by reference into every
//! evaluation. It precomputes the squared cutoff, `1/(2σ²)` and the
//! normalization so the per-particle kernel does no division.

use std::f64::consts::PI;

use statrs::function::erf::erf;

use crate::error::ConfigError;

/// How lattice derivatives of the four-current are obtained.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum DerivativesMode {
    /// Keep the analytic derivatives of the smearing kernel (if requested).
    #[default]
    Off,
    /// Replace them with finite differences between two lattice snapshots.
    FiniteDifference,
}

/// Immutable smearing configuration.
///
/// # Construction
///
/// ```
/// use eckart_density::{DensityParameters, DerivativesMode};
///
/// let par = DensityParameters::builder()
///     .gaussian_sigma(1.0)
///     .cutoff_in_sigma(4.0)
///     .testparticles(20)
///     .derivatives(DerivativesMode::FiniteDifference)
///     .build()
///     .unwrap();
/// assert_eq!(par.r_cut(), 4.0);
/// assert_eq!(par.r_cut_sqr(), 16.0);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct DensityParameters {
    sig: f64,
    r_cut: f64,
    r_cut_sqr: f64,
    two_sig_sqr_inv: f64,
    norm_factor_sf: f64,
    ntest: u32,
    nensembles: u32,
    derivatives: DerivativesMode,
}

impl DensityParameters {
    /// Create a new builder with the default settings
    /// (σ = 1 fm, cutoff 4σ, one test particle, one ensemble, derivatives off).
    pub fn builder() -> DensityParametersBuilder {
        DensityParametersBuilder {
            gaussian_sigma: 1.0,
            cutoff_in_sigma: 4.0,
            testparticles: 1,
            ensembles: 1,
            derivatives: DerivativesMode::Off,
        }
    }

    /// Gaussian width σ.
    pub fn sig(&self) -> f64 {
        self.sig
    }

    /// Cutoff radius.
    pub fn r_cut(&self) -> f64 {
        self.r_cut
    }

    /// Squared cutoff radius.
    pub fn r_cut_sqr(&self) -> f64 {
        self.r_cut_sqr
    }

    /// `1 / (2σ²)`.
    pub fn two_sig_sqr_inv(&self) -> f64 {
        self.two_sig_sqr_inv
    }

    /// Normalization of the smearing kernel, including the test-particle
    /// and ensemble counts.
    pub fn norm_factor_sf(&self) -> f64 {
        self.norm_factor_sf
    }

    /// Test particles per physical particle.
    pub fn ntest(&self) -> u32 {
        self.ntest
    }

    /// Number of parallel ensembles.
    pub fn nensembles(&self) -> u32 {
        self.nensembles
    }

    /// Derivatives mode.
    pub fn derivatives(&self) -> DerivativesMode {
        self.derivatives
    }
}

/// Builder for [`DensityParameters`].
pub struct DensityParametersBuilder {
    gaussian_sigma: f64,
    cutoff_in_sigma: f64,
    testparticles: u32,
    ensembles: u32,
    derivatives: DerivativesMode,
}

impl DensityParametersBuilder {
    /// Gaussian width σ in fm (default 1.0).
    pub fn gaussian_sigma(mut self, sigma: f64) -> Self {
        self.gaussian_sigma = sigma;
        self
    }

    /// Cutoff radius in units of σ (default 4.0).
    pub fn cutoff_in_sigma(mut self, cutoff: f64) -> Self {
        self.cutoff_in_sigma = cutoff;
        self
    }

    /// Test particles per physical particle (default 1).
    pub fn testparticles(mut self, n: u32) -> Self {
        self.testparticles = n;
        self
    }

    /// Number of parallel ensembles (default 1).
    pub fn ensembles(mut self, n: u32) -> Self {
        self.ensembles = n;
        self
    }

    /// Derivatives mode (default [`DerivativesMode::Off`]).
    pub fn derivatives(mut self, mode: DerivativesMode) -> Self {
        self.derivatives = mode;
        self
    }

    /// Build the parameters, validating all configuration.
    ///
    /// # Errors
    ///
    /// Returns `Err` if:
    /// - `gaussian_sigma` or `cutoff_in_sigma` is not finite and positive
    /// - `testparticles` or `ensembles` is zero
    pub fn build(self) -> Result<DensityParameters, ConfigError> {
        let sig = self.gaussian_sigma;
        if !sig.is_finite() || sig <= 0.0 {
            return Err(ConfigError::InvalidSigma { value: sig });
        }
        let cut = self.cutoff_in_sigma;
        if !cut.is_finite() || cut <= 0.0 {
            return Err(ConfigError::InvalidCutoff { value: cut });
        }
        if self.testparticles == 0 {
            return Err(ConfigError::ZeroTestparticles);
        }
        if self.ensembles == 0 {
            return Err(ConfigError::ZeroEnsembles);
        }

        let r_cut = cut * sig;
        let two_sig_sqr = 2.0 * sig * sig;
        let gauss_norm = (PI * two_sig_sqr).powf(1.5);
        let norm_factor_sf = 1.0
            / (gauss_norm
                * f64::from(self.testparticles)
                * f64::from(self.ensembles)
                * gaussian_fraction_inside(cut));
        log::debug!(
            "density smearing: sigma = {sig} fm, r_cut = {r_cut} fm, norm = {norm_factor_sf:e}"
        );

        Ok(DensityParameters {
            sig,
            r_cut,
            r_cut_sqr: r_cut * r_cut,
            two_sig_sqr_inv: 1.0 / two_sig_sqr,
            norm_factor_sf,
            ntest: self.testparticles,
            nensembles: self.ensembles,
            derivatives: self.derivatives,
        })
    }
}

/// Probability mass of a three-dimensional unit Gaussian inside a sphere of
/// radius `x` standard deviations.
fn gaussian_fraction_inside(x: f64) -> f64 {
    erf(x / std::f64::consts::SQRT_2) - (2.0 / PI).sqrt() * x * (-0.5 * x * x).exp()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let par = DensityParameters::builder().build().unwrap();
        assert_eq!(par.sig(), 1.0);
        assert_eq!(par.r_cut(), 4.0);
        assert_eq!(par.r_cut_sqr(), 16.0);
        assert_eq!(par.two_sig_sqr_inv(), 0.5);
        assert_eq!(par.ntest(), 1);
        assert_eq!(par.nensembles(), 1);
        assert_eq!(par.derivatives(), DerivativesMode::Off);
    }

    #[test]
    fn fraction_inside_four_sigma() {
        assert!((gaussian_fraction_inside(4.0) - 0.998_866).abs() < 1e-5);
        assert!(gaussian_fraction_inside(40.0) > 1.0 - 1e-12);
    }

    #[test]
    fn norm_without_cutoff_is_gaussian_norm() {
        let par = DensityParameters::builder()
            .gaussian_sigma(0.5)
            .cutoff_in_sigma(30.0)
            .build()
            .unwrap();
        let expected = 1.0 / (2.0 * PI * 0.25f64).powf(1.5);
        assert!((par.norm_factor_sf() - expected).abs() < 1e-12 * expected);
    }

    #[test]
    fn norm_scales_with_testparticles_and_ensembles() {
        let one = DensityParameters::builder().build().unwrap();
        let many = DensityParameters::builder()
            .testparticles(10)
            .ensembles(4)
            .build()
            .unwrap();
        let ratio = one.norm_factor_sf() / many.norm_factor_sf();
        assert!((ratio - 40.0).abs() < 1e-10);
    }

    #[test]
    fn builder_rejects_bad_values() {
        let err = DensityParameters::builder()
            .gaussian_sigma(-1.0)
            .build()
            .unwrap_err();
        assert_eq!(err, ConfigError::InvalidSigma { value: -1.0 });

        let err = DensityParameters::builder()
            .cutoff_in_sigma(f64::NAN)
            .build()
            .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidCutoff { .. }));

        let err = DensityParameters::builder()
            .testparticles(0)
            .build()
            .unwrap_err();
        assert_eq!(err, ConfigError::ZeroTestparticles);
        assert!(err.to_string().contains("testparticles"));

        let err = DensityParameters::builder().ensembles(0).build().unwrap_err();
        assert_eq!(err, ConfigError::ZeroEnsembles);
    }
}
