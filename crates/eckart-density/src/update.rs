//! Refreshing a density lattice from particle ensembles.
//!
//! [`update_lattice_cells`] re-evaluates every cell at its centre.
//! [`LatticeUpdater`] wraps it with the cadence guard and, in
//! [`DerivativesMode::FiniteDifference`], snapshots the net current before
//! and after the refresh and replaces the analytic derivatives with the
//! lattice's finite-difference four-gradient.
//!
//! Cells are split into contiguous chunks evaluated on scoped threads.
//! Every cell sums the particles in the same order, so the result does not
//! depend on the number of workers.

use std::fmt;
use std::thread;
use std::time::Instant;

use eckart_core::{DensityType, FourVector, ParticleView, ThreeVector};
use eckart_lattice::{FourGradient, LatticeError, LatticeUpdate, RectangularLattice};

use crate::eckart::EckartAccumulator;
use crate::metrics::{micros, UpdateMetrics};
use crate::on_lattice::DensityOnLattice;
use crate::params::{DensityParameters, DerivativesMode};

/// A lattice of [`DensityOnLattice`] cells that can be refreshed.
pub trait CurrentLattice {
    /// Cadence this lattice is configured with.
    fn when_update(&self) -> LatticeUpdate;

    /// Cells per axis.
    fn n_cells(&self) -> [usize; 3];

    /// Total number of cells.
    fn cell_count(&self) -> usize;

    /// Centre of the cell at flat `index`.
    fn cell_center(&self, index: usize) -> ThreeVector;

    /// All cells in storage order.
    fn nodes(&self) -> &[DensityOnLattice];

    /// All cells in storage order, mutably.
    fn nodes_mut(&mut self) -> &mut [DensityOnLattice];

    /// Finite-difference four-gradient of a four-vector field sampled on
    /// this lattice at `t` (`old`) and `t + dt` (`new`).
    fn four_gradient(
        &self,
        old: &[FourVector],
        new: &[FourVector],
        dt: f64,
        out: &mut [FourGradient],
    ) -> Result<(), LatticeError>;
}

impl CurrentLattice for RectangularLattice<DensityOnLattice> {
    fn when_update(&self) -> LatticeUpdate {
        RectangularLattice::when_update(self)
    }

    fn n_cells(&self) -> [usize; 3] {
        RectangularLattice::n_cells(self)
    }

    fn cell_count(&self) -> usize {
        RectangularLattice::cell_count(self)
    }

    fn cell_center(&self, index: usize) -> ThreeVector {
        RectangularLattice::cell_center(self, index)
    }

    fn nodes(&self) -> &[DensityOnLattice] {
        self.as_slice()
    }

    fn nodes_mut(&mut self) -> &mut [DensityOnLattice] {
        self.as_mut_slice()
    }

    fn four_gradient(
        &self,
        old: &[FourVector],
        new: &[FourVector],
        dt: f64,
        out: &mut [FourGradient],
    ) -> Result<(), LatticeError> {
        self.compute_four_gradient(old, new, dt, out)
    }
}

/// Worker pool settings for lattice updates.
#[derive(Clone, Debug, Default)]
pub struct UpdateConfig {
    /// Number of worker threads. `None` = auto-detect
    /// (`available_parallelism`, clamped to `[1, 64]`).
    pub worker_count: Option<usize>,
}

impl UpdateConfig {
    /// Resolve the actual worker count, applying auto-detection if `None`.
    ///
    /// Explicit values are clamped to `[1, 64]`.
    pub fn resolved_worker_count(&self) -> usize {
        match self.worker_count {
            Some(n) => n.clamp(1, 64),
            None => thread::available_parallelism()
                .map(|n| n.get())
                .unwrap_or(1)
                .clamp(1, 64),
        }
    }
}

/// What a driver asks of one lattice update.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct UpdateRequest {
    /// The cadence that fired. Lattices configured otherwise are skipped.
    pub trigger: LatticeUpdate,
    /// Quantity to count.
    pub density_type: DensityType,
    /// Time elapsed since the previous update, used by finite differences.
    pub time_step: f64,
    /// Whether to accumulate the analytic derivatives.
    pub compute_gradient: bool,
}

/// Why an update did nothing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SkipReason {
    /// No lattice was supplied.
    NoLattice,
    /// The lattice is configured for a different cadence.
    CadenceMismatch {
        /// The lattice's cadence.
        configured: LatticeUpdate,
        /// The cadence that fired.
        requested: LatticeUpdate,
    },
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoLattice => write!(f, "no lattice"),
            Self::CadenceMismatch {
                configured,
                requested,
            } => write!(
                f,
                "lattice updates {configured:?}, trigger was {requested:?}"
            ),
        }
    }
}

/// Result of [`LatticeUpdater::update`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum LatticeUpdateOutcome {
    /// Nothing was touched.
    Skipped(SkipReason),
    /// Every cell was refreshed.
    Updated(UpdateMetrics),
}

impl LatticeUpdateOutcome {
    /// Whether the lattice was refreshed.
    pub fn is_updated(&self) -> bool {
        matches!(self, Self::Updated(_))
    }
}

/// Refreshes density lattices, keeping the snapshot buffers between calls.
#[derive(Debug, Default)]
pub struct LatticeUpdater {
    config: UpdateConfig,
    old_jmu: Vec<FourVector>,
    new_jmu: Vec<FourVector>,
    four_grad: Vec<FourGradient>,
}

impl LatticeUpdater {
    /// Create an updater with the given worker settings.
    pub fn new(config: UpdateConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    /// Refresh `lattice` from `ensembles` if it exists and its cadence
    /// matches `request.trigger`.
    ///
    /// With [`DerivativesMode::FiniteDifference`] the cell derivatives are
    /// replaced by finite differences between the net current before and
    /// after the refresh. If the lattice rejects the gradient computation
    /// the analytic derivatives are kept.
    pub fn update<L, P>(
        &mut self,
        lattice: Option<&mut L>,
        request: &UpdateRequest,
        par: &DensityParameters,
        ensembles: &[Vec<P>],
    ) -> LatticeUpdateOutcome
    where
        L: CurrentLattice + ?Sized,
        P: ParticleView + Sync,
    {
        let Some(lat) = lattice else {
            log::trace!("{} update skipped: no lattice", request.density_type);
            return LatticeUpdateOutcome::Skipped(SkipReason::NoLattice);
        };
        let configured = lat.when_update();
        if configured != request.trigger {
            let reason = SkipReason::CadenceMismatch {
                configured,
                requested: request.trigger,
            };
            log::trace!("{} update skipped: {reason}", request.density_type);
            return LatticeUpdateOutcome::Skipped(reason);
        }

        let start = Instant::now();
        let finite_difference = par.derivatives() == DerivativesMode::FiniteDifference;
        let workers = self.config.resolved_worker_count();
        let mut metrics = UpdateMetrics {
            cells: lat.cell_count(),
            particles: ensembles.iter().map(Vec::len).sum(),
            workers,
            ..UpdateMetrics::default()
        };

        if finite_difference {
            let t = Instant::now();
            snapshot_jmu_net(lat.nodes(), &mut self.old_jmu);
            metrics.snapshot_us += micros(t.elapsed());
        }

        let t = Instant::now();
        update_lattice_cells(
            &mut *lat,
            request.density_type,
            par,
            ensembles,
            request.compute_gradient,
            workers,
        );
        metrics.accumulate_us = micros(t.elapsed());

        if finite_difference {
            let t = Instant::now();
            snapshot_jmu_net(lat.nodes(), &mut self.new_jmu);
            metrics.snapshot_us += micros(t.elapsed());

            let t = Instant::now();
            self.four_grad.clear();
            self.four_grad.resize(lat.cell_count(), [FourVector::ZERO; 4]);
            match lat.four_gradient(
                &self.old_jmu,
                &self.new_jmu,
                request.time_step,
                &mut self.four_grad,
            ) {
                Ok(()) => {
                    for (node, grad) in lat.nodes_mut().iter_mut().zip(&self.four_grad) {
                        node.overwrite_djmu_dxnu(*grad);
                    }
                    metrics.finite_difference = true;
                }
                Err(e) => {
                    log::warn!(
                        "{} finite-difference derivatives failed, keeping analytic ones: {e}",
                        request.density_type
                    );
                }
            }
            metrics.gradient_us = micros(t.elapsed());
        }

        metrics.total_us = micros(start.elapsed());
        log::debug!(
            "{} lattice updated: {} cells, {} particles, {} workers, fd = {}, {} us",
            request.density_type,
            metrics.cells,
            metrics.particles,
            metrics.workers,
            metrics.finite_difference,
            metrics.total_us
        );
        LatticeUpdateOutcome::Updated(metrics)
    }
}

fn snapshot_jmu_net(nodes: &[DensityOnLattice], out: &mut Vec<FourVector>) {
    out.clear();
    out.extend(nodes.iter().map(DensityOnLattice::jmu_net));
}

/// Re-evaluate every cell of `lattice` at its centre from all `ensembles`.
///
/// Smearing is always on. `workers` is the number of threads to split the
/// cells over; `1` evaluates inline.
pub fn update_lattice_cells<L, P>(
    lattice: &mut L,
    dens_type: DensityType,
    par: &DensityParameters,
    ensembles: &[Vec<P>],
    compute_gradient: bool,
    workers: usize,
) where
    L: CurrentLattice + ?Sized,
    P: ParticleView + Sync,
{
    let n = lattice.cell_count();
    if n == 0 {
        return;
    }
    let centers: Vec<ThreeVector> = (0..n).map(|i| lattice.cell_center(i)).collect();
    let nodes = lattice.nodes_mut();
    let workers = workers.clamp(1, n);

    if workers == 1 {
        refresh_cells(nodes, &centers, dens_type, par, ensembles, compute_gradient);
        return;
    }

    let chunk = n.div_ceil(workers);
    thread::scope(|s| {
        for (cells, centers) in nodes.chunks_mut(chunk).zip(centers.chunks(chunk)) {
            s.spawn(move || {
                refresh_cells(cells, centers, dens_type, par, ensembles, compute_gradient);
            });
        }
    });
}

fn refresh_cells<P: ParticleView>(
    cells: &mut [DensityOnLattice],
    centers: &[ThreeVector],
    dens_type: DensityType,
    par: &DensityParameters,
    ensembles: &[Vec<P>],
    compute_gradient: bool,
) {
    let norm = par.norm_factor_sf();
    for (cell, &r) in cells.iter_mut().zip(centers) {
        let mut acc = EckartAccumulator::new();
        for p in ensembles.iter().flatten() {
            acc.add_particle(r, p, par, dens_type, compute_gradient, true);
        }
        *cell = DensityOnLattice::from_accumulator(&acc, norm);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolved_worker_count_clamps_zero() {
        let cfg = UpdateConfig {
            worker_count: Some(0),
        };
        assert_eq!(cfg.resolved_worker_count(), 1);
    }

    #[test]
    fn resolved_worker_count_clamps_large() {
        let cfg = UpdateConfig {
            worker_count: Some(200),
        };
        assert_eq!(cfg.resolved_worker_count(), 64);
    }

    #[test]
    fn resolved_worker_count_auto() {
        let count = UpdateConfig::default().resolved_worker_count();
        assert!((1..=64).contains(&count), "auto count {count} out of [1,64]");
    }

    #[test]
    fn skip_reason_display() {
        assert_eq!(SkipReason::NoLattice.to_string(), "no lattice");
        let reason = SkipReason::CadenceMismatch {
            configured: LatticeUpdate::AtOutput,
            requested: LatticeUpdate::EveryTimestep,
        };
        assert_eq!(
            reason.to_string(),
            "lattice updates AtOutput, trigger was EveryTimestep"
        );
    }

    #[test]
    fn outcome_is_updated() {
        assert!(LatticeUpdateOutcome::Updated(UpdateMetrics::default()).is_updated());
        assert!(!LatticeUpdateOutcome::Skipped(SkipReason::NoLattice).is_updated());
    }
}
