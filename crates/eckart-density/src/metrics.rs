//! Timing of a single lattice update.

use std::time::Duration;

/// Work done and time spent by one [`LatticeUpdater::update`](crate::LatticeUpdater::update).
///
/// All durations are wall-clock microseconds, saturating at `u64::MAX`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct UpdateMetrics {
    /// Number of lattice cells refreshed.
    pub cells: usize,
    /// Number of particles summed over all ensembles.
    pub particles: usize,
    /// Worker threads used for the refresh.
    pub workers: usize,
    /// Whether the derivatives were replaced by finite differences.
    pub finite_difference: bool,
    /// Time spent copying the net current out of the lattice (both snapshots).
    pub snapshot_us: u64,
    /// Time spent evaluating the cells.
    pub accumulate_us: u64,
    /// Time spent in the four-gradient operator and overwriting derivatives.
    pub gradient_us: u64,
    /// Wall-clock time for the entire update.
    pub total_us: u64,
}

/// Whole microseconds in `d`, saturating instead of truncating.
pub(crate) fn micros(d: Duration) -> u64 {
    u64::try_from(d.as_micros()).unwrap_or(u64::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn micros_saturates() {
        assert_eq!(micros(Duration::ZERO), 0);
        assert_eq!(micros(Duration::from_millis(3)), 3_000);
        assert_eq!(micros(Duration::from_nanos(1_999)), 1);
        assert_eq!(micros(Duration::MAX), u64::MAX);
    }

    #[test]
    fn default_metrics_are_zero() {
        let m = UpdateMetrics::default();
        assert_eq!(m.cells, 0);
        assert_eq!(m.particles, 0);
        assert_eq!(m.workers, 0);
        assert!(!m.finite_difference);
        assert_eq!(m.snapshot_us, 0);
        assert_eq!(m.accumulate_us, 0);
        assert_eq!(m.gradient_us, 0);
        assert_eq!(m.total_us, 0);
    }
}
