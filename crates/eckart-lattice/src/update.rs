//! Lattice update cadence.

/// When a lattice is refreshed during a run.
///
/// Each lattice is configured with one cadence; a driver passes the trigger
/// that fired, and lattices whose cadence does not match are left alone.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LatticeUpdate {
    /// Only when output is written.
    AtOutput,
    /// Every time step.
    EveryTimestep,
    /// At a fixed time interval independent of the time step.
    EveryFixedInterval,
}
