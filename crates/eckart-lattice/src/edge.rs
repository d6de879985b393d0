//! Spatial edge (boundary) behavior for the lattice gradient.

/// How the lattice treats neighbours of cells on its faces.
///
/// # Examples
///
/// ```
/// use eckart_lattice::EdgeBehavior;
///
/// assert_eq!(EdgeBehavior::Wrap.resolve(-1, 5), Some(4));
/// assert_eq!(EdgeBehavior::Clamp.resolve(-1, 5), None);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EdgeBehavior {
    /// Out-of-box neighbours do not exist; the gradient falls back to a
    /// one-sided difference on the faces.
    Clamp,
    /// Out-of-box neighbours wrap to the opposite face (periodic box).
    Wrap,
}

impl EdgeBehavior {
    /// Resolve a single axis index under this edge behavior.
    /// Returns `None` for an out-of-range index without wrap.
    pub fn resolve(self, val: i64, len: usize) -> Option<usize> {
        let n = len as i64;
        if val >= 0 && val < n {
            return Some(val as usize);
        }
        match self {
            Self::Clamp => None,
            Self::Wrap => Some((((val % n) + n) % n) as usize),
        }
    }
}
