//! Rectangular box lattice with per-cell storage.

use std::ops::{Index, IndexMut};

use eckart_core::{FourVector, ThreeVector};
use smallvec::{smallvec, SmallVec};

use crate::edge::EdgeBehavior;
use crate::error::LatticeError;
use crate::update::LatticeUpdate;

/// Derivatives `[∂_t, ∂_x, ∂_y, ∂_z]` of a four-vector field at one cell.
pub type FourGradient = [FourVector; 4];

/// A three-dimensional box of equally sized cells, one `T` per cell.
///
/// Cells are stored x-fastest: `index = ix + nx·(iy + ny·iz)`. Cell centres
/// sit at `origin + (i + ½)·cell_size` along each axis.
///
/// # Examples
///
/// ```
/// use eckart_lattice::{EdgeBehavior, LatticeUpdate, RectangularLattice};
///
/// let lat: RectangularLattice<f64> = RectangularLattice::new(
///     [4.0, 4.0, 2.0],
///     [4, 4, 2],
///     [-2.0, -2.0, -1.0],
///     EdgeBehavior::Clamp,
///     LatticeUpdate::EveryTimestep,
/// )
/// .unwrap();
/// assert_eq!(lat.cell_count(), 32);
/// assert_eq!(lat.cell_center_at(0, 0, 0).x1(), -1.5);
/// ```
#[derive(Clone, Debug)]
pub struct RectangularLattice<T> {
    lattice_sizes: [f64; 3],
    n_cells: [usize; 3],
    cell_sizes: [f64; 3],
    origin: [f64; 3],
    edge: EdgeBehavior,
    when_update: LatticeUpdate,
    cells: Vec<T>,
}

impl<T: Clone + Default> RectangularLattice<T> {
    /// Create a lattice spanning `sizes` from `origin`, split into
    /// `n_cells` cells per axis, with every cell set to `T::default()`.
    ///
    /// Returns `Err(LatticeError::EmptyLattice)` if any axis has zero cells,
    /// or `Err(LatticeError::InvalidSize)` for a non-positive box edge.
    pub fn new(
        sizes: [f64; 3],
        n_cells: [usize; 3],
        origin: [f64; 3],
        edge: EdgeBehavior,
        when_update: LatticeUpdate,
    ) -> Result<Self, LatticeError> {
        if n_cells.contains(&0) {
            return Err(LatticeError::EmptyLattice);
        }
        for (axis, &value) in sizes.iter().enumerate() {
            if !value.is_finite() || value <= 0.0 {
                return Err(LatticeError::InvalidSize { axis, value });
            }
        }
        let total = n_cells
            .iter()
            .try_fold(1usize, |acc, &n| acc.checked_mul(n))
            .ok_or(LatticeError::TooManyCells)?;
        let cell_sizes = [
            sizes[0] / n_cells[0] as f64,
            sizes[1] / n_cells[1] as f64,
            sizes[2] / n_cells[2] as f64,
        ];
        Ok(Self {
            lattice_sizes: sizes,
            n_cells,
            cell_sizes,
            origin,
            edge,
            when_update,
            cells: vec![T::default(); total],
        })
    }

    /// An empty lattice of another cell type with this geometry.
    pub fn with_same_geometry<U: Clone + Default>(&self) -> RectangularLattice<U> {
        RectangularLattice {
            lattice_sizes: self.lattice_sizes,
            n_cells: self.n_cells,
            cell_sizes: self.cell_sizes,
            origin: self.origin,
            edge: self.edge,
            when_update: self.when_update,
            cells: vec![U::default(); self.cells.len()],
        }
    }
}

impl<T: Clone> RectangularLattice<T> {
    /// Set every cell to `value`.
    pub fn reset(&mut self, value: T) {
        self.cells.fill(value);
    }
}

impl<T> RectangularLattice<T> {
    /// Number of cells along each axis.
    pub fn n_cells(&self) -> [usize; 3] {
        self.n_cells
    }

    /// Total number of cells.
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// Box edge lengths.
    pub fn lattice_sizes(&self) -> [f64; 3] {
        self.lattice_sizes
    }

    /// Cell edge lengths.
    pub fn cell_sizes(&self) -> [f64; 3] {
        self.cell_sizes
    }

    /// Volume of one cell.
    pub fn cell_volume(&self) -> f64 {
        self.cell_sizes[0] * self.cell_sizes[1] * self.cell_sizes[2]
    }

    /// Lower corner of the box.
    pub fn origin(&self) -> [f64; 3] {
        self.origin
    }

    /// Edge behavior of the gradient operator.
    pub fn edge_behavior(&self) -> EdgeBehavior {
        self.edge
    }

    /// Configured update cadence.
    pub fn when_update(&self) -> LatticeUpdate {
        self.when_update
    }

    /// Flat index of cell `(ix, iy, iz)`.
    pub fn index_of(&self, ix: usize, iy: usize, iz: usize) -> usize {
        ix + self.n_cells[0] * (iy + self.n_cells[1] * iz)
    }

    /// Axis indices of a flat index.
    pub fn coords_of(&self, index: usize) -> [usize; 3] {
        let nx = self.n_cells[0];
        let ny = self.n_cells[1];
        [index % nx, (index / nx) % ny, index / (nx * ny)]
    }

    /// Centre of cell `(ix, iy, iz)`.
    pub fn cell_center_at(&self, ix: usize, iy: usize, iz: usize) -> ThreeVector {
        ThreeVector::new(
            self.origin[0] + self.cell_sizes[0] * (ix as f64 + 0.5),
            self.origin[1] + self.cell_sizes[1] * (iy as f64 + 0.5),
            self.origin[2] + self.cell_sizes[2] * (iz as f64 + 0.5),
        )
    }

    /// Centre of the cell with flat index `index`.
    pub fn cell_center(&self, index: usize) -> ThreeVector {
        let [ix, iy, iz] = self.coords_of(index);
        self.cell_center_at(ix, iy, iz)
    }

    /// Overwrite one cell.
    pub fn assign_value(&mut self, index: usize, value: T) {
        self.cells[index] = value;
    }

    /// All cells in storage order.
    pub fn as_slice(&self) -> &[T] {
        &self.cells
    }

    /// All cells in storage order, mutably.
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.cells
    }

    /// Iterate over the cells in storage order.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.cells.iter()
    }

    /// Iterate mutably over the cells in storage order.
    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, T> {
        self.cells.iter_mut()
    }

    /// `true` if both lattices cover the same box with the same cells.
    pub fn same_geometry<U>(&self, other: &RectangularLattice<U>) -> bool {
        self.n_cells == other.n_cells
            && self.lattice_sizes == other.lattice_sizes
            && self.origin == other.origin
            && self.edge == other.edge
    }

    /// Neighbour cells and weights for the derivative along `axis` at `coord`.
    ///
    /// Central difference inside the box, one-sided difference on a face
    /// without wrap, nothing for an axis with a single cell.
    fn axis_stencil(&self, coord: [usize; 3], axis: usize) -> SmallVec<[(usize, f64); 2]> {
        let n = self.n_cells[axis];
        if n < 2 {
            return SmallVec::new();
        }
        let h = self.cell_sizes[axis];
        let here = coord[axis] as i64;
        let at = |i: usize| {
            let mut c = coord;
            c[axis] = i;
            self.index_of(c[0], c[1], c[2])
        };
        let up = self.edge.resolve(here + 1, n);
        let down = self.edge.resolve(here - 1, n);
        match (down, up) {
            (Some(d), Some(u)) => smallvec![(at(u), 0.5 / h), (at(d), -0.5 / h)],
            (None, Some(u)) => smallvec![(at(u), 1.0 / h), (at(coord[axis]), -1.0 / h)],
            (Some(d), None) => smallvec![(at(coord[axis]), 1.0 / h), (at(d), -1.0 / h)],
            (None, None) => SmallVec::new(),
        }
    }

    /// Finite-difference four-gradient of a four-vector field.
    ///
    /// `old` and `new` hold the field at `t` and `t + dt` in storage order.
    /// For every cell `out[i] = [∂_t, ∂_x, ∂_y, ∂_z]`, where the time
    /// derivative is `(new − old) / dt` and the spatial derivatives are
    /// taken from `new`.
    pub fn compute_four_gradient(
        &self,
        old: &[FourVector],
        new: &[FourVector],
        dt: f64,
        out: &mut [FourGradient],
    ) -> Result<(), LatticeError> {
        let expected = self.cell_count();
        for (name, actual) in [("old", old.len()), ("new", new.len()), ("out", out.len())] {
            if actual != expected {
                return Err(LatticeError::ShapeMismatch {
                    name,
                    expected,
                    actual,
                });
            }
        }
        if !dt.is_finite() || dt <= 0.0 {
            return Err(LatticeError::InvalidTimeStep { value: dt });
        }

        for (i, grad) in out.iter_mut().enumerate() {
            let coord = self.coords_of(i);
            grad[0] = (new[i] - old[i]) / dt;
            for axis in 0..3 {
                let mut d = FourVector::ZERO;
                for (j, w) in self.axis_stencil(coord, axis) {
                    d += new[j] * w;
                }
                grad[axis + 1] = d;
            }
        }
        Ok(())
    }
}

impl RectangularLattice<FourVector> {
    /// Four-gradient of this lattice (the field at `t + dt`) against `old`
    /// (the field at `t`), written into `out`.
    ///
    /// All three lattices must share the same geometry.
    pub fn compute_four_gradient_lattice(
        &self,
        old: &RectangularLattice<FourVector>,
        dt: f64,
        out: &mut RectangularLattice<FourGradient>,
    ) -> Result<(), LatticeError> {
        if !self.same_geometry(old) || !self.same_geometry(out) {
            return Err(LatticeError::GeometryMismatch);
        }
        self.compute_four_gradient(old.as_slice(), self.as_slice(), dt, out.as_mut_slice())
    }
}

impl<T> Index<usize> for RectangularLattice<T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        &self.cells[index]
    }
}

impl<T> IndexMut<usize> for RectangularLattice<T> {
    fn index_mut(&mut self, index: usize) -> &mut T {
        &mut self.cells[index]
    }
}

impl<'a, T> IntoIterator for &'a RectangularLattice<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.cells.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut RectangularLattice<T> {
    type Item = &'a mut T;
    type IntoIter = std::slice::IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.cells.iter_mut()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn lattice<T: Clone + Default>(n: [usize; 3], edge: EdgeBehavior) -> RectangularLattice<T> {
        RectangularLattice::new(
            [n[0] as f64, n[1] as f64, n[2] as f64],
            n,
            [0.0; 3],
            edge,
            LatticeUpdate::EveryTimestep,
        )
        .unwrap()
    }

    #[test]
    fn new_rejects_empty_axis() {
        let r: Result<RectangularLattice<f64>, _> = RectangularLattice::new(
            [1.0; 3],
            [2, 0, 2],
            [0.0; 3],
            EdgeBehavior::Clamp,
            LatticeUpdate::AtOutput,
        );
        assert_eq!(r.unwrap_err(), LatticeError::EmptyLattice);
    }

    #[test]
    fn new_rejects_bad_size() {
        let r: Result<RectangularLattice<f64>, _> = RectangularLattice::new(
            [1.0, -1.0, 1.0],
            [2, 2, 2],
            [0.0; 3],
            EdgeBehavior::Clamp,
            LatticeUpdate::AtOutput,
        );
        assert!(matches!(r, Err(LatticeError::InvalidSize { axis: 1, .. })));
    }

    #[test]
    fn index_roundtrip() {
        let lat: RectangularLattice<u8> = lattice([3, 4, 5], EdgeBehavior::Clamp);
        for i in 0..lat.cell_count() {
            let [x, y, z] = lat.coords_of(i);
            assert_eq!(lat.index_of(x, y, z), i);
        }
    }

    #[test]
    fn cell_centers() {
        let lat: RectangularLattice<u8> = RectangularLattice::new(
            [2.0, 4.0, 6.0],
            [2, 2, 2],
            [-1.0, -2.0, -3.0],
            EdgeBehavior::Clamp,
            LatticeUpdate::AtOutput,
        )
        .unwrap();
        assert_eq!(lat.cell_center(0), ThreeVector::new(-0.5, -1.0, -1.5));
        assert_eq!(lat.cell_center(7), ThreeVector::new(0.5, 1.0, 1.5));
        assert_eq!(lat.cell_volume(), 6.0);
        assert_eq!(lat.lattice_sizes(), [2.0, 4.0, 6.0]);
        assert_eq!(lat.cell_sizes(), [1.0, 2.0, 3.0]);
        assert_eq!(lat.origin(), [-1.0, -2.0, -3.0]);
    }

    #[test]
    fn assign_and_reset() {
        let mut lat: RectangularLattice<f64> = lattice([2, 2, 2], EdgeBehavior::Clamp);
        lat.assign_value(3, 5.0);
        assert_eq!(lat[3], 5.0);
        lat.reset(1.0);
        assert!(lat.iter().all(|&v| v == 1.0));
    }

    #[test]
    fn constant_field_has_zero_gradient() {
        let lat: RectangularLattice<FourVector> = lattice([4, 3, 2], EdgeBehavior::Clamp);
        let field = vec![FourVector::new(1.0, 2.0, 3.0, 4.0); lat.cell_count()];
        let mut out = vec![[FourVector::ZERO; 4]; lat.cell_count()];
        lat.compute_four_gradient(&field, &field, 0.1, &mut out).unwrap();
        for grad in &out {
            for d in grad {
                assert_eq!(*d, FourVector::ZERO);
            }
        }
    }

    #[test]
    fn linear_field_gradient_is_exact_on_clamp_lattice() {
        // j0 = 2x - 3y + 0.5z on a 5x4x3 box with unit cells.
        let lat: RectangularLattice<FourVector> = lattice([5, 4, 3], EdgeBehavior::Clamp);
        let field: Vec<FourVector> = (0..lat.cell_count())
            .map(|i| {
                let c = lat.cell_center(i);
                FourVector::new(2.0 * c.x1() - 3.0 * c.x2() + 0.5 * c.x3(), 0.0, 0.0, 0.0)
            })
            .collect();
        let shift = FourVector::new(0.2, 0.0, 0.0, 0.0);
        let old: Vec<FourVector> = field.iter().map(|j| *j - shift).collect();
        let mut out = vec![[FourVector::ZERO; 4]; lat.cell_count()];
        lat.compute_four_gradient(&old, &field, 0.1, &mut out).unwrap();
        for grad in &out {
            assert!((grad[0].x0() - 2.0).abs() < 1e-12);
            assert!((grad[1].x0() - 2.0).abs() < 1e-12);
            assert!((grad[2].x0() + 3.0).abs() < 1e-12);
            assert!((grad[3].x0() - 0.5).abs() < 1e-12);
        }
    }

    #[test]
    fn wrap_gradient_at_boundary() {
        // 4 cells along x, values 0,10,20,30; periodic.
        let lat: RectangularLattice<FourVector> = lattice([4, 1, 1], EdgeBehavior::Wrap);
        let field: Vec<FourVector> = (0..4)
            .map(|i| FourVector::new(10.0 * i as f64, 0.0, 0.0, 0.0))
            .collect();
        let mut out = vec![[FourVector::ZERO; 4]; 4];
        lat.compute_four_gradient(&field, &field, 1.0, &mut out).unwrap();
        // Cell 0: (10 - 30) / 2 = -10.
        assert!((out[0][1].x0() + 10.0).abs() < 1e-12);
        assert!((out[1][1].x0() - 10.0).abs() < 1e-12);
        // Single-cell axes have no derivative.
        assert_eq!(out[0][2], FourVector::ZERO);
        assert_eq!(out[0][3], FourVector::ZERO);
    }

    #[test]
    fn shape_mismatch_is_reported() {
        let lat: RectangularLattice<FourVector> = lattice([2, 2, 2], EdgeBehavior::Clamp);
        let field = vec![FourVector::ZERO; 8];
        let short = vec![FourVector::ZERO; 7];
        let mut out = vec![[FourVector::ZERO; 4]; 8];
        let err = lat.compute_four_gradient(&short, &field, 1.0, &mut out).unwrap_err();
        assert_eq!(
            err,
            LatticeError::ShapeMismatch {
                name: "old",
                expected: 8,
                actual: 7
            }
        );
        assert!(err.to_string().contains("7 elements"));
    }

    #[test]
    fn invalid_time_step_is_reported() {
        let lat: RectangularLattice<FourVector> = lattice([2, 2, 2], EdgeBehavior::Clamp);
        let field = vec![FourVector::ZERO; 8];
        let mut out = vec![[FourVector::ZERO; 4]; 8];
        let err = lat.compute_four_gradient(&field, &field, 0.0, &mut out).unwrap_err();
        assert!(matches!(err, LatticeError::InvalidTimeStep { .. }));
    }

    #[test]
    fn lattice_variant_checks_geometry() {
        let new: RectangularLattice<FourVector> = lattice([2, 2, 2], EdgeBehavior::Clamp);
        let old: RectangularLattice<FourVector> = lattice([2, 2, 3], EdgeBehavior::Clamp);
        let mut out: RectangularLattice<FourGradient> = new.with_same_geometry();
        assert_eq!(out.lattice_sizes(), new.lattice_sizes());
        assert_eq!(out.origin(), new.origin());
        assert_eq!(out.edge_behavior(), EdgeBehavior::Clamp);
        assert_eq!(out.when_update(), new.when_update());
        assert_eq!(
            new.compute_four_gradient_lattice(&old, 1.0, &mut out),
            Err(LatticeError::GeometryMismatch)
        );
        let old = new.clone();
        assert!(new.compute_four_gradient_lattice(&old, 1.0, &mut out).is_ok());
    }

    proptest! {
        #[test]
        fn linear_field_gradient_is_exact_for_any_slope(
            a in -5.0f64..5.0, b in -5.0f64..5.0, c in -5.0f64..5.0,
            nx in 2usize..6, ny in 2usize..6, nz in 2usize..6,
        ) {
            let lat: RectangularLattice<FourVector> = lattice([nx, ny, nz], EdgeBehavior::Clamp);
            let field: Vec<FourVector> = (0..lat.cell_count())
                .map(|i| {
                    let r = lat.cell_center(i);
                    FourVector::new(0.0, a * r.x1() + b * r.x2() + c * r.x3(), 0.0, 0.0)
                })
                .collect();
            let mut out = vec![[FourVector::ZERO; 4]; lat.cell_count()];
            lat.compute_four_gradient(&field, &field, 1.0, &mut out).unwrap();
            for grad in &out {
                prop_assert!((grad[1].x1() - a).abs() < 1e-9);
                prop_assert!((grad[2].x1() - b).abs() < 1e-9);
                prop_assert!((grad[3].x1() - c).abs() < 1e-9);
            }
        }
    }
}
