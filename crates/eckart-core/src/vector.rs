//! Three- and four-vectors with Minkowski metric `(+, -, -, -)`.

use std::fmt;
use std::ops::{
    Add, AddAssign, Div, DivAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign,
};

use crate::REALLY_SMALL;

/// A spatial vector `(x1, x2, x3)`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ThreeVector([f64; 3]);

impl ThreeVector {
    /// The zero vector.
    pub const ZERO: Self = Self([0.0; 3]);

    /// Create a vector from its three components.
    pub const fn new(x1: f64, x2: f64, x3: f64) -> Self {
        Self([x1, x2, x3])
    }

    /// First component.
    pub fn x1(&self) -> f64 {
        self.0[0]
    }

    /// Second component.
    pub fn x2(&self) -> f64 {
        self.0[1]
    }

    /// Third component.
    pub fn x3(&self) -> f64 {
        self.0[2]
    }

    /// Euclidean dot product.
    pub fn dot(&self, other: &Self) -> f64 {
        self.0[0] * other.0[0] + self.0[1] * other.0[1] + self.0[2] * other.0[2]
    }

    /// Squared Euclidean norm.
    pub fn sqr(&self) -> f64 {
        self.dot(self)
    }

    /// Euclidean norm.
    pub fn abs(&self) -> f64 {
        self.sqr().sqrt()
    }

    /// Components as an array.
    pub fn to_array(self) -> [f64; 3] {
        self.0
    }

    /// Iterate over the components.
    pub fn iter(&self) -> impl Iterator<Item = &f64> {
        self.0.iter()
    }
}

impl From<[f64; 3]> for ThreeVector {
    fn from(v: [f64; 3]) -> Self {
        Self(v)
    }
}

impl Index<usize> for ThreeVector {
    type Output = f64;

    fn index(&self, i: usize) -> &f64 {
        &self.0[i]
    }
}

impl IndexMut<usize> for ThreeVector {
    fn index_mut(&mut self, i: usize) -> &mut f64 {
        &mut self.0[i]
    }
}

impl Add for ThreeVector {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self([self.0[0] + rhs.0[0], self.0[1] + rhs.0[1], self.0[2] + rhs.0[2]])
    }
}

impl Sub for ThreeVector {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self([self.0[0] - rhs.0[0], self.0[1] - rhs.0[1], self.0[2] - rhs.0[2]])
    }
}

impl Neg for ThreeVector {
    type Output = Self;

    fn neg(self) -> Self {
        Self([-self.0[0], -self.0[1], -self.0[2]])
    }
}

impl Mul<f64> for ThreeVector {
    type Output = Self;

    fn mul(self, a: f64) -> Self {
        Self([self.0[0] * a, self.0[1] * a, self.0[2] * a])
    }
}

impl Mul<ThreeVector> for f64 {
    type Output = ThreeVector;

    fn mul(self, v: ThreeVector) -> ThreeVector {
        v * self
    }
}

impl Div<f64> for ThreeVector {
    type Output = Self;

    fn div(self, a: f64) -> Self {
        Self([self.0[0] / a, self.0[1] / a, self.0[2] / a])
    }
}

impl AddAssign for ThreeVector {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl SubAssign for ThreeVector {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl MulAssign<f64> for ThreeVector {
    fn mul_assign(&mut self, a: f64) {
        *self = *self * a;
    }
}

impl DivAssign<f64> for ThreeVector {
    fn div_assign(&mut self, a: f64) {
        *self = *self / a;
    }
}

impl fmt::Display for ThreeVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.0[0], self.0[1], self.0[2])
    }
}

/// A four-vector `(x0, x1, x2, x3)`; component 0 is time or energy.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct FourVector([f64; 4]);

impl FourVector {
    /// The zero four-vector.
    pub const ZERO: Self = Self([0.0; 4]);

    /// Create a four-vector from its components.
    pub const fn new(x0: f64, x1: f64, x2: f64, x3: f64) -> Self {
        Self([x0, x1, x2, x3])
    }

    /// Create a four-vector from a time component and a spatial part.
    pub fn from_parts(x0: f64, v: ThreeVector) -> Self {
        Self([x0, v.x1(), v.x2(), v.x3()])
    }

    /// Time (or energy) component.
    pub fn x0(&self) -> f64 {
        self.0[0]
    }

    /// First spatial component.
    pub fn x1(&self) -> f64 {
        self.0[1]
    }

    /// Second spatial component.
    pub fn x2(&self) -> f64 {
        self.0[2]
    }

    /// Third spatial component.
    pub fn x3(&self) -> f64 {
        self.0[3]
    }

    /// Spatial part.
    pub fn threevec(&self) -> ThreeVector {
        ThreeVector::new(self.0[1], self.0[2], self.0[3])
    }

    /// Minkowski product `a⁰b⁰ − a⃗·b⃗`.
    pub fn dot(&self, other: &Self) -> f64 {
        self.0[0] * other.0[0] - self.threevec().dot(&other.threevec())
    }

    /// Minkowski square `x⁰² − |x⃗|²`.
    pub fn sqr(&self) -> f64 {
        self.dot(self)
    }

    /// Invariant length.
    ///
    /// For time-like (and numerically light-like) vectors this is the usual
    /// root of [`sqr`](Self::sqr); space-like vectors return the negative root
    /// of its magnitude so the sign of the interval survives.
    pub fn abs(&self) -> f64 {
        let s = self.sqr();
        if s > -REALLY_SMALL {
            s.abs().sqrt()
        } else {
            -s.abs().sqrt()
        }
    }

    /// Velocity `x⃗ / x⁰` of a momentum four-vector.
    pub fn velocity(&self) -> ThreeVector {
        self.threevec() / self.0[0]
    }

    /// Lorentz boost into the frame moving with velocity `v` (units of c).
    ///
    /// A velocity at or above the speed of light yields a zero gamma factor.
    pub fn lorentz_boost(&self, v: ThreeVector) -> Self {
        let v_sqr = v.sqr();
        let gamma = if v_sqr < 1.0 {
            1.0 / (1.0 - v_sqr).sqrt()
        } else {
            0.0
        };
        let x0_prime = gamma * (self.0[0] - self.threevec().dot(&v));
        let shared = gamma / (gamma + 1.0) * (x0_prime + self.0[0]);
        Self::from_parts(x0_prime, self.threevec() - v * shared)
    }

    /// Components as an array.
    pub fn to_array(self) -> [f64; 4] {
        self.0
    }
}

impl From<[f64; 4]> for FourVector {
    fn from(v: [f64; 4]) -> Self {
        Self(v)
    }
}

impl Index<usize> for FourVector {
    type Output = f64;

    fn index(&self, i: usize) -> &f64 {
        &self.0[i]
    }
}

impl IndexMut<usize> for FourVector {
    fn index_mut(&mut self, i: usize) -> &mut f64 {
        &mut self.0[i]
    }
}

impl Add for FourVector {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self([
            self.0[0] + rhs.0[0],
            self.0[1] + rhs.0[1],
            self.0[2] + rhs.0[2],
            self.0[3] + rhs.0[3],
        ])
    }
}

impl Sub for FourVector {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self([
            self.0[0] - rhs.0[0],
            self.0[1] - rhs.0[1],
            self.0[2] - rhs.0[2],
            self.0[3] - rhs.0[3],
        ])
    }
}

impl Neg for FourVector {
    type Output = Self;

    fn neg(self) -> Self {
        Self([-self.0[0], -self.0[1], -self.0[2], -self.0[3]])
    }
}

impl Mul<f64> for FourVector {
    type Output = Self;

    fn mul(self, a: f64) -> Self {
        Self([self.0[0] * a, self.0[1] * a, self.0[2] * a, self.0[3] * a])
    }
}

impl Mul<FourVector> for f64 {
    type Output = FourVector;

    fn mul(self, v: FourVector) -> FourVector {
        v * self
    }
}

impl Div<f64> for FourVector {
    type Output = Self;

    fn div(self, a: f64) -> Self {
        Self([self.0[0] / a, self.0[1] / a, self.0[2] / a, self.0[3] / a])
    }
}

impl AddAssign for FourVector {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl SubAssign for FourVector {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl MulAssign<f64> for FourVector {
    fn mul_assign(&mut self, a: f64) {
        *self = *self * a;
    }
}

impl DivAssign<f64> for FourVector {
    fn div_assign(&mut self, a: f64) {
        *self = *self / a;
    }
}

impl fmt::Display for FourVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({}, {}, {}, {})",
            self.0[0], self.0[1], self.0[2], self.0[3]
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn approx(a: f64, b: f64, tol: f64) -> bool {
        (a - b).abs() <= tol * (1.0 + a.abs().max(b.abs()))
    }

    #[test]
    fn three_vector_algebra() {
        let a = ThreeVector::new(1.0, 2.0, 3.0);
        let b = ThreeVector::new(-2.0, 0.5, 4.0);
        assert_eq!(a + b, ThreeVector::new(-1.0, 2.5, 7.0));
        assert_eq!(a - b, ThreeVector::new(3.0, 1.5, -1.0));
        assert_eq!(a * 2.0, ThreeVector::new(2.0, 4.0, 6.0));
        assert_eq!(a.dot(&b), -2.0 + 1.0 + 12.0);
        assert_eq!(a.sqr(), 14.0);
        assert_eq!(a[2], 3.0);
    }

    #[test]
    fn minkowski_square_of_rest_momentum_is_mass_squared() {
        let p = FourVector::new(0.938, 0.0, 0.0, 0.0);
        assert!(approx(p.sqr(), 0.938 * 0.938, 1e-15));
        assert!(approx(p.abs(), 0.938, 1e-15));
    }

    #[test]
    fn space_like_abs_is_negative() {
        let j = FourVector::new(0.0, 2.0, 0.0, 0.0);
        assert_eq!(j.abs(), -2.0);
    }

    #[test]
    fn zero_vector_abs_is_zero() {
        assert_eq!(FourVector::ZERO.abs(), 0.0);
        assert_eq!(FourVector::default(), FourVector::ZERO);
    }

    #[test]
    fn boost_of_rest_momentum_gives_moving_particle() {
        let m = 0.138;
        let v = ThreeVector::new(0.6, 0.0, 0.0);
        // Boosting into a frame moving with -v makes the particle move with +v.
        let p = FourVector::new(m, 0.0, 0.0, 0.0).lorentz_boost(-v);
        let gamma = 1.0 / (1.0 - 0.36f64).sqrt();
        assert!(approx(p.x0(), gamma * m, 1e-14));
        assert!(approx(p.x1(), gamma * m * 0.6, 1e-14));
        assert!(approx(p.velocity().x1(), 0.6, 1e-14));
    }

    #[test]
    fn superluminal_boost_collapses_to_zero_gamma() {
        let p = FourVector::new(1.0, 0.0, 0.0, 0.0);
        let boosted = p.lorentz_boost(ThreeVector::new(1.0, 0.0, 0.0));
        assert_eq!(boosted.x0(), 0.0);
    }

    proptest! {
        #[test]
        fn boost_preserves_invariant_mass(
            e in 1.0f64..10.0,
            px in -0.5f64..0.5, py in -0.5f64..0.5, pz in -0.5f64..0.5,
            vx in -0.5f64..0.5, vy in -0.5f64..0.5, vz in -0.5f64..0.5,
        ) {
            let p = FourVector::new(e, px, py, pz);
            let boosted = p.lorentz_boost(ThreeVector::new(vx, vy, vz));
            prop_assert!(approx(p.sqr(), boosted.sqr(), 1e-10));
        }

        #[test]
        fn boost_there_and_back_is_identity(
            e in 1.0f64..10.0,
            px in -0.5f64..0.5, py in -0.5f64..0.5, pz in -0.5f64..0.5,
            vx in -0.4f64..0.4, vy in -0.4f64..0.4, vz in -0.4f64..0.4,
        ) {
            let p = FourVector::new(e, px, py, pz);
            let v = ThreeVector::new(vx, vy, vz);
            let back = p.lorentz_boost(v).lorentz_boost(-v);
            for i in 0..4 {
                prop_assert!(approx(back[i], p[i], 1e-10));
            }
        }
    }
}
