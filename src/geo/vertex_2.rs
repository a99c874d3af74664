use std::ops::{
    Add, AddAssign,
    Sub, SubAssign,
    Mul, Neg,
};
use std::fmt;
use serde::{Serialize, Deserialize};
use approx::{AbsDiffEq, RelativeEq};

use crate::geo::{Axis, Coordinates, Dimension, ProcResult, Tolerance};

/// A vertex in 2D space, with double precision coordinates.
/// Used both as a point and as an offset.
/// Equality is structural and exact; use `within` for a tolerance.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Default)]
pub struct Vertex2 {
    pub x: f64,
    pub y: f64,
}
impl Vertex2 {
    /// Create a new vertex. Any double is accepted.
    pub fn new(x: f64, y: f64) -> Self {
        Vertex2{x, y}
    }

    /// Create a new vertex, rejecting NaN and infinite coordinates.
    pub fn try_new(x: f64, y: f64) -> ProcResult<Self> {
        let vertex = Vertex2{x, y};
        vertex.check_finite()?;
        Ok(vertex)
    }

    /// Create a new zero vertex.
    pub fn zero() -> Self {
        Vertex2{x: 0.0, y: 0.0}
    }

    /// Check that both coordinates match the other vertex under a tolerance.
    pub fn within(&self, other: &Vertex2, tolerance: Tolerance) -> bool {
        tolerance.matches(self.x, other.x) &&
        tolerance.matches(self.y, other.y)
    }

    /// Get the distance between two vertices.
    pub fn distance(&self, other: &Vertex2) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;

        (dx*dx + dy*dy).sqrt()
    }

    /// Get the largest per-axis absolute difference.
    /// NaN if any axis difference is NaN.
    pub fn max_delta(&self, other: &Vertex2) -> f64 {
        nan_max((self.x - other.x).abs(), (self.y - other.y).abs())
    }
}
/// Maximum that keeps NaN instead of skipping it.
pub(crate) fn nan_max(a: f64, b: f64) -> f64 {
    if a.is_nan() || b.is_nan() {
        f64::NAN
    } else {
        a.max(b)
    }
}

impl Coordinates for Vertex2 {
    fn dimension(&self) -> Dimension {
        Dimension::Two
    }

    fn coord(&self, axis: Axis) -> Option<f64> {
        match axis {
            Axis::X => Some(self.x),
            Axis::Y => Some(self.y),
            Axis::Z => None,
        }
    }
}
impl fmt::Display for Vertex2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let precision = f.precision().unwrap_or(3);
        write!(f, "({:.*}, {:.*})", precision, self.x, precision, self.y)
    }
}
impl Add for Vertex2 {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Vertex2{
            x: self.x + rhs.x,
            y: self.y + rhs.y,
        }
    }
}
impl AddAssign for Vertex2 {
    fn add_assign(&mut self, rhs: Self) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}
impl Sub for Vertex2 {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Vertex2{
            x: self.x - rhs.x,
            y: self.y - rhs.y,
        }
    }
}
impl SubAssign for Vertex2 {
    fn sub_assign(&mut self, rhs: Self) {
        self.x -= rhs.x;
        self.y -= rhs.y;
    }
}
impl Mul<f64> for Vertex2 {
    type Output = Self;

    fn mul(self, rhs: f64) -> Self {
        Vertex2{
            x: self.x * rhs,
            y: self.y * rhs,
        }
    }
}
impl Neg for Vertex2 {
    type Output = Self;

    fn neg(self) -> Self {
        Vertex2{
            x: -self.x,
            y: -self.y,
        }
    }
}
impl From<[f64; 2]> for Vertex2 {
    fn from(coords: [f64; 2]) -> Self {
        Vertex2{x: coords[0], y: coords[1]}
    }
}
impl AbsDiffEq for Vertex2 {
    type Epsilon = f64;

    fn default_epsilon() -> f64 {
        f64::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: f64) -> bool {
        self.x.abs_diff_eq(&other.x, epsilon) &&
        self.y.abs_diff_eq(&other.y, epsilon)
    }
}
impl RelativeEq for Vertex2 {
    fn default_max_relative() -> f64 {
        f64::default_max_relative()
    }

    fn relative_eq(&self, other: &Self, epsilon: f64, max_relative: f64) -> bool {
        self.x.relative_eq(&other.x, epsilon, max_relative) &&
        self.y.relative_eq(&other.y, epsilon, max_relative)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn zero_and_default() {
        let v = Vertex2::zero();
        assert_eq!(v.x, 0.0);
        assert_eq!(v.y, 0.0);
        assert_eq!(Vertex2::default(), v);
    }

    #[test]
    fn new_accepts_non_finite() {
        let v = Vertex2::new(f64::NAN, f64::NEG_INFINITY);
        assert!(v.x.is_nan());
        assert_eq!(v.y, f64::NEG_INFINITY);
    }

    #[test]
    fn try_new_rejects_non_finite() {
        assert!(Vertex2::try_new(1.0, 2.0).is_ok());
        assert!(Vertex2::try_new(1.0, f64::NAN).is_err());
        assert!(Vertex2::try_new(f64::INFINITY, 2.0).is_err());
    }

    #[test]
    fn clone_is_independent() {
        let original = Vertex2::new(1.0, 2.0);
        let mut copy = original.clone();
        assert_eq!(copy, original);
        copy.x = 10.0;
        copy.y = -3.0;
        assert_eq!(original, Vertex2::new(1.0, 2.0));
        assert_ne!(copy, original);
    }

    #[test]
    fn within_checks_each_axis() {
        let tol = Tolerance::absolute(0.1).unwrap();
        let a = Vertex2::new(1.0, 2.0);
        assert!(a.within(&Vertex2::new(1.05, 1.95), tol));
        assert!(!a.within(&Vertex2::new(1.5, 2.0), tol));
        assert!(!a.within(&Vertex2::new(1.0, 2.5), tol));
        assert!(!a.within(&Vertex2::new(1.05, 2.0), Tolerance::EXACT));
    }

    #[test]
    fn arithmetic() {
        let a = Vertex2::new(1.0, 2.0);
        let b = Vertex2::new(0.5, -1.0);
        assert_eq!(a + b, Vertex2::new(1.5, 1.0));
        assert_eq!(a - b, Vertex2::new(0.5, 3.0));
        assert_eq!(-a * 2.0, Vertex2::new(-2.0, -4.0));
        let mut c = a;
        c += b;
        c -= b;
        assert_eq!(c, a);
        assert_relative_eq!(Vertex2::zero().distance(&Vertex2::new(3.0, 4.0)), 5.0);
        assert_relative_eq!(a.max_delta(&b), 3.0);
    }

    #[test]
    fn max_delta_keeps_nan() {
        let a = Vertex2::new(f64::NAN, 0.0);
        assert!(a.max_delta(&Vertex2::new(f64::NAN, 0.0)).is_nan());
        assert!(Vertex2::new(0.0, 5.0).max_delta(&Vertex2::new(0.0, f64::NAN)).is_nan());
        assert_eq!(Vertex2::new(f64::INFINITY, 0.0).max_delta(&Vertex2::zero()), f64::INFINITY);
    }

    #[test]
    fn display_precision() {
        let v = Vertex2::new(1.0, 2.26);
        assert_eq!(format!("{}", v), "(1.000, 2.260)");
        assert_eq!(format!("{:.1}", v), "(1.0, 2.3)");
    }

    #[test]
    fn approx_traits() {
        let a = Vertex2::new(0.1 + 0.2, 1.0);
        assert_relative_eq!(a, Vertex2::new(0.3, 1.0));
    }
}
