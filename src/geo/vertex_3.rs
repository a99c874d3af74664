use std::ops::{
    Add, AddAssign,
    Sub, SubAssign,
    Mul, Neg,
};
use std::fmt;
use serde::{Serialize, Deserialize};
use approx::{AbsDiffEq, RelativeEq};

use crate::geo::{Axis, Coordinates, Dimension, ProcResult, Tolerance, Vertex2};
use crate::geo::vertex_2::nan_max;

/// A vertex in 3D space, with double precision coordinates.
/// Built from a 2D vertex plus the z coordinate; serialized flat as `{x, y, z}`.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Default)]
pub struct Vertex3 {
    #[serde(flatten)]
    pub xy: Vertex2,
    pub z: f64,
}
impl Vertex3 {
    /// Create a new vertex. Any double is accepted.
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Vertex3{xy: Vertex2::new(x, y), z}
    }

    /// Create a new vertex, rejecting NaN and infinite coordinates.
    pub fn try_new(x: f64, y: f64, z: f64) -> ProcResult<Self> {
        let vertex = Vertex3::new(x, y, z);
        vertex.check_finite()?;
        Ok(vertex)
    }

    /// Lift a 2D vertex to 3D.
    pub fn from_2d(xy: Vertex2, z: f64) -> Self {
        Vertex3{xy, z}
    }

    /// Create a new zero vertex.
    pub fn zero() -> Self {
        Vertex3{xy: Vertex2::zero(), z: 0.0}
    }

    /// Get the x coordinate.
    pub fn x(&self) -> f64 {
        self.xy.x
    }

    /// Get the y coordinate.
    pub fn y(&self) -> f64 {
        self.xy.y
    }

    /// Check that all three coordinates match the other vertex under a tolerance.
    pub fn within(&self, other: &Vertex3, tolerance: Tolerance) -> bool {
        self.xy.within(&other.xy, tolerance) &&
        tolerance.matches(self.z, other.z)
    }

    /// Get the distance between two vertices.
    pub fn distance(&self, other: &Vertex3) -> f64 {
        let dx = self.xy.x - other.xy.x;
        let dy = self.xy.y - other.xy.y;
        let dz = self.z - other.z;

        (dx*dx + dy*dy + dz*dz).sqrt()
    }

    /// Get the largest per-axis absolute difference.
    /// NaN if any axis difference is NaN.
    pub fn max_delta(&self, other: &Vertex3) -> f64 {
        nan_max(self.xy.max_delta(&other.xy), (self.z - other.z).abs())
    }
}
impl Coordinates for Vertex3 {
    fn dimension(&self) -> Dimension {
        Dimension::Three
    }

    fn coord(&self, axis: Axis) -> Option<f64> {
        match axis {
            Axis::Z => Some(self.z),
            _ => self.xy.coord(axis),
        }
    }
}
impl fmt::Display for Vertex3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let precision = f.precision().unwrap_or(3);
        write!(f, "({:.*}, {:.*}, {:.*})", precision, self.xy.x, precision, self.xy.y, precision, self.z)
    }
}
impl Add for Vertex3 {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Vertex3{
            xy: self.xy + rhs.xy,
            z: self.z + rhs.z,
        }
    }
}
impl AddAssign for Vertex3 {
    fn add_assign(&mut self, rhs: Self) {
        self.xy += rhs.xy;
        self.z += rhs.z;
    }
}
impl Sub for Vertex3 {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Vertex3{
            xy: self.xy - rhs.xy,
            z: self.z - rhs.z,
        }
    }
}
impl SubAssign for Vertex3 {
    fn sub_assign(&mut self, rhs: Self) {
        self.xy -= rhs.xy;
        self.z -= rhs.z;
    }
}
impl Mul<f64> for Vertex3 {
    type Output = Self;

    fn mul(self, rhs: f64) -> Self {
        Vertex3{
            xy: self.xy * rhs,
            z: self.z * rhs,
        }
    }
}
impl Neg for Vertex3 {
    type Output = Self;

    fn neg(self) -> Self {
        Vertex3{
            xy: -self.xy,
            z: -self.z,
        }
    }
}
impl From<[f64; 3]> for Vertex3 {
    fn from(coords: [f64; 3]) -> Self {
        Vertex3::new(coords[0], coords[1], coords[2])
    }
}
impl AbsDiffEq for Vertex3 {
    type Epsilon = f64;

    fn default_epsilon() -> f64 {
        f64::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: f64) -> bool {
        self.xy.abs_diff_eq(&other.xy, epsilon) &&
        self.z.abs_diff_eq(&other.z, epsilon)
    }
}
impl RelativeEq for Vertex3 {
    fn default_max_relative() -> f64 {
        f64::default_max_relative()
    }

    fn relative_eq(&self, other: &Self, epsilon: f64, max_relative: f64) -> bool {
        self.xy.relative_eq(&other.xy, epsilon, max_relative) &&
        self.z.relative_eq(&other.z, epsilon, max_relative)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn zero_and_default() {
        let v = Vertex3::zero();
        assert_eq!(v.x(), 0.0);
        assert_eq!(v.y(), 0.0);
        assert_eq!(v.z, 0.0);
        assert_eq!(Vertex3::default(), v);
    }

    #[test]
    fn clone_equals_original() {
        for (x, y, z) in [(0.0, 0.0, 0.0), (1.5, -2.0, 3.25), (f64::MAX, f64::MIN_POSITIVE, -0.0)] {
            let v = Vertex3::new(x, y, z);
            assert_eq!(v.clone(), Vertex3::new(x, y, z));
            assert!(v.clone().within(&v, Tolerance::EXACT));
        }
    }

    #[test]
    fn clone_is_independent() {
        let original = Vertex3::new(1.0, 2.0, 3.0);
        let mut copy = original.clone();
        copy.xy.x = 7.0;
        copy.z = 9.0;
        assert_eq!(original, Vertex3::new(1.0, 2.0, 3.0));
        assert_eq!(copy, Vertex3::new(7.0, 2.0, 9.0));
    }

    #[test]
    fn z_only_change_is_unequal() {
        let a = Vertex3::new(1.0, 2.0, 3.0);
        let b = Vertex3::new(1.0, 2.0, 3.5);
        assert_ne!(a, b);
        assert!(!a.within(&b, Tolerance::EXACT));
    }

    #[test]
    fn x_is_compared_with_x() {
        // x equal to the other's y must not count as a match
        let a = Vertex3::new(2.0, 2.0, 3.0);
        let b = Vertex3::new(5.0, 2.0, 3.0);
        assert_ne!(a, b);
        assert!(!a.within(&b, Tolerance::EXACT));
        assert!(!b.within(&a, Tolerance::absolute(1.0).unwrap()));
    }

    #[test]
    fn try_new_names_bad_axis() {
        assert!(Vertex3::try_new(0.0, 0.0, 0.0).is_ok());
        assert_eq!(
            Vertex3::try_new(0.0, f64::INFINITY, 0.0),
            Err(crate::geo::GeoError::NonFinite{axis: Axis::Y, value: f64::INFINITY})
        );
    }

    #[test]
    fn projection_round_trip() {
        let xy = Vertex2::new(1.0, -1.0);
        let v = Vertex3::from_2d(xy, 4.0);
        assert_eq!(v.xy, xy);
        assert_eq!(v.coord(Axis::Z), Some(4.0));
        assert_eq!(v.coord(Axis::X), Some(1.0));
    }

    #[test]
    fn arithmetic_and_distance() {
        let a = Vertex3::new(1.0, 2.0, 2.0);
        assert_relative_eq!(a.distance(&Vertex3::zero()), 3.0);
        assert_eq!(a - a, Vertex3::zero());
        assert_eq!(a + (-a), Vertex3::zero());
        assert_eq!(a * 0.5, Vertex3::new(0.5, 1.0, 1.0));
        assert_relative_eq!(a.max_delta(&Vertex3::new(1.0, 2.5, -1.0)), 3.0);
    }

    #[test]
    fn max_delta_keeps_nan_on_any_axis() {
        let a = Vertex3::new(0.0, 0.0, f64::NAN);
        assert!(a.max_delta(&Vertex3::new(9.0, 0.0, 0.0)).is_nan());
        let b = Vertex3::new(f64::NAN, 0.0, 0.0);
        assert!(b.max_delta(&Vertex3::new(0.0, 0.0, 9.0)).is_nan());
    }

    #[test]
    fn serializes_flat() {
        let v = Vertex3::new(1.0, 2.0, 3.0);
        let json = serde_json::to_string(&v).unwrap();
        assert_eq!(json, r#"{"x":1.0,"y":2.0,"z":3.0}"#);
        let back: Vertex3 = serde_json::from_str(&json).unwrap();
        assert_eq!(back, v);
    }

    #[test]
    fn display() {
        assert_eq!(format!("{:.2}", Vertex3::new(1.0, 2.0, 3.0)), "(1.00, 2.00, 3.00)");
    }
}
