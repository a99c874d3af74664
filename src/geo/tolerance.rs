use std::fmt;
use serde::{Serialize, Deserialize};

use crate::geo::{Coordinates, GeoError, ProcResult};

/// Absolute tolerance for coordinate comparison.
/// Two coordinates match when they are equal or differ by at most `epsilon`.
/// The default epsilon of zero is exact equality.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct Tolerance {
    epsilon: f64,
}
impl Tolerance {
    /// Exact comparison.
    pub const EXACT: Tolerance = Tolerance{epsilon: 0.0};

    /// Create a tolerance with an absolute epsilon.
    /// Fails for negative, infinite or NaN epsilon.
    pub fn absolute(epsilon: f64) -> ProcResult<Self> {
        if !epsilon.is_finite() || epsilon < 0.0 {
            return Err(GeoError::InvalidTolerance(epsilon));
        }
        Ok(Tolerance{epsilon})
    }

    /// Get the epsilon.
    pub fn epsilon(&self) -> f64 {
        self.epsilon
    }

    /// Check whether two coordinates match.
    /// Equal infinities match, NaN never does.
    pub fn matches(&self, a: f64, b: f64) -> bool {
        a == b || (a - b).abs() <= self.epsilon
    }
}
impl Default for Tolerance {
    fn default() -> Self {
        Tolerance::EXACT
    }
}
impl TryFrom<f64> for Tolerance {
    type Error = GeoError;

    fn try_from(epsilon: f64) -> ProcResult<Self> {
        Tolerance::absolute(epsilon)
    }
}
impl From<Tolerance> for f64 {
    fn from(tolerance: Tolerance) -> f64 {
        tolerance.epsilon
    }
}
impl fmt::Display for Tolerance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.epsilon == 0.0 {
            write!(f, "exact")
        } else {
            write!(f, "±{:e}", self.epsilon)
        }
    }
}

/// Rule for non-finite coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[derive(clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum NumericPolicy {
    /// Accept NaN and infinite coordinates.
    #[default]
    Permissive,
    /// Reject NaN and infinite coordinates.
    Finite,
}
impl NumericPolicy {
    /// Check a vertex against the policy.
    pub fn check<V: Coordinates>(&self, vertex: &V) -> ProcResult<()> {
        match self {
            NumericPolicy::Permissive => Ok(()),
            NumericPolicy::Finite => vertex.check_finite(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geo::{Axis, Vertex2};

    #[test]
    fn exact_is_default() {
        assert_eq!(Tolerance::default(), Tolerance::EXACT);
        assert_eq!(Tolerance::default().epsilon(), 0.0);
        assert!(Tolerance::EXACT.matches(1.5, 1.5));
        assert!(!Tolerance::EXACT.matches(1.0, 1.0 + f64::EPSILON));
    }

    #[test]
    fn boundary_is_inclusive() {
        let tol = Tolerance::absolute(0.5).unwrap();
        assert!(tol.matches(1.0, 1.5));
        assert!(tol.matches(1.5, 1.0));
        assert!(!tol.matches(1.0, 1.5001));
    }

    #[test]
    fn non_finite_values() {
        let tol = Tolerance::absolute(1.0).unwrap();
        assert!(tol.matches(f64::INFINITY, f64::INFINITY));
        assert!(!tol.matches(f64::INFINITY, f64::NEG_INFINITY));
        assert!(!tol.matches(f64::NAN, f64::NAN));
        assert!(!tol.matches(f64::NAN, 0.0));
    }

    #[test]
    fn invalid_epsilon() {
        assert_eq!(Tolerance::absolute(-1.0), Err(GeoError::InvalidTolerance(-1.0)));
        assert!(Tolerance::absolute(f64::NAN).is_err());
        assert_eq!(Tolerance::absolute(f64::INFINITY), Err(GeoError::InvalidTolerance(f64::INFINITY)));
        assert!(Tolerance::absolute(f64::NEG_INFINITY).is_err());
        assert!(Tolerance::absolute(f64::MAX).is_ok());
    }

    #[test]
    fn deserialize_rejects_negative() {
        let tol: Tolerance = serde_yaml::from_str("0.25").unwrap();
        assert_eq!(tol.epsilon(), 0.25);
        assert!(serde_yaml::from_str::<Tolerance>("-0.25").is_err());
        assert!(serde_yaml::from_str::<Tolerance>(".inf").is_err());
    }

    #[test]
    fn policy_check() {
        let v = Vertex2::new(f64::NAN, 0.0);
        assert!(NumericPolicy::Permissive.check(&v).is_ok());
        match NumericPolicy::Finite.check(&v) {
            Err(GeoError::NonFinite{axis, ..}) => assert_eq!(axis, Axis::X),
            other => panic!("Expected a non-finite error, got {:?}", other),
        }
    }
}
