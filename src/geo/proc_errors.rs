use crate::geo::Axis;

/// Geometry error type.
#[derive(Debug, Clone, PartialEq)]
pub enum GeoError {
    /// A coordinate is NaN or infinite where finite values are required.
    NonFinite {
        axis: Axis,
        value: f64,
    },
    /// Tolerance epsilon is negative, infinite or NaN.
    InvalidTolerance(f64),
    /// StringOnly error.
    StringOnly(String),
}
impl std::fmt::Display for GeoError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GeoError::NonFinite{axis, value} => write!(f, "- Non-finite {} coordinate: {}", axis, value),
            GeoError::InvalidTolerance(epsilon) => write!(f, "- Invalid tolerance (must be a finite non-negative number): {}", epsilon),
            GeoError::StringOnly(error) => write!(f, "- {}", error),
        }
    }
}
impl From<String> for GeoError {
    fn from(error: String) -> Self {
        GeoError::StringOnly(error)
    }
}

/// Result type for the `geo` module.
pub type ProcResult<T> = std::result::Result<T, GeoError>;

/// Create a `GeoError::StringOnly` from a string.
pub fn err_str<T>(error_str: &str) -> ProcResult<T> {
    Err(GeoError::StringOnly(error_str.to_string()))
}
