use crate::{
    args,
    compare,
    geo,
    io,
};

/// Error-type enum for the `wlzvtx` crate.
#[derive(Debug)]
pub enum WlzvtxError {
    ArgError(args::ArgError),
    CompareError(compare::CompareError),
    GeoError(geo::GeoError),
    IoError(io::IoError),
    /// Two vertex lists did not match.
    NotEqual {
        mismatches: usize,
        compared: usize,
    },
    StringOnly(String),
}
impl std::fmt::Display for WlzvtxError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WlzvtxError::ArgError(error) => write!(f, "! ARGUMENT ERROR:\n{}", error),
            WlzvtxError::CompareError(error) => write!(f, "! COMPARISON ERROR:\n{}", error),
            WlzvtxError::GeoError(error) => write!(f, "! GEOMETRY ERROR:\n{}", error),
            WlzvtxError::IoError(error) => write!(f, "! IO ERROR:\n{}", error),
            WlzvtxError::NotEqual{mismatches, compared} => write!(f, "! NOT EQUAL:\n- {} of {} vertex pairs differ", mismatches, compared),
            WlzvtxError::StringOnly(error) => write!(f, "! WLZVTX ERROR:\n- {}", error),
        }
    }
}
impl From<String> for WlzvtxError {
    fn from(error: String) -> Self {
        WlzvtxError::StringOnly(error)
    }
}
impl From<args::ArgError> for WlzvtxError {
    fn from(error: args::ArgError) -> Self {
        WlzvtxError::ArgError(error)
    }
}
impl From<compare::CompareError> for WlzvtxError {
    fn from(error: compare::CompareError) -> Self {
        WlzvtxError::CompareError(error)
    }
}
impl From<geo::GeoError> for WlzvtxError {
    fn from(error: geo::GeoError) -> Self {
        WlzvtxError::GeoError(error)
    }
}
impl From<io::IoError> for WlzvtxError {
    fn from(error: io::IoError) -> Self {
        WlzvtxError::IoError(error)
    }
}

/// Result type for the `wlzvtx` crate.
pub type WlzvtxResult<T> = std::result::Result<T, WlzvtxError>;

/// Create a `WlzvtxResult` with an `Err` from a string.
/// Shorthand to avoid writing `Err(crate::WlzvtxError::StringOnly(error_str))`.
pub fn err_str<T>(error_str: &str) -> WlzvtxResult<T> {
    Err(WlzvtxError::StringOnly(error_str.to_string()))
}
