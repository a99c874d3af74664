/// Argument handling error type.
#[derive(Debug)]
pub enum ArgError {
    /// IO error.
    IoError(crate::io::IoError),
    /// Geometry error (invalid tolerance).
    GeoError(crate::geo::GeoError),
    /// Comparison setup error.
    CompareError(crate::compare::CompareError),
}
impl std::fmt::Display for ArgError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ArgError::IoError(error) => write!(f, "- IO Error:\n{}", error),
            ArgError::GeoError(error) => write!(f, "- Geometry Error:\n{}", error),
            ArgError::CompareError(error) => write!(f, "- Comparison Error:\n{}", error),
        }
    }
}
impl From<crate::io::IoError> for ArgError {
    fn from(error: crate::io::IoError) -> Self {
        ArgError::IoError(error)
    }
}
impl From<crate::geo::GeoError> for ArgError {
    fn from(error: crate::geo::GeoError) -> Self {
        ArgError::GeoError(error)
    }
}
impl From<crate::compare::CompareError> for ArgError {
    fn from(error: crate::compare::CompareError) -> Self {
        // Config files are read through the compare module; keep their IO errors flat
        match error {
            crate::compare::CompareError::IoError(error) => ArgError::IoError(error),
            error => ArgError::CompareError(error),
        }
    }
}

/// Result type for the `args` module.
pub type ProcResult<T> = std::result::Result<T, ArgError>;
