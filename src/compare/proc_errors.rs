/// Comparison process error type.
#[derive(Debug)]
pub enum CompareError {
    /// IO error.
    IoError(crate::io::IoError),
    /// Geometry error, with the list name and vertex index it was found at.
    GeoError{
        list: String,
        index: usize,
        error: crate::geo::GeoError,
    },
    /// StringOnly error.
    StringOnly(String),
}
impl std::fmt::Display for CompareError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CompareError::IoError(error) => write!(f, "- IO Error:\n{}", error),
            CompareError::GeoError{list, index, error} => write!(f, "- Vertex {} of {}:\n{}", index, list, error),
            CompareError::StringOnly(error) => write!(f, "- {}", error),
        }
    }
}
impl From<crate::io::IoError> for CompareError {
    fn from(error: crate::io::IoError) -> Self {
        CompareError::IoError(error)
    }
}
impl From<String> for CompareError {
    fn from(error: String) -> Self {
        CompareError::StringOnly(error)
    }
}

/// Result type for the `compare` module.
pub type ProcResult<T> = std::result::Result<T, CompareError>;

/// Create a `CompareError::StringOnly` from a string.
pub fn err_str<T>(error_str: &str) -> ProcResult<T> {
    Err(CompareError::StringOnly(error_str.to_string()))
}
