//! Error types for the topographic background renderer.

use thiserror::Error;

/// Result type alias using TopoError.
pub type TopoResult<T> = Result<T, TopoError>;

/// Primary error type for everything outside the pure pipeline.
///
/// The contour pipeline itself has no failure modes; these errors come from
/// parsing user input, loading configuration, and presenting a finished pass.
#[derive(Debug, Error)]
pub enum TopoError {
    // === Input Errors ===
    #[error("Invalid viewport: {0}")]
    InvalidViewport(String),

    #[error("Invalid theme '{0}': expected \"light\" or \"dark\"")]
    InvalidTheme(String),

    #[error("Invalid color: {0}")]
    InvalidColor(String),

    // === Configuration Errors ===
    #[error("Configuration error: {0}")]
    ConfigError(String),

    // === Output Errors ===
    #[error("Rasterization failed: {0}")]
    RasterError(String),

    #[error("I/O error: {0}")]
    IoError(String),
}

impl TopoError {
    /// Whether the error came from caller-supplied input rather than the output side.
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            TopoError::InvalidViewport(_) | TopoError::InvalidTheme(_) | TopoError::InvalidColor(_)
        )
    }
}

impl From<std::io::Error> for TopoError {
    fn from(err: std::io::Error) -> Self {
        TopoError::IoError(err.to_string())
    }
}
