//! Error types for the face orientation library.

use thiserror::Error;

/// Main error type for the library
#[derive(Error, Debug)]
pub enum Error {
    /// Landmark set too short to index the anatomical reference points
    #[error("insufficient landmarks: need at least {required}, got {actual}")]
    InsufficientLandmarks {
        /// Minimum landmark count required by the configured indices
        required: usize,
        /// Number of landmarks actually supplied
        actual: usize,
    },

    /// Computed crop rectangle has non-positive width or height
    #[error("degenerate crop region: {width} x {height}")]
    DegenerateCrop {
        /// Computed crop width in pixels
        width: f64,
        /// Computed crop height in pixels
        height: f64,
    },

    /// Invalid input parameters provided
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// File I/O operation failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Results with our Error type
pub type Result<T> = std::result::Result<T, Error>;
