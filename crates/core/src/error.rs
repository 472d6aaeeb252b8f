//! Error types for quakemap

use thiserror::Error;

/// Main error type for quakemap data handling
#[derive(Error, Debug)]
pub enum Error {
    #[error("malformed document: {0}")]
    MalformedDocument(String),

    #[error("invalid magnitude: {0} (must be a finite number)")]
    InvalidMagnitude(f64),

    #[error("invalid feature: {0}")]
    InvalidFeature(String),
}

/// Result type alias for quakemap operations
pub type Result<T> = std::result::Result<T, Error>;
