//! Error types for the map presenter.

use thiserror::Error;

/// Errors produced while rendering the map document.
#[derive(Error, Debug)]
pub enum MapError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("no tile access token configured (set MAPBOX_ACCESS_TOKEN or pass --access-token)")]
    MissingAccessToken,

    #[error("Invalid parameter: {name} = {value} ({reason})")]
    InvalidParameter {
        name: &'static str,
        value: String,
        reason: String,
    },
}

/// Result alias for map operations.
pub type Result<T> = std::result::Result<T, MapError>;
