//! Error types for the feed loader.

use std::fmt;

use thiserror::Error;

/// Which of the two feeds an error came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FeedKind {
    Events,
    Boundaries,
}

impl fmt::Display for FeedKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Events => f.write_str("events"),
            Self::Boundaries => f.write_str("boundaries"),
        }
    }
}

/// Errors produced while fetching feeds.
#[derive(Error, Debug)]
pub enum FeedError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("{url} returned HTTP {status}")]
    Status { url: String, status: u16 },

    #[error("network error: {0}")]
    Network(String),

    #[error("malformed document from {url}: {reason}")]
    MalformedDocument { url: String, reason: String },

    #[error("{feed} feed unavailable: {source}")]
    DataUnavailable {
        feed: FeedKind,
        source: Box<FeedError>,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl FeedError {
    /// Wrap this error as the reason `feed` could not be loaded.
    pub fn unavailable(self, feed: FeedKind) -> Self {
        Self::DataUnavailable {
            feed,
            source: Box::new(self),
        }
    }

    /// The feed that failed, for `DataUnavailable` errors.
    pub fn feed(&self) -> Option<FeedKind> {
        match self {
            Self::DataUnavailable { feed, .. } => Some(*feed),
            _ => None,
        }
    }

    /// Whether the root cause is a bad document rather than a failed fetch.
    pub fn is_malformed(&self) -> bool {
        match self {
            Self::MalformedDocument { .. } => true,
            Self::DataUnavailable { source, .. } => source.is_malformed(),
            _ => false,
        }
    }
}

/// Result alias for feed operations.
pub type Result<T> = std::result::Result<T, FeedError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn io_errors_keep_their_category() {
        let err: FeedError = std::io::Error::new(std::io::ErrorKind::Other, "no threads").into();
        assert!(matches!(err, FeedError::Io(_)));
        assert!(!err.is_malformed());
        assert!(err.to_string().starts_with("I/O error"));
    }

    #[test]
    fn unavailable_names_the_feed() {
        let err = FeedError::Status {
            url: "mem://b".into(),
            status: 503,
        }
        .unavailable(FeedKind::Boundaries);
        assert_eq!(err.feed(), Some(FeedKind::Boundaries));
        assert_eq!(err.to_string(), "boundaries feed unavailable: mem://b returned HTTP 503");
    }
}
