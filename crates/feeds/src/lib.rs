//! # Quakemap Feeds
//!
//! Fetches the two GeoJSON documents the map is built from: a USGS earthquake
//! summary feed and a tectonic plate-boundary collection.
//!
//! Both fetches run concurrently and are joined before anything is returned,
//! so callers see either both documents or a single error naming the feed
//! that could not be loaded. Fetching sits behind the [`FeedSource`] trait;
//! [`HttpSource`] is the network implementation and [`MemorySource`] serves
//! canned documents.

pub mod catalog;
pub mod error;
pub mod http;
pub mod loader;
pub mod source;
pub mod sync_api;

pub use catalog::{EventFeed, FeedOptions, PB2002_BOUNDARIES_URL, USGS_SUMMARY_BASE};
pub use error::{FeedError, FeedKind, Result};
pub use http::HttpSource;
pub use loader::{DatasetLoader, Datasets};
pub use source::{Canned, FeedSource, MemorySource};

/// Blocking API re-exported as `blocking` module.
pub mod blocking {
    pub use crate::sync_api::*;
}
