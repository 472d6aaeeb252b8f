//! Loads both feeds and hands them over together.

use futures::future::try_join;
use quakemap_core::FeatureCollection;
use tracing::{debug, info};

use crate::catalog::FeedOptions;
use crate::error::{FeedError, FeedKind, Result};
use crate::http::HttpSource;
use crate::source::FeedSource;

/// The two documents, both fetched and parsed.
#[derive(Debug, Clone)]
pub struct Datasets {
    pub events: FeatureCollection,
    pub boundaries: FeatureCollection,
}

/// Fetches the events and boundaries documents concurrently.
///
/// [`load`](Self::load) resolves only after both fetches have succeeded. If
/// either one fails, the result is a [`FeedError::DataUnavailable`] naming
/// that feed and no data is returned.
pub struct DatasetLoader<S = HttpSource> {
    source: S,
    events_url: String,
    boundaries_url: String,
}

impl DatasetLoader<HttpSource> {
    /// Create a loader that fetches over HTTP.
    pub fn new(options: &FeedOptions) -> Result<Self> {
        let source = HttpSource::new(options)?;
        Ok(Self::with_source(source, options))
    }
}

impl<S: FeedSource> DatasetLoader<S> {
    /// Create a loader over any [`FeedSource`].
    pub fn with_source(source: S, options: &FeedOptions) -> Self {
        Self {
            source,
            events_url: options.events.url(),
            boundaries_url: options.boundaries_url.clone(),
        }
    }

    pub fn events_url(&self) -> &str {
        &self.events_url
    }

    pub fn boundaries_url(&self) -> &str {
        &self.boundaries_url
    }

    /// The underlying source.
    pub fn source(&self) -> &S {
        &self.source
    }

    /// Fetch and parse both feeds.
    pub async fn load(&self) -> Result<Datasets> {
        let events = self.fetch_collection(FeedKind::Events, &self.events_url);
        let boundaries = self.fetch_collection(FeedKind::Boundaries, &self.boundaries_url);

        let (events, boundaries) = try_join(events, boundaries).await?;

        info!(
            events = events.len(),
            boundaries = boundaries.len(),
            "feeds loaded"
        );
        Ok(Datasets { events, boundaries })
    }

    async fn fetch_collection(&self, feed: FeedKind, url: &str) -> Result<FeatureCollection> {
        let bytes = self
            .source
            .fetch(url)
            .await
            .map_err(|e| e.unavailable(feed))?;

        let collection = FeatureCollection::from_slice(&bytes).map_err(|e| {
            FeedError::MalformedDocument {
                url: url.to_string(),
                reason: e.to_string(),
            }
            .unavailable(feed)
        })?;

        debug!(%feed, features = collection.len(), "feed parsed");
        Ok(collection)
    }
}
