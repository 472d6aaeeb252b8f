//! Blocking (synchronous) API.
//!
//! Wraps the async [`DatasetLoader`] with a Tokio runtime so callers don't
//! need to manage their own async runtime.

use crate::catalog::FeedOptions;
use crate::error::Result;
use crate::loader::{DatasetLoader, Datasets};
use crate::source::FeedSource;
use crate::http::HttpSource;

/// Blocking wrapper around [`DatasetLoader`].
///
/// Uses an internal single-threaded Tokio runtime.
pub struct BlockingLoader<S = HttpSource> {
    rt: tokio::runtime::Runtime,
    inner: DatasetLoader<S>,
}

impl BlockingLoader<HttpSource> {
    /// Create a blocking loader that fetches over HTTP.
    pub fn new(options: &FeedOptions) -> Result<Self> {
        let rt = runtime()?;
        let inner = DatasetLoader::new(options)?;
        Ok(Self { rt, inner })
    }
}

impl<S: FeedSource> BlockingLoader<S> {
    /// Wrap an existing loader.
    pub fn from_loader(inner: DatasetLoader<S>) -> Result<Self> {
        Ok(Self {
            rt: runtime()?,
            inner,
        })
    }

    /// Fetch and parse both feeds (blocking).
    pub fn load(&self) -> Result<Datasets> {
        self.rt.block_on(self.inner.load())
    }

    pub fn loader(&self) -> &DatasetLoader<S> {
        &self.inner
    }
}

fn runtime() -> Result<tokio::runtime::Runtime> {
    Ok(tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?)
}
