//! Where feed documents come from.

use std::collections::HashMap;
use std::sync::Mutex;
use std::time::Duration;

use futures::future::BoxFuture;

use crate::error::{FeedError, Result};

/// Fetches the raw body of a feed document.
///
/// Implementations return the response bytes for a successful fetch and an
/// error for transport failures or non-success statuses. They must not retry.
pub trait FeedSource: Send + Sync {
    fn fetch<'a>(&'a self, url: &'a str) -> BoxFuture<'a, Result<Vec<u8>>>;
}

/// A canned reply served by [`MemorySource`].
#[derive(Debug, Clone)]
pub enum Canned {
    /// 200 with this body.
    Body(Vec<u8>),
    /// Non-success HTTP status.
    Status(u16),
    /// Connection failure.
    Unreachable,
}

/// In-memory source keyed by URL, for tests and offline fixtures.
///
/// Unknown URLs answer `404`.
#[derive(Debug, Default)]
pub struct MemorySource {
    replies: HashMap<String, (Canned, Duration)>,
    requests: Mutex<Vec<String>>,
}

impl MemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Serve `body` for `url`.
    pub fn with_body(self, url: &str, body: impl Into<Vec<u8>>) -> Self {
        self.with_reply(url, Canned::Body(body.into()), Duration::ZERO)
    }

    /// Serve `reply` for `url` after `delay`.
    pub fn with_reply(mut self, url: &str, reply: Canned, delay: Duration) -> Self {
        self.replies.insert(url.to_string(), (reply, delay));
        self
    }

    /// URLs requested so far, in call order.
    pub fn requests(&self) -> Vec<String> {
        self.requests
            .lock()
            .map(|r| r.clone())
            .unwrap_or_default()
    }
}

impl FeedSource for MemorySource {
    fn fetch<'a>(&'a self, url: &'a str) -> BoxFuture<'a, Result<Vec<u8>>> {
        Box::pin(async move {
            if let Ok(mut requests) = self.requests.lock() {
                requests.push(url.to_string());
            }

            let (reply, delay) = self
                .replies
                .get(url)
                .cloned()
                .unwrap_or((Canned::Status(404), Duration::ZERO));
            if !delay.is_zero() {
                tokio::time::sleep(delay).await;
            }

            match reply {
                Canned::Body(body) => Ok(body),
                Canned::Status(status) => Err(FeedError::Status {
                    url: url.to_string(),
                    status,
                }),
                Canned::Unreachable => Err(FeedError::Network(format!("connection refused: {url}"))),
            }
        })
    }
}
