//! HTTP feed source.

use futures::future::BoxFuture;
use reqwest::Client;
use tracing::debug;

use crate::catalog::FeedOptions;
use crate::error::{FeedError, Result};
use crate::source::FeedSource;

/// Fetches feed documents over HTTP(S) with a single GET per call.
///
/// Failed requests are reported as-is and never retried.
pub struct HttpSource {
    client: Client,
}

impl HttpSource {
    /// Create a new HTTP source from loader options.
    pub fn new(options: &FeedOptions) -> Result<Self> {
        let mut builder = Client::builder().user_agent(options.user_agent.as_str());
        if let Some(timeout) = options.request_timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build()?;

        Ok(Self { client })
    }

    /// GET `url` and return the body of a 2xx response.
    pub async fn get(&self, url: &str) -> Result<Vec<u8>> {
        debug!(url, "fetching feed");

        let resp = self.client.get(url).send().await?;

        let status = resp.status();
        if !status.is_success() {
            return Err(FeedError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let bytes = resp.bytes().await?;
        debug!(url, bytes = bytes.len(), "feed received");
        Ok(bytes.to_vec())
    }
}

impl FeedSource for HttpSource {
    fn fetch<'a>(&'a self, url: &'a str) -> BoxFuture<'a, Result<Vec<u8>>> {
        Box::pin(self.get(url))
    }
}
