//! HTTP client for the movie-database upstream.

use thiserror::Error;

/// Errors raised by the upstream client.
#[derive(Debug, Error)]
pub enum UpstreamError {
    /// Connection, DNS, or protocol failure talking to the upstream.
    #[error("upstream transport error: {0}")]
    Transport(#[from] reqwest::Error),
}

/// Client for the movie-database API.
///
/// Cheap to clone; clones share the underlying connection pool.
#[derive(Clone)]
pub struct UpstreamClient {
    http: reqwest::Client,
}

impl UpstreamClient {
    /// Create a new upstream client.
    ///
    /// No request timeout is set here; the inbound server's request
    /// deadline is the only bound on outbound calls.
    pub fn new() -> Self {
        Self {
            http: reqwest::Client::new(),
        }
    }

    /// Issue a single GET against a fully-formed URL.
    ///
    /// One attempt, no retry. The returned response still owns the body
    /// stream; the caller is responsible for consuming or dropping it.
    pub async fn get(&self, url: &str) -> Result<reqwest::Response, UpstreamError> {
        let response = self.http.get(url).send().await?;
        Ok(response)
    }
}

impl Default for UpstreamClient {
    fn default() -> Self {
        Self::new()
    }
}
