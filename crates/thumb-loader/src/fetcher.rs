//! Network seam for retrieving thumbnail bytes
//!
//! The loader only needs "URL in, bytes out", expressed as the
//! [`NetworkFetcher`] trait. [`HttpFetcher`] is the production
//! implementation backed by a shared reqwest client; tests and hosts with
//! their own transport supply their own.

use std::fmt;
use std::time::Duration;

use async_trait::async_trait;
use tracing::{debug, warn};

const FETCH_TIMEOUT_SECS: u64 = 30;
const USER_AGENT: &str = "thumb-loader/0.1";

/// Failure to retrieve bytes for a source URL.
#[derive(Debug)]
pub enum FetchError {
    /// Transport-level failure (connect, timeout, body read).
    Http(reqwest::Error),
    /// The server answered with a non-success status.
    Status(reqwest::StatusCode),
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchError::Http(e) => write!(f, "HTTP error: {}", e),
            FetchError::Status(status) => write!(f, "Server returned status {}", status),
        }
    }
}

impl std::error::Error for FetchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            FetchError::Http(e) => Some(e),
            FetchError::Status(_) => None,
        }
    }
}

impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        FetchError::Http(err)
    }
}

/// Supplies raw thumbnail bytes for a source URL.
#[async_trait]
pub trait NetworkFetcher: Send + Sync {
    async fn fetch(&self, url: &str) -> std::result::Result<Vec<u8>, FetchError>;
}

/// reqwest-backed fetcher.
pub struct HttpFetcher {
    client: reqwest::Client,
}

impl HttpFetcher {
    pub fn new() -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(FETCH_TIMEOUT_SECS))
            .user_agent(USER_AGENT)
            .build()
            .expect("Failed to create HTTP client");

        Self { client }
    }
}

impl Default for HttpFetcher {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl NetworkFetcher for HttpFetcher {
    async fn fetch(&self, url: &str) -> std::result::Result<Vec<u8>, FetchError> {
        let response = self.client.get(url).send().await?;

        if !response.status().is_success() {
            warn!(url = %url, status = %response.status(), "Thumbnail fetch rejected");
            return Err(FetchError::Status(response.status()));
        }

        let data = response.bytes().await?.to_vec();
        debug!(url = %url, size = data.len(), "Fetched thumbnail");

        Ok(data)
    }
}
