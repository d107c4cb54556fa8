use std::time::Duration;

use anyhow::{Context, Result};
use async_trait::async_trait;

/// Fixed per-request timeout; a slow shelter page fails that unit of work
/// instead of hanging the run.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Trait for page fetching (to allow mocking)
#[async_trait]
pub trait PageFetcher: Send + Sync {
    /// Fetch a page body; non-2xx statuses are errors.
    async fn fetch(&self, url: &str) -> Result<String>;
}

/// Production fetcher backed by reqwest.
pub struct HttpFetcher {
    client: reqwest::Client,
}

impl HttpFetcher {
    pub fn new() -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .context("Failed to create HTTP client")?;
        Ok(Self { client })
    }
}

#[async_trait]
impl PageFetcher for HttpFetcher {
    async fn fetch(&self, url: &str) -> Result<String> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .context("HTTP request failed")?;

        let status = response.status();
        if !status.is_success() {
            anyhow::bail!("HTTP {} for {}", status, url);
        }

        response
            .text()
            .await
            .context("Failed to read response body")
    }
}
