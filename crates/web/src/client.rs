//! HTTP client for the upstream health endpoint.

use reqwest::Client;
use reqwest::header::CACHE_CONTROL;
use serde_json::Value;

use crate::error::Result;

/// Fetches the JSON health payload of the configured API.
#[derive(Debug, Clone)]
pub struct HealthClient {
    client: Client,
    url: String,
}

impl HealthClient {
    /// Creates a client targeting `{base_url}/healthz`.
    ///
    /// Proxy environment variables are ignored; the API is addressed directly.
    pub fn new(base_url: &str) -> Result<Self> {
        let client = Client::builder().no_proxy().build()?;
        Ok(Self::with_client(client, base_url))
    }

    /// Creates a client reusing an existing connection pool.
    pub fn with_client(client: Client, base_url: &str) -> Self {
        Self {
            client,
            url: format!("{base_url}/healthz"),
        }
    }

    /// The full URL requested on every fetch.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Performs one uncached GET and parses the body as JSON of any shape.
    ///
    /// Fails on connection errors, non-success statuses and non-JSON bodies.
    #[tracing::instrument(skip(self), fields(url = %self.url))]
    pub async fn fetch(&self) -> Result<Value> {
        let response = self
            .client
            .get(&self.url)
            .header(CACHE_CONTROL, "no-store")
            .send()
            .await?;

        tracing::debug!(status = %response.status(), "health response received");

        let payload = response.error_for_status()?.json::<Value>().await?;
        Ok(payload)
    }
}
