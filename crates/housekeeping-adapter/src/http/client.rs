/*
[INPUT]:  HTTP configuration (base URL, timeouts)
[OUTPUT]: Configured reqwest client ready for Task Service API calls
[POS]:    HTTP layer - core client implementation
[UPDATE]: When adding connection options or changing client behavior
*/

use reqwest::{Client, Method, RequestBuilder, StatusCode, Url};
use serde::de::DeserializeOwned;
use std::time::Duration;

use crate::http::{HousekeepingError, Result};

/// Default location of the Task Service API
pub const DEFAULT_BASE_URL: &str = "http://localhost:8081";

/// HTTP client configuration
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub timeout: Duration,
    pub connect_timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(30),
            connect_timeout: Duration::from_secs(10),
        }
    }
}

/// Raw response captured before decoding
pub(crate) struct RawResponse {
    pub(crate) status: StatusCode,
    pub(crate) body: Vec<u8>,
}

/// Main HTTP client for the Task Service API
#[derive(Debug, Clone)]
pub struct HousekeepingClient {
    http_client: Client,
    base_url: Url,
}

impl HousekeepingClient {
    /// Create a new client against the default base URL
    pub fn new() -> Result<Self> {
        Self::with_config(ClientConfig::default())
    }

    /// Create a new client with custom configuration
    pub fn with_config(config: ClientConfig) -> Result<Self> {
        Self::with_config_and_base_url(config, DEFAULT_BASE_URL)
    }

    /// Create a new client with custom configuration and base URL
    pub fn with_config_and_base_url(config: ClientConfig, base_url: &str) -> Result<Self> {
        let http_client = Client::builder()
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
            .build()?;

        Ok(Self {
            http_client,
            base_url: normalize_base_url(base_url)?,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Build full URL for an endpoint relative to the base URL
    fn endpoint_url(&self, endpoint: &str) -> Result<Url> {
        Ok(self.base_url.join(endpoint.trim_start_matches('/'))?)
    }

    /// Build full URL for an endpoint followed by one percent-encoded path segment
    pub(crate) fn segment_url(&self, endpoint: &str, segment: &str) -> Result<Url> {
        let mut url = self.endpoint_url(endpoint)?;
        url.path_segments_mut()
            .map_err(|_| HousekeepingError::Config(format!("cannot extend URL {}", self.base_url)))?
            .pop_if_empty()
            .push(segment);
        Ok(url)
    }

    /// Build request builder for an endpoint
    pub(crate) fn request(&self, method: Method, endpoint: &str) -> Result<RequestBuilder> {
        let url = self.endpoint_url(endpoint)?;
        Ok(self.http_client.request(method, url))
    }

    pub(crate) fn request_url(&self, method: Method, url: Url) -> RequestBuilder {
        self.http_client.request(method, url)
    }

    /// Send a request and capture status and body without interpreting them
    pub(crate) async fn send_raw(&self, builder: RequestBuilder) -> Result<RawResponse> {
        let response = builder
            .send()
            .await
            .map_err(HousekeepingError::from_transport)?;
        let status = response.status();
        let body = response.bytes().await?.to_vec();
        tracing::debug!(status = status.as_u16(), bytes = body.len(), "task service responded");
        Ok(RawResponse { status, body })
    }

    /// Send a request and decode a JSON success body
    pub(crate) async fn send_json<T: DeserializeOwned>(&self, builder: RequestBuilder) -> Result<T> {
        let raw = self.send_raw(builder).await?;
        decode_json(raw)
    }
}

pub(crate) fn decode_json<T: DeserializeOwned>(raw: RawResponse) -> Result<T> {
    if raw.status.is_success() {
        Ok(serde_json::from_slice(&raw.body)?)
    } else {
        Err(HousekeepingError::from_status(raw.status, &raw.body))
    }
}

/// Parse a base URL and make sure relative joins keep its path prefix
fn normalize_base_url(base_url: &str) -> Result<Url> {
    let mut url = Url::parse(base_url.trim())?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(HousekeepingError::Config(format!(
            "unsupported scheme in base URL: {}",
            url.scheme()
        )));
    }
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    Ok(url)
}
