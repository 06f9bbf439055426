//! Cloudinary HTTP API client implementation

use async_trait::async_trait;
use reqwest::{Client as ReqwestClient, Url};
use std::time::Duration;
use tracing::debug;

use super::error::CloudinaryApiError;
use super::types::PingResponse;
use crate::domain::errors::PingError;
use crate::domain::models::{Credentials, PingStatus};
use crate::domain::ports::{MediaStorageClient, MediaStorageConnector};

/// Service name reported when the ping body does not carry one
pub const DEFAULT_SERVICE_NAME: &str = "cloudinary";

/// Configuration for the Cloudinary HTTP client
#[derive(Clone)]
pub struct CloudinaryClientConfig {
    /// Cloud (account) identifier, part of every API path
    pub cloud_name: String,

    /// API key, sent as the Basic auth username
    pub api_key: String,

    /// API secret, sent as the Basic auth password
    pub api_secret: String,

    /// Base URL for the Cloudinary API
    pub base_url: String,

    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl CloudinaryClientConfig {
    /// Config for `credentials` against the public API with a 10s timeout
    pub fn new(credentials: &Credentials) -> Self {
        Self {
            cloud_name: credentials.cloud_name.clone(),
            api_key: credentials.api_key.clone(),
            api_secret: credentials.api_secret.clone(),
            base_url: "https://api.cloudinary.com".to_string(),
            timeout_secs: 10,
        }
    }

    /// Override the API base URL
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Override the request timeout
    #[must_use]
    pub const fn with_timeout_secs(mut self, timeout_secs: u64) -> Self {
        self.timeout_secs = timeout_secs;
        self
    }
}

impl std::fmt::Debug for CloudinaryClientConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CloudinaryClientConfig")
            .field("cloud_name", &self.cloud_name)
            .field("api_key", &self.api_key)
            .field("api_secret", &"[REDACTED]")
            .field("base_url", &self.base_url)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

/// HTTP client for the Cloudinary Admin API ping endpoint
///
/// One request per [`ping`](MediaStorageClient::ping), no retries. The reqwest
/// client enforces `timeout_secs` on the whole round-trip.
pub struct CloudinaryClientImpl {
    http_client: ReqwestClient,
    config: CloudinaryClientConfig,
}

impl CloudinaryClientImpl {
    /// Create a new client with custom configuration
    pub fn with_config(config: CloudinaryClientConfig) -> Result<Self, CloudinaryApiError> {
        let http_client = ReqwestClient::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(concat!("cloudverify/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            http_client,
            config,
        })
    }

    /// URL of the ping endpoint for the configured cloud
    ///
    /// The cloud name is added as a single percent-encoded path segment, so
    /// `#`, `?` or `/` in it cannot redirect the request to another route.
    pub fn ping_url(&self) -> Result<Url, CloudinaryApiError> {
        let mut url = Url::parse(&self.config.base_url)
            .map_err(|e| CloudinaryApiError::InvalidUrl(format!("{}: {e}", self.config.base_url)))?;
        url.path_segments_mut()
            .map_err(|()| CloudinaryApiError::InvalidUrl(self.config.base_url.clone()))?
            .pop_if_empty()
            .extend(["v1_1", self.config.cloud_name.as_str(), "ping"]);
        Ok(url)
    }

    /// Send the ping and parse the response
    async fn send_ping(&self) -> Result<PingStatus, CloudinaryApiError> {
        debug!(cloud_name = %self.config.cloud_name, "sending ping");
        let response = self
            .http_client
            .get(self.ping_url()?)
            .basic_auth(&self.config.api_key, Some(&self.config.api_secret))
            .send()
            .await
            .map_err(|e| self.classify_transport(e))?;

        let status = response.status();
        debug!(status = %status, "ping response received");

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(CloudinaryApiError::from_status(status, &body));
        }

        let body = response.text().await.map_err(|e| self.classify_transport(e))?;
        let parsed: PingResponse = serde_json::from_str(&body)
            .map_err(|e| CloudinaryApiError::InvalidResponse(e.to_string()))?;

        Ok(PingStatus {
            status: parsed.status,
            service: parsed
                .service
                .unwrap_or_else(|| DEFAULT_SERVICE_NAME.to_string()),
        })
    }

    fn classify_transport(&self, err: reqwest::Error) -> CloudinaryApiError {
        if err.is_timeout() {
            CloudinaryApiError::Timeout(self.config.timeout_secs)
        } else {
            CloudinaryApiError::Network(err)
        }
    }
}

#[async_trait]
impl MediaStorageClient for CloudinaryClientImpl {
    async fn ping(&self) -> Result<PingStatus, PingError> {
        self.send_ping().await.map_err(PingError::from)
    }
}

/// Builds [`CloudinaryClientImpl`]s for a fixed base URL and timeout
#[derive(Debug, Clone)]
pub struct CloudinaryConnector {
    base_url: String,
    timeout_secs: u64,
}

impl CloudinaryConnector {
    /// Create a connector
    pub fn new(base_url: impl Into<String>, timeout_secs: u64) -> Self {
        Self {
            base_url: base_url.into(),
            timeout_secs,
        }
    }
}

impl MediaStorageConnector for CloudinaryConnector {
    type Client = CloudinaryClientImpl;

    fn connect(&self, credentials: &Credentials) -> Result<Self::Client, PingError> {
        let config = CloudinaryClientConfig::new(credentials)
            .with_base_url(self.base_url.clone())
            .with_timeout_secs(self.timeout_secs);
        CloudinaryClientImpl::with_config(config).map_err(PingError::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn credentials() -> Credentials {
        Credentials {
            cloud_name: "demo-cloud".to_string(),
            api_key: "1234".to_string(),
            api_secret: "shh-very-secret".to_string(),
        }
    }

    #[test]
    fn test_ping_url_strips_trailing_slash() {
        let config = CloudinaryClientConfig::new(&credentials()).with_base_url("http://localhost:1234/");
        let client = CloudinaryClientImpl::with_config(config).expect("client should build");
        let url = client.ping_url().expect("url should build");
        assert_eq!(url.as_str(), "http://localhost:1234/v1_1/demo-cloud/ping");
    }

    #[test]
    fn test_ping_url_encodes_cloud_name() {
        let mut creds = credentials();
        creds.cloud_name = "demo#x/../y?z".to_string();
        let config = CloudinaryClientConfig::new(&creds).with_base_url("http://localhost:1234");
        let client = CloudinaryClientImpl::with_config(config).expect("client should build");

        let url = client.ping_url().expect("url should build");
        assert_eq!(url.as_str(), "http://localhost:1234/v1_1/demo%23x%2F..%2Fy%3Fz/ping");
        assert!(url.fragment().is_none());
        assert!(url.query().is_none());
    }

    #[test]
    fn test_ping_url_keeps_base_path() {
        let config = CloudinaryClientConfig::new(&credentials()).with_base_url("http://localhost:1234/proxy/");
        let client = CloudinaryClientImpl::with_config(config).expect("client should build");
        let url = client.ping_url().expect("url should build");
        assert_eq!(url.as_str(), "http://localhost:1234/proxy/v1_1/demo-cloud/ping");
    }

    #[test]
    fn test_ping_url_rejects_invalid_base() {
        let config = CloudinaryClientConfig::new(&credentials()).with_base_url("not a url");
        let client = CloudinaryClientImpl::with_config(config).expect("client should build");
        assert!(matches!(client.ping_url(), Err(CloudinaryApiError::InvalidUrl(_))));
    }

    #[test]
    fn test_default_base_url() {
        let config = CloudinaryClientConfig::new(&credentials());
        assert_eq!(config.base_url, "https://api.cloudinary.com");
        assert_eq!(config.timeout_secs, 10);
    }

    #[test]
    fn test_config_debug_redacts_secret() {
        let config = CloudinaryClientConfig::new(&credentials());
        let debug = format!("{config:?}");
        assert!(!debug.contains("shh-very-secret"));
        assert!(debug.contains("[REDACTED]"));
    }

    #[test]
    fn test_connector_builds_client() {
        let connector = CloudinaryConnector::new("http://localhost:9", 1);
        let client = connector.connect(&credentials()).expect("connect should succeed");
        let url = client.ping_url().expect("url should build");
        assert_eq!(url.as_str(), "http://localhost:9/v1_1/demo-cloud/ping");
    }
}
