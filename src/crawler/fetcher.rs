//! HTTP fetcher implementation
//!
//! This module handles all HTTP requests for the harvester:
//! - Building the shared HTTP client (user agent, fixed timeout)
//! - Single GET requests returning page text or decoded JSON
//! - Error classification for failed requests
//!
//! Failures never escape as crate errors; callers get a [`FetchError`] and
//! decide whether the missing page matters.

use crate::config::{UserAgentConfig, HTTP_TIMEOUT};
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use thiserror::Error;

/// What the caller expects the page body to be
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentKind {
    Html,
    Json,
}

/// Body of a successfully fetched page
#[derive(Debug, Clone, PartialEq)]
pub enum PageContent {
    Html(String),
    Json(serde_json::Value),
}

impl PageContent {
    /// Page text, or `None` for JSON bodies
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Html(text) => Some(text),
            Self::Json(_) => None,
        }
    }

    /// Decoded JSON, or `None` for text bodies
    pub fn as_json(&self) -> Option<&serde_json::Value> {
        match self {
            Self::Html(_) => None,
            Self::Json(value) => Some(value),
        }
    }
}

/// Reasons a single page could not be fetched
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("HTTP status {status_code}")]
    Status { status_code: u16 },

    #[error("Request timeout")]
    Timeout,

    #[error("Connection failed: {0}")]
    Connect(String),

    #[error("Failed to decode body: {0}")]
    Decode(String),

    #[error("Request failed: {0}")]
    Other(String),
}

impl From<reqwest::Error> for FetchError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            Self::Timeout
        } else if e.is_connect() {
            Self::Connect(e.to_string())
        } else if e.is_decode() {
            Self::Decode(e.to_string())
        } else if let Some(status) = e.status() {
            Self::Status {
                status_code: status.as_u16(),
            }
        } else {
            Self::Other(e.to_string())
        }
    }
}

/// Source of page contents
///
/// The pipeline only ever talks to this trait, so tests can script page
/// contents and failures without a network.
#[async_trait]
pub trait PageFetcher: Send + Sync {
    /// Performs one GET request for `url`
    async fn fetch(&self, url: &str, kind: ContentKind) -> Result<PageContent, FetchError>;
}

/// Builds an HTTP client with the configured user agent and the fixed timeout
///
/// # Example
///
/// ```no_run
/// use storefront_harvester::config::UserAgentConfig;
/// use storefront_harvester::crawler::build_http_client;
///
/// let client = build_http_client(&UserAgentConfig::default()).unwrap();
/// ```
pub fn build_http_client(config: &UserAgentConfig) -> Result<Client, reqwest::Error> {
    Client::builder()
        .user_agent(config.header_value())
        .timeout(Duration::from_secs(HTTP_TIMEOUT))
        .gzip(true)
        .brotli(true)
        .build()
}

/// [`PageFetcher`] backed by one shared `reqwest` client
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    pub fn from_config(config: &UserAgentConfig) -> Result<Self, reqwest::Error> {
        Ok(Self::new(build_http_client(config)?))
    }
}

#[async_trait]
impl PageFetcher for HttpFetcher {
    async fn fetch(&self, url: &str, kind: ContentKind) -> Result<PageContent, FetchError> {
        let response = self.client.get(url).send().await?;
        let status = response.status();
        tracing::info!("Getting page {}, response - {}", url, status.as_u16());

        if !status.is_success() {
            return Err(FetchError::Status {
                status_code: status.as_u16(),
            });
        }

        match kind {
            ContentKind::Html => Ok(PageContent::Html(response.text().await?)),
            ContentKind::Json => Ok(PageContent::Json(response.json().await?)),
        }
    }
}
