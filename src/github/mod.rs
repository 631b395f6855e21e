//! GitHub content-fetch client.
//!
//! Lists the proposal directory through the contents API and downloads
//! raw markdown files. No caching, retries, or pagination; the proposal
//! directory fits in a single listing response.

mod response;

pub use response::ContentEntry;

use std::time::Duration;

use reqwest::{Client, StatusCode};
use thiserror::Error;

use crate::config::Upstream;

/// User agent sent with every request. GitHub rejects anonymous agents.
pub const USER_AGENT: &str = concat!("simd-docs/", env!("CARGO_PKG_VERSION"));

const API_BASE: &str = "https://api.github.com";

/// Errors from talking to the source repository.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("GitHub returned {status} for {url}")]
    Status { url: String, status: StatusCode },

    #[error("No download URL for {0}")]
    MissingDownloadUrl(String),
}

/// HTTP client for the upstream repository.
#[derive(Clone)]
pub struct GitHubClient {
    client: Client,
    token: Option<String>,
}

impl GitHubClient {
    /// Create a new client.
    ///
    /// `token` raises the API rate limit; unauthenticated access works
    /// for occasional builds.
    pub fn new(timeout: Duration, token: Option<String>) -> Self {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .gzip(true)
            .brotli(true)
            .build()
            .expect("Failed to create HTTP client");

        Self { client, token }
    }

    /// List every entry in the configured proposal directory.
    pub async fn list_directory(&self, upstream: &Upstream) -> Result<Vec<ContentEntry>, FetchError> {
        let url = format!(
            "{}/repos/{}/{}/contents/{}?ref={}",
            API_BASE,
            upstream.owner,
            upstream.repo,
            upstream.path.trim_matches('/'),
            upstream.branch,
        );

        let mut request = self
            .client
            .get(&url)
            .header("Accept", "application/vnd.github+json");
        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }

        let response = request.send().await?;
        if !response.status().is_success() {
            return Err(FetchError::Status {
                url,
                status: response.status(),
            });
        }

        let entries: Vec<ContentEntry> = response.json().await?;
        tracing::info!("Listed {} entries from {}", entries.len(), url);
        Ok(entries)
    }

    /// Fetch a raw file's body as text.
    pub async fn fetch_raw(&self, url: &str) -> Result<String, FetchError> {
        let mut request = self.client.get(url);
        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }

        let response = request.send().await?;
        if !response.status().is_success() {
            return Err(FetchError::Status {
                url: url.to_string(),
                status: response.status(),
            });
        }

        Ok(response.text().await?)
    }
}
