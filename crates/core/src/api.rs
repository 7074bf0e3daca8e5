//! Shared HTTP plumbing for the backend endpoints

use std::time::Duration;

use crate::config::BackendConfig;
use crate::error::RequestError;

/// A configured HTTP client bound to one backend base URL.
///
/// Cheap to clone; clones share the connection pool.
#[derive(Debug, Clone)]
pub struct ApiClient {
    base_url: String,
    http: reqwest::Client,
}

impl ApiClient {
    /// Builds a client whose every request is bounded by `timeout_secs`.
    pub fn new(config: &BackendConfig) -> Result<Self, RequestError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs.max(1)))
            .build()
            .map_err(RequestError::from)?;
        Ok(Self {
            base_url: config.url.trim_end_matches('/').to_string(),
            http,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub(crate) fn http(&self) -> &reqwest::Client {
        &self.http
    }
}

/// Reads the body as text, falling back to `fallback` when empty or unreadable.
pub(crate) async fn error_text(resp: reqwest::Response, fallback: &str) -> String {
    match resp.text().await {
        Ok(text) if !text.trim().is_empty() => text.trim().to_string(),
        _ => fallback.to_string(),
    }
}
