//! Backend connection settings

use crate::error::{ClientError, Result};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Whole-request timeout applied by `HttpBackend`
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// TCP connect timeout applied by `HttpBackend`
pub const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

/// Where the ChainStream backend lives
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Base URL, e.g. `http://localhost:5000`
    pub url: String,
}

impl ClientConfig {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }

    /// Check the URL and return it without trailing slashes
    pub fn base_url(&self) -> Result<String> {
        let url = self.url.trim();

        if url.is_empty() {
            return Err(ClientError::InvalidUrl("URL cannot be empty".to_string()));
        }

        if !url.starts_with("http://") && !url.starts_with("https://") {
            return Err(ClientError::InvalidUrl(
                "URL must start with http:// or https://".to_string(),
            ));
        }

        Ok(url.trim_end_matches('/').to_string())
    }
}
