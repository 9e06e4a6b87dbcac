//! Configuration model loaded from external sources.

use std::time::Duration;

use serde::Deserialize;
use validator::Validate;

fn default_request_timeout_secs() -> u64 {
    10
}

fn default_listing_location() -> String {
    "/books".to_string()
}

#[derive(Clone, Debug, Deserialize, Validate)]
/// Basic configuration shared across handlers.
pub struct ServerConfig {
    pub address: String,
    pub port: u16,
    pub templates_dir: String,
    /// Signing key for flash message cookies.
    #[validate(length(min = 64))]
    pub secret: String,
    /// Origin of the bookstore REST API, e.g. `http://127.0.0.1:8000`.
    #[validate(url)]
    pub api_base_url: String,
    #[serde(default = "default_request_timeout_secs")]
    #[validate(range(min = 1))]
    pub request_timeout_secs: u64,
    /// Where a successful creation navigates to.
    #[serde(default = "default_listing_location")]
    pub listing_location: String,
}

impl ServerConfig {
    pub fn api_config(&self) -> ApiConfig {
        ApiConfig::new(
            &self.api_base_url,
            Duration::from_secs(self.request_timeout_secs),
        )
    }
}

/// Settings injected into the bookstore API client at construction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiConfig {
    /// Origin without a trailing slash.
    pub base_url: String,
    pub timeout: Duration,
}

impl ApiConfig {
    pub fn new(base_url: &str, timeout: Duration) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            timeout,
        }
    }

    /// Absolute URL of an API path such as `/materials/`.
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}
