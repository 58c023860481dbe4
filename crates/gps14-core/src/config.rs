//! Client configuration.

use std::time::Duration;

use crate::error::ConfigError;

/// Default base URL of the tracking service.
pub const DEFAULT_BASE_URL: &str = "https://tracking.gps-14.net/api";

/// Path of the single protocol endpoint below the base URL.
pub const ENDPOINT_PATH: &str = "api.php";

/// Default per-request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(15);

/// Environment variables the command line reads its connection settings from.
pub const BASE_URL_ENV: &str = "GPS14_BASE_URL";
pub const TIMEOUT_ENV: &str = "GPS14_TIMEOUT_MS";

/// Settings for a [`TrackingClient`](crate::client::TrackingClient).
#[derive(Debug, Clone, PartialEq)]
pub struct ClientConfig {
    base_url: String,
    pub timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl ClientConfig {
    /// Create a config for the given base URL.
    ///
    /// The URL must use http or https; a trailing slash is removed.
    pub fn new(base_url: &str) -> Result<Self, ConfigError> {
        let base_url = base_url.trim().trim_end_matches('/').to_string();

        if !base_url.starts_with("http://") && !base_url.starts_with("https://") {
            return Err(ConfigError::InvalidUrl(format!(
                "URL must start with http:// or https://, got: {}",
                base_url
            )));
        }

        Ok(Self {
            base_url,
            timeout: DEFAULT_TIMEOUT,
        })
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Full URL of the protocol endpoint.
    pub fn endpoint(&self) -> String {
        format!("{}/{}", self.base_url, ENDPOINT_PATH)
    }
}
