//! Client configuration.
//!
//! One externally supplied base URL resolved at startup, plus the fixed
//! request timeout every outbound call runs under.

use crate::error::{ApiError, Result};
use std::time::Duration;
use url::Url;

/// Fixed timeout applied to every outbound call.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(15);

/// Resolved client configuration, injected into the pipeline at startup.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    base_url: Url,
    timeout: Duration,
}

impl ClientConfig {
    /// Create a configuration from the service base URL.
    pub fn new(base_url: &str) -> Result<Self> {
        let base_url = Url::parse(base_url)
            .map_err(|e| ApiError::Config(format!("Invalid base URL '{}': {}", base_url, e)))?;

        Ok(Self {
            base_url,
            timeout: REQUEST_TIMEOUT,
        })
    }

    /// Override the request timeout. Intended for tests; production clients
    /// keep the fixed default.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Resolve an endpoint path against the base URL.
    pub fn endpoint(&self, path: &str) -> Result<Url> {
        self.base_url
            .join(path)
            .map_err(|e| ApiError::Config(format!("Invalid endpoint path '{}': {}", path, e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_endpoint_against_base() {
        let config = ClientConfig::new("http://admin.example.com").unwrap();
        let url = config.endpoint("/api/v1/jobs").unwrap();
        assert_eq!(url.as_str(), "http://admin.example.com/api/v1/jobs");
    }

    #[test]
    fn default_timeout_is_fifteen_seconds() {
        let config = ClientConfig::new("http://localhost:8000").unwrap();
        assert_eq!(config.timeout(), Duration::from_secs(15));
    }

    #[test]
    fn with_timeout_overrides_the_default() {
        let config = ClientConfig::new("http://localhost:8000")
            .unwrap()
            .with_timeout(Duration::from_millis(200));
        assert_eq!(config.timeout(), Duration::from_millis(200));
    }

    #[test]
    fn invalid_base_url_is_a_config_error() {
        let err = ClientConfig::new("not a url").unwrap_err();
        assert!(matches!(err, ApiError::Config(_)));
    }
}
