//! Configuration for the upstream places provider.
//!
//! All tunable provider parameters live here to avoid hard-coded values
//! scattered throughout the crate. Supports environment variable overrides
//! for runtime customization.

use std::time::Duration;

/// Configuration for talking to the upstream places provider.
#[derive(Debug, Clone)]
pub struct ProviderConfig {
    /// Base URL of the places API
    pub base_url: String,
    /// API key sent with every upstream request
    pub api_key: String,
    /// HTTP request timeout for upstream calls
    pub request_timeout: Duration,
    /// User agent for HTTP requests
    pub user_agent: &'static str,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            base_url: "https://maps.googleapis.com/maps/api/place".to_string(),
            api_key: String::new(),
            request_timeout: Duration::from_secs(30),
            user_agent: "placescout/0.1.0",
        }
    }
}

impl ProviderConfig {
    /// Creates configuration with environment variable overrides.
    ///
    /// `PLACES_API_KEY` supplies the upstream key; `PLACESCOUT_BASE_URL` and
    /// `PLACESCOUT_HTTP_TIMEOUT` (seconds) override the defaults.
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(key) = std::env::var("PLACES_API_KEY") {
            config.api_key = key;
        }

        if let Ok(base_url) = std::env::var("PLACESCOUT_BASE_URL") {
            config.base_url = base_url;
        }

        if let Ok(timeout) = std::env::var("PLACESCOUT_HTTP_TIMEOUT") {
            if let Ok(seconds) = timeout.parse::<u64>() {
                config.request_timeout = Duration::from_secs(seconds);
            }
        }

        config
    }

    /// Creates a configuration pointed at a local stub server for testing.
    pub fn for_testing(base_url: String) -> Self {
        Self {
            base_url,
            api_key: "test-key".to_string(),
            request_timeout: Duration::from_secs(5),
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_values() {
        let config = ProviderConfig::default();

        assert_eq!(config.base_url, "https://maps.googleapis.com/maps/api/place");
        assert!(config.api_key.is_empty());
        assert_eq!(config.request_timeout, Duration::from_secs(30));
        assert_eq!(config.user_agent, "placescout/0.1.0");
    }

    #[test]
    fn test_testing_config() {
        let config = ProviderConfig::for_testing("http://127.0.0.1:9999".to_string());

        assert_eq!(config.base_url, "http://127.0.0.1:9999");
        assert_eq!(config.api_key, "test-key");
        assert_eq!(config.request_timeout, Duration::from_secs(5));
    }
}
