//! Client configuration types.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// The NetworksDB API base URL
pub const DEFAULT_BASE_URL: &str = "https://networksdb.io";

/// Settings used to build a [`NetworksDbClient`](crate::NetworksDbClient)
///
/// Deserializable so applications can keep it in their own config files.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// API key sent in the `X-Api-Key` header; omitted when `None`
    pub api_key: Option<String>,

    /// Scheme and host the `/api/...` paths are appended to
    pub base_url: String,

    /// Whole-request timeout in milliseconds; `None` leaves it to the transport
    pub timeout_ms: Option<u64>,

    /// Value of the `User-Agent` header
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_ms: None,
            user_agent: default_user_agent(),
        }
    }
}

impl ClientConfig {
    /// Create a configuration with the given API key and defaults elsewhere
    #[must_use]
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: Some(api_key.into()),
            ..Self::default()
        }
    }

    /// Set the base URL
    #[must_use]
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set the request timeout
    #[must_use]
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout_ms = Some(u64::try_from(timeout.as_millis()).unwrap_or(u64::MAX));
        self
    }

    /// The timeout as a [`Duration`], if one is set
    #[must_use]
    pub fn timeout_duration(&self) -> Option<Duration> {
        self.timeout_ms.map(Duration::from_millis)
    }
}

pub(crate) fn default_user_agent() -> String {
    format!("networksdb-rust/{}", env!("CARGO_PKG_VERSION"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ClientConfig::default();
        assert_eq!(config.base_url, "https://networksdb.io");
        assert!(config.api_key.is_none());
        assert!(config.timeout_duration().is_none());
        assert!(config.user_agent.starts_with("networksdb-rust/"));
    }

    #[test]
    fn test_builder_methods() {
        let config = ClientConfig::new("secret")
            .base_url("http://localhost:8080")
            .timeout(Duration::from_secs(10));
        assert_eq!(config.api_key.as_deref(), Some("secret"));
        assert_eq!(config.base_url, "http://localhost:8080");
        assert_eq!(config.timeout_duration(), Some(Duration::from_secs(10)));
    }

    #[test]
    fn test_sub_second_timeout_is_kept() {
        let config = ClientConfig::new("k").timeout(Duration::from_millis(500));
        assert_eq!(config.timeout_ms, Some(500));
        assert_eq!(config.timeout_duration(), Some(Duration::from_millis(500)));
    }

    #[test]
    fn test_partial_config_fills_defaults() {
        let config: ClientConfig = serde_json::from_str(r#"{"api_key": "k", "timeout_ms": 5000}"#).unwrap();
        assert_eq!(config.api_key.as_deref(), Some("k"));
        assert_eq!(config.timeout_duration(), Some(Duration::from_secs(5)));
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
    }
}
