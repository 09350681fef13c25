use std::time::Duration;
use thiserror::Error;

/// Result type alias for NetworksDB operations
pub type Result<T> = std::result::Result<T, NetworksDbError>;

/// Errors that can occur when using the NetworksDB API
///
/// Errors reported by the service itself (bad key, unknown organization,
/// exhausted quota) arrive as ordinary JSON payloads and are returned as a
/// [`ResponseObject`](crate::ResponseObject), not as one of these variants.
#[derive(Error, Debug)]
pub enum NetworksDbError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Http(String),

    /// Request timed out, with the configured limit when one was set
    #[error("request timed out{}", .0.map(|d| format!(" after {d:?}")).unwrap_or_default())]
    Timeout(Option<Duration>),

    /// Connection failed
    #[error("connection failed: {0}")]
    Connection(String),

    /// JSON parsing/serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The body was valid JSON but not an object
    #[error("unexpected payload: expected a JSON object, found {found}")]
    UnexpectedPayload {
        /// Kind of JSON value that was found instead
        found: &'static str,
    },

    /// Key lookup on a response object failed
    #[error("'{type_name}' object has no attribute '{key}'")]
    NotFound {
        /// The missing key
        key: String,
        /// Name of the wrapper type the lookup was made on
        type_name: &'static str,
    },

    /// Invalid URL
    #[error("invalid URL: {0}")]
    InvalidUrl(String),

    /// Configuration error
    #[error("configuration error: {0}")]
    Config(String),
}

impl NetworksDbError {
    /// Returns true if the error came from the network layer
    #[must_use]
    pub const fn is_transport(&self) -> bool {
        matches!(
            self,
            Self::Http(_) | Self::Timeout(_) | Self::Connection(_)
        )
    }

    /// Returns true if the error is a missing response field
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    pub(crate) fn not_found(key: &str) -> Self {
        Self::NotFound {
            key: key.to_string(),
            type_name: "ResponseObject",
        }
    }
}
