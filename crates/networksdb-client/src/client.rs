//! Main NetworksDB API client implementation.

use crate::api::{AccountApi, AsnApi, DnsApi, IpApi, OrgApi};
use crate::config::{default_user_agent, ClientConfig, DEFAULT_BASE_URL};
use networksdb_core::{NetworksDbError, Params, ResponseObject, Result};
use reqwest::Client as HttpClient;
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;
use url::Url;

/// Header carrying the API key on every request
pub const API_KEY_HEADER: &str = "X-Api-Key";

/// Main NetworksDB API client
///
/// Cloning is cheap; clones share one connection pool.
#[derive(Clone)]
pub struct NetworksDbClient {
    inner: Arc<ClientInner>,
}

struct ClientInner {
    http: HttpClient,
    api_key: Option<String>,
    base_url: String,
    timeout: Option<Duration>,
}

impl NetworksDbClient {
    /// Create a new client with the given API key using default settings
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        NetworksDbClientBuilder::new().api_key(api_key).build()
    }

    /// Create a client that sends no `X-Api-Key` header
    pub fn anonymous() -> Result<Self> {
        NetworksDbClientBuilder::new().build()
    }

    /// Create a builder for custom configuration
    #[must_use]
    pub fn builder() -> NetworksDbClientBuilder {
        NetworksDbClientBuilder::new()
    }

    /// Create a client from a [`ClientConfig`]
    pub fn from_config(config: ClientConfig) -> Result<Self> {
        NetworksDbClientBuilder::from(config).build()
    }

    /// Access API key endpoints
    #[must_use]
    pub const fn account(&self) -> AccountApi<'_> {
        AccountApi::new(self)
    }

    /// Access IP address endpoints
    #[must_use]
    pub const fn ip(&self) -> IpApi<'_> {
        IpApi::new(self)
    }

    /// Access organization endpoints
    #[must_use]
    pub const fn org(&self) -> OrgApi<'_> {
        OrgApi::new(self)
    }

    /// Access autonomous system endpoints
    #[must_use]
    pub const fn asn(&self) -> AsnApi<'_> {
        AsnApi::new(self)
    }

    /// Access DNS endpoints
    #[must_use]
    pub const fn dns(&self) -> DnsApi<'_> {
        DnsApi::new(self)
    }

    /// Base URL requests are sent to
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.inner.base_url
    }

    /// Whether requests carry an API key
    #[must_use]
    pub fn has_api_key(&self) -> bool {
        self.inner.api_key.is_some()
    }

    /// POST `params` form-encoded to `path` and wrap the JSON reply
    ///
    /// The HTTP status is not interpreted: error replies from the service
    /// are parsed and returned like any other body.
    pub async fn request(&self, path: &str, params: &Params) -> Result<ResponseObject> {
        let url = self.build_url(path);
        debug!(url = %url, params = params.len(), "POST form request");

        let mut request = self.inner.http.post(&url).form(params);
        if let Some(ref key) = self.inner.api_key {
            request = request.header(API_KEY_HEADER, key);
        }

        let response = request
            .send()
            .await
            .map_err(|e| self.transport_error(&e))?;

        let status = response.status();
        debug!(status = status.as_u16(), "response received");

        let body = response
            .text()
            .await
            .map_err(|e| self.transport_error(&e))?;

        body.parse()
    }

    fn build_url(&self, path: &str) -> String {
        format!("{}{}", self.inner.base_url, path)
    }

    /// Convert a reqwest failure to a NetworksDbError
    fn transport_error(&self, err: &reqwest::Error) -> NetworksDbError {
        if err.is_timeout() {
            NetworksDbError::Timeout(self.inner.timeout)
        } else if err.is_connect() {
            NetworksDbError::Connection(err.to_string())
        } else {
            NetworksDbError::Http(err.to_string())
        }
    }
}

impl std::fmt::Debug for NetworksDbClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NetworksDbClient")
            .field("base_url", &self.inner.base_url)
            .field("api_key", &self.inner.api_key.as_ref().map(|_| "<redacted>"))
            .field("timeout", &self.inner.timeout)
            .finish()
    }
}

/// Builder for configuring a [`NetworksDbClient`]
#[derive(Debug, Clone)]
pub struct NetworksDbClientBuilder {
    api_key: Option<String>,
    base_url: String,
    timeout: Option<Duration>,
    user_agent: String,
}

impl Default for NetworksDbClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl NetworksDbClientBuilder {
    /// Create a new builder with no API key
    #[must_use]
    pub fn new() -> Self {
        Self {
            api_key: None,
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: None,
            user_agent: default_user_agent(),
        }
    }

    /// Set the API key
    #[must_use]
    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    /// Set the base URL (useful for testing)
    #[must_use]
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set the request timeout
    #[must_use]
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Set the User-Agent header
    #[must_use]
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.user_agent = agent.into();
        self
    }

    /// Build the client
    pub fn build(self) -> Result<NetworksDbClient> {
        let parsed = Url::parse(&self.base_url)
            .map_err(|e| NetworksDbError::InvalidUrl(format!("{}: {e}", self.base_url)))?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(NetworksDbError::InvalidUrl(format!(
                "{}: unsupported scheme '{}'",
                self.base_url,
                parsed.scheme()
            )));
        }

        let mut http = HttpClient::builder()
            .user_agent(&self.user_agent)
            .gzip(true);
        if let Some(timeout) = self.timeout {
            http = http.timeout(timeout);
        }
        let http = http
            .build()
            .map_err(|e| NetworksDbError::Config(format!("failed to build HTTP client: {e}")))?;

        Ok(NetworksDbClient {
            inner: Arc::new(ClientInner {
                http,
                api_key: self.api_key,
                base_url: self.base_url.trim_end_matches('/').to_string(),
                timeout: self.timeout,
            }),
        })
    }
}

impl From<ClientConfig> for NetworksDbClientBuilder {
    fn from(config: ClientConfig) -> Self {
        Self {
            timeout: config.timeout_duration(),
            api_key: config.api_key,
            base_url: config.base_url,
            user_agent: config.user_agent,
        }
    }
}
