//! IP address endpoints.

use crate::NetworksDbClient;
use networksdb_core::{Params, ResponseObject, Result};

/// IP address endpoints
pub struct IpApi<'a> {
    client: &'a NetworksDbClient,
}

impl<'a> IpApi<'a> {
    pub(crate) const fn new(client: &'a NetworksDbClient) -> Self {
        Self { client }
    }

    /// Get owner and network information for an IP address
    ///
    /// With `None` or an empty string the service reports on the address the
    /// request came from.
    pub async fn info(&self, ip: Option<&str>) -> Result<ResponseObject> {
        self.client.request("/api/ip-info", &ip_params(ip)).await
    }

    /// Get geolocation data for an IP address
    ///
    /// With `None` or an empty string the service reports on the address the
    /// request came from.
    pub async fn geo(&self, ip: Option<&str>) -> Result<ResponseObject> {
        self.client.request("/api/ip-geo", &ip_params(ip)).await
    }
}

// No `ip` key at all when absent or empty, never an empty one.
fn ip_params(ip: Option<&str>) -> Params {
    Params::new().with_opt("ip", ip.filter(|s| !s.is_empty()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use networksdb_core::ParamValue;

    #[test]
    fn test_own_ip_sends_no_params() {
        let params = ip_params(None);
        assert!(params.is_empty());
        assert!(!params.contains_key("ip"));
    }

    #[test]
    fn test_empty_ip_is_treated_as_absent() {
        let params = ip_params(Some(""));
        assert!(params.is_empty());
    }

    #[test]
    fn test_explicit_ip() {
        let params = ip_params(Some("1.1.1.1"));
        assert_eq!(params.len(), 1);
        assert_eq!(params.get("ip"), Some(&ParamValue::Str("1.1.1.1".into())));
    }
}
