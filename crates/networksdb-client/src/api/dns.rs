//! DNS API endpoints.

use super::PagedRequestBuilder;
use crate::NetworksDbClient;
use networksdb_core::Params;

/// DNS API endpoints
pub struct DnsApi<'a> {
    client: &'a NetworksDbClient,
}

impl<'a> DnsApi<'a> {
    pub(crate) const fn new(client: &'a NetworksDbClient) -> Self {
        Self { client }
    }

    /// Forward lookup: IP addresses a domain resolves to
    #[must_use]
    pub fn forward(&self, domain: impl Into<String>) -> PagedRequestBuilder<'a> {
        let params = Params::new().with("domain", domain.into());
        PagedRequestBuilder::new(self.client, "/api/dns", params)
    }

    /// Reverse lookup: domains pointing at an IP address
    #[must_use]
    pub fn reverse(&self, ip: impl Into<String>) -> PagedRequestBuilder<'a> {
        let params = Params::new().with("ip", ip.into());
        PagedRequestBuilder::new(self.client, "/api/reverse-dns", params)
    }

    /// Reverse lookup over a range of addresses
    ///
    /// With `end` the range is `start..=end`; without it (or with an empty
    /// `end`) `start` is taken as CIDR notation. Only `end` decides, not the
    /// form of `start`.
    #[must_use]
    pub fn mass_reverse(&self, start: impl Into<String>, end: Option<&str>) -> PagedRequestBuilder<'a> {
        PagedRequestBuilder::new(self.client, "/api/mass-reverse-dns", range_params(start.into(), end))
    }
}

fn range_params(start: String, end: Option<&str>) -> Params {
    match end.filter(|e| !e.is_empty()) {
        Some(end) => Params::new().with("ip_start", start).with("ip_end", end),
        None => Params::new().with("cidr", start),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> NetworksDbClient {
        NetworksDbClient::new("test").unwrap()
    }

    #[test]
    fn test_forward_and_reverse_params() {
        let client = client();
        assert_eq!(
            client.dns().forward("example.com").page(3).params(),
            Params::new().with("domain", "example.com").with("page", 3)
        );
        assert_eq!(
            client.dns().reverse("8.8.8.8").params(),
            Params::new().with("ip", "8.8.8.8").with("page", 1)
        );
    }

    #[test]
    fn test_mass_reverse_with_range() {
        let client = client();
        let params = client.dns().mass_reverse("10.0.0.1", Some("10.0.0.255")).params();
        assert_eq!(
            params,
            Params::new()
                .with("ip_start", "10.0.0.1")
                .with("ip_end", "10.0.0.255")
                .with("page", 1)
        );
    }

    #[test]
    fn test_mass_reverse_with_cidr() {
        let client = client();
        let params = client.dns().mass_reverse("10.0.0.0/24", None).params();
        assert_eq!(params, Params::new().with("cidr", "10.0.0.0/24").with("page", 1));
    }

    #[test]
    fn test_mass_reverse_empty_end_uses_cidr() {
        let params = range_params("10.0.0.0/24".into(), Some(""));
        assert_eq!(params, Params::new().with("cidr", "10.0.0.0/24"));
        assert!(!params.contains_key("ip_end"));
    }

    #[test]
    fn test_mass_reverse_end_decides_form() {
        // a CIDR-looking start with an explicit end still uses the range form
        let params = range_params("10.0.0.0/24".into(), Some("10.0.1.0"));
        assert!(params.contains_key("ip_start"));
        assert!(!params.contains_key("cidr"));
    }
}
