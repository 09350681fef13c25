//! Autonomous system API endpoints.

use super::NetworksRequestBuilder;
use crate::NetworksDbClient;
use networksdb_core::{ParamValue, Params, ResponseObject, Result};

/// Autonomous system API endpoints
///
/// ASNs may be given as numbers (`15169`) or strings (`"AS15169"`); they are
/// sent unchanged.
pub struct AsnApi<'a> {
    client: &'a NetworksDbClient,
}

impl<'a> AsnApi<'a> {
    pub(crate) const fn new(client: &'a NetworksDbClient) -> Self {
        Self { client }
    }

    /// Get details for an autonomous system
    pub async fn info(&self, asn: impl Into<ParamValue>) -> Result<ResponseObject> {
        let params = Params::new().with("asn", asn);
        self.client.request("/api/asn-info", &params).await
    }

    /// List the networks announced by an autonomous system
    #[must_use]
    pub fn networks(&self, asn: impl Into<ParamValue>) -> NetworksRequestBuilder<'a> {
        NetworksRequestBuilder::new(self.client, "/api/asn-networks", "asn", asn.into())
    }
}
