//! Organization API endpoints.

use super::{NetworksRequestBuilder, PagedRequestBuilder};
use crate::NetworksDbClient;
use networksdb_core::{ParamValue, Params, ResponseObject, Result};

/// Organization API endpoints
pub struct OrgApi<'a> {
    client: &'a NetworksDbClient,
}

impl<'a> OrgApi<'a> {
    pub(crate) const fn new(client: &'a NetworksDbClient) -> Self {
        Self { client }
    }

    /// Search organizations by name
    #[must_use]
    pub fn search(&self, query: impl Into<String>) -> PagedRequestBuilder<'a> {
        let params = Params::new().with("search", query.into());
        PagedRequestBuilder::new(self.client, "/api/org-search", params)
    }

    /// Get details for an organization ID as returned by [`search`](Self::search)
    pub async fn info(&self, id: impl Into<String>) -> Result<ResponseObject> {
        let params = Params::new().with("id", id.into());
        self.client.request("/api/org-info", &params).await
    }

    /// List the networks registered to an organization
    #[must_use]
    pub fn networks(&self, id: impl Into<String>) -> NetworksRequestBuilder<'a> {
        NetworksRequestBuilder::new(self.client, "/api/org-networks", "id", ParamValue::Str(id.into()))
    }
}
