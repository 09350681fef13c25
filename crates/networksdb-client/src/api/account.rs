//! API key endpoints.

use crate::NetworksDbClient;
use networksdb_core::{Params, ResponseObject, Result};

/// API key endpoints
pub struct AccountApi<'a> {
    client: &'a NetworksDbClient,
}

impl<'a> AccountApi<'a> {
    pub(crate) const fn new(client: &'a NetworksDbClient) -> Self {
        Self { client }
    }

    /// Get information about the API key in use, including remaining quota
    pub async fn key_info(&self) -> Result<ResponseObject> {
        self.client.request("/api/key", &Params::new()).await
    }
}
