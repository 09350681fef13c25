//! Request builders shared by the paginated endpoints.

use crate::NetworksDbClient;
use networksdb_core::{ParamValue, Params, ResponseObject, Result};

/// First page of results, sent when no page is chosen
pub const DEFAULT_PAGE: u32 = 1;

/// Builder for endpoints that take fixed parameters plus a page number
///
/// The page is always sent, including the default of 1.
pub struct PagedRequestBuilder<'a> {
    client: &'a NetworksDbClient,
    path: &'static str,
    params: Params,
    page: u32,
}

impl<'a> PagedRequestBuilder<'a> {
    pub(crate) const fn new(client: &'a NetworksDbClient, path: &'static str, params: Params) -> Self {
        Self {
            client,
            path,
            params,
            page: DEFAULT_PAGE,
        }
    }

    /// Set the page number for pagination
    #[must_use]
    pub fn page(mut self, page: u32) -> Self {
        self.page = page;
        self
    }

    /// Parameters this request will send
    #[must_use]
    pub fn params(&self) -> Params {
        self.params.clone().with("page", self.page)
    }

    /// Execute the request
    pub async fn send(self) -> Result<ResponseObject> {
        let params = self.params();
        self.client.request(self.path, &params).await
    }
}

/// Builder for the organization and ASN network listings
pub struct NetworksRequestBuilder<'a> {
    client: &'a NetworksDbClient,
    path: &'static str,
    key: &'static str,
    value: ParamValue,
    ipv6: bool,
    page: u32,
}

impl<'a> NetworksRequestBuilder<'a> {
    pub(crate) const fn new(
        client: &'a NetworksDbClient,
        path: &'static str,
        key: &'static str,
        value: ParamValue,
    ) -> Self {
        Self {
            client,
            path,
            key,
            value,
            ipv6: false,
            page: DEFAULT_PAGE,
        }
    }

    /// List IPv6 networks instead of IPv4
    #[must_use]
    pub fn ipv6(mut self, ipv6: bool) -> Self {
        self.ipv6 = ipv6;
        self
    }

    /// Set the page number for pagination
    #[must_use]
    pub fn page(mut self, page: u32) -> Self {
        self.page = page;
        self
    }

    /// Parameters this request will send
    ///
    /// `ipv6` appears only when enabled; it is never sent as `false`.
    #[must_use]
    pub fn params(&self) -> Params {
        let mut params = Params::new().with(self.key, self.value.clone());
        if self.ipv6 {
            params.insert("ipv6", true);
        }
        params.with("page", self.page)
    }

    /// Execute the request
    pub async fn send(self) -> Result<ResponseObject> {
        let params = self.params();
        self.client.request(self.path, &params).await
    }
}
