//! API endpoint modules.

mod account;
mod asn;
mod dns;
mod ip;
mod org;
mod paged;

pub use account::AccountApi;
pub use asn::AsnApi;
pub use dns::DnsApi;
pub use ip::IpApi;
pub use org::OrgApi;
pub use paged::{NetworksRequestBuilder, PagedRequestBuilder};
