//! Rust client for the NetworksDB.io lookup API.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use networksdb::NetworksDbClient;
//!
//! #[tokio::main]
//! async fn main() -> networksdb::Result<()> {
//!     let client = NetworksDbClient::new("your-api-key")?;
//!
//!     // Owner of an address
//!     let info = client.ip().info(Some("8.8.8.8")).await?;
//!     println!("{info}");
//!
//!     // Networks of an organization, IPv6 only, second page
//!     let nets = client.org()
//!         .networks("google-inc")
//!         .ipv6(true)
//!         .page(2)
//!         .send()
//!         .await?;
//!
//!     if let Ok(err) = nets.get("error") {
//!         eprintln!("service error: {:?}", err.as_str());
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! # Features
//!
//! - `default` - Uses rustls for TLS
//! - `rustls` - Use rustls for TLS (recommended)
//! - `native-tls` - Use system native TLS

#![doc(html_root_url = "https://docs.rs/networksdb/1.0.2")]

// Re-export core types
pub use networksdb_core::*;

// Re-export client
pub use networksdb_client::{api, ClientConfig, NetworksDbClient, NetworksDbClientBuilder, API_KEY_HEADER, DEFAULT_BASE_URL};

// Re-export runtime for convenience
pub use tokio;
pub use serde;
pub use serde_json;
