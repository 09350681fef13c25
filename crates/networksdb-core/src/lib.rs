//! Core types for the NetworksDB.io API client.
//!
//! This crate provides the foundational types used across the NetworksDB library:
//!
//! - **Responses**: [`ResponseObject`], a nested-access wrapper over decoded JSON bodies
//! - **Parameters**: [`Params`], the ordered form body sent with each request
//! - **Errors**: Transport, parse and lookup failures with [`NetworksDbError`]
//!
//! # Example
//!
//! ```rust,ignore
//! use networksdb_core::{ResponseObject, Result};
//!
//! fn print_org(resp: &ResponseObject) -> Result<()> {
//!     let name = resp.path(&["organisation", "name"])?;
//!     println!("Organisation: {:?}", name.as_str());
//!     Ok(())
//! }
//! ```

#![doc(html_root_url = "https://docs.rs/networksdb-core/1.0.2")]

mod error;
mod params;
mod response;

pub use error::{NetworksDbError, Result};
pub use params::{ParamValue, Params};
pub use response::{Field, FieldMut, ResponseMut, ResponseObject, ResponseRef};
