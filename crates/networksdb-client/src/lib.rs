//! HTTP client for the NetworksDB.io API.
//!
//! This crate provides the main [`NetworksDbClient`] for interacting with the
//! NetworksDB API. Every endpoint returns a [`ResponseObject`]; errors reported
//! by the service arrive as ordinary payloads (typically with an `error` key),
//! so callers inspect the body rather than the result type.

#![doc(html_root_url = "https://docs.rs/networksdb-client/1.0.2")]

mod client;
mod config;
pub mod api;

pub use client::{NetworksDbClient, NetworksDbClientBuilder, API_KEY_HEADER};
pub use config::*;
pub use networksdb_core::{Field, NetworksDbError, ParamValue, Params, ResponseObject, Result};
