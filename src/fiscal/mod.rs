//! Fiscal Data API access.
//!
//! - **client** - HTTP client bound to a base URL, with request timing logs
//! - **paginate** - page-number pagination that accumulates one endpoint's records

pub mod client;
pub mod paginate;

pub use client::FiscalClient;
pub use paginate::fetch_all;
