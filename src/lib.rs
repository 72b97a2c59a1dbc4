//! # Simple and type-safe client for the Hunter.io API.
//!
//! Implements a blocking client for the company discovery, domain search and
//! email finder endpoints of the [Hunter API]. Every call sends a single GET
//! request with the API key attached and hands back the parsed JSON body.
//!
//! ## Examples
//!
//! ```no_run
//! use hunter_client::{Client, DomainSearchParams, EmailType};
//!
//! let client = Client::builder()
//!     .api_key("<APIKEY>")
//!     .build()
//!     .unwrap();
//!
//! let found = client.email_finder("example.com", "Jane", "Doe").unwrap();
//! println!("{}", found["data"]["email"]);
//!
//! let params = DomainSearchParams::new()
//!     .domain("example.com")
//!     .type_(EmailType::Personal)
//!     .limit(10);
//! let emails = client.domain_search_with(&params).unwrap();
//! ```
//!
//! [Hunter API]: https://hunter.io/api-documentation/v2

mod client;
mod errors;
mod params;
mod query;

pub use client::*;
pub use errors::*;
pub use params::*;
pub(crate) use query::*;
