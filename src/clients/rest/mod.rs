//! REST API client for the Gumroad API.
//!
//! This module provides a higher-level REST API client built on top of the
//! [`HttpClient`](crate::clients::HttpClient) with one method per HTTP verb.
//!
//! # Overview
//!
//! - [`RestClient`]: The REST API client with `get()`, `post()`, `put()`, `delete()` methods
//! - [`RestError`]: Error type for REST API operations
//!
//! # Parameters
//!
//! `get` appends its parameters to the path as a percent-encoded query
//! string (see [`encode_query`]); `post`, `put`, and `delete` send them as an
//! `application/x-www-form-urlencoded` body.
//!
//! # Example
//!
//! ```rust,ignore
//! use gumroad_api::{GumroadConfig, RestClient};
//!
//! let client = RestClient::new(&GumroadConfig::default())?;
//! let response = client.get("links", None).await?;
//! println!("Links: {}", response.body["links"]);
//! ```

mod client;
mod errors;

pub use client::{encode_query, RestClient};
pub use errors::RestError;
