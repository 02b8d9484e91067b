//! HTTP client types for Gumroad API communication.
//!
//! This module provides the request/response layer for making authenticated
//! requests to the Gumroad API.
//!
//! # Overview
//!
//! - [`HttpClient`]: Executes requests, attaches credentials, checks envelopes
//! - [`HttpRequest`]: A request to be sent to the API
//! - [`HttpResponse`]: A successful, normalized response
//! - [`HttpMethod`]: Supported HTTP methods (GET, POST, PUT, DELETE)
//! - [`Credentials`]: The token/password pair used for basic authentication
//! - [`normalize_keys`]: Normalizes decoded response bodies, keeping key text
//! - [`rest::RestClient`]: Higher-level client with one method per verb
//!
//! # Response Envelope
//!
//! Every Gumroad response is a JSON object with a `success` flag. When the
//! flag is absent, `null`, or `false` the request fails with [`ApiError`],
//! whatever the HTTP status code was.
//!
//! # Example
//!
//! ```rust,ignore
//! use gumroad_api::GumroadConfig;
//! use gumroad_api::clients::{HttpClient, HttpRequest, HttpMethod};
//!
//! let client = HttpClient::new(&GumroadConfig::default())?;
//!
//! let request = HttpRequest::builder(HttpMethod::Post, "sessions")
//!     .form_param("email", "seller@example.com")
//!     .form_param("password", "hunter2")
//!     .build()
//!     .unwrap();
//!
//! let response = client.request(request).await?;
//! ```

mod credentials;
mod errors;
mod http_client;
mod http_request;
mod http_response;
mod normalize;
pub mod rest;

pub use credentials::Credentials;
pub use errors::{ApiError, HttpError, InvalidHttpRequestError, FALLBACK_ERROR_MESSAGE};
pub use http_client::{HttpClient, SDK_VERSION};
pub use http_request::{FormParams, HttpMethod, HttpRequest, HttpRequestBuilder};
pub use http_response::{envelope_succeeded, HttpResponse};
pub use normalize::normalize_keys;
pub use rest::{RestClient, RestError};
