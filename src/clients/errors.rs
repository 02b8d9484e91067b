//! HTTP-specific error types for the Gumroad API SDK.
//!
//! # Error Handling
//!
//! - [`ApiError`]: The API answered with a failure envelope (`success` falsy)
//! - [`InvalidHttpRequestError`]: A request failed validation before sending
//! - [`HttpError`]: Unified error type encompassing all HTTP-related errors
//!
//! Nothing here is retried; every error is returned to the caller.
//!
//! # Example
//!
//! ```rust,ignore
//! use gumroad_api::clients::{HttpClient, HttpError};
//!
//! match client.request(request).await {
//!     Ok(response) => println!("Success: {}", response.body),
//!     Err(HttpError::Api(e)) => println!("Gumroad said: {}", e.message),
//!     Err(HttpError::Decode { code, .. }) => println!("Non-JSON body ({code})"),
//!     Err(HttpError::InvalidRequest(e)) => println!("Invalid request: {e}"),
//!     Err(HttpError::Network(e)) => println!("Network error: {e}"),
//! }
//! ```

use thiserror::Error;

/// Message used when a failure envelope carries no message of its own.
pub const FALLBACK_ERROR_MESSAGE: &str = "No message found.";

/// Error returned when the API reports failure in its response envelope.
///
/// The message is taken from `error.message`, else the top-level `message`,
/// else [`FALLBACK_ERROR_MESSAGE`].
///
/// # Example
///
/// ```rust
/// use gumroad_api::clients::ApiError;
/// use serde_json::json;
///
/// let error = ApiError::from_envelope(404, &json!({
///     "success": false,
///     "error": {"message": "bad id"}
/// }));
/// assert_eq!(error.message, "bad id");
/// assert_eq!(error.to_string(), "GumroadError: bad id");
/// ```
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("GumroadError: {message}")]
pub struct ApiError {
    /// The HTTP status code of the response.
    pub code: u16,
    /// Human-readable message extracted from the envelope.
    pub message: String,
}

impl ApiError {
    /// Builds an `ApiError` from a normalized failure envelope.
    #[must_use]
    pub fn from_envelope(code: u16, body: &serde_json::Value) -> Self {
        let message = body
            .get("error")
            .and_then(|error| error.get("message"))
            .and_then(serde_json::Value::as_str)
            .or_else(|| body.get("message").and_then(serde_json::Value::as_str))
            .unwrap_or(FALLBACK_ERROR_MESSAGE)
            .to_string();

        Self { code, message }
    }
}

/// Error returned when an HTTP request fails validation.
///
/// Raised before anything is sent.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InvalidHttpRequestError {
    /// A GET request was given a form body; GET parameters belong in the path.
    #[error("Cannot send form data with get; encode it into the query string instead.")]
    FormOnGet,
}

/// Unified error type for all HTTP-related errors.
#[derive(Debug, Error)]
pub enum HttpError {
    /// The API answered with a failure envelope.
    #[error(transparent)]
    Api(#[from] ApiError),

    /// Request validation failed.
    #[error(transparent)]
    InvalidRequest(#[from] InvalidHttpRequestError),

    /// Network or connection error.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The response body was not valid JSON.
    #[error("Failed to decode response body (status {code}): {source}")]
    Decode {
        /// The HTTP status code of the response.
        code: u16,
        /// The underlying JSON error.
        #[source]
        source: serde_json::Error,
    },
}

// Verify error types are Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ApiError>();
    assert_send_sync::<HttpError>();
};
