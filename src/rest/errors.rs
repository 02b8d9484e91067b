//! Resource-specific error types for REST API operations.
//!
//! # Error Handling
//!
//! - [`ValidationError`]: A local precondition failed before any request was sent
//! - [`ResourceError::PathResolutionFailed`]: The resource lacks the id an operation needs
//! - [`ResourceError::MissingField`]: A successful response lacked a required field
//! - [`ResourceError::Http`] / [`ResourceError::Rest`]: Transport and API failures
//!
//! # Example
//!
//! ```rust,ignore
//! use gumroad_api::rest::{ResourceError, ValidationError};
//!
//! match link.set_price(10.5) {
//!     Ok(()) => {}
//!     Err(ValidationError::NotWholeNumber { input }) => println!("{input} is fractional"),
//!     Err(e) => println!("{e}"),
//! }
//!
//! match Link::find(&client, "abc").await {
//!     Ok(link) => println!("Found: {:?}", link.name()),
//!     Err(e) => println!("Lookup failed: {}", e.api_message().unwrap_or("transport error")),
//! }
//! ```

use crate::clients::{ApiError, HttpError, RestError};
use crate::error::ConfigError;
use thiserror::Error;

/// A local validation failure. No request is sent when one occurs.
///
/// # Example
///
/// ```rust
/// use gumroad_api::rest::ValidationError;
///
/// let error = ValidationError::Negative { input: "-1".to_string() };
/// assert_eq!(error.to_string(), "Invalid price -1: must be positive");
/// ```
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The price is fractional or not an integer at all.
    #[error("Invalid price {input}: must be whole-number integer")]
    NotWholeNumber {
        /// The rejected input, as supplied.
        input: String,
    },

    /// The price is below zero.
    #[error("Invalid price {input}: must be positive")]
    Negative {
        /// The rejected input, as supplied.
        input: String,
    },
}

/// Error type for REST resource operations.
#[derive(Debug, Error)]
pub enum ResourceError {
    /// A field value was rejected locally.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Login credentials were rejected locally.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// No valid path matches the provided IDs and operation.
    ///
    /// Returned when saving or destroying a resource that has no id.
    #[error("Cannot resolve path for {resource}::{operation} with provided IDs")]
    PathResolutionFailed {
        /// The type name of the resource.
        resource: &'static str,
        /// The operation being attempted (e.g., "update", "delete").
        operation: &'static str,
    },

    /// A successful response lacked a field the operation depends on.
    #[error("{resource} response is missing '{field}'")]
    MissingField {
        /// The type name of the resource.
        resource: &'static str,
        /// The missing field.
        field: &'static str,
    },

    /// An HTTP-level error occurred.
    #[error(transparent)]
    Http(#[from] HttpError),

    /// A REST-level error occurred.
    #[error(transparent)]
    Rest(#[from] RestError),
}

impl ResourceError {
    /// Returns the API failure if the server rejected the request.
    #[must_use]
    pub const fn api_error(&self) -> Option<&ApiError> {
        match self {
            Self::Http(HttpError::Api(error)) => Some(error),
            Self::Rest(rest) => rest.api_error(),
            _ => None,
        }
    }

    /// Returns the server-supplied failure message, if any.
    #[must_use]
    pub fn api_message(&self) -> Option<&str> {
        self.api_error().map(|error| error.message.as_str())
    }
}

// Verify ResourceError is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ResourceError>();
    assert_send_sync::<ValidationError>();
};
