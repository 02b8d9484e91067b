//! HTTP request types for the Gumroad API SDK.
//!
//! This module provides the [`HttpRequest`] type and its builder for
//! constructing requests to the Gumroad API.

use std::collections::BTreeMap;
use std::fmt;

use crate::clients::errors::InvalidHttpRequestError;

/// Form parameters sent as an `application/x-www-form-urlencoded` body.
///
/// A `BTreeMap` keeps the encoded body in a stable key order.
pub type FormParams = BTreeMap<String, String>;

/// HTTP methods supported by the Gumroad API.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum HttpMethod {
    /// Reads; parameters travel in the query string.
    Get,
    /// Creates links and logs in.
    Post,
    /// Sends changed link fields.
    Put,
    /// Deletes links and ends sessions.
    Delete,
}

impl HttpMethod {
    /// Returns `true` if requests with this method carry a form body.
    #[must_use]
    pub const fn sends_form(&self) -> bool {
        !matches!(self, Self::Get)
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Get => write!(f, "get"),
            Self::Post => write!(f, "post"),
            Self::Put => write!(f, "put"),
            Self::Delete => write!(f, "delete"),
        }
    }
}

/// An HTTP request to be sent to the Gumroad API.
///
/// Use [`HttpRequest::builder`] to construct requests with the builder pattern.
///
/// # Example
///
/// ```rust
/// use gumroad_api::clients::{HttpRequest, HttpMethod};
///
/// // GET request, parameters already encoded into the path
/// let get_request = HttpRequest::builder(HttpMethod::Get, "links?page=2")
///     .build()
///     .unwrap();
///
/// // PUT request with a form body
/// let put_request = HttpRequest::builder(HttpMethod::Put, "links/abc")
///     .form_param("name", "Renamed")
///     .build()
///     .unwrap();
/// assert_eq!(put_request.form.unwrap()["name"], "Renamed");
/// ```
#[derive(Clone, Debug)]
pub struct HttpRequest {
    /// The HTTP method for this request.
    pub http_method: HttpMethod,
    /// The path (relative to the API root) for this request.
    pub path: String,
    /// Form parameters for non-GET requests.
    pub form: Option<FormParams>,
}

impl HttpRequest {
    /// Creates a new builder for constructing an `HttpRequest`.
    #[must_use]
    pub fn builder(method: HttpMethod, path: impl Into<String>) -> HttpRequestBuilder {
        HttpRequestBuilder::new(method, path)
    }

    /// Checks the request can be sent as built.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidHttpRequestError::FormOnGet`] if a GET request has a
    /// non-empty form body.
    pub fn verify(&self) -> Result<(), InvalidHttpRequestError> {
        let has_form = self.form.as_ref().is_some_and(|form| !form.is_empty());
        if has_form && !self.http_method.sends_form() {
            return Err(InvalidHttpRequestError::FormOnGet);
        }

        Ok(())
    }
}

/// Builder for constructing [`HttpRequest`] instances.
#[derive(Debug)]
pub struct HttpRequestBuilder {
    http_method: HttpMethod,
    path: String,
    form: Option<FormParams>,
}

impl HttpRequestBuilder {
    fn new(method: HttpMethod, path: impl Into<String>) -> Self {
        Self {
            http_method: method,
            path: path.into(),
            form: None,
        }
    }

    /// Sets all form parameters at once.
    #[must_use]
    pub fn form(mut self, form: FormParams) -> Self {
        self.form = Some(form);
        self
    }

    /// Adds a single form parameter.
    #[must_use]
    pub fn form_param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.form
            .get_or_insert_with(FormParams::new)
            .insert(key.into(), value.into());
        self
    }

    /// Builds the [`HttpRequest`], validating it first.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidHttpRequestError`] if validation fails.
    pub fn build(self) -> Result<HttpRequest, InvalidHttpRequestError> {
        let request = HttpRequest {
            http_method: self.http_method,
            path: self.path,
            form: self.form,
        };
        request.verify()?;
        Ok(request)
    }
}

// Verify types are Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<HttpMethod>();
    assert_send_sync::<HttpRequest>();
};
