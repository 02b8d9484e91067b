//! HTTP response types for the Gumroad API SDK.

use std::collections::HashMap;

use serde_json::Value;

/// Returns whether a response envelope reports success.
///
/// Only an absent `success` field, `null`, or `false` count as failure; any
/// other value is treated as success.
///
/// # Example
///
/// ```rust
/// use gumroad_api::clients::envelope_succeeded;
/// use serde_json::json;
///
/// assert!(envelope_succeeded(&json!({"success": true})));
/// assert!(!envelope_succeeded(&json!({"success": false})));
/// assert!(!envelope_succeeded(&json!({"success": null})));
/// assert!(!envelope_succeeded(&json!({"links": []})));
/// ```
#[must_use]
pub fn envelope_succeeded(body: &Value) -> bool {
    !matches!(body.get("success"), None | Some(Value::Null | Value::Bool(false)))
}

/// A successful response from the Gumroad API.
///
/// The body has already been decoded and normalized, and its envelope
/// reported success.
#[derive(Clone, Debug)]
pub struct HttpResponse {
    /// The HTTP status code.
    pub code: u16,
    /// Response headers, lowercased (headers may have multiple values).
    pub headers: HashMap<String, Vec<String>>,
    /// The normalized response body.
    pub body: Value,
}

impl HttpResponse {
    /// Creates a new `HttpResponse`.
    #[must_use]
    pub const fn new(code: u16, headers: HashMap<String, Vec<String>>, body: Value) -> Self {
        Self {
            code,
            headers,
            body,
        }
    }

    /// Returns the body field stored under `key`, if present.
    #[must_use]
    pub fn field(&self, key: &str) -> Option<&Value> {
        self.body.get(key)
    }
}
