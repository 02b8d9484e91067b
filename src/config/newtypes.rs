//! Validated newtype wrappers for configuration and credential values.
//!
//! This module provides type-safe wrappers around string values that validate
//! their contents on construction. Invalid values are rejected with clear error messages.

use crate::error::ConfigError;
use std::fmt;

/// Hosts allowed to use plain `http://`, so a local mock server can stand in
/// for the API.
const LOOPBACK_HOSTS: &[&str] = &["localhost", "127.0.0.1", "[::1]"];

/// A validated Gumroad account email.
///
/// # Example
///
/// ```rust
/// use gumroad_api::Email;
///
/// let email = Email::new("seller@example.com").unwrap();
/// assert_eq!(email.as_ref(), "seller@example.com");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Email(String);

impl Email {
    /// Creates a new validated email.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyEmail`] if the email is empty or blank.
    pub fn new(email: impl Into<String>) -> Result<Self, ConfigError> {
        let email = email.into();
        let email = email.trim();
        if email.is_empty() {
            return Err(ConfigError::EmptyEmail);
        }
        Ok(Self(email.to_string()))
    }
}

impl AsRef<str> for Email {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// A validated Gumroad account password.
///
/// The `Debug` implementation masks the value, displaying only
/// `Password(*****)`, so sessions and clients can be logged safely.
///
/// # Example
///
/// ```rust
/// use gumroad_api::Password;
///
/// let password = Password::new("hunter2").unwrap();
/// assert_eq!(format!("{:?}", password), "Password(*****)");
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct Password(String);

impl Password {
    /// Creates a new validated password.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyPassword`] if the password is empty.
    pub fn new(password: impl Into<String>) -> Result<Self, ConfigError> {
        let password = password.into();
        if password.is_empty() {
            return Err(ConfigError::EmptyPassword);
        }
        Ok(Self(password))
    }
}

impl AsRef<str> for Password {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Password(*****)")
    }
}

/// A validated API root URL.
///
/// Every request URL is built by appending a resource path to this root, so
/// the stored value always ends with `/`.
///
/// # Transport Security
///
/// Only `https://` roots are accepted, except that `http://` is allowed for
/// loopback hosts (`localhost`, `127.0.0.1`, `[::1]`).
///
/// # Example
///
/// ```rust
/// use gumroad_api::ApiRoot;
///
/// let root = ApiRoot::new("https://gumroad.com/api/v1").unwrap();
/// assert_eq!(root.as_ref(), "https://gumroad.com/api/v1/");
/// assert_eq!(root.host_name(), "gumroad.com");
///
/// assert!(ApiRoot::new("http://gumroad.com/api/v1/").is_err());
/// assert!(ApiRoot::new("http://127.0.0.1:8080/api/v1/").is_ok());
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiRoot {
    url: String,
    scheme_end: usize,
    host_start: usize,
    host_end: usize,
}

impl ApiRoot {
    /// The production Gumroad API root.
    pub const DEFAULT: &'static str = "https://gumroad.com/api/v1/";

    /// Creates a new validated API root.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidApiRoot`] if the URL has no scheme or host,
    /// and [`ConfigError::InsecureApiRoot`] if it is not `https://` and not a
    /// loopback address.
    pub fn new(url: impl Into<String>) -> Result<Self, ConfigError> {
        let url = url.into();
        let mut url = url.trim().to_string();

        let invalid = |url: &str| ConfigError::InvalidApiRoot {
            url: url.to_string(),
        };

        let scheme_end = url.find("://").ok_or_else(|| invalid(&url))?;
        let scheme = url[..scheme_end].to_ascii_lowercase();
        if scheme.is_empty() || !scheme.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(invalid(&url));
        }

        let host_start = scheme_end + 3;
        let remainder = &url[host_start..];
        let host_end = remainder
            .find([':', '/', '?', '#'])
            .map_or(url.len(), |i| host_start + i);
        // IPv6 literals contain ':' so the host runs to the closing bracket.
        let host_end = if remainder.starts_with('[') {
            remainder.find(']').map_or(host_end, |i| host_start + i + 1)
        } else {
            host_end
        };

        let host = &url[host_start..host_end];
        if host.is_empty() || url[host_start..].contains(['?', '#']) {
            return Err(invalid(&url));
        }

        let secure = match scheme.as_str() {
            "https" => true,
            "http" => LOOPBACK_HOSTS.contains(&host.to_ascii_lowercase().as_str()),
            _ => return Err(invalid(&url)),
        };
        if !secure {
            return Err(ConfigError::InsecureApiRoot { url });
        }

        url.replace_range(..scheme_end, &scheme);
        if !url.ends_with('/') {
            url.push('/');
        }

        Ok(Self {
            url,
            scheme_end,
            host_start,
            host_end,
        })
    }

    /// Returns the URL scheme (e.g., "https").
    #[must_use]
    pub fn scheme(&self) -> &str {
        &self.url[..self.scheme_end]
    }

    /// Returns the host name portion of the URL.
    #[must_use]
    pub fn host_name(&self) -> &str {
        &self.url[self.host_start..self.host_end]
    }

    /// Joins a resource path onto this root.
    ///
    /// A leading `/` on `path` is ignored so `"links"` and `"/links"` resolve
    /// to the same URL.
    #[must_use]
    pub fn join(&self, path: &str) -> String {
        format!("{}{}", self.url, path.trim_start_matches('/'))
    }
}

impl Default for ApiRoot {
    fn default() -> Self {
        Self {
            url: Self::DEFAULT.to_string(),
            scheme_end: 5,
            host_start: 8,
            host_end: 19,
        }
    }
}

impl AsRef<str> for ApiRoot {
    fn as_ref(&self) -> &str {
        &self.url
    }
}

impl fmt::Display for ApiRoot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.url)
    }
}
