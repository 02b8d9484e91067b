//! Error types for the Gumroad API SDK.
//!
//! This module contains error types used throughout the SDK for configuration
//! and credential validation errors.
//!
//! # Error Handling
//!
//! All configuration constructors return `Result<T, ConfigError>` to enable
//! fail-fast validation. Error messages are designed to be clear and actionable.
//!
//! # Example
//!
//! ```rust
//! use gumroad_api::{ApiRoot, ConfigError};
//!
//! let result = ApiRoot::new("not a url");
//! assert!(matches!(result, Err(ConfigError::InvalidApiRoot { .. })));
//! ```

use thiserror::Error;

/// Errors that can occur during SDK configuration.
///
/// Each variant provides a clear, actionable error message.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Email cannot be empty.
    #[error("Email cannot be empty. Please provide the email of a Gumroad account.")]
    EmptyEmail,

    /// Password cannot be empty.
    #[error("Password cannot be empty. Please provide the password of a Gumroad account.")]
    EmptyPassword,

    /// API root URL is malformed.
    #[error("Invalid API root '{url}'. Please provide a URL with scheme (e.g., 'https://gumroad.com/api/v1/').")]
    InvalidApiRoot {
        /// The invalid URL that was provided.
        url: String,
    },

    /// API root URL does not use an encrypted transport.
    #[error("Insecure API root '{url}'. Requests must use https:// (plain http:// is only allowed for loopback hosts).")]
    InsecureApiRoot {
        /// The rejected URL.
        url: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_email_error_message() {
        let message = ConfigError::EmptyEmail.to_string();
        assert!(message.contains("Email cannot be empty"));
    }

    #[test]
    fn test_invalid_api_root_error_message() {
        let error = ConfigError::InvalidApiRoot {
            url: "gumroad".to_string(),
        };
        let message = error.to_string();
        assert!(message.contains("'gumroad'"));
        assert!(message.contains("with scheme"));
    }

    #[test]
    fn test_insecure_api_root_error_message() {
        let error = ConfigError::InsecureApiRoot {
            url: "http://gumroad.com/api/v1/".to_string(),
        };
        assert!(error.to_string().contains("must use https://"));
    }

    #[test]
    fn test_error_implements_std_error() {
        let error = ConfigError::EmptyPassword;
        let _: &dyn std::error::Error = &error;
    }
}
