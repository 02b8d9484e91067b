//! Configuration types for the Gumroad API SDK.
//!
//! This module provides the configuration types used to initialize the SDK
//! and the validated credential newtypes.
//!
//! # Overview
//!
//! - [`GumroadConfig`]: Settings shared by every request a client issues
//! - [`GumroadConfigBuilder`]: A builder for constructing [`GumroadConfig`] instances
//! - [`ApiRoot`]: A validated API root URL
//! - [`Email`] and [`Password`]: Validated login credentials
//!
//! # Example
//!
//! ```rust
//! use gumroad_api::{GumroadConfig, ApiRoot};
//!
//! let config = GumroadConfig::builder()
//!     .api_root(ApiRoot::new("https://gumroad.com/api/v1/").unwrap())
//!     .user_agent_prefix("MyApp/1.0")
//!     .build();
//!
//! assert_eq!(config.api_root().host_name(), "gumroad.com");
//! ```

mod newtypes;

pub use newtypes::{ApiRoot, Email, Password};

/// Configuration for the Gumroad API SDK.
///
/// There are no required fields; [`GumroadConfig::default`] targets the
/// production API.
///
/// # Thread Safety
///
/// `GumroadConfig` is `Clone`, `Send`, and `Sync`.
#[derive(Clone, Debug, Default)]
pub struct GumroadConfig {
    api_root: ApiRoot,
    user_agent_prefix: Option<String>,
}

impl GumroadConfig {
    /// Creates a new builder for constructing a `GumroadConfig`.
    #[must_use]
    pub fn builder() -> GumroadConfigBuilder {
        GumroadConfigBuilder::new()
    }

    /// Returns the API root every resource path is joined onto.
    #[must_use]
    pub const fn api_root(&self) -> &ApiRoot {
        &self.api_root
    }

    /// Returns the user agent prefix, if configured.
    #[must_use]
    pub fn user_agent_prefix(&self) -> Option<&str> {
        self.user_agent_prefix.as_deref()
    }
}

// Verify GumroadConfig is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<GumroadConfig>();
};

/// Builder for constructing [`GumroadConfig`] instances.
///
/// # Defaults
///
/// - `api_root`: `https://gumroad.com/api/v1/`
/// - `user_agent_prefix`: `None`
#[derive(Debug, Default)]
pub struct GumroadConfigBuilder {
    api_root: Option<ApiRoot>,
    user_agent_prefix: Option<String>,
}

impl GumroadConfigBuilder {
    /// Creates a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Overrides the API root (e.g., to point at a mock server).
    #[must_use]
    pub fn api_root(mut self, api_root: ApiRoot) -> Self {
        self.api_root = Some(api_root);
        self
    }

    /// Sets the user agent prefix for HTTP requests.
    #[must_use]
    pub fn user_agent_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.user_agent_prefix = Some(prefix.into());
        self
    }

    /// Builds the [`GumroadConfig`].
    #[must_use]
    pub fn build(self) -> GumroadConfig {
        GumroadConfig {
            api_root: self.api_root.unwrap_or_default(),
            user_agent_prefix: self.user_agent_prefix,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_provides_sensible_defaults() {
        let config = GumroadConfig::builder().build();

        assert_eq!(config.api_root().as_ref(), ApiRoot::DEFAULT);
        assert!(config.user_agent_prefix().is_none());
    }

    #[test]
    fn test_builder_with_all_optional_fields() {
        let root = ApiRoot::new("http://localhost:9000/api/v1").unwrap();
        let config = GumroadConfig::builder()
            .api_root(root.clone())
            .user_agent_prefix("MyApp/1.0")
            .build();

        assert_eq!(config.api_root(), &root);
        assert_eq!(config.user_agent_prefix(), Some("MyApp/1.0"));
    }

    #[test]
    fn test_config_is_clone_and_debug() {
        let config = GumroadConfig::default();
        let cloned = config.clone();
        assert_eq!(cloned.api_root(), config.api_root());

        let debug_str = format!("{config:?}");
        assert!(debug_str.contains("GumroadConfig"));
    }
}
