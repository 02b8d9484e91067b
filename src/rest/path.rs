//! Path tables for REST resources.
//!
//! Each resource declares one [`ResourcePath`] per operation it supports.
//! An operation's path is looked up with [`get_path`] and its `{id}`
//! placeholders are filled with [`build_path`].
//!
//! # Example
//!
//! ```rust
//! use gumroad_api::rest::{ResourcePath, ResourceOperation, get_path, build_path};
//! use gumroad_api::HttpMethod;
//!
//! const PATHS: &[ResourcePath] = &[
//!     ResourcePath::new(HttpMethod::Get, ResourceOperation::All, &[], "links"),
//!     ResourcePath::new(HttpMethod::Get, ResourceOperation::Find, &["id"], "links/{id}"),
//! ];
//!
//! let path = get_path(PATHS, ResourceOperation::Find, &["id"]).unwrap();
//! assert_eq!(build_path(path.template, &[("id", "abc")]), "links/abc");
//!
//! // Without an id there is no way to find a single link.
//! assert!(get_path(PATHS, ResourceOperation::Find, &[]).is_none());
//! ```

use crate::clients::HttpMethod;

/// The CRUD operations a path table can route.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceOperation {
    /// Fetch one record, e.g. `GET links/{id}`.
    Find,
    /// Fetch the collection, e.g. `GET links`.
    All,
    /// `POST` a new record to the collection.
    Create,
    /// `PUT` changed fields to one record.
    Update,
    /// `DELETE` one record.
    Delete,
}

impl ResourceOperation {
    /// Lowercase name, used in error messages.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Find => "find",
            Self::All => "all",
            Self::Create => "create",
            Self::Update => "update",
            Self::Delete => "delete",
        }
    }
}

/// One row of a resource's path table.
///
/// Templates use `{name}` placeholders, e.g. `links/{id}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResourcePath {
    /// Verb to send.
    pub http_method: HttpMethod,
    /// Operation this row routes.
    pub operation: ResourceOperation,
    /// IDs that must be known to use this path.
    pub ids: &'static [&'static str],
    /// Template relative to the API root.
    pub template: &'static str,
}

impl ResourcePath {
    /// Builds a row; `const` so tables can be `const` slices.
    #[must_use]
    pub const fn new(
        http_method: HttpMethod,
        operation: ResourceOperation,
        ids: &'static [&'static str],
        template: &'static str,
    ) -> Self {
        Self {
            http_method,
            operation,
            ids,
            template,
        }
    }

    /// Returns `true` if every id this row needs is in `available_ids`.
    #[must_use]
    pub fn matches_ids(&self, available_ids: &[&str]) -> bool {
        self.ids
            .iter()
            .all(|required| available_ids.contains(required))
    }
}

/// Selects the path for an operation.
///
/// Among paths for `operation` whose required IDs are all available, the one
/// requiring the most IDs wins.
#[must_use]
pub fn get_path<'a>(
    paths: &'a [ResourcePath],
    operation: ResourceOperation,
    available_ids: &[&str],
) -> Option<&'a ResourcePath> {
    paths
        .iter()
        .filter(|p| p.operation == operation)
        .filter(|p| p.matches_ids(available_ids))
        .max_by_key(|p| p.ids.len())
}

/// Fills `{name}` placeholders in `template`.
///
/// Values are percent-encoded so an id can never add path segments.
///
/// # Example
///
/// ```rust
/// use gumroad_api::rest::build_path;
///
/// assert_eq!(build_path("links/{id}", &[("id", "a/b")]), "links/a%2Fb");
/// ```
#[must_use]
pub fn build_path(template: &str, ids: &[(&str, &str)]) -> String {
    ids.iter().fold(template.to_string(), |path, (key, value)| {
        path.replace(&format!("{{{key}}}"), &urlencoding::encode(value))
    })
}

// Path tables are shared across tasks
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ResourceOperation>();
    assert_send_sync::<ResourcePath>();
};
