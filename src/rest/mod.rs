//! REST resource infrastructure for the Gumroad API.
//!
//! This module provides:
//!
//! - **[`RestResource`] trait**: collection-level operations driven by a path table
//! - **[`DirtyTracking`]**: dirty tracking so a save sends only modified fields
//! - **Path building**: [`ResourcePath`] tables resolved with [`get_path`] and [`build_path`]
//! - **[`ResourceError`]** and **[`ValidationError`]**: errors for resource operations
//!
//! Individual resources live in the [`resources`] submodule.
//!
//! # Example
//!
//! ```rust,ignore
//! use gumroad_api::{GumroadConfig, RestClient, Session};
//! use gumroad_api::rest::{DirtyTracking, RestResource};
//! use gumroad_api::rest::resources::Link;
//!
//! let client = RestClient::new(&GumroadConfig::default())?;
//! Session::login(&client, "seller@example.com", "hunter2").await?;
//!
//! // Find a single link; it starts clean
//! let mut link = Link::find(&client, "abc").await?;
//! assert!(!link.has_changes());
//!
//! // Only the name is sent
//! link.set_name("Updated Title");
//! link.save(&client).await?;
//!
//! // Create and delete
//! let mut params = gumroad_api::clients::FormParams::new();
//! params.insert("name".to_string(), "New Product".to_string());
//! params.insert("url".to_string(), "https://example.com/file.zip".to_string());
//! params.insert("price".to_string(), "500".to_string());
//! let created = Link::create(&client, params).await?;
//! created.destroy(&client).await?;
//! ```

mod errors;
mod path;
mod resource;
mod tracking;

pub mod resources;

// Public exports
pub use errors::{ResourceError, ValidationError};
pub use path::{build_path, get_path, ResourceOperation, ResourcePath};
pub use resource::RestResource;
pub use tracking::{DirtySet, DirtyTracking, TrackedField};
