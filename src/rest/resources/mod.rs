//! REST resource implementations.
//!
//! The Gumroad API exposes a single resource, [`Link`].
//!
//! ```rust,ignore
//! use gumroad_api::rest::RestResource;
//! use gumroad_api::rest::resources::Link;
//!
//! let links = Link::find_all(&client).await?;
//! let link = Link::find(&client, "abc").await?;
//! ```

mod link;

pub use link::{Link, LinkField, PriceInput};
