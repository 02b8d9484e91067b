//! # Gumroad API Rust SDK
//!
//! A Rust SDK for the Gumroad API, providing type-safe configuration, session
//! authentication, and dirty-tracked CRUD on product links.
//!
//! ## Overview
//!
//! This SDK provides:
//! - Type-safe configuration via [`GumroadConfig`] and [`GumroadConfigBuilder`]
//! - Validated newtypes for the API root and login credentials
//! - Session login and logout via [`Session`]
//! - Async HTTP client that checks Gumroad's `{"success": ...}` envelope and
//!   normalizes response keys
//! - The [`Link`] resource with dirty tracking, so a save sends only the
//!   modified fields
//!
//! ## Quick Start
//!
//! ```rust
//! use gumroad_api::{ApiRoot, GumroadConfig, RestClient};
//!
//! // Create configuration using the builder pattern
//! let config = GumroadConfig::builder()
//!     .api_root(ApiRoot::new("https://gumroad.com/api/v1/").unwrap())
//!     .user_agent_prefix("MyApp/1.0")
//!     .build();
//!
//! let client = RestClient::new(&config).unwrap();
//! assert!(!client.has_credentials());
//! ```
//!
//! ## Working With Links
//!
//! ```rust,ignore
//! use gumroad_api::{GumroadConfig, Link, RestClient, Session};
//! use gumroad_api::rest::{DirtyTracking, RestResource};
//!
//! let client = RestClient::new(&GumroadConfig::default())?;
//! let session = Session::login(&client, "seller@example.com", "hunter2").await?;
//!
//! let mut link = Link::find(&client, "abc").await?;
//! link.set_price(1000)?;
//! link.save(&client).await?; // PUT links/abc with price=1000 only
//!
//! session.logout(&client).await?;
//! ```
//!
//! ## Making Raw API Requests
//!
//! ```rust,ignore
//! use gumroad_api::{GumroadConfig, RestClient};
//!
//! let client = RestClient::new(&GumroadConfig::default())?;
//! client.set_token("session-token");
//! client.set_password("hunter2");
//!
//! let response = client.get("links", None).await?;
//! println!("{}", response.body["links"]);
//! ```
//!
//! ## Error Handling
//!
//! A response whose envelope does not report success becomes an
//! [`ApiError`] carrying the server's message:
//!
//! ```rust,ignore
//! match Link::find(&client, "missing").await {
//!     Ok(link) => println!("{:?}", link.name()),
//!     Err(e) => eprintln!("{e}"), // "GumroadError: ..."
//! }
//! ```
//!
//! ## Logging
//!
//! The SDK logs through [`tracing`](https://docs.rs/tracing). Install a
//! subscriber in the application to see request and session events.
//!
//! ## Design Principles
//!
//! - **No global state**: Configuration and credentials belong to a client
//! - **Fail-fast validation**: Newtypes and setters validate before any request
//! - **Thread-safe**: All types are `Send + Sync`
//! - **Async-first**: Designed for use with Tokio async runtime

pub mod auth;
pub mod clients;
pub mod config;
pub mod error;
pub mod rest;

// Re-export public types at crate root for convenience
pub use auth::Session;
pub use config::{ApiRoot, Email, GumroadConfig, GumroadConfigBuilder, Password};
pub use error::ConfigError;

// Re-export HTTP client types
pub use clients::{
    ApiError, Credentials, HttpClient, HttpError, HttpMethod, HttpRequest, HttpRequestBuilder,
    HttpResponse, InvalidHttpRequestError, RestClient, RestError,
};

// Re-export resource types
pub use rest::resources::{Link, LinkField, PriceInput};
pub use rest::{DirtyTracking, ResourceError, RestResource, ValidationError};
