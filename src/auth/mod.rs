//! Authentication for the Gumroad API SDK.
//!
//! Gumroad authenticates with a session token obtained by logging in with an
//! account's email and password. Every later request carries HTTP basic
//! authentication built from that token and the password.
//!
//! # Overview
//!
//! - [`Session`]: Logs in, lists the account's links, and logs out
//!
//! # Example
//!
//! ```rust,ignore
//! use gumroad_api::{GumroadConfig, RestClient, Session};
//!
//! let client = RestClient::new(&GumroadConfig::default())?;
//! let session = Session::login(&client, "seller@example.com", "hunter2").await?;
//!
//! for link in session.links(&client).await? {
//!     println!("{:?}", link.name());
//! }
//!
//! session.logout(&client).await?;
//! assert!(!client.has_credentials());
//! ```

pub mod session;

pub use session::Session;
