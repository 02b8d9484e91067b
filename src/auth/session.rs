//! Session management for Gumroad API authentication.
//!
//! This module provides the [`Session`] type, which logs an account in and
//! stores the resulting credentials on a [`RestClient`].

use serde_json::Value;

use crate::clients::{FormParams, RestClient};
use crate::config::{Email, Password};
use crate::rest::resources::Link;
use crate::rest::ResourceError;

/// Path of the session endpoint, relative to the API root.
const SESSIONS_PATH: &str = "sessions";

/// An authenticated Gumroad session.
///
/// Logging in is the only way to obtain one. The session keeps the email and
/// password it was created with; the token lives on the client, which sends
/// it with every request.
///
/// # Thread Safety
///
/// `Session` is `Send + Sync`.
///
/// # Example
///
/// ```rust,ignore
/// use gumroad_api::{GumroadConfig, RestClient, Session};
///
/// let client = RestClient::new(&GumroadConfig::default())?;
/// let session = Session::login(&client, "seller@example.com", "hunter2").await?;
///
/// assert_eq!(session.email().as_ref(), "seller@example.com");
/// assert!(client.has_credentials());
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Session {
    /// The account email used to log in.
    email: Email,

    /// The account password; masked in `Debug` output.
    password: Password,
}

// Verify Session is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Session>();
};

impl Session {
    /// Logs in and stores the returned token and the password on `client`.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Config`] if the email or password is empty,
    /// before any request is sent.
    /// Returns [`ResourceError::MissingField`] if the response has no token.
    /// Returns the request's error otherwise, e.g. an
    /// [`ApiError`](crate::clients::ApiError) for bad credentials.
    pub async fn login(
        client: &RestClient,
        email: impl Into<String>,
        password: impl Into<String>,
    ) -> Result<Self, ResourceError> {
        let email = Email::new(email)?;
        let password = Password::new(password)?;

        let mut params = FormParams::new();
        params.insert("email".to_string(), email.as_ref().to_string());
        params.insert("password".to_string(), password.as_ref().to_string());

        tracing::debug!("Logging in to Gumroad as {}", email.as_ref());

        let response = client.post(SESSIONS_PATH, Some(params)).await?;
        let token = response
            .field("token")
            .and_then(Value::as_str)
            .ok_or(ResourceError::MissingField {
                resource: "Session",
                field: "token",
            })?;

        client.set_token(token);
        client.set_password(password.as_ref());

        Ok(Self { email, password })
    }

    /// Returns the account email.
    #[must_use]
    pub const fn email(&self) -> &Email {
        &self.email
    }

    /// Returns the account password.
    #[must_use]
    pub const fn password(&self) -> &Password {
        &self.password
    }

    /// Lists the account's links.
    ///
    /// # Errors
    ///
    /// Same as [`Link::find_all`].
    pub async fn links(&self, client: &RestClient) -> Result<Vec<Link>, ResourceError> {
        Link::find_all(client).await
    }

    /// Ends the session on the server, then clears the client's credentials.
    ///
    /// # Errors
    ///
    /// Returns the request's error. Credentials are kept if the request
    /// fails.
    pub async fn logout(&self, client: &RestClient) -> Result<(), ResourceError> {
        client.delete(SESSIONS_PATH, None).await?;
        client.clear_credentials();

        tracing::debug!("Logged out of Gumroad as {}", self.email.as_ref());
        Ok(())
    }
}
