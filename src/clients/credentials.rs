//! Credentials attached to authenticated requests.

use std::fmt;

/// The token/password pair used for HTTP basic authentication.
///
/// Both halves start unset. A request only carries credentials once both are
/// present; see [`Credentials::basic_auth`].
///
/// # Example
///
/// ```rust
/// use gumroad_api::clients::Credentials;
///
/// let mut credentials = Credentials::default();
/// credentials.token = Some("token".to_string());
/// assert!(credentials.basic_auth().is_none());
///
/// credentials.password = Some("secret".to_string());
/// assert_eq!(credentials.basic_auth(), Some(("token", "secret")));
/// assert_eq!(format!("{credentials:?}"), "Credentials { token: Some(*****), password: Some(*****) }");
/// ```
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Credentials {
    /// Session token returned by the `sessions` endpoint.
    pub token: Option<String>,
    /// Account password paired with the token.
    pub password: Option<String>,
}

impl Credentials {
    /// Creates credentials with both halves set.
    #[must_use]
    pub fn new(token: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            token: Some(token.into()),
            password: Some(password.into()),
        }
    }

    /// Returns `(username, password)` for basic auth when both halves are set.
    #[must_use]
    pub fn basic_auth(&self) -> Option<(&str, &str)> {
        match (&self.token, &self.password) {
            (Some(token), Some(password)) => Some((token.as_str(), password.as_str())),
            _ => None,
        }
    }

    /// Returns `true` if requests will be authenticated.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.basic_auth().is_some()
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mask = |value: &Option<String>| value.as_ref().map(|_| "*****");
        f.debug_struct("Credentials")
            .field("token", &format_args!("{:?}", mask(&self.token).map(Masked)))
            .field("password", &format_args!("{:?}", mask(&self.password).map(Masked)))
            .finish()
    }
}

struct Masked(&'static str);

impl fmt::Debug for Masked {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}
