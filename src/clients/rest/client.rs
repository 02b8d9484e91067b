//! REST client implementation for the Gumroad API.
//!
//! This module provides the [`RestClient`] type: verb-named request methods
//! plus the credentials every request carries.

use crate::clients::rest::RestError;
use crate::clients::{Credentials, FormParams, HttpClient, HttpMethod, HttpRequest, HttpResponse};
use crate::config::GumroadConfig;

/// REST API client for the Gumroad API.
///
/// Provides `get`, `post`, `put`, and `delete` for resource paths relative
/// to the API root. `get` encodes its parameters into the query string; the
/// other verbs send them as a form body.
///
/// Each client owns its credentials, so several accounts can be used side by
/// side with one client each.
///
/// # Thread Safety
///
/// `RestClient` is `Send + Sync`. Concurrent logins through the same client
/// overwrite each other's credentials; keep one client per account.
///
/// # Example
///
/// ```rust,ignore
/// use gumroad_api::{GumroadConfig, RestClient};
///
/// let client = RestClient::new(&GumroadConfig::default())?;
/// client.set_token("session-token");
/// client.set_password("hunter2");
///
/// let response = client.get("links", None).await?;
/// println!("Links: {}", response.body["links"]);
/// ```
#[derive(Debug)]
pub struct RestClient {
    /// The internal HTTP client for making requests.
    http_client: HttpClient,
}

// Verify RestClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<RestClient>();
};

impl RestClient {
    /// Creates a new REST client without credentials.
    ///
    /// # Errors
    ///
    /// Returns [`RestError::Http`] if the HTTP client cannot be created.
    pub fn new(config: &GumroadConfig) -> Result<Self, RestError> {
        Self::with_credentials(config, Credentials::default())
    }

    /// Creates a new REST client that starts with the given credentials.
    ///
    /// # Errors
    ///
    /// Returns [`RestError::Http`] if the HTTP client cannot be created.
    pub fn with_credentials(
        config: &GumroadConfig,
        credentials: Credentials,
    ) -> Result<Self, RestError> {
        let http_client = HttpClient::with_credentials(config, credentials)?;
        Ok(Self { http_client })
    }

    /// Returns the underlying HTTP client.
    #[must_use]
    pub const fn http_client(&self) -> &HttpClient {
        &self.http_client
    }

    /// Returns the absolute URL for a resource path.
    #[must_use]
    pub fn url(&self, path: &str) -> String {
        self.http_client.url(path)
    }

    /// Returns a snapshot of the current credentials.
    #[must_use]
    pub fn credentials(&self) -> Credentials {
        self.http_client.credentials()
    }

    /// Returns the current session token, if any.
    #[must_use]
    pub fn token(&self) -> Option<String> {
        self.credentials().token
    }

    /// Sets the session token used for basic authentication.
    pub fn set_token(&self, token: impl Into<String>) {
        let token = token.into();
        self.http_client
            .update_credentials(|credentials| credentials.token = Some(token));
    }

    /// Sets the password used for basic authentication.
    pub fn set_password(&self, password: impl Into<String>) {
        let password = password.into();
        self.http_client
            .update_credentials(|credentials| credentials.password = Some(password));
    }

    /// Returns `true` if requests will carry basic authentication.
    #[must_use]
    pub fn has_credentials(&self) -> bool {
        self.credentials().is_complete()
    }

    /// Forgets both token and password.
    pub fn clear_credentials(&self) {
        self.http_client
            .update_credentials(|credentials| *credentials = Credentials::default());
    }

    /// Sends a GET request to the specified path.
    ///
    /// `params` are appended as a query string with each key and value
    /// percent-encoded.
    ///
    /// # Errors
    ///
    /// Returns [`RestError::InvalidPath`] if the path is empty.
    /// Returns [`RestError::Http`] for HTTP-level errors, including failure
    /// envelopes.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let response = client.get("links", None).await?;
    ///
    /// let mut params = FormParams::new();
    /// params.insert("page".to_string(), "2".to_string());
    /// let response = client.get("links", Some(params)).await?;
    /// ```
    pub async fn get(
        &self,
        path: &str,
        params: Option<FormParams>,
    ) -> Result<HttpResponse, RestError> {
        let path = normalize_path(path)?;
        let path = match params.filter(|p| !p.is_empty()) {
            Some(params) => {
                let separator = if path.contains('?') { '&' } else { '?' };
                format!("{path}{separator}{}", encode_query(&params))
            }
            None => path,
        };

        self.make_request(HttpMethod::Get, path, None).await
    }

    /// Sends a POST request with `params` as a form body.
    ///
    /// # Errors
    ///
    /// Returns [`RestError::InvalidPath`] if the path is empty.
    /// Returns [`RestError::Http`] for HTTP-level errors.
    pub async fn post(
        &self,
        path: &str,
        params: Option<FormParams>,
    ) -> Result<HttpResponse, RestError> {
        let path = normalize_path(path)?;
        self.make_request(HttpMethod::Post, path, params).await
    }

    /// Sends a PUT request with `params` as a form body.
    ///
    /// # Errors
    ///
    /// Returns [`RestError::InvalidPath`] if the path is empty.
    /// Returns [`RestError::Http`] for HTTP-level errors.
    pub async fn put(
        &self,
        path: &str,
        params: Option<FormParams>,
    ) -> Result<HttpResponse, RestError> {
        let path = normalize_path(path)?;
        self.make_request(HttpMethod::Put, path, params).await
    }

    /// Sends a DELETE request with `params` as a form body.
    ///
    /// # Errors
    ///
    /// Returns [`RestError::InvalidPath`] if the path is empty.
    /// Returns [`RestError::Http`] for HTTP-level errors.
    pub async fn delete(
        &self,
        path: &str,
        params: Option<FormParams>,
    ) -> Result<HttpResponse, RestError> {
        let path = normalize_path(path)?;
        self.make_request(HttpMethod::Delete, path, params).await
    }

    /// Dispatches a request for any supported verb.
    ///
    /// # Errors
    ///
    /// Same as the verb-specific methods.
    pub async fn request(
        &self,
        method: HttpMethod,
        path: &str,
        params: Option<FormParams>,
    ) -> Result<HttpResponse, RestError> {
        match method {
            HttpMethod::Get => self.get(path, params).await,
            HttpMethod::Post => self.post(path, params).await,
            HttpMethod::Put => self.put(path, params).await,
            HttpMethod::Delete => self.delete(path, params).await,
        }
    }

    /// Internal helper to build and send requests.
    async fn make_request(
        &self,
        method: HttpMethod,
        path: String,
        params: Option<FormParams>,
    ) -> Result<HttpResponse, RestError> {
        let mut builder = HttpRequest::builder(method, path);
        if let Some(params) = params {
            builder = builder.form(params);
        }

        let request = builder.build().map_err(|e| RestError::Http(e.into()))?;

        self.http_client.request(request).await.map_err(Into::into)
    }
}

/// Strips leading `/` characters and rejects empty paths.
fn normalize_path(path: &str) -> Result<String, RestError> {
    let trimmed = path.trim_start_matches('/');

    if trimmed.is_empty() {
        return Err(RestError::InvalidPath {
            path: path.to_string(),
        });
    }

    Ok(trimmed.to_string())
}

/// Encodes parameters as `key=value` pairs joined by `&`, percent-encoding
/// every key and value.
///
/// # Example
///
/// ```rust
/// use gumroad_api::clients::rest::encode_query;
/// use gumroad_api::clients::FormParams;
///
/// let mut params = FormParams::new();
/// params.insert("q".to_string(), "a b&c".to_string());
/// params.insert("page".to_string(), "2".to_string());
///
/// assert_eq!(encode_query(&params), "page=2&q=a%20b%26c");
/// ```
#[must_use]
pub fn encode_query(params: &FormParams) -> String {
    params
        .iter()
        .map(|(key, value)| {
            format!(
                "{}={}",
                urlencoding::encode(key),
                urlencoding::encode(value)
            )
        })
        .collect::<Vec<_>>()
        .join("&")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn test_client(root: &str) -> RestClient {
        let config = GumroadConfig::builder()
            .api_root(crate::config::ApiRoot::new(root).unwrap())
            .build();
        RestClient::new(&config).unwrap()
    }

    #[test]
    fn test_normalize_path_strips_leading_slashes() {
        assert_eq!(normalize_path("/links").unwrap(), "links");
        assert_eq!(normalize_path("//links/abc").unwrap(), "links/abc");
        assert_eq!(normalize_path("sessions").unwrap(), "sessions");
    }

    #[test]
    fn test_normalize_path_empty_path_returns_error() {
        assert!(matches!(
            normalize_path(""),
            Err(RestError::InvalidPath { path }) if path.is_empty()
        ));
        assert!(matches!(
            normalize_path("/"),
            Err(RestError::InvalidPath { path }) if path == "/"
        ));
    }

    #[test]
    fn test_encode_query_escapes_values() {
        let mut params = FormParams::new();
        params.insert("name".to_string(), "Ünïcode & more".to_string());

        assert_eq!(encode_query(&params), "name=%C3%9Cn%C3%AFcode%20%26%20more");
        assert_eq!(encode_query(&FormParams::new()), "");
    }

    #[test]
    fn test_credential_accessors() {
        let client = test_client("https://gumroad.com/api/v1/");
        assert!(client.token().is_none());
        assert!(!client.has_credentials());

        client.set_token("token");
        assert_eq!(client.token().as_deref(), Some("token"));
        assert!(!client.has_credentials());

        client.set_password("secret");
        assert!(client.has_credentials());

        client.clear_credentials();
        assert_eq!(client.credentials(), Credentials::default());
    }

    #[test]
    fn test_clients_do_not_share_credentials() {
        let first = test_client("https://gumroad.com/api/v1/");
        let second = test_client("https://gumroad.com/api/v1/");

        first.set_token("first-token");
        first.set_password("first-password");

        assert!(first.has_credentials());
        assert!(!second.has_credentials());
    }

    #[test]
    fn test_url_joins_api_root() {
        let client = test_client("https://gumroad.com/api/v1");
        assert_eq!(client.url("links"), "https://gumroad.com/api/v1/links");
    }

    #[tokio::test]
    async fn test_get_appends_encoded_query_string() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/links"))
            .and(query_param("q", "two words"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"success": true})))
            .expect(1)
            .mount(&server)
            .await;

        let client = test_client(&server.uri());
        let mut params = FormParams::new();
        params.insert("q".to_string(), "two words".to_string());

        client.get("links", Some(params)).await.unwrap();
    }

    #[tokio::test]
    async fn test_request_dispatches_by_method() {
        let server = MockServer::start().await;
        Mock::given(method("DELETE"))
            .and(path("/sessions"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"success": true})))
            .expect(1)
            .mount(&server)
            .await;

        let client = test_client(&server.uri());
        let response = client
            .request(HttpMethod::Delete, "/sessions", None)
            .await
            .unwrap();
        assert_eq!(response.body["success"], json!(true));
    }

    #[tokio::test]
    async fn test_invalid_path_fails_before_sending() {
        let client = test_client("https://gumroad.com/api/v1/");
        let result = client.post("", None).await;
        assert!(matches!(result, Err(RestError::InvalidPath { .. })));
    }
}
