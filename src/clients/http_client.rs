//! HTTP client for Gumroad API communication.
//!
//! This module provides the [`HttpClient`] type, which executes requests
//! against the API root, attaches credentials, and turns the response
//! envelope into either a normalized body or an [`ApiError`].

use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};

use crate::clients::credentials::Credentials;
use crate::clients::errors::{ApiError, HttpError};
use crate::clients::http_request::{HttpMethod, HttpRequest};
use crate::clients::http_response::{envelope_succeeded, HttpResponse};
use crate::clients::normalize::normalize_keys;
use crate::config::{ApiRoot, GumroadConfig};

/// SDK version from Cargo.toml.
pub const SDK_VERSION: &str = env!("CARGO_PKG_VERSION");

/// HTTP client for making requests to the Gumroad API.
///
/// The client handles:
/// - URL construction from the configured [`ApiRoot`]
/// - Default headers including User-Agent
/// - Basic authentication once both token and password are known
/// - JSON decoding, key normalization, and envelope checking
///
/// There is no retry and no timeout beyond the transport defaults.
///
/// # Thread Safety
///
/// `HttpClient` is `Send + Sync`. Credentials sit behind a lock, so a shared
/// client can be re-authenticated, but one client represents one account.
///
/// # Example
///
/// ```rust,ignore
/// use gumroad_api::GumroadConfig;
/// use gumroad_api::clients::{HttpClient, HttpRequest, HttpMethod};
///
/// let client = HttpClient::new(&GumroadConfig::default())?;
///
/// let request = HttpRequest::builder(HttpMethod::Get, "links")
///     .build()
///     .unwrap();
///
/// let response = client.request(request).await?;
/// ```
#[derive(Debug)]
pub struct HttpClient {
    /// The internal reqwest HTTP client.
    client: reqwest::Client,
    /// Root every request path is joined onto.
    api_root: ApiRoot,
    /// Default headers to include in all requests.
    default_headers: HashMap<String, String>,
    /// Credentials read by every request.
    credentials: RwLock<Credentials>,
}

// Verify HttpClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<HttpClient>();
};

impl HttpClient {
    /// Creates a new HTTP client without credentials.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Network`] if the underlying reqwest client cannot
    /// be created (e.g., TLS initialization failure).
    pub fn new(config: &GumroadConfig) -> Result<Self, HttpError> {
        Self::with_credentials(config, Credentials::default())
    }

    /// Creates a new HTTP client that starts with the given credentials.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Network`] if the underlying reqwest client cannot
    /// be created.
    pub fn with_credentials(
        config: &GumroadConfig,
        credentials: Credentials,
    ) -> Result<Self, HttpError> {
        let user_agent_prefix = config
            .user_agent_prefix()
            .map_or(String::new(), |prefix| format!("{prefix} | "));
        let rust_version = env!("CARGO_PKG_RUST_VERSION");
        let user_agent =
            format!("{user_agent_prefix}Gumroad API Library v{SDK_VERSION} | Rust {rust_version}");

        let mut default_headers = HashMap::new();
        default_headers.insert("User-Agent".to_string(), user_agent);
        default_headers.insert("Accept".to_string(), "application/json".to_string());

        let client = reqwest::Client::builder().use_rustls_tls().build()?;

        Ok(Self {
            client,
            api_root: config.api_root().clone(),
            default_headers,
            credentials: RwLock::new(credentials),
        })
    }

    /// Returns the API root for this client.
    #[must_use]
    pub const fn api_root(&self) -> &ApiRoot {
        &self.api_root
    }

    /// Returns the absolute URL for a resource path.
    #[must_use]
    pub fn url(&self, path: &str) -> String {
        self.api_root.join(path)
    }

    /// Returns the default headers for this client.
    #[must_use]
    pub const fn default_headers(&self) -> &HashMap<String, String> {
        &self.default_headers
    }

    /// Returns a snapshot of the current credentials.
    #[must_use]
    pub fn credentials(&self) -> Credentials {
        self.credentials
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Applies `update` to the stored credentials.
    pub fn update_credentials(&self, update: impl FnOnce(&mut Credentials)) {
        let mut credentials = self
            .credentials
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        update(&mut credentials);
    }

    /// Sends an HTTP request to the Gumroad API.
    ///
    /// The response body is decoded as JSON and normalized. A response is
    /// only returned when its envelope reports success; the HTTP status code
    /// alone does not decide the outcome.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if:
    /// - Request validation fails (`InvalidRequest`)
    /// - Network error occurs (`Network`)
    /// - The body is not JSON (`Decode`)
    /// - The envelope's `success` is absent, `null`, or `false` (`Api`)
    pub async fn request(&self, request: HttpRequest) -> Result<HttpResponse, HttpError> {
        request.verify()?;

        let url = self.url(&request.path);
        let credentials = self.credentials();

        let mut req_builder = match request.http_method {
            HttpMethod::Get => self.client.get(&url),
            HttpMethod::Post => self.client.post(&url),
            HttpMethod::Put => self.client.put(&url),
            HttpMethod::Delete => self.client.delete(&url),
        };

        for (key, value) in &self.default_headers {
            req_builder = req_builder.header(key, value);
        }

        if request.http_method.sends_form() {
            if let Some(form) = &request.form {
                req_builder = req_builder.form(form);
            }
        }

        if let Some((token, password)) = credentials.basic_auth() {
            req_builder = req_builder.basic_auth(token, Some(password));
        }

        tracing::debug!(
            "Sending {} request to Gumroad API at {} (authenticated: {})",
            request.http_method,
            request.path,
            credentials.is_complete()
        );

        let res = req_builder.send().await?;

        let code = res.status().as_u16();
        let headers = Self::parse_response_headers(res.headers());
        let body_text = res.text().await?;

        let body: serde_json::Value = serde_json::from_str(&body_text)
            .map_err(|source| HttpError::Decode { code, source })?;
        let body = normalize_keys(body);

        if !envelope_succeeded(&body) {
            let error = ApiError::from_envelope(code, &body);
            tracing::warn!(
                "Gumroad API request to {} failed with status {}: {}",
                request.path,
                code,
                error.message
            );
            return Err(error.into());
        }

        Ok(HttpResponse::new(code, headers, body))
    }

    /// Parses response headers into a `HashMap`.
    fn parse_response_headers(
        headers: &reqwest::header::HeaderMap,
    ) -> HashMap<String, Vec<String>> {
        let mut result: HashMap<String, Vec<String>> = HashMap::new();
        for (name, value) in headers {
            let key = name.as_str().to_lowercase();
            let value = value.to_str().unwrap_or_default().to_string();
            result.entry(key).or_default().push(value);
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clients::HttpRequest;
    use serde_json::json;
    use wiremock::matchers::{body_string, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    async fn client_for(server: &MockServer) -> HttpClient {
        let config = GumroadConfig::builder()
            .api_root(ApiRoot::new(format!("{}/api/v1/", server.uri())).unwrap())
            .build();
        HttpClient::new(&config).unwrap()
    }

    #[test]
    fn test_client_construction_uses_default_root() {
        let client = HttpClient::new(&GumroadConfig::default()).unwrap();

        assert_eq!(client.api_root().as_ref(), "https://gumroad.com/api/v1/");
        assert_eq!(client.url("links/abc"), "https://gumroad.com/api/v1/links/abc");
        assert!(!client.credentials().is_complete());
    }

    #[test]
    fn test_user_agent_header_format() {
        let client = HttpClient::new(&GumroadConfig::default()).unwrap();

        let user_agent = client.default_headers().get("User-Agent").unwrap();
        assert!(user_agent.starts_with("Gumroad API Library v"));
        assert!(user_agent.contains("Rust"));
    }

    #[test]
    fn test_user_agent_with_prefix() {
        let config = GumroadConfig::builder().user_agent_prefix("MyApp/1.0").build();
        let client = HttpClient::new(&config).unwrap();

        let user_agent = client.default_headers().get("User-Agent").unwrap();
        assert!(user_agent.starts_with("MyApp/1.0 | "));
    }

    #[test]
    fn test_accept_header_is_json() {
        let client = HttpClient::new(&GumroadConfig::default()).unwrap();
        assert_eq!(
            client.default_headers().get("Accept"),
            Some(&"application/json".to_string())
        );
    }

    #[test]
    fn test_update_credentials_is_visible_in_snapshot() {
        let client = HttpClient::new(&GumroadConfig::default()).unwrap();
        client.update_credentials(|c| *c = Credentials::new("token", "secret"));
        assert_eq!(client.credentials(), Credentials::new("token", "secret"));
    }

    #[tokio::test]
    async fn test_request_keeps_response_keys() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/v1/links"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "success": true,
                "links": [{"short_url": "https://gum.co/a", "Custom Field": "x"}]
            })))
            .mount(&server)
            .await;

        let client = client_for(&server).await;
        let request = HttpRequest::builder(HttpMethod::Get, "links").build().unwrap();
        let response = client.request(request).await.unwrap();

        assert_eq!(response.code, 200);
        assert_eq!(response.body["links"][0]["short_url"], json!("https://gum.co/a"));
        assert_eq!(response.body["links"][0]["Custom Field"], json!("x"));
        assert!(response.body["links"][0].get("custom_field").is_none());
    }

    #[tokio::test]
    async fn test_failure_envelope_becomes_api_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/v1/links/missing"))
            .respond_with(ResponseTemplate::new(404).set_body_json(json!({
                "success": false,
                "error": {"message": "bad id"}
            })))
            .mount(&server)
            .await;

        let client = client_for(&server).await;
        let request = HttpRequest::builder(HttpMethod::Get, "links/missing")
            .build()
            .unwrap();
        let result = client.request(request).await;

        match result {
            Err(HttpError::Api(error)) => {
                assert_eq!(error.code, 404);
                assert_eq!(error.message, "bad id");
            }
            other => panic!("Expected Api error, got: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_non_json_body_becomes_decode_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(502).set_body_string("<html>Bad Gateway</html>"))
            .mount(&server)
            .await;

        let client = client_for(&server).await;
        let request = HttpRequest::builder(HttpMethod::Get, "links").build().unwrap();

        assert!(matches!(
            client.request(request).await,
            Err(HttpError::Decode { code: 502, .. })
        ));
    }

    #[tokio::test]
    async fn test_form_body_and_basic_auth_are_sent() {
        let server = MockServer::start().await;
        // "token:secret" base64-encoded
        Mock::given(method("PUT"))
            .and(path("/api/v1/links/abc"))
            .and(header("authorization", "Basic dG9rZW46c2VjcmV0"))
            .and(header("content-type", "application/x-www-form-urlencoded"))
            .and(body_string("description=Fresh+copy&name=Renamed"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"success": true})))
            .expect(1)
            .mount(&server)
            .await;

        let client = client_for(&server).await;
        client.update_credentials(|c| *c = Credentials::new("token", "secret"));

        let request = HttpRequest::builder(HttpMethod::Put, "links/abc")
            .form_param("name", "Renamed")
            .form_param("description", "Fresh copy")
            .build()
            .unwrap();

        client.request(request).await.unwrap();
    }
}
