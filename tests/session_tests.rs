//! Integration tests for session login and logout.
//!
//! These tests verify that logging in stores credentials on the client, that
//! later requests carry basic authentication, and that logging out clears
//! them again.

use gumroad_api::{ApiRoot, GumroadConfig, ResourceError, RestClient, Session};
use serde_json::json;
use wiremock::matchers::{body_string, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// "abc123:hunter2" base64-encoded
const BASIC_AUTH: &str = "Basic YWJjMTIzOmh1bnRlcjI=";

async fn setup() -> (MockServer, RestClient) {
    let server = MockServer::start().await;
    let config = GumroadConfig::builder()
        .api_root(ApiRoot::new(format!("{}/api/v1/", server.uri())).unwrap())
        .build();
    let client = RestClient::new(&config).unwrap();
    (server, client)
}

async fn mount_login(server: &MockServer) {
    Mock::given(method("POST"))
        .and(path("/api/v1/sessions"))
        .and(body_string("email=seller%40example.com&password=hunter2"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"success": true, "token": "abc123"})),
        )
        .expect(1)
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_login_then_links_uses_basic_auth() {
    let (server, client) = setup().await;
    mount_login(&server).await;
    Mock::given(method("GET"))
        .and(path("/api/v1/links"))
        .and(header("authorization", BASIC_AUTH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "links": [{"id": "a1", "name": "First"}]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let session = Session::login(&client, "seller@example.com", "hunter2")
        .await
        .unwrap();
    let links = session.links(&client).await.unwrap();

    assert_eq!(links.len(), 1);
    assert_eq!(links[0].name(), Some("First"));
}

#[tokio::test]
async fn test_login_failure_reports_server_message() {
    let (server, client) = setup().await;
    Mock::given(method("POST"))
        .and(path("/api/v1/sessions"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "success": false,
            "error": {"message": "Invalid email or password"}
        })))
        .mount(&server)
        .await;

    let error = Session::login(&client, "seller@example.com", "wrong")
        .await
        .unwrap_err();

    assert_eq!(error.api_message(), Some("Invalid email or password"));
    assert!(!client.has_credentials());
}

#[tokio::test]
async fn test_logout_clears_credentials() {
    let (server, client) = setup().await;
    mount_login(&server).await;
    Mock::given(method("DELETE"))
        .and(path("/api/v1/sessions"))
        .and(header("authorization", BASIC_AUTH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"success": true})))
        .expect(1)
        .mount(&server)
        .await;

    let session = Session::login(&client, "seller@example.com", "hunter2")
        .await
        .unwrap();
    assert!(client.has_credentials());

    session.logout(&client).await.unwrap();

    assert!(!client.has_credentials());
    assert!(client.token().is_none());
}

#[tokio::test]
async fn test_failed_logout_keeps_credentials() {
    let (server, client) = setup().await;
    mount_login(&server).await;
    Mock::given(method("DELETE"))
        .and(path("/api/v1/sessions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"success": false})))
        .mount(&server)
        .await;

    let session = Session::login(&client, "seller@example.com", "hunter2")
        .await
        .unwrap();
    let result = session.logout(&client).await;

    assert!(matches!(result, Err(ResourceError::Rest(_))));
    assert!(client.has_credentials());
}

#[tokio::test]
async fn test_sessions_on_separate_clients_are_independent() {
    let (server, first) = setup().await;
    mount_login(&server).await;

    let config = GumroadConfig::builder()
        .api_root(ApiRoot::new(format!("{}/api/v1/", server.uri())).unwrap())
        .build();
    let second = RestClient::new(&config).unwrap();

    Session::login(&first, "seller@example.com", "hunter2")
        .await
        .unwrap();

    assert!(first.has_credentials());
    assert!(!second.has_credentials());
}
