//! Integration tests for the auth resource client.
//!
//! These tests drive login, refresh, logout and `me` against a mock server
//! and check how each call reads and writes the shared token store.

use std::sync::Arc;
use std::time::Duration;

use serde_json::json;
use storefront_api::{ApiBaseUrl, ApiError, StorefrontClient, StorefrontConfig, TokenStore};
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Creates a client pointed at the mock server with a fresh session.
fn create_test_client(server: &MockServer) -> StorefrontClient {
    let config = StorefrontConfig::builder()
        .base_url(ApiBaseUrl::new(server.uri()).unwrap())
        .build()
        .unwrap();
    StorefrontClient::new(&config).unwrap()
}

fn auth_payload(access: &str, refresh: &str) -> serde_json::Value {
    json!({
        "success": true,
        "data": {
            "access_token": access,
            "refresh_token": refresh,
            "token_type": "Bearer",
            "expires_in": 3600,
            "user": {
                "id": 7,
                "email": "ada@example.com",
                "username": "ada",
                "display_name": "Ada"
            }
        }
    })
}

#[tokio::test]
async fn test_login_stores_tokens_and_authenticates_later_requests() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/auth/login"))
        .and(body_json(json!({ "username": "ada", "password": "secret" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(auth_payload("acc-1", "ref-1")))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/auth/me"))
        .and(header("Authorization", "Bearer acc-1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "data": { "id": 7, "username": "ada", "display_name": "Ada" }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = create_test_client(&server);
    assert!(!client.auth().is_authenticated());

    let auth = client.auth().login("ada", "secret").await.unwrap();
    assert_eq!(auth.user.id, 7);
    assert!(client.auth().is_authenticated());
    assert_eq!(client.tokens().access_token().as_deref(), Some("acc-1"));
    assert_eq!(client.tokens().refresh_token().as_deref(), Some("ref-1"));
    assert!(client.tokens().expires_at().is_some());

    let me = client.auth().me().await.unwrap();
    assert_eq!(me.preferred_name(), "Ada");
}

#[tokio::test]
async fn test_login_rejected_surfaces_server_message() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/auth/login"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "success": false,
            "errors": [{ "code": "invalid_credentials", "message": "Invalid username or password" }]
        })))
        .mount(&server)
        .await;

    let client = create_test_client(&server);
    let error = client.auth().login("ada", "wrong").await.unwrap_err();

    assert_eq!(error.to_string(), "Invalid username or password");
    assert!(error.is_unauthorized());
    assert!(matches!(
        &error,
        ApiError::Response { code: Some(code), .. } if code == "invalid_credentials"
    ));
    assert!(!client.auth().is_authenticated());
}

#[tokio::test]
async fn test_login_with_success_false_does_not_store_tokens() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/auth/login"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": false,
            "errors": [{ "message": "Account locked" }]
        })))
        .mount(&server)
        .await;

    let client = create_test_client(&server);
    let error = client.auth().login("ada", "secret").await.unwrap_err();

    assert!(matches!(error, ApiError::Envelope { ref message } if message == "Account locked"));
    assert!(client.tokens().tokens().is_none());
}

#[tokio::test]
async fn test_refresh_replaces_token_pair() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/auth/refresh"))
        .and(body_json(json!({ "refresh_token": "ref-1" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(auth_payload("acc-2", "ref-2")))
        .expect(1)
        .mount(&server)
        .await;

    let client = create_test_client(&server);
    client.tokens().set("acc-1", "ref-1").unwrap();

    client.auth().refresh().await.unwrap();

    assert_eq!(client.tokens().access_token().as_deref(), Some("acc-2"));
    assert_eq!(client.tokens().refresh_token().as_deref(), Some("ref-2"));
}

#[tokio::test]
async fn test_refresh_without_refresh_token_makes_no_request() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/auth/refresh"))
        .respond_with(ResponseTemplate::new(200).set_body_json(auth_payload("acc", "ref")))
        .expect(0)
        .mount(&server)
        .await;

    let client = create_test_client(&server);
    let error = client.auth().refresh().await.unwrap_err();

    assert!(matches!(error, ApiError::MissingRefreshToken));
    assert_eq!(error.to_string(), "No refresh token");
}

#[tokio::test]
async fn test_rejected_refresh_clears_session() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/auth/refresh"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "success": false,
            "errors": [{ "message": "Refresh token expired" }]
        })))
        .mount(&server)
        .await;

    let client = create_test_client(&server);
    client.tokens().set("acc-1", "ref-1").unwrap();

    let error = client.auth().refresh().await.unwrap_err();

    assert_eq!(error.to_string(), "Refresh token expired");
    assert!(client.tokens().tokens().is_none());
    assert!(!client.auth().is_authenticated());
}

#[tokio::test]
async fn test_late_refresh_rejection_keeps_newer_login() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/auth/refresh"))
        .respond_with(
            ResponseTemplate::new(401)
                .set_body_json(json!({
                    "success": false,
                    "errors": [{ "message": "Refresh token expired" }]
                }))
                .set_delay(Duration::from_millis(300)),
        )
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/auth/login"))
        .respond_with(ResponseTemplate::new(200).set_body_json(auth_payload("acc-2", "ref-2")))
        .mount(&server)
        .await;

    let client = create_test_client(&server);
    client.tokens().set("acc-1", "ref-1").unwrap();

    let auth = client.auth();
    let (refresh, login) = tokio::join!(auth.refresh(), async {
        tokio::time::sleep(Duration::from_millis(50)).await;
        auth.login("ada", "secret").await
    });

    assert!(refresh.unwrap_err().is_unauthorized());
    login.unwrap();
    assert_eq!(client.tokens().access_token().as_deref(), Some("acc-2"));
    assert_eq!(client.tokens().refresh_token().as_deref(), Some("ref-2"));
}

#[tokio::test]
async fn test_logout_clears_tokens_when_server_fails() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/auth/logout"))
        .and(header("Authorization", "Bearer acc-1"))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&server)
        .await;

    let client = create_test_client(&server);
    client.tokens().set("acc-1", "ref-1").unwrap();

    let error = client.auth().logout().await.unwrap_err();

    assert_eq!(error.status(), Some(500));
    assert_eq!(error.to_string(), "API request failed");
    assert!(client.tokens().tokens().is_none());
}

#[tokio::test]
async fn test_logout_success_clears_tokens() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/auth/logout"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "success": true })))
        .mount(&server)
        .await;

    let client = create_test_client(&server);
    client.tokens().set("acc-1", "ref-1").unwrap();

    client.auth().logout().await.unwrap();
    assert!(!client.auth().is_authenticated());
}

#[tokio::test]
async fn test_me_unauthorized_is_reported_not_retried() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/auth/me"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "success": false,
            "errors": [{ "message": "Token expired" }]
        })))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/auth/refresh"))
        .respond_with(ResponseTemplate::new(200).set_body_json(auth_payload("acc-2", "ref-2")))
        .expect(0)
        .mount(&server)
        .await;

    let client = create_test_client(&server);
    client.tokens().set("acc-1", "ref-1").unwrap();

    let error = client.auth().me().await.unwrap_err();
    assert!(error.is_unauthorized());
    assert_eq!(client.tokens().access_token().as_deref(), Some("acc-1"));
}

#[tokio::test]
async fn test_clients_sharing_a_token_store_share_the_session() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/auth/login"))
        .respond_with(ResponseTemplate::new(200).set_body_json(auth_payload("acc-1", "ref-1")))
        .mount(&server)
        .await;

    let config = StorefrontConfig::builder()
        .base_url(ApiBaseUrl::new(server.uri()).unwrap())
        .build()
        .unwrap();
    let tokens = Arc::new(TokenStore::in_memory());
    let first = StorefrontClient::with_token_store(&config, Arc::clone(&tokens)).unwrap();
    let second = StorefrontClient::with_token_store(&config, Arc::clone(&tokens)).unwrap();

    first.auth().login("ada", "secret").await.unwrap();

    assert!(second.auth().is_authenticated());
    assert_eq!(second.tokens().access_token().as_deref(), Some("acc-1"));
}
