//! Integration tests for persisted sessions.
//!
//! These tests verify that a file-backed token store survives a restart,
//! that logout removes the persisted tokens, and that a damaged session file
//! does not block a new login.

use std::path::Path;
use std::sync::Arc;

use serde_json::json;
use storefront_api::{
    ApiBaseUrl, FileStorage, StorefrontClient, StorefrontConfig, TokenStorage, TokenStore,
};
use tempfile::TempDir;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn create_client(server: &MockServer, session: &Path) -> StorefrontClient {
    let config = StorefrontConfig::builder()
        .base_url(ApiBaseUrl::new(server.uri()).unwrap())
        .build()
        .unwrap();
    let tokens = Arc::new(TokenStore::new(Arc::new(FileStorage::new(session))));
    StorefrontClient::with_token_store(&config, tokens).unwrap()
}

#[tokio::test]
async fn test_session_survives_restart() {
    let server = MockServer::start().await;
    let temp_dir = TempDir::new().unwrap();
    let session = temp_dir.path().join("session.json");

    Mock::given(method("POST"))
        .and(path("/auth/login"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "data": {
                "access_token": "acc-1",
                "refresh_token": "ref-1",
                "expires_in": 3600,
                "user": { "id": 7 }
            }
        })))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/wishlist/ids"))
        .and(header("Authorization", "Bearer acc-1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "data": { "product_ids": [], "count": 0 }
        })))
        .expect(1)
        .mount(&server)
        .await;

    {
        let client = create_client(&server, &session);
        client.auth().login("ada", "secret").await.unwrap();
    }

    let restarted = create_client(&server, &session);
    assert!(restarted.auth().is_authenticated());
    restarted.wishlist().get_wishlist_ids().await.unwrap();
}

#[tokio::test]
async fn test_logout_removes_persisted_tokens() {
    let server = MockServer::start().await;
    let temp_dir = TempDir::new().unwrap();
    let session = temp_dir.path().join("session.json");

    Mock::given(method("POST"))
        .and(path("/auth/logout"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "success": true })))
        .mount(&server)
        .await;

    let client = create_client(&server, &session);
    client.tokens().set("acc-1", "ref-1").unwrap();
    client.auth().logout().await.unwrap();

    let storage = FileStorage::new(&session);
    assert_eq!(storage.load("access_token").unwrap(), None);
    assert_eq!(storage.load("refresh_token").unwrap(), None);

    let restarted = create_client(&server, &session);
    assert!(!restarted.auth().is_authenticated());
}

#[tokio::test]
async fn test_login_recovers_from_truncated_session_file() {
    let server = MockServer::start().await;
    let temp_dir = TempDir::new().unwrap();
    let session = temp_dir.path().join("session.json");
    std::fs::write(&session, r#"{"access_token": "tru"#).unwrap();

    Mock::given(method("POST"))
        .and(path("/auth/login"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "data": {
                "access_token": "acc-1",
                "refresh_token": "ref-1",
                "expires_in": 3600,
                "user": { "id": 7 }
            }
        })))
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/auth/logout"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "success": true })))
        .mount(&server)
        .await;

    let client = create_client(&server, &session);
    assert!(!client.auth().is_authenticated());

    client.auth().login("ada", "secret").await.unwrap();
    client.auth().logout().await.unwrap();
    client.auth().login("ada", "secret").await.unwrap();

    let restarted = create_client(&server, &session);
    assert_eq!(restarted.tokens().access_token().as_deref(), Some("acc-1"));
    assert_eq!(restarted.tokens().refresh_token().as_deref(), Some("ref-1"));
}
