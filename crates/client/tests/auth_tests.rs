//! Authentication endpoint tests.
//!
//! This module tests the Superset login endpoint, including:
//! - Successful login with access token extraction
//! - Invalid credential handling
//! - Malformed login responses
//!
//! # Invariants
//! - The login body always carries `provider: "db"`
//! - Non-2xx responses must return ApiError with the status code and body

mod common;

use std::time::Duration;

use common::*;
use serde_json::json;
use superset_client::ClientError;
use wiremock::matchers::{body_json, header, method, path};

#[tokio::test]
async fn test_login_success() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/v1/security/login"))
        .and(header("content-type", "application/json"))
        .and(body_json(json!({
            "username": "admin",
            "password": "admin",
            "provider": "db"
        })))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(load_fixture("auth/login_success.json")),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = Client::new();
    let result = endpoints::login(
        &client,
        &mock_server.uri(),
        "admin",
        "admin",
        Duration::from_secs(5),
    )
    .await;

    assert_eq!(result.unwrap(), TEST_TOKEN);
}

#[tokio::test]
async fn test_login_invalid_credentials() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/v1/security/login"))
        .respond_with(
            ResponseTemplate::new(401).set_body_json(load_fixture("auth/login_invalid_creds.json")),
        )
        .mount(&mock_server)
        .await;

    let client = Client::new();
    let err = endpoints::login(
        &client,
        &mock_server.uri(),
        "admin",
        "wrongpassword",
        Duration::from_secs(5),
    )
    .await
    .unwrap_err();

    match err {
        ClientError::ApiError { status, ref body, .. } => {
            assert_eq!(status, 401);
            assert!(body.contains("Not authorized"));
        }
        other => panic!("Expected ApiError, got {:?}", other),
    }
    assert_eq!(err.response_body().map(|b| b.contains("Not authorized")), Some(true));
}

#[tokio::test]
async fn test_login_missing_access_token() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/v1/security/login"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(load_fixture("auth/login_missing_token.json")),
        )
        .mount(&mock_server)
        .await;

    let client = Client::new();
    let result = endpoints::login(
        &client,
        &mock_server.uri(),
        "admin",
        "admin",
        Duration::from_secs(5),
    )
    .await;

    assert!(matches!(result, Err(ClientError::InvalidResponse(_))));
}

#[tokio::test]
async fn test_login_non_json_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/v1/security/login"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>login</html>"))
        .mount(&mock_server)
        .await;

    let client = Client::new();
    let result = endpoints::login(
        &client,
        &mock_server.uri(),
        "admin",
        "admin",
        Duration::from_secs(5),
    )
    .await;

    assert!(matches!(result, Err(ClientError::InvalidResponse(_))));
}

#[tokio::test]
async fn test_login_timeout() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/v1/security/login"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(load_fixture("auth/login_success.json"))
                .set_delay(Duration::from_secs(2)),
        )
        .mount(&mock_server)
        .await;

    let client = Client::new();
    let result = endpoints::login(
        &client,
        &mock_server.uri(),
        "admin",
        "admin",
        Duration::from_millis(200),
    )
    .await;

    assert!(
        matches!(result, Err(ClientError::Timeout(_))),
        "Expected Timeout, got {:?}",
        result
    );
}

#[tokio::test]
async fn test_login_connection_refused() {
    // Bind then drop a listener so the port is closed.
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let client = Client::new();
    let result = endpoints::login(
        &client,
        &format!("http://{}", addr),
        "admin",
        "admin",
        Duration::from_secs(2),
    )
    .await;

    assert!(
        matches!(result, Err(ClientError::ConnectionRefused(_))),
        "Expected ConnectionRefused, got {:?}",
        result
    );
}
