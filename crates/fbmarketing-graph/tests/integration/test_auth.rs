//! Integration tests for the token endpoints
//!
//! Verifies the parameters sent to `/oauth/access_token` and
//! `/debug_token` for each grant, and the parsed responses.

use fbmarketing_graph::GraphError;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use crate::common::{self, APP_ID, APP_SECRET};

#[tokio::test]
async fn test_get_app_token_uses_client_credentials() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(common::versioned("/oauth/access_token")))
        .and(query_param("client_id", APP_ID))
        .and(query_param("client_secret", APP_SECRET))
        .and(query_param("grant_type", "client_credentials"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "access_token": "1234567890|app-token",
            "token_type": "bearer"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = common::client_for(&server);
    let token = client.get_app_token().await.expect("get_app_token failed");

    assert_eq!(token.access_token, "1234567890|app-token");
    assert_eq!(token.token_type.as_deref(), Some("bearer"));
    assert!(token.expires_in.is_none());
}

#[tokio::test]
async fn test_exchange_code() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(common::versioned("/oauth/access_token")))
        .and(query_param("client_id", APP_ID))
        .and(query_param("redirect_uri", "https://app.example.com/cb"))
        .and(query_param("client_secret", APP_SECRET))
        .and(query_param("code", "auth-code-xyz"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "access_token": "short-lived-user-token",
            "token_type": "bearer",
            "expires_in": 5183944
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = common::client_for(&server);
    let token = client
        .exchange_code("https://app.example.com/cb", "auth-code-xyz")
        .await
        .expect("exchange_code failed");

    assert_eq!(token.access_token, "short-lived-user-token");
    assert_eq!(token.expires_in, Some(5183944));
}

#[tokio::test]
async fn test_extend_token() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(common::versioned("/oauth/access_token")))
        .and(query_param("grant_type", "fb_exchange_token"))
        .and(query_param("client_id", APP_ID))
        .and(query_param("client_secret", APP_SECRET))
        .and(query_param("fb_exchange_token", "short-lived-user-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "access_token": "long-lived-user-token",
            "token_type": "bearer",
            "expires_in": 5183944
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = common::client_for(&server);
    let token = client
        .extend_token("short-lived-user-token")
        .await
        .expect("extend_token failed");

    assert_eq!(token.access_token, "long-lived-user-token");
}

#[tokio::test]
async fn test_inspect_token() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(common::versioned("/debug_token")))
        .and(query_param("input_token", "user-token"))
        .and(query_param("access_token", "1234567890|app-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "data": {
                "app_id": APP_ID,
                "type": "USER",
                "application": "Test App",
                "data_access_expires_at": 1735689600,
                "expires_at": 1730000000,
                "is_valid": true,
                "scopes": ["email", "pages_show_list", "leads_retrieval"],
                "user_id": "10000001"
            }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = common::client_for(&server);
    let info = client
        .inspect_token("user-token", "1234567890|app-token")
        .await
        .expect("inspect_token failed");

    assert!(info.is_valid);
    assert_eq!(info.app_id.as_deref(), Some(APP_ID));
    assert_eq!(info.scopes.len(), 3);
    assert_eq!(info.expires_at, Some(1730000000));
}

#[tokio::test]
async fn test_inspect_token_nested_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(common::versioned("/debug_token")))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "data": {
                "error": {
                    "code": 190,
                    "message": "Invalid OAuth access token."
                },
                "is_valid": false,
                "scopes": []
            }
        })))
        .mount(&server)
        .await;

    let client = common::client_for(&server);
    let result = client.inspect_token("garbage", "1234567890|app-token").await;

    match result {
        Err(GraphError::InvalidOauth20AccessToken(message)) => {
            assert_eq!(message, "Invalid OAuth access token.")
        }
        other => panic!("expected InvalidOauth20AccessToken, got {other:?}"),
    }
}

#[tokio::test]
async fn test_exchange_code_rejected() {
    let server = MockServer::start().await;

    common::mount_error(
        &server,
        "GET",
        "/oauth/access_token",
        400,
        100,
        "This authorization code has been used.",
    )
    .await;

    let client = common::client_for(&server);
    let result = client
        .exchange_code("https://app.example.com/cb", "used-code")
        .await;

    assert!(matches!(result, Err(GraphError::InvalidParameter(_))));
}
