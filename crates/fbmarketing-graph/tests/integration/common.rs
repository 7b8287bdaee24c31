//! Shared test helpers for Graph API integration tests
//!
//! Provides wiremock-based mock server setup for Facebook Graph API
//! endpoints. Each helper mounts the necessary mock endpoints and returns a
//! configured FacebookClient pointing at the mock server.

use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use fbmarketing_graph::auth::app_secret_proof;
use fbmarketing_graph::client::FacebookClient;

pub const APP_ID: &str = "1234567890";
pub const APP_SECRET: &str = "test-app-secret";
pub const VERSION: &str = "v19.0";
pub const USER_TOKEN: &str = "test-user-token";

/// Path on the mock server for an API path, including the version segment
pub fn versioned(api_path: &str) -> String {
    format!("/{VERSION}{api_path}")
}

/// A client against `server` with no access token set
pub fn client_for(server: &MockServer) -> FacebookClient {
    FacebookClient::with_base_url(APP_ID, APP_SECRET, VERSION, server.uri())
}

/// Sets up a mock server with the account endpoints and returns
/// a (MockServer, FacebookClient) tuple with the user token set.
///
/// Pre-configured endpoints (both require the user token and its proof):
/// - GET /me → user profile
/// - GET /me/accounts → two pages
pub async fn setup_graph_mock() -> (MockServer, FacebookClient) {
    let server = MockServer::start().await;
    let proof = app_secret_proof(USER_TOKEN, APP_SECRET);

    Mock::given(method("GET"))
        .and(path(versioned("/me")))
        .and(query_param("access_token", USER_TOKEN))
        .and(query_param("appsecret_proof", proof.as_str()))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "name": "Test User",
            "id": "10000001"
        })))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path(versioned("/me/accounts")))
        .and(query_param("access_token", USER_TOKEN))
        .and(query_param("appsecret_proof", proof.as_str()))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "data": [
                {
                    "access_token": "page-token-111",
                    "category": "Software",
                    "name": "First Page",
                    "id": "111",
                    "tasks": ["ANALYZE", "ADVERTISE", "MODERATE", "CREATE_CONTENT", "MANAGE"]
                },
                {
                    "access_token": "page-token-222",
                    "category": "Retail",
                    "name": "Second Page",
                    "id": "222",
                    "tasks": ["ANALYZE"]
                }
            ],
            "paging": {
                "cursors": { "before": "QVFIUk", "after": "QVFIUl" }
            }
        })))
        .mount(&server)
        .await;

    let mut client = client_for(&server);
    client.set_access_token(USER_TOKEN);

    (server, client)
}

/// Mounts a Graph API error payload on `http_method` `api_path`.
pub async fn mount_error(
    server: &MockServer,
    http_method: &str,
    api_path: &str,
    status: u16,
    code: i64,
    message: &str,
) {
    Mock::given(method(http_method))
        .and(path(versioned(api_path)))
        .respond_with(ResponseTemplate::new(status).set_body_json(serde_json::json!({
            "error": {
                "message": message,
                "type": "OAuthException",
                "code": code,
                "fbtrace_id": "A1b2C3d4"
            }
        })))
        .mount(server)
        .await;
}
