//! Integration tests for Graph API error translation
//!
//! Error payloads arrive with 4xx statuses; the client must classify them
//! from the JSON body rather than failing on the status.

use fbmarketing_graph::GraphError;
use wiremock::matchers::{method, path};
use wiremock::{Mock, ResponseTemplate};

use crate::common;

#[tokio::test]
async fn test_app_rate_limit() {
    let (server, client) = common::setup_graph_mock().await;
    common::mount_error(&server, "GET", "/111/leadgen_forms", 400, 4, "limit").await;

    match client.get_ad_account_leadgen_forms("111").await {
        Err(GraphError::AppRateLimit(message)) => assert_eq!(message, "limit"),
        other => panic!("expected AppRateLimit, got {other:?}"),
    }
}

#[tokio::test]
async fn test_expired_token() {
    let (server, client) = common::setup_graph_mock().await;
    common::mount_error(
        &server,
        "GET",
        "/555/leads",
        401,
        190,
        "Error validating access token: Session has expired",
    )
    .await;

    let err = client.get_ad_leads("555", None).await.unwrap_err();
    assert!(matches!(err, GraphError::InvalidOauth20AccessToken(_)));
    assert_eq!(err.code(), Some(190));
}

#[tokio::test]
async fn test_unknown_code_preserved() {
    let (server, client) = common::setup_graph_mock().await;
    common::mount_error(&server, "GET", "/555/leads", 400, 999999, "x").await;

    match client.get_ad_leads("555", None).await {
        Err(GraphError::Unexpected { code, message }) => {
            assert_eq!(code, 999999);
            assert_eq!(message, "x");
        }
        other => panic!("expected Unexpected, got {other:?}"),
    }
}

#[tokio::test]
async fn test_recognized_uncategorized_code() {
    let (server, client) = common::setup_graph_mock().await;
    common::mount_error(
        &server,
        "GET",
        "/555/leads",
        400,
        368,
        "The action attempted has been deemed abusive",
    )
    .await;

    match client.get_ad_leads("555", None).await {
        Err(GraphError::Uncategorized { code, .. }) => assert_eq!(code, 368),
        other => panic!("expected Uncategorized, got {other:?}"),
    }
}

#[tokio::test]
async fn test_non_json_body_is_invalid_response() {
    let (server, client) = common::setup_graph_mock().await;

    Mock::given(method("GET"))
        .and(path(common::versioned("/555/leads")))
        .respond_with(ResponseTemplate::new(502).set_body_string("<html>Bad Gateway</html>"))
        .mount(&server)
        .await;

    let err = client.get_ad_leads("555", None).await.unwrap_err();
    match err {
        GraphError::InvalidResponse(detail) => assert!(detail.contains("502")),
        other => panic!("expected InvalidResponse, got {other:?}"),
    }
}

#[tokio::test]
async fn test_unreachable_host_is_network_error() {
    let client = fbmarketing_graph::FacebookClient::with_base_url(
        common::APP_ID,
        common::APP_SECRET,
        common::VERSION,
        "http://127.0.0.1:9",
    );

    let result = client.get_app_token().await;
    assert!(matches!(result, Err(GraphError::NetworkError(_))));
}
