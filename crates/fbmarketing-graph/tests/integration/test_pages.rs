//! Integration tests for account, page and subscribed-apps endpoints

use fbmarketing_graph::auth::app_secret_proof;
use fbmarketing_graph::GraphError;
use wiremock::matchers::{body_string_contains, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use crate::common::{self, APP_SECRET, USER_TOKEN};

#[tokio::test]
async fn test_get_account_sends_token_and_proof() {
    let (_server, client) = common::setup_graph_mock().await;

    let me = client.get_account().await.expect("get_account failed");

    assert_eq!(me["name"], "Test User");
    assert_eq!(me["id"], "10000001");
}

#[tokio::test]
async fn test_get_pages_returns_body_unchanged() {
    let (_server, client) = common::setup_graph_mock().await;

    let pages = client.get_pages().await.expect("get_pages failed");

    assert_eq!(pages["data"].as_array().unwrap().len(), 2);
    assert_eq!(pages["paging"]["cursors"]["after"], "QVFIUl");
}

#[tokio::test]
async fn test_get_page_token_found() {
    let (_server, client) = common::setup_graph_mock().await;

    let page = client
        .get_page_token("222")
        .await
        .expect("get_page_token failed")
        .expect("page 222 should be listed");

    assert_eq!(page.id, "222");
    assert_eq!(page.name.as_deref(), Some("Second Page"));
    assert_eq!(page.access_token.as_deref(), Some("page-token-222"));
    assert_eq!(page.tasks, vec!["ANALYZE"]);
}

#[tokio::test]
async fn test_get_page_token_not_found_is_none() {
    let (_server, client) = common::setup_graph_mock().await;

    let page = client
        .get_page_token("999")
        .await
        .expect("a missing page is not an error");

    assert!(page.is_none());
}

#[tokio::test]
async fn test_token_required_operations_make_no_request() {
    let server = MockServer::start().await;
    Mock::given(wiremock::matchers::any())
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({})))
        .expect(0)
        .mount(&server)
        .await;

    let client = common::client_for(&server);

    assert!(matches!(
        client.get_account().await,
        Err(GraphError::AccessTokenRequired)
    ));
    assert!(matches!(
        client.get_pages().await,
        Err(GraphError::AccessTokenRequired)
    ));
    assert!(matches!(
        client.get_page_token("111").await,
        Err(GraphError::AccessTokenRequired)
    ));
    assert!(matches!(
        client.get_ad_account_leadgen_forms("111").await,
        Err(GraphError::AccessTokenRequired)
    ));
    assert!(matches!(
        client.get_ad_leads("555", None).await,
        Err(GraphError::AccessTokenRequired)
    ));

    server.verify().await;
}

#[tokio::test]
async fn test_subscribed_apps_use_explicit_token() {
    let server = MockServer::start().await;
    let page_token = "page-token-111";
    let proof = app_secret_proof(page_token, APP_SECRET);

    Mock::given(method("GET"))
        .and(path(common::versioned("/111/subscribed_apps")))
        .and(query_param("access_token", page_token))
        .and(query_param("appsecret_proof", proof.as_str()))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "data": [{"name": "Test App", "id": "1234567890"}]
        })))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path(common::versioned("/111/subscribed_apps")))
        .and(query_param("access_token", page_token))
        .and(query_param("appsecret_proof", proof.as_str()))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "success": true
        })))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("DELETE"))
        .and(path(common::versioned("/111/subscribed_apps")))
        .and(query_param("access_token", page_token))
        .and(query_param("appsecret_proof", proof.as_str()))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "success": true
        })))
        .expect(1)
        .mount(&server)
        .await;

    // The default token must not leak into explicit-token calls
    let mut client = common::client_for(&server);
    client.set_access_token(USER_TOKEN);

    let apps = client
        .get_page_subscribed_apps("111", page_token)
        .await
        .expect("get_page_subscribed_apps failed");
    assert_eq!(apps["data"][0]["id"], "1234567890");

    let created = client
        .create_page_subscribed_apps("111", page_token)
        .await
        .expect("create_page_subscribed_apps failed");
    assert_eq!(created["success"], true);

    let deleted = client
        .delete_page_subscribed_apps("111", page_token)
        .await
        .expect("delete_page_subscribed_apps failed");
    assert_eq!(deleted["success"], true);

    server.verify().await;
}

#[tokio::test]
async fn test_subscribed_apps_work_without_default_token() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(common::versioned("/111/subscribed_apps")))
        .and(query_param("access_token", "page-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "data": []
        })))
        .mount(&server)
        .await;

    let client = common::client_for(&server);
    let apps = client
        .get_page_subscribed_apps("111", "page-token")
        .await
        .expect("explicit token should be enough");

    assert!(apps["data"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_create_subscribed_apps_with_fields_sends_form() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(common::versioned("/111/subscribed_apps")))
        .and(query_param("access_token", "page-token"))
        .and(body_string_contains("subscribed_fields=leadgen%2Cfeed"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "success": true
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = common::client_for(&server);
    let result = client
        .create_page_subscribed_apps_with_fields("111", "page-token", &["leadgen", "feed"])
        .await
        .expect("create with fields failed");

    assert_eq!(result["success"], true);
}

#[tokio::test]
async fn test_subscribed_apps_permission_error() {
    let server = MockServer::start().await;

    common::mount_error(
        &server,
        "POST",
        "/111/subscribed_apps",
        403,
        200,
        "(#200) The user must be an administrator of the page",
    )
    .await;

    let client = common::client_for(&server);
    let result = client.create_page_subscribed_apps("111", "page-token").await;

    match result {
        Err(GraphError::ExtendedPermissionRequired(message)) => {
            assert!(message.contains("administrator"))
        }
        other => panic!("expected ExtendedPermissionRequired, got {other:?}"),
    }
}

#[tokio::test]
async fn test_node_ids_that_change_the_path_make_no_request() {
    let (server, client) = common::setup_graph_mock().await;
    Mock::given(wiremock::matchers::any())
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({})))
        .expect(0)
        .mount(&server)
        .await;

    assert!(matches!(
        client.get_page_subscribed_apps("111/../me", "page-token").await,
        Err(GraphError::InvalidNodeId(_))
    ));
    assert!(matches!(
        client.delete_page_subscribed_apps("111?fields=id", "page-token").await,
        Err(GraphError::InvalidNodeId(_))
    ));
    assert!(matches!(
        client.get_ad_account_leadgen_forms("").await,
        Err(GraphError::InvalidNodeId(_))
    ));
    assert!(matches!(
        client.get_ad_leads("555/leads", None).await,
        Err(GraphError::InvalidNodeId(_))
    ));

    server.verify().await;
}
