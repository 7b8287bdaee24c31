//! Integration tests for lead generation forms and leads

use chrono::{TimeZone, Utc};
use wiremock::matchers::{method, path, query_param, query_param_is_missing};
use wiremock::{Mock, ResponseTemplate};

use crate::common::{self, USER_TOKEN};

#[tokio::test]
async fn test_get_leadgen_forms() {
    let (server, client) = common::setup_graph_mock().await;

    Mock::given(method("GET"))
        .and(path(common::versioned("/111/leadgen_forms")))
        .and(query_param("access_token", USER_TOKEN))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "data": [
                {"id": "555", "name": "Newsletter signup", "status": "ACTIVE", "locale": "en_US"}
            ]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let forms = client
        .get_ad_account_leadgen_forms("111")
        .await
        .expect("get_ad_account_leadgen_forms failed");

    assert_eq!(forms["data"][0]["id"], "555");
    assert_eq!(forms["data"][0]["status"], "ACTIVE");
}

#[tokio::test]
async fn test_get_leads_from_date_is_unix_timestamp() {
    let (server, client) = common::setup_graph_mock().await;

    Mock::given(method("GET"))
        .and(path(common::versioned("/555/leads")))
        .and(query_param("access_token", USER_TOKEN))
        .and(query_param("from_date", "1704067200"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "data": [
                {
                    "created_time": "2024-01-02T10:00:00+0000",
                    "id": "777",
                    "field_data": [
                        {"name": "email", "values": ["lead@example.com"]}
                    ]
                }
            ]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let since = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
    let leads = client
        .get_ad_leads("555", Some(since))
        .await
        .expect("get_ad_leads failed");

    assert_eq!(leads["data"][0]["id"], "777");
    assert_eq!(
        leads["data"][0]["field_data"][0]["values"][0],
        "lead@example.com"
    );
}

#[tokio::test]
async fn test_get_leads_without_from_date() {
    let (server, client) = common::setup_graph_mock().await;

    Mock::given(method("GET"))
        .and(path(common::versioned("/555/leads")))
        .and(query_param_is_missing("from_date"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "data": []
        })))
        .expect(1)
        .mount(&server)
        .await;

    let leads = client
        .get_ad_leads("555", None)
        .await
        .expect("get_ad_leads failed");

    assert!(leads["data"].as_array().unwrap().is_empty());
}
