//! Unsupported endpoints fail locally and never reach the server

use fbmarketing_graph::{GraphError, UnsupportedEndpoint};
use wiremock::matchers::any;
use wiremock::{Mock, MockServer, ResponseTemplate};

use crate::common;

#[tokio::test]
async fn test_unsupported_endpoints_make_no_request() {
    let server = MockServer::start().await;
    Mock::given(any())
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({})))
        .expect(0)
        .mount(&server)
        .await;

    let mut client = common::client_for(&server);
    client.set_access_token(common::USER_TOKEN);

    for endpoint in UnsupportedEndpoint::ALL {
        assert!(matches!(
            client.unsupported(*endpoint),
            Err(GraphError::NotImplemented(e)) if e == *endpoint
        ));
    }
    assert!(matches!(
        client.get_ad_account_insights(),
        Err(GraphError::NotImplemented(
            UnsupportedEndpoint::GetAdAccountInsights
        ))
    ));
    assert!(matches!(
        client.delete_ad_account_targeting_tracking(),
        Err(GraphError::NotImplemented(_))
    ));

    server.verify().await;
}
