//! Integration tests for credentials and status classification

use super::*;
use bunnycdn_client::{BunnyError, ErrorKind};
use pretty_assertions::assert_eq;
use serde_json::json;

#[tokio::test]
async fn test_missing_key_never_reaches_server() {
    let mock_server = setup_mock_server().await;

    Mock::given(method("GET"))
        .respond_with(success_response(json!([])))
        .expect(0)
        .mount(&mock_server)
        .await;

    let client = keyless_client_for(&mock_server);
    let err = client.countries().list().await.unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Configuration);
}

#[tokio::test]
async fn test_key_set_later_is_sent() {
    let mock_server = setup_mock_server().await;

    mock_with_auth("GET", "/country")
        .respond_with(success_response(json!([
            {"Name": "Germany", "IsoCode": "DE", "IsEU": true, "TaxRate": 19.0}
        ])))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = keyless_client_for(&mock_server);
    client.set_api_key(TEST_KEY).unwrap();

    let countries = client.countries().list().await.unwrap();
    assert_eq!(countries.len(), 1);
}

#[tokio::test]
async fn test_unauthorized() {
    let mock_server = setup_mock_server().await;

    Mock::given(method("GET"))
        .and(path("/region"))
        .respond_with(error_response(401, "Invalid AccessKey"))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let err = client.regions().list().await.unwrap_err();

    assert!(matches!(err, BunnyError::Unauthorized { ref message } if message == "Invalid AccessKey"));
    assert_eq!(err.status_code(), Some(401));
}

#[tokio::test]
async fn test_bad_request() {
    let mock_server = setup_mock_server().await;

    mock_with_auth("GET", "/billing/affiliate")
        .respond_with(error_response(400, "Invalid request"))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let err = client.billing().affiliate().await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::BadRequest);
}

#[tokio::test]
async fn test_payload_operation_rejects_no_content() {
    let mock_server = setup_mock_server().await;

    mock_with_auth("GET", "/region")
        .respond_with(ResponseTemplate::new(204))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let err = client.regions().list().await.unwrap_err();
    assert!(matches!(err, BunnyError::Server { status_code: 204, .. }));
}

#[tokio::test]
async fn test_dns_zone_list_not_found_and_server_error() {
    let mock_server = setup_mock_server().await;

    mock_with_auth("GET", "/dnszone")
        .respond_with(error_response(404, "No zones"))
        .up_to_n_times(1)
        .mount(&mock_server)
        .await;
    mock_with_auth("GET", "/dnszone")
        .respond_with(ResponseTemplate::new(503))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let first = client.dns_zones().list(1, 100).await.unwrap_err();
    let second = client.dns_zones().list(1, 100).await.unwrap_err();

    assert_eq!(first.kind(), ErrorKind::NotFound);
    assert!(matches!(second, BunnyError::Server { status_code: 503, .. }));
}

#[tokio::test]
async fn test_metrics_track_outcomes() {
    let mock_server = setup_mock_server().await;

    mock_with_auth("GET", "/country")
        .respond_with(success_response(json!([])))
        .mount(&mock_server)
        .await;
    mock_with_auth("GET", "/region")
        .respond_with(ResponseTemplate::new(500))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    client.countries().list().await.unwrap();
    let _ = client.regions().list().await;

    let metrics = client.metrics();
    assert_eq!(metrics.total_requests, 2);
    assert_eq!(metrics.successful_requests, 1);
    assert_eq!(metrics.errors_of(ErrorKind::Server), 1);
}
