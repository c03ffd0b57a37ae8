//! Integration tests for abuse cases

use super::*;
use bunnycdn_client::{BunnyError, OptionsUpdate};
use chrono::{TimeZone, Utc};
use pretty_assertions::assert_eq;
use serde_json::json;
use wiremock::matchers::query_param;

fn abuse_case(id: u64) -> serde_json::Value {
    json!({
        "Id": id,
        "ActualUrl": "https://cdn.example.com/file.zip",
        "DateCreated": "2021-01-01T00:00:00Z",
        "DateUpdated": "2021-01-02T00:00:00Z",
        "Deadline": "2021-01-08T00:00:00Z",
        "PullZoneId": 42,
        "PullZoneName": "example",
        "Path": "/file.zip",
        "Message": "Reported content",
        "Status": 1,
        "Urls": []
    })
}

#[tokio::test]
async fn test_list_abuse_cases_sends_paging_and_keeps_raw_dates() {
    let mock_server = setup_mock_server().await;

    mock_with_auth("GET", "/abusecase")
        .and(query_param("page", "2"))
        .and(query_param("perPage", "50"))
        .respond_with(success_response(json!({
            "Items": [abuse_case(1), abuse_case(2)],
            "CurrentPage": 2,
            "TotalItems": 52,
            "HasMoreItems": false
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let page = client.abuse_cases().list(2, 50).await.unwrap();

    assert_eq!(page.len(), 2);
    assert_eq!(page.total_items, 52);
    assert_eq!(page.next_page(), None);
    assert_eq!(
        page.items[0].date_created.as_ref().and_then(|d| d.raw()),
        Some("2021-01-01T00:00:00Z")
    );
}

#[tokio::test]
async fn test_list_abuse_cases_parses_dates_when_enabled() {
    let mock_server = setup_mock_server().await;

    mock_with_auth("GET", "/abusecase")
        .respond_with(success_response(json!({
            "Items": [abuse_case(1)],
            "CurrentPage": 1,
            "TotalItems": 1,
            "HasMoreItems": false
        })))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    client.set_options(OptionsUpdate::new().parse_dates(true));

    let page = client.abuse_cases().list(1, 1000).await.unwrap();
    let created = page.items[0]
        .date_created
        .as_ref()
        .and_then(|d| d.as_datetime())
        .copied();

    assert_eq!(created, Some(Utc.with_ymd_and_hms(2021, 1, 1, 0, 0, 0).unwrap()));
}

#[tokio::test]
async fn test_list_abuse_cases_rejects_page_size_out_of_bounds() {
    let mock_server = setup_mock_server().await;

    Mock::given(method("GET"))
        .respond_with(success_response(json!({})))
        .expect(0)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    for per_page in [4, 1001] {
        let err = client.abuse_cases().list(1, per_page).await.unwrap_err();
        assert!(matches!(err, BunnyError::InvalidArgument { ref param, .. } if param == "perPage"));
    }
}

#[tokio::test]
async fn test_check_abuse_case() {
    let mock_server = setup_mock_server().await;

    mock_with_auth("POST", "/abusecase/7/check")
        .respond_with(success_response(abuse_case(7)))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let case = client.abuse_cases().check(7).await.unwrap();

    assert_eq!(case.id, 7);
    assert_eq!(case.pull_zone_name.as_deref(), Some("example"));
}

#[tokio::test]
async fn test_malformed_date_is_parse_error() {
    let mock_server = setup_mock_server().await;

    let mut body = abuse_case(7);
    body["Deadline"] = json!("next tuesday");
    mock_with_auth("POST", "/abusecase/7/check")
        .respond_with(success_response(body))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    client.set_options(OptionsUpdate::new().parse_dates(true));

    let err = client.abuse_cases().check(7).await.unwrap_err();
    assert!(matches!(err, BunnyError::Parse { ref field, .. } if field == "Deadline"));
}
