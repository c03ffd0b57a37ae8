//! Integration tests for video libraries

use super::*;
use bunnycdn_client::BunnyError;
use pretty_assertions::assert_eq;
use serde_json::json;
use wiremock::matchers::{body_json, query_param};

#[tokio::test]
async fn test_list_video_libraries_query() {
    let mock_server = setup_mock_server().await;

    mock_with_auth("GET", "/videolibrary")
        .and(query_param("page", "1"))
        .and(query_param("pageSize", "5"))
        .and(query_param("includeAccessKey", "true"))
        .respond_with(success_response(json!({
            "Items": [{"Id": 3, "Name": "Library", "ApiKey": "lib-key"}],
            "CurrentPage": 1,
            "TotalItems": 1,
            "HasMoreItems": false
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let page = client.video_libraries().list(1, 5, true).await.unwrap();

    assert_eq!(page.items[0].api_key.as_deref(), Some("lib-key"));
}

#[tokio::test]
async fn test_get_video_library() {
    let mock_server = setup_mock_server().await;

    mock_with_auth("GET", "/videolibrary/3")
        .respond_with(success_response(json!({
            "Id": 3,
            "Name": "Library",
            "AllowedReferrers": ["example.com"]
        })))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let library = client.video_libraries().get(3).await.unwrap();

    assert_eq!(library.allowed_referrers, vec!["example.com".to_string()]);
}

#[tokio::test]
async fn test_add_allowed_referrer_sends_trimmed_hostname() {
    let mock_server = setup_mock_server().await;

    mock_with_auth("POST", "/videolibrary/3/addAllowedReferrer")
        .and(body_json(json!({"Hostname": "example.com"})))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    client
        .video_libraries()
        .add_allowed_referrer(3, "  example.com ")
        .await
        .unwrap();
}

#[tokio::test]
async fn test_referrer_mutations_hit_their_paths() {
    let mock_server = setup_mock_server().await;

    for action in ["removeAllowedReferrer", "addBlockedReferrer", "removeBlockedReferrer"] {
        mock_with_auth("POST", &format!("/videolibrary/8/{}", action))
            .and(body_json(json!({"Hostname": "bad.example"})))
            .respond_with(ResponseTemplate::new(200))
            .expect(1)
            .mount(&mock_server)
            .await;
    }

    let client = client_for(&mock_server);
    let service = client.video_libraries();
    service.remove_allowed_referrer(8, "bad.example").await.unwrap();
    service.add_blocked_referrer(8, "bad.example").await.unwrap();
    service.remove_blocked_referrer(8, "bad.example").await.unwrap();
}

#[tokio::test]
async fn test_referrer_on_missing_library_is_not_found() {
    let mock_server = setup_mock_server().await;

    mock_with_auth("POST", "/videolibrary/99/addBlockedReferrer")
        .respond_with(error_response(404, "Video library not found"))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let err = client
        .video_libraries()
        .add_blocked_referrer(99, "example.com")
        .await
        .unwrap_err();
    assert!(matches!(err, BunnyError::NotFound { .. }));
}

#[tokio::test]
async fn test_referrer_rejects_blank_hostname() {
    let mock_server = setup_mock_server().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(204))
        .expect(0)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let err = client
        .video_libraries()
        .add_allowed_referrer(3, "   ")
        .await
        .unwrap_err();
    assert!(matches!(err, BunnyError::InvalidArgument { ref param, .. } if param == "hostname"));
}
