//! Integration tests for support tickets

use super::*;
use bunnycdn_client::{BunnyError, OptionsUpdate};
use pretty_assertions::assert_eq;
use serde_json::json;
use wiremock::matchers::query_param;

fn ticket(id: u64) -> serde_json::Value {
    json!({
        "Id": id,
        "TicketId": id + 1000,
        "Subject": "Purge not working",
        "Status": "Open",
        "DateCreated": "2022-06-01T08:00:00Z",
        "DateUpdated": "2022-06-02T08:00:00Z",
        "Comments": [
            {"Id": 1, "Body": "Hello", "Author": "Customer", "DateCreated": "2022-06-01T08:00:00Z"}
        ]
    })
}

#[tokio::test]
async fn test_list_tickets_passes_page_size_through() {
    let mock_server = setup_mock_server().await;

    mock_with_auth("GET", "/support/ticket/list")
        .and(query_param("page", "1"))
        .and(query_param("pageSize", "2"))
        .respond_with(success_response(json!({
            "Items": [ticket(1)],
            "CurrentPage": 1,
            "TotalItems": 3,
            "HasMoreItems": true
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let page = client.support().list_tickets(1, 2).await.unwrap();

    assert_eq!(page.next_page(), Some(2));
    assert_eq!(page.items[0].subject.as_deref(), Some("Purge not working"));
}

#[tokio::test]
async fn test_ticket_details_parses_comment_dates() {
    let mock_server = setup_mock_server().await;

    mock_with_auth("GET", "/support/ticket/details/5")
        .respond_with(success_response(ticket(5)))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    client.set_options(OptionsUpdate::new().parse_dates(true));

    let ticket = client.support().ticket(5).await.unwrap();
    assert!(ticket.comments[0]
        .date_created
        .as_ref()
        .and_then(|d| d.as_datetime())
        .is_some());
}

#[tokio::test]
async fn test_ticket_details_not_found() {
    let mock_server = setup_mock_server().await;

    mock_with_auth("GET", "/support/ticket/details/404")
        .respond_with(error_response(404, "Ticket not found"))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let err = client.support().ticket(404).await.unwrap_err();
    assert!(matches!(err, BunnyError::NotFound { ref message } if message == "Ticket not found"));
}

#[tokio::test]
async fn test_close_ticket_with_no_content() {
    let mock_server = setup_mock_server().await;

    mock_with_auth("POST", "/support/ticket/9/close")
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    client.support().close_ticket(9).await.unwrap();
}

#[tokio::test]
async fn test_close_ticket_unexpected_status_is_server_error() {
    let mock_server = setup_mock_server().await;

    mock_with_auth("POST", "/support/ticket/9/close")
        .respond_with(ResponseTemplate::new(202))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let err = client.support().close_ticket(9).await.unwrap_err();
    assert!(matches!(err, BunnyError::Server { status_code: 202, .. }));
}
