//! Integration tests for billing

use super::*;
use bunnycdn_client::{BunnyError, OptionsUpdate};
use pretty_assertions::assert_eq;
use serde_json::json;

fn billing_details(type_codes: &[i32]) -> serde_json::Value {
    let records: Vec<serde_json::Value> = type_codes
        .iter()
        .enumerate()
        .map(|(i, code)| {
            json!({
                "Id": i + 1,
                "PaymentId": format!("pay_{}", i + 1),
                "Amount": 10.0,
                "Payer": "billing@example.com",
                "Timestamp": "2022-03-01T12:00:00",
                "InvoiceAvailable": true,
                "Type": code
            })
        })
        .collect();
    json!({
        "Balance": 100.0,
        "ThisMonthCharges": 12.5,
        "BillingRecords": records,
        "MonthlyChargesStorage": 1.0,
        "MonthlyChargesEUTraffic": 2.0,
        "MonthlyChargesUSTraffic": 3.0,
        "MonthlyChargesASIATraffic": 4.0,
        "MonthlyChargesAFTraffic": 0.0,
        "MonthlyChargesSATraffic": 0.5,
        "BillingHistoryChart": {}
    })
}

#[tokio::test]
async fn test_billing_details_without_population_has_no_labels() {
    let mock_server = setup_mock_server().await;

    mock_with_auth("GET", "/billing")
        .respond_with(success_response(billing_details(&[0, 3])))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let details = client.billing().details().await.unwrap();

    assert_eq!(details.billing_records.len(), 2);
    assert!(details.billing_records.iter().all(|r| r.type_name.is_none()));
}

#[tokio::test]
async fn test_billing_details_populates_labels_and_dates() {
    let mock_server = setup_mock_server().await;

    mock_with_auth("GET", "/billing")
        .respond_with(success_response(billing_details(&[0, 1, 2, 3, 4, 5, 6, 7])))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    client.set_options(OptionsUpdate::new().parse_dates(true).populate_fields(true));

    let details = client.billing().details().await.unwrap();
    let labels: Vec<&str> = details
        .billing_records
        .iter()
        .filter_map(|r| r.type_name.as_deref())
        .collect();

    assert_eq!(
        labels,
        vec![
            "PayPal",
            "Bitcoin",
            "CreditCard",
            "MonthlyUsage",
            "Refund",
            "CouponCode",
            "BankTransfer",
            "AffiliateCredits"
        ]
    );
    assert!(details.billing_records[0]
        .timestamp
        .as_ref()
        .and_then(|t| t.as_datetime())
        .is_some());
}

#[tokio::test]
async fn test_unknown_billing_type_fails_population() {
    let mock_server = setup_mock_server().await;

    mock_with_auth("GET", "/billing")
        .respond_with(success_response(billing_details(&[2, 99])))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    client.set_options(OptionsUpdate::new().populate_fields(true));

    let err = client.billing().details().await.unwrap_err();
    assert!(matches!(err, BunnyError::Parse { ref field, .. } if field == "Type"));
}

#[tokio::test]
async fn test_claim_affiliate_credits_accepts_empty_body() {
    let mock_server = setup_mock_server().await;

    mock_with_auth("POST", "/billing/affiliate/claim")
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    client.billing().claim_affiliate_credits().await.unwrap();
}

#[tokio::test]
async fn test_billing_summary() {
    let mock_server = setup_mock_server().await;

    mock_with_auth("GET", "/billing/summary")
        .respond_with(success_response(json!([
            {"PullZoneId": 1, "MonthlyUsage": 2.5, "MonthlyBandwidthUsed": 1024}
        ])))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let summary = client.billing().summary().await.unwrap();
    assert_eq!(summary.len(), 1);
}
