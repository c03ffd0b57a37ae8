//! Mock implementations for testing.
//!
//! [`MockTransport`] replays queued responses and records every request it
//! receives, so tests can assert both on results and on what was (or was
//! not) sent.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::transport::{HttpMethod, HttpRequest, HttpResponse, HttpTransport, TransportError};

/// Mock HTTP transport for testing.
pub struct MockTransport {
    responses: Mutex<Vec<MockResponse>>,
    requests: Mutex<Vec<RecordedRequest>>,
    default_response: Mutex<Option<MockResponse>>,
}

/// A recorded request.
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    /// HTTP method.
    pub method: HttpMethod,
    /// Request path, including the query string.
    pub path: String,
    /// Request body.
    pub body: Option<Vec<u8>>,
    /// Request headers.
    pub headers: HashMap<String, String>,
}

impl RecordedRequest {
    /// Parses the body as JSON.
    pub fn json_body(&self) -> Option<serde_json::Value> {
        self.body
            .as_deref()
            .and_then(|body| serde_json::from_slice(body).ok())
    }
}

/// A mock response.
#[derive(Debug, Clone)]
pub struct MockResponse {
    /// HTTP status code.
    pub status: u16,
    /// Response headers.
    pub headers: HashMap<String, String>,
    /// Response body.
    pub body: Vec<u8>,
}

impl MockResponse {
    /// Creates a 200 JSON response.
    pub fn json<T: serde::Serialize>(value: &T) -> Self {
        let body = serde_json::to_vec(value).unwrap_or_default();
        let mut headers = HashMap::new();
        headers.insert("content-type".to_string(), "application/json".to_string());

        Self {
            status: 200,
            headers,
            body,
        }
    }

    /// Creates an error response in the API's error body format.
    pub fn error(status: u16, message: &str) -> Self {
        let error = serde_json::json!({
            "ErrorKey": "error",
            "Field": null,
            "Message": message
        });

        Self::json(&error).with_status(status)
    }

    /// Creates a 204 response with no body.
    pub fn no_content() -> Self {
        Self::raw(204, Vec::new())
    }

    /// Creates a response with an arbitrary status and body.
    pub fn raw(status: u16, body: Vec<u8>) -> Self {
        Self {
            status,
            headers: HashMap::new(),
            body,
        }
    }

    /// Overrides the status.
    pub fn with_status(mut self, status: u16) -> Self {
        self.status = status;
        self
    }
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

impl MockTransport {
    /// Creates a new mock transport.
    pub fn new() -> Self {
        Self {
            responses: Mutex::new(Vec::new()),
            requests: Mutex::new(Vec::new()),
            default_response: Mutex::new(None),
        }
    }

    /// Queues a response.
    pub fn queue(&self, response: MockResponse) {
        lock(&self.responses).push(response);
    }

    /// Queues a JSON response.
    pub fn queue_json<T: serde::Serialize>(&self, value: &T) {
        self.queue(MockResponse::json(value));
    }

    /// Queues an error response.
    pub fn queue_error(&self, status: u16, message: &str) {
        self.queue(MockResponse::error(status, message));
    }

    /// Sets the response used once the queue is empty.
    pub fn set_default(&self, response: MockResponse) {
        *lock(&self.default_response) = Some(response);
    }

    /// Gets all recorded requests.
    pub fn requests(&self) -> Vec<RecordedRequest> {
        lock(&self.requests).clone()
    }

    /// Gets the last recorded request.
    pub fn last_request(&self) -> Option<RecordedRequest> {
        lock(&self.requests).last().cloned()
    }

    /// Returns the number of requests made.
    pub fn request_count(&self) -> usize {
        lock(&self.requests).len()
    }

    fn next_response(&self) -> MockResponse {
        let mut responses = lock(&self.responses);
        if responses.is_empty() {
            lock(&self.default_response)
                .clone()
                .unwrap_or_else(|| MockResponse::error(500, "No mock response configured"))
        } else {
            responses.remove(0)
        }
    }
}

impl Default for MockTransport {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl HttpTransport for MockTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        lock(&self.requests).push(RecordedRequest {
            method: request.method,
            path: request.path,
            body: request.body,
            headers: request.headers,
        });

        let response = self.next_response();
        Ok(HttpResponse {
            status: response.status,
            headers: response.headers,
            body: response.body,
        })
    }
}

impl std::fmt::Debug for MockTransport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MockTransport")
            .field("request_count", &self.request_count())
            .finish()
    }
}

/// Canned API payloads.
pub mod fixtures {
    use serde_json::{json, Value};

    /// A single abuse case.
    pub fn abuse_case(id: u64) -> Value {
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
            "Urls": [{"Url": "https://cdn.example.com/file.zip", "Status": 1}]
        })
    }

    /// A page wrapping `items`.
    pub fn page(items: Vec<Value>, current_page: u32, total_items: u64, has_more: bool) -> Value {
        json!({
            "Items": items,
            "CurrentPage": current_page,
            "TotalItems": total_items,
            "HasMoreItems": has_more
        })
    }

    /// Billing details with one record of each given type code.
    pub fn billing_details(type_codes: &[i32]) -> Value {
        let records: Vec<Value> = type_codes
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
            "BillingHistoryChart": {"2022-03-01T00:00:00Z": 1.5}
        })
    }

    /// A ticket with two comments.
    pub fn ticket(id: u64) -> Value {
        json!({
            "Id": id,
            "TicketId": id + 1000,
            "Subject": "Purge not working",
            "Status": "Open",
            "DateCreated": "2022-06-01T08:00:00Z",
            "DateUpdated": "2022-06-02T08:00:00Z",
            "LinkedPullZone": "example",
            "Comments": [
                {"Id": 1, "Body": "Hello", "Author": "Customer", "DateCreated": "2022-06-01T08:00:00Z"},
                {"Id": 2, "Body": "Hi there", "Author": "Support", "DateCreated": "2022-06-02T08:00:00Z"}
            ]
        })
    }

    /// A video library.
    pub fn video_library(id: u64) -> Value {
        json!({
            "Id": id,
            "Name": "Library",
            "VideoCount": 3,
            "TrafficUsage": 1024,
            "StorageUsage": 2048,
            "DateCreated": "2023-01-01T00:00:00",
            "ReplicationRegions": ["DE", "NY"],
            "ApiKey": "library-api-key",
            "ReadOnlyApiKey": "library-ro-key",
            "HasWatermark": false,
            "EnabledResolutions": "240p,360p,720p",
            "AllowedReferrers": ["example.com"],
            "BlockedReferrers": [],
            "PullZoneId": 10,
            "StorageZoneId": 20
        })
    }

    /// A DNS zone with one record.
    pub fn dns_zone(id: u64) -> Value {
        json!({
            "Id": id,
            "Domain": "example.com",
            "Records": [
                {"Id": 1, "Type": 0, "Ttl": 300, "Value": "192.0.2.1", "Name": "", "Weight": 0, "Priority": 0, "Port": 0, "Disabled": false}
            ],
            "DateModified": "2023-02-01T00:00:00Z",
            "DateCreated": "2023-01-01T00:00:00Z",
            "NameserversDetected": true,
            "CustomNameserversEnabled": false,
            "Nameserver1": "kiki.bunny.net",
            "Nameserver2": "coco.bunny.net",
            "SoaEmail": "hostmaster@bunny.net",
            "NameserversNextCheck": "2023-03-01T00:00:00Z",
            "LoggingEnabled": false
        })
    }
}
