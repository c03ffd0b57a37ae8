//! Request dispatch shared by every service.
//!
//! Services describe an operation as an [`Endpoint`]; the [`Dispatcher`]
//! attaches the credential, sends it, classifies the status code and, for
//! operations with a payload, decodes and normalizes the body. Status
//! handling lives only in [`classify`].

use serde::de::DeserializeOwned;
use serde::Serialize;
use std::sync::{Arc, PoisonError, RwLock};
use tracing::Instrument;
use uuid::Uuid;

use crate::auth::AuthProvider;
use crate::config::ClientOptions;
use crate::errors::{ApiErrorResponse, BunnyError, BunnyResult};
use crate::normalize::{normalize, Normalize};
use crate::observability::{LoggingConfig, MetricsCollector, RequestTimer};
use crate::transport::{HttpMethod, HttpRequest, HttpResponse, HttpTransport};

/// Accepted statuses for operations returning a payload.
pub const OK: &[u16] = &[200];

/// Accepted statuses for operations without a payload.
pub const OK_OR_NO_CONTENT: &[u16] = &[200, 204];

/// Description of a single API operation.
#[derive(Debug, Clone)]
pub struct Endpoint {
    operation: &'static str,
    method: HttpMethod,
    path: String,
    query: Vec<(&'static str, String)>,
    body: Option<Vec<u8>>,
    accepted: &'static [u16],
    not_found: bool,
}

impl Endpoint {
    /// Creates an endpoint accepting only 200.
    pub fn new(operation: &'static str, method: HttpMethod, path: impl Into<String>) -> Self {
        Self {
            operation,
            method,
            path: path.into(),
            query: Vec::new(),
            body: None,
            accepted: OK,
            not_found: false,
        }
    }

    /// Creates a GET endpoint.
    pub fn get(operation: &'static str, path: impl Into<String>) -> Self {
        Self::new(operation, HttpMethod::Get, path)
    }

    /// Creates a POST endpoint.
    pub fn post(operation: &'static str, path: impl Into<String>) -> Self {
        Self::new(operation, HttpMethod::Post, path)
    }

    /// Appends a query parameter.
    pub fn query(mut self, name: &'static str, value: impl ToString) -> Self {
        self.query.push((name, value.to_string()));
        self
    }

    /// Sets a JSON body.
    pub fn json_body<T: Serialize>(mut self, body: &T) -> BunnyResult<Self> {
        self.body = Some(serde_json::to_vec(body)?);
        Ok(self)
    }

    /// Sets the statuses treated as success.
    pub fn accept(mut self, statuses: &'static [u16]) -> Self {
        self.accepted = statuses;
        self
    }

    /// Maps 404 to [`BunnyError::NotFound`] instead of a server error.
    pub fn with_not_found(mut self) -> Self {
        self.not_found = true;
        self
    }

    /// Returns the operation name used in logs and metrics.
    pub fn operation(&self) -> &'static str {
        self.operation
    }
}

/// Maps a response status to success or a typed error.
///
/// Statuses in `accepted` succeed. Otherwise 400, 401 and (when
/// `not_found` is set) 404 get dedicated variants, and every other status
/// becomes [`BunnyError::Server`] carrying the raw code.
pub fn classify(response: &HttpResponse, accepted: &[u16], not_found: bool) -> BunnyResult<()> {
    if accepted.contains(&response.status) {
        return Ok(());
    }

    let api_message = serde_json::from_slice::<ApiErrorResponse>(&response.body)
        .ok()
        .and_then(|body| body.message);

    Err(match response.status {
        400 => BunnyError::BadRequest {
            message: api_message.unwrap_or_else(|| "Bad request".to_string()),
        },
        401 => BunnyError::Unauthorized {
            message: api_message.unwrap_or_else(|| "Unauthorized".to_string()),
        },
        404 if not_found => BunnyError::NotFound {
            message: api_message.unwrap_or_else(|| "Resource not found".to_string()),
        },
        status => BunnyError::server(
            status,
            api_message.unwrap_or_else(|| "bunny.net server error".to_string()),
        ),
    })
}

/// Shared request pipeline used by every service.
pub struct Dispatcher {
    transport: Arc<dyn HttpTransport>,
    auth: Arc<dyn AuthProvider>,
    options: RwLock<ClientOptions>,
    metrics: Arc<dyn MetricsCollector>,
    logging: LoggingConfig,
    custom_headers: Vec<(String, String)>,
}

impl Dispatcher {
    /// Creates a new dispatcher.
    pub fn new(
        transport: Arc<dyn HttpTransport>,
        auth: Arc<dyn AuthProvider>,
        options: ClientOptions,
        metrics: Arc<dyn MetricsCollector>,
        logging: LoggingConfig,
        custom_headers: Vec<(String, String)>,
    ) -> Self {
        Self {
            transport,
            auth,
            options: RwLock::new(options),
            metrics,
            logging,
            custom_headers,
        }
    }

    /// Returns a snapshot of the normalization flags.
    pub fn options(&self) -> ClientOptions {
        *self.options.read().unwrap_or_else(PoisonError::into_inner)
    }

    /// Mutates the normalization flags.
    pub fn update_options(&self, update: impl FnOnce(&mut ClientOptions)) {
        let mut options = self.options.write().unwrap_or_else(PoisonError::into_inner);
        update(&mut options);
        tracing::debug!(
            parse_dates = options.parse_dates,
            populate_fields = options.populate_fields,
            "Client options updated"
        );
    }

    /// Returns the metrics collector.
    pub fn metrics(&self) -> &Arc<dyn MetricsCollector> {
        &self.metrics
    }

    /// Runs an operation whose success carries a JSON payload.
    pub async fn fetch<T>(&self, endpoint: Endpoint) -> BunnyResult<T>
    where
        T: DeserializeOwned + Normalize,
    {
        let timer = RequestTimer::start(endpoint.operation);
        let span = tracing::debug_span!(
            "dispatch",
            operation = endpoint.operation,
            request_id = %Uuid::new_v4()
        );
        let result: BunnyResult<T> = async {
            let response = self.execute(&endpoint).await?;
            let mut payload: T = serde_json::from_slice(&response.body).map_err(|e| {
                BunnyError::Serialization {
                    message: format!("Failed to parse {} response: {}", endpoint.operation, e),
                }
            })?;
            normalize(&mut payload, &self.options())?;
            Ok(payload)
        }
        .instrument(span)
        .await;
        self.record(&timer, &result);
        result
    }

    /// Runs an operation whose success carries no payload.
    ///
    /// The response body is never read on success.
    pub async fn send_empty(&self, endpoint: Endpoint) -> BunnyResult<()> {
        let timer = RequestTimer::start(endpoint.operation);
        let span = tracing::debug_span!(
            "dispatch",
            operation = endpoint.operation,
            request_id = %Uuid::new_v4()
        );
        let result = self.execute(&endpoint).instrument(span).await.map(|_| ());
        self.record(&timer, &result);
        result
    }

    async fn execute(&self, endpoint: &Endpoint) -> BunnyResult<HttpResponse> {
        let request = self.build_request(endpoint)?;
        tracing::debug!(method = %request.method, path = %request.path, "Sending request");

        let response = self.transport.send(request).await?;
        tracing::debug!(status = response.status, "Received response");

        if self.logging.log_response_bodies && !response.body.is_empty() {
            tracing::trace!(body = %self.logging.render_body(&response.body), "Response body");
        }

        classify(&response, endpoint.accepted, endpoint.not_found)?;
        Ok(response)
    }

    fn build_request(&self, endpoint: &Endpoint) -> BunnyResult<HttpRequest> {
        let mut request = HttpRequest::new(endpoint.method, endpoint.path.as_str())
            .with_query(&endpoint.query)
            .with_header("Accept", "application/json")
            .with_header("Content-Type", "application/json");

        for (name, value) in &self.custom_headers {
            request.headers.insert(name.clone(), value.clone());
        }

        self.auth.apply_auth(&mut request.headers)?;

        if let Some(body) = &endpoint.body {
            request = request.with_body(body.clone());
        }

        Ok(request)
    }

    fn record<T>(&self, timer: &RequestTimer, result: &BunnyResult<T>) {
        match result {
            Ok(_) => {
                self.metrics
                    .record_request(timer.operation(), true, timer.elapsed());
            }
            Err(error) => {
                // Errors raised before the transport call are not counted.
                if !error.is_local() {
                    self.metrics
                        .record_request(timer.operation(), false, timer.elapsed());
                    self.metrics.record_error(error.kind());
                }
                tracing::warn!(
                    operation = timer.operation(),
                    kind = error.kind().as_str(),
                    status = error.status_code(),
                    error = %error,
                    "Request failed"
                );
            }
        }
    }
}

impl std::fmt::Debug for Dispatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Dispatcher")
            .field("options", &self.options())
            .field("authenticated", &self.auth.is_configured())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::AccessKeyAuth;
    use crate::mocks::{MockResponse, MockTransport};
    use crate::observability::DefaultMetricsCollector;
    use crate::types::AbuseCase;
    use serde_json::json;
    use test_case::test_case;

    fn response(status: u16, body: &str) -> HttpResponse {
        HttpResponse {
            status,
            headers: Default::default(),
            body: body.as_bytes().to_vec(),
        }
    }

    fn dispatcher(transport: Arc<MockTransport>, key: Option<&str>) -> Dispatcher {
        let auth = AccessKeyAuth::new();
        if let Some(key) = key {
            auth.set_key(key).unwrap();
        }
        Dispatcher::new(
            transport,
            Arc::new(auth),
            ClientOptions::default(),
            Arc::new(DefaultMetricsCollector::new()),
            LoggingConfig::default(),
            vec![("X-Client".to_string(), "test".to_string())],
        )
    }

    #[test_case(200, OK, false => matches Ok(()))]
    #[test_case(204, OK_OR_NO_CONTENT, false => matches Ok(()))]
    #[test_case(400, OK, true => matches Err(BunnyError::BadRequest { .. }))]
    #[test_case(401, OK, false => matches Err(BunnyError::Unauthorized { .. }))]
    #[test_case(404, OK, true => matches Err(BunnyError::NotFound { .. }))]
    #[test_case(404, OK, false => matches Err(BunnyError::Server { status_code: 404, .. }))]
    #[test_case(500, OK, true => matches Err(BunnyError::Server { status_code: 500, .. }))]
    #[test_case(204, OK, false => matches Err(BunnyError::Server { status_code: 204, .. }))]
    fn test_classify(status: u16, accepted: &[u16], not_found: bool) -> BunnyResult<()> {
        classify(&response(status, ""), accepted, not_found)
    }

    #[test]
    fn test_classify_uses_api_message() {
        let err = classify(
            &response(400, r#"{"ErrorKey":"validation","Message":"Hostname is invalid"}"#),
            OK_OR_NO_CONTENT,
            true,
        )
        .unwrap_err();
        assert!(matches!(err, BunnyError::BadRequest { ref message } if message == "Hostname is invalid"));
    }

    #[test]
    fn test_classify_unauthorized_ignores_payload_shape() {
        let err = classify(&response(401, r#"{"Items":[]}"#), OK, false).unwrap_err();
        assert!(matches!(err, BunnyError::Unauthorized { .. }));
    }

    #[tokio::test]
    async fn test_fetch_without_key_skips_transport() {
        let transport = Arc::new(MockTransport::new());
        let dispatcher = dispatcher(Arc::clone(&transport), None);

        let result: BunnyResult<AbuseCase> =
            dispatcher.fetch(Endpoint::get("test.op", "/abusecase/1")).await;

        assert!(matches!(result, Err(BunnyError::Configuration { .. })));
        assert_eq!(transport.request_count(), 0);
        let metrics = dispatcher.metrics().get_metrics();
        assert_eq!(metrics.total_requests, 0);
        assert!(metrics.errors.is_empty());
    }

    #[tokio::test]
    async fn test_fetch_builds_request() {
        let transport = Arc::new(MockTransport::new());
        transport.queue_json(&json!({"Id": 1}));
        let dispatcher = dispatcher(Arc::clone(&transport), Some("secret-key"));

        let endpoint = Endpoint::post("test.op", "/videolibrary/3/addAllowedReferrer")
            .query("page", 2)
            .query("perPage", 10)
            .json_body(&json!({"Hostname": "example.com"}))
            .unwrap();
        let _: AbuseCase = dispatcher.fetch(endpoint).await.unwrap();

        let request = transport.last_request().unwrap();
        assert_eq!(request.method, HttpMethod::Post);
        assert_eq!(request.path, "/videolibrary/3/addAllowedReferrer?page=2&perPage=10");
        assert_eq!(request.headers.get("AccessKey").map(String::as_str), Some("secret-key"));
        assert_eq!(request.headers.get("X-Client").map(String::as_str), Some("test"));
        let body: serde_json::Value = serde_json::from_slice(&request.body.unwrap()).unwrap();
        assert_eq!(body, json!({"Hostname": "example.com"}));
    }

    #[tokio::test]
    async fn test_fetch_bad_json_is_serialization_error() {
        let transport = Arc::new(MockTransport::new());
        transport.queue(MockResponse::raw(200, b"not json".to_vec()));
        let dispatcher = dispatcher(Arc::clone(&transport), Some("key"));

        let result: BunnyResult<AbuseCase> =
            dispatcher.fetch(Endpoint::get("test.op", "/abusecase/1")).await;
        assert!(matches!(result, Err(BunnyError::Serialization { .. })));
    }

    #[tokio::test]
    async fn test_send_empty_ignores_body() {
        let transport = Arc::new(MockTransport::new());
        transport.queue(MockResponse::raw(204, b"\xff\xfe not json".to_vec()));
        let dispatcher = dispatcher(Arc::clone(&transport), Some("key"));

        dispatcher
            .send_empty(Endpoint::post("test.op", "/x").accept(OK_OR_NO_CONTENT))
            .await
            .unwrap();

        let metrics = dispatcher.metrics().get_metrics();
        assert_eq!(metrics.successful_requests, 1);
    }

    #[tokio::test]
    async fn test_options_snapshot_applies_to_next_call() {
        let transport = Arc::new(MockTransport::new());
        transport.queue_json(&json!({"Id": 1, "DateCreated": "2021-01-01T00:00:00Z"}));
        transport.queue_json(&json!({"Id": 1, "DateCreated": "2021-01-01T00:00:00Z"}));
        let dispatcher = dispatcher(Arc::clone(&transport), Some("key"));

        let raw: AbuseCase = dispatcher.fetch(Endpoint::get("op", "/a")).await.unwrap();
        assert!(raw.date_created.unwrap().raw().is_some());

        dispatcher.update_options(|o| o.parse_dates = true);
        let parsed: AbuseCase = dispatcher.fetch(Endpoint::get("op", "/a")).await.unwrap();
        assert!(parsed.date_created.unwrap().as_datetime().is_some());
    }
}
