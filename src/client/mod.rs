//! bunny.net API client.
//!
//! Provides the main client interface for the bunny.net account API.

use secrecy::ExposeSecret;
use serde_json::Value;
use std::sync::Arc;

use crate::auth::{AccessKeyAuth, AuthProvider};
use crate::config::{BunnyConfig, BunnyConfigBuilder, ClientOptions, OptionsUpdate};
use crate::errors::{BunnyError, BunnyResult};
use crate::observability::{DefaultMetricsCollector, LoggingConfig, MetricsCollector, RequestMetrics};
use crate::services::{
    AbuseCaseService, BillingService, CountryService, Dispatcher, DnsZoneService, RegionService,
    SupportService, VideoLibraryService,
};
use crate::transport::{HttpTransport, HttpTransportImpl};

/// The main bunny.net client.
///
/// A client may be built without an API key. Every operation then fails
/// with [`BunnyError::Configuration`] before any request is sent, until
/// [`BunnyClient::set_api_key`] is called.
///
/// # Example
///
/// ```rust,no_run
/// use bunnycdn_client::BunnyClient;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let client = BunnyClient::builder()
///         .api_key("your-account-api-key")
///         .parse_dates(true)
///         .build()?;
///
///     let cases = client.abuse_cases().list(1, 100).await?;
///     for case in cases.iter() {
///         println!("{} {:?}", case.id, case.deadline);
///     }
///     Ok(())
/// }
/// ```
pub struct BunnyClient {
    config: BunnyConfig,
    auth: Arc<AccessKeyAuth>,
    dispatcher: Arc<Dispatcher>,
    abuse_cases: AbuseCaseService,
    billing: BillingService,
    countries: CountryService,
    dns_zones: DnsZoneService,
    regions: RegionService,
    support: SupportService,
    video_libraries: VideoLibraryService,
}

impl BunnyClient {
    /// Creates a new client builder.
    pub fn builder() -> BunnyClientBuilder {
        BunnyClientBuilder::new()
    }

    /// Creates a client from environment variables.
    ///
    /// See [`BunnyConfig::from_env`] for the variables read.
    pub fn from_env() -> BunnyResult<Self> {
        let config = BunnyConfig::from_env()?;
        BunnyClientBuilder::from_config(config).build()
    }

    /// Creates a client from an API key.
    pub fn from_api_key(api_key: impl Into<String>) -> BunnyResult<Self> {
        BunnyClientBuilder::new().api_key(api_key).build()
    }

    /// Replaces the API key used by all subsequent requests.
    ///
    /// An empty key is rejected and the previous key stays in effect.
    pub fn set_api_key(&self, api_key: &str) -> BunnyResult<()> {
        self.auth.set_key(api_key)
    }

    /// Replaces the API key from an untyped value.
    ///
    /// Anything other than a non-empty JSON string is rejected.
    pub fn set_api_key_value(&self, api_key: &Value) -> BunnyResult<()> {
        self.auth.set_key_from_value(api_key)
    }

    /// Returns true if an API key is set.
    pub fn has_api_key(&self) -> bool {
        self.auth.is_configured()
    }

    /// Returns the last characters of the API key, for diagnostics.
    pub fn api_key_hint(&self) -> String {
        self.auth.key_hint()
    }

    /// Updates the normalization flags. Absent fields keep their value.
    pub fn set_options(&self, update: OptionsUpdate) {
        self.dispatcher.update_options(|options| options.merge(update));
    }

    /// Updates the normalization flags from an untyped options object.
    ///
    /// Only boolean `parseDates` and `populateFields` keys are applied.
    pub fn set_options_json(&self, options: &Value) {
        self.dispatcher
            .update_options(|current| current.merge_json(options));
    }

    /// Returns the current normalization flags.
    pub fn options(&self) -> ClientOptions {
        self.dispatcher.options()
    }

    /// Returns the abuse case service.
    pub fn abuse_cases(&self) -> &AbuseCaseService {
        &self.abuse_cases
    }

    /// Returns the billing service.
    pub fn billing(&self) -> &BillingService {
        &self.billing
    }

    /// Returns the country service.
    pub fn countries(&self) -> &CountryService {
        &self.countries
    }

    /// Returns the DNS zone service.
    pub fn dns_zones(&self) -> &DnsZoneService {
        &self.dns_zones
    }

    /// Returns the region service.
    pub fn regions(&self) -> &RegionService {
        &self.regions
    }

    /// Returns the support ticket service.
    pub fn support(&self) -> &SupportService {
        &self.support
    }

    /// Returns the video library service.
    pub fn video_libraries(&self) -> &VideoLibraryService {
        &self.video_libraries
    }

    /// Returns a snapshot of the request metrics.
    pub fn metrics(&self) -> RequestMetrics {
        self.dispatcher.metrics().get_metrics()
    }

    /// Returns the configuration.
    pub fn config(&self) -> &BunnyConfig {
        &self.config
    }
}

impl std::fmt::Debug for BunnyClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BunnyClient")
            .field("config", &self.config)
            .field("dispatcher", &self.dispatcher)
            .finish()
    }
}

/// Builder for the bunny.net client.
pub struct BunnyClientBuilder {
    config_builder: BunnyConfigBuilder,
    transport: Option<Arc<dyn HttpTransport>>,
    metrics: Option<Arc<dyn MetricsCollector>>,
    logging: LoggingConfig,
}

impl BunnyClientBuilder {
    /// Creates a new client builder.
    pub fn new() -> Self {
        Self {
            config_builder: BunnyConfigBuilder::new(),
            transport: None,
            metrics: None,
            logging: LoggingConfig::default(),
        }
    }

    /// Creates a builder from an existing configuration.
    pub fn from_config(config: BunnyConfig) -> Self {
        let mut config_builder = BunnyConfigBuilder::new()
            .base_url(config.base_url.as_str())
            .timeout(config.timeout)
            .parse_dates(config.options.parse_dates)
            .populate_fields(config.options.populate_fields);
        if let Some(api_key) = &config.api_key {
            config_builder = config_builder.api_key(api_key.expose_secret().as_str());
        }
        for (name, value) in config.custom_headers {
            config_builder = config_builder.header(name, value);
        }
        Self {
            config_builder,
            ..Self::new()
        }
    }

    /// Sets the API key.
    pub fn api_key(mut self, api_key: impl Into<String>) -> Self {
        self.config_builder = self.config_builder.api_key(api_key);
        self
    }

    /// Sets the base URL.
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.config_builder = self.config_builder.base_url(base_url);
        self
    }

    /// Sets the request timeout.
    pub fn timeout(mut self, timeout: std::time::Duration) -> Self {
        self.config_builder = self.config_builder.timeout(timeout);
        self
    }

    /// Sets the timeout in seconds.
    pub fn timeout_secs(mut self, secs: u64) -> Self {
        self.config_builder = self.config_builder.timeout_secs(secs);
        self
    }

    /// Enables or disables date parsing.
    pub fn parse_dates(mut self, enabled: bool) -> Self {
        self.config_builder = self.config_builder.parse_dates(enabled);
        self
    }

    /// Enables or disables field population.
    pub fn populate_fields(mut self, enabled: bool) -> Self {
        self.config_builder = self.config_builder.populate_fields(enabled);
        self
    }

    /// Permits a plain `http://` base URL.
    pub fn allow_insecure(mut self, allow: bool) -> Self {
        self.config_builder = self.config_builder.allow_insecure(allow);
        self
    }

    /// Adds a custom header sent with every request.
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.config_builder = self.config_builder.header(name, value);
        self
    }

    /// Sets a custom transport.
    pub fn transport(mut self, transport: Arc<dyn HttpTransport>) -> Self {
        self.transport = Some(transport);
        self
    }

    /// Sets a custom metrics collector.
    pub fn metrics(mut self, metrics: Arc<dyn MetricsCollector>) -> Self {
        self.metrics = Some(metrics);
        self
    }

    /// Sets the logging configuration.
    pub fn logging(mut self, logging: LoggingConfig) -> Self {
        self.logging = logging;
        self
    }

    /// Builds the client.
    pub fn build(self) -> BunnyResult<BunnyClient> {
        let config = self.config_builder.build()?;

        let transport: Arc<dyn HttpTransport> = match self.transport {
            Some(t) => t,
            None => Arc::new(
                HttpTransportImpl::new(&config.base_url, config.timeout).map_err(|e| {
                    BunnyError::Configuration {
                        message: e.to_string(),
                    }
                })?,
            ),
        };

        let auth = Arc::new(match &config.api_key {
            Some(key) => AccessKeyAuth::with_key(key.clone()),
            None => AccessKeyAuth::new(),
        });

        let metrics: Arc<dyn MetricsCollector> = self
            .metrics
            .unwrap_or_else(|| Arc::new(DefaultMetricsCollector::new()));

        let dispatcher = Arc::new(Dispatcher::new(
            transport,
            Arc::clone(&auth) as Arc<dyn AuthProvider>,
            config.options,
            metrics,
            self.logging,
            config.custom_headers.clone(),
        ));

        tracing::debug!(
            base_url = %config.base_url,
            authenticated = auth.is_configured(),
            "bunny.net client created"
        );

        Ok(BunnyClient {
            abuse_cases: AbuseCaseService::new(Arc::clone(&dispatcher)),
            billing: BillingService::new(Arc::clone(&dispatcher)),
            countries: CountryService::new(Arc::clone(&dispatcher)),
            dns_zones: DnsZoneService::new(Arc::clone(&dispatcher)),
            regions: RegionService::new(Arc::clone(&dispatcher)),
            support: SupportService::new(Arc::clone(&dispatcher)),
            video_libraries: VideoLibraryService::new(Arc::clone(&dispatcher)),
            config,
            auth,
            dispatcher,
        })
    }
}

impl Default for BunnyClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}
