//! Configuration module for the bunny.net client.
//!
//! Holds the static connection settings (base URL, timeout, extra headers)
//! and the two payload-normalization flags. The API key itself is optional
//! at build time; a client without one is valid but every operation fails
//! with a configuration error until a key is set.

use secrecy::SecretString;
use serde_json::Value;
use std::time::Duration;

use crate::auth::validate_api_key;
use crate::errors::{BunnyError, BunnyResult};

/// Default base URL for the bunny.net API.
pub const DEFAULT_BASE_URL: &str = "https://api.bunny.net";

/// Default request timeout (30 seconds).
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Payload normalization flags.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ClientOptions {
    /// Convert timestamp strings into parsed UTC dates.
    pub parse_dates: bool,
    /// Attach human-readable labels to enumerated numeric codes.
    pub populate_fields: bool,
}

impl ClientOptions {
    /// Applies the fields present in `update`, leaving the rest unchanged.
    pub fn merge(&mut self, update: OptionsUpdate) {
        if let Some(parse_dates) = update.parse_dates {
            self.parse_dates = parse_dates;
        }
        if let Some(populate_fields) = update.populate_fields {
            self.populate_fields = populate_fields;
        }
    }

    /// Applies an untyped options object.
    ///
    /// Recognizes `parseDates` and `populateFields`. Unknown keys, values of
    /// the wrong type and non-object inputs are ignored.
    pub fn merge_json(&mut self, options: &Value) {
        self.merge(OptionsUpdate::from_json(options));
    }
}

/// Partial update of [`ClientOptions`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OptionsUpdate {
    /// New value for [`ClientOptions::parse_dates`].
    pub parse_dates: Option<bool>,
    /// New value for [`ClientOptions::populate_fields`].
    pub populate_fields: Option<bool>,
}

impl OptionsUpdate {
    /// Creates an empty update.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the date parsing flag.
    pub fn parse_dates(mut self, enabled: bool) -> Self {
        self.parse_dates = Some(enabled);
        self
    }

    /// Sets the field population flag.
    pub fn populate_fields(mut self, enabled: bool) -> Self {
        self.populate_fields = Some(enabled);
        self
    }

    /// Extracts the recognized, correctly typed keys of a JSON object.
    pub fn from_json(options: &Value) -> Self {
        Self {
            parse_dates: options.get("parseDates").and_then(Value::as_bool),
            populate_fields: options.get("populateFields").and_then(Value::as_bool),
        }
    }
}

/// Configuration for the bunny.net client.
#[derive(Clone)]
pub struct BunnyConfig {
    /// API key sent in the `AccessKey` header, if known at build time.
    pub(crate) api_key: Option<SecretString>,
    /// Base URL for API requests.
    pub base_url: String,
    /// Request timeout.
    pub timeout: Duration,
    /// Initial normalization flags.
    pub options: ClientOptions,
    /// Custom headers to include in requests.
    pub custom_headers: Vec<(String, String)>,
}

impl BunnyConfig {
    /// Creates a new configuration builder.
    pub fn builder() -> BunnyConfigBuilder {
        BunnyConfigBuilder::new()
    }

    /// Creates a configuration from environment variables.
    ///
    /// # Environment Variables
    ///
    /// - `BUNNY_API_KEY` (optional): API key for authentication
    /// - `BUNNY_BASE_URL` (optional): Custom base URL
    /// - `BUNNY_TIMEOUT` (optional): Request timeout in seconds
    /// - `BUNNY_PARSE_DATES` (optional): `true` or `false`
    /// - `BUNNY_POPULATE_FIELDS` (optional): `true` or `false`
    ///
    /// Values that do not parse are ignored.
    pub fn from_env() -> BunnyResult<Self> {
        let mut builder = BunnyConfigBuilder::new();

        if let Ok(api_key) = std::env::var("BUNNY_API_KEY") {
            builder = builder.api_key(api_key);
        }

        if let Ok(base_url) = std::env::var("BUNNY_BASE_URL") {
            builder = builder.base_url(base_url);
        }

        if let Ok(timeout_str) = std::env::var("BUNNY_TIMEOUT") {
            if let Ok(timeout_secs) = timeout_str.parse::<u64>() {
                builder = builder.timeout(Duration::from_secs(timeout_secs));
            }
        }

        if let Ok(flag) = std::env::var("BUNNY_PARSE_DATES") {
            if let Ok(enabled) = flag.parse::<bool>() {
                builder = builder.parse_dates(enabled);
            }
        }

        if let Ok(flag) = std::env::var("BUNNY_POPULATE_FIELDS") {
            if let Ok(enabled) = flag.parse::<bool>() {
                builder = builder.populate_fields(enabled);
            }
        }

        builder.build()
    }
}

impl std::fmt::Debug for BunnyConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let api_key = if self.api_key.is_some() {
            "[REDACTED]"
        } else {
            "[UNSET]"
        };
        f.debug_struct("BunnyConfig")
            .field("api_key", &api_key)
            .field("base_url", &self.base_url)
            .field("timeout", &self.timeout)
            .field("options", &self.options)
            .finish()
    }
}

/// Builder for `BunnyConfig`.
#[derive(Default)]
pub struct BunnyConfigBuilder {
    api_key: Option<String>,
    base_url: Option<String>,
    timeout: Option<Duration>,
    options: ClientOptions,
    allow_insecure: bool,
    custom_headers: Vec<(String, String)>,
}

impl BunnyConfigBuilder {
    /// Creates a new configuration builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the API key.
    pub fn api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// Sets the base URL.
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Sets the request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Sets the timeout in seconds.
    pub fn timeout_secs(mut self, secs: u64) -> Self {
        self.timeout = Some(Duration::from_secs(secs));
        self
    }

    /// Enables or disables date parsing.
    pub fn parse_dates(mut self, enabled: bool) -> Self {
        self.options.parse_dates = enabled;
        self
    }

    /// Enables or disables field population.
    pub fn populate_fields(mut self, enabled: bool) -> Self {
        self.options.populate_fields = enabled;
        self
    }

    /// Permits a plain `http://` base URL. Intended for local test servers.
    pub fn allow_insecure(mut self, allow: bool) -> Self {
        self.allow_insecure = allow;
        self
    }

    /// Adds a custom header.
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.custom_headers.push((name.into(), value.into()));
        self
    }

    /// Builds the configuration.
    pub fn build(self) -> BunnyResult<BunnyConfig> {
        let api_key = self
            .api_key
            .map(|key| validate_api_key(&key))
            .transpose()?;

        let base_url = self
            .base_url
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string())
            .trim_end_matches('/')
            .to_string();

        let parsed = url::Url::parse(&base_url)?;
        match parsed.scheme() {
            "https" => {}
            "http" if self.allow_insecure => {}
            _ => {
                return Err(BunnyError::Configuration {
                    message: "Base URL must use HTTPS".to_string(),
                })
            }
        }

        Ok(BunnyConfig {
            api_key,
            base_url,
            timeout: self.timeout.unwrap_or(DEFAULT_TIMEOUT),
            options: self.options,
            custom_headers: self.custom_headers,
        })
    }
}
