//! Error types for the bunny.net client.
//!
//! Every failure an operation can produce is a [`BunnyError`]. Argument and
//! configuration problems are detected before any network call; remote
//! failures carry the raw HTTP status so callers can choose their own retry
//! policy.

use thiserror::Error;

/// Result type alias for bunny.net operations.
pub type BunnyResult<T> = Result<T, BunnyError>;

/// Error type for bunny.net client operations.
#[derive(Debug, Error)]
pub enum BunnyError {
    /// A caller-supplied value is missing, malformed, or out of bounds.
    #[error("Invalid argument `{param}`: {message}")]
    InvalidArgument {
        /// Error message describing the problem.
        message: String,
        /// The offending parameter.
        param: String,
    },

    /// The client is not usable as configured (API key unset, bad base URL).
    #[error("Configuration error: {message}")]
    Configuration {
        /// Error message describing the configuration issue.
        message: String,
    },

    /// The API rejected the credential (HTTP 401).
    #[error("Unauthorized: {message}")]
    Unauthorized {
        /// Error message from the API, or a generic one.
        message: String,
    },

    /// The API rejected the request (HTTP 400).
    #[error("Bad request: {message}")]
    BadRequest {
        /// Error message from the API, or a generic one.
        message: String,
    },

    /// The requested resource does not exist (HTTP 404).
    #[error("Not found: {message}")]
    NotFound {
        /// Error message from the API, or a generic one.
        message: String,
    },

    /// Any other non-success status.
    #[error("Server error (HTTP {status_code}): {message}")]
    Server {
        /// Raw HTTP status code.
        status_code: u16,
        /// Error message from the API, or a generic one.
        message: String,
    },

    /// A response value could not be normalized (bad timestamp, unknown code).
    #[error("Parse error in `{field}`: {message}")]
    Parse {
        /// Field that failed to normalize.
        field: String,
        /// Error message.
        message: String,
    },

    /// The request body could not be encoded or the response body decoded.
    #[error("Serialization error: {message}")]
    Serialization {
        /// Error message.
        message: String,
    },

    /// The transport failed before a status code was received.
    #[error("Transport error: {message}")]
    Transport {
        /// Error message.
        message: String,
    },
}

/// Stable classification of a [`BunnyError`], used for metrics labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// See [`BunnyError::InvalidArgument`].
    InvalidArgument,
    /// See [`BunnyError::Configuration`].
    Configuration,
    /// See [`BunnyError::Unauthorized`].
    Unauthorized,
    /// See [`BunnyError::BadRequest`].
    BadRequest,
    /// See [`BunnyError::NotFound`].
    NotFound,
    /// See [`BunnyError::Server`].
    Server,
    /// See [`BunnyError::Parse`].
    Parse,
    /// See [`BunnyError::Serialization`].
    Serialization,
    /// See [`BunnyError::Transport`].
    Transport,
}

impl ErrorKind {
    /// Returns the label used in logs and metrics.
    pub fn as_str(self) -> &'static str {
        match self {
            ErrorKind::InvalidArgument => "invalid_argument",
            ErrorKind::Configuration => "configuration",
            ErrorKind::Unauthorized => "unauthorized",
            ErrorKind::BadRequest => "bad_request",
            ErrorKind::NotFound => "not_found",
            ErrorKind::Server => "server",
            ErrorKind::Parse => "parse",
            ErrorKind::Serialization => "serialization",
            ErrorKind::Transport => "transport",
        }
    }
}

impl BunnyError {
    /// Returns the kind of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            BunnyError::InvalidArgument { .. } => ErrorKind::InvalidArgument,
            BunnyError::Configuration { .. } => ErrorKind::Configuration,
            BunnyError::Unauthorized { .. } => ErrorKind::Unauthorized,
            BunnyError::BadRequest { .. } => ErrorKind::BadRequest,
            BunnyError::NotFound { .. } => ErrorKind::NotFound,
            BunnyError::Server { .. } => ErrorKind::Server,
            BunnyError::Parse { .. } => ErrorKind::Parse,
            BunnyError::Serialization { .. } => ErrorKind::Serialization,
            BunnyError::Transport { .. } => ErrorKind::Transport,
        }
    }

    /// Returns the HTTP status code for errors raised from a response.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            BunnyError::Unauthorized { .. } => Some(401),
            BunnyError::BadRequest { .. } => Some(400),
            BunnyError::NotFound { .. } => Some(404),
            BunnyError::Server { status_code, .. } => Some(*status_code),
            _ => None,
        }
    }

    /// Returns true if the error was detected before any network call.
    pub fn is_local(&self) -> bool {
        matches!(
            self,
            BunnyError::InvalidArgument { .. } | BunnyError::Configuration { .. }
        )
    }

    /// Creates an invalid argument error.
    pub fn invalid_argument(param: impl Into<String>, message: impl Into<String>) -> Self {
        BunnyError::InvalidArgument {
            message: message.into(),
            param: param.into(),
        }
    }

    /// Creates a parse error.
    pub fn parse(field: impl Into<String>, message: impl Into<String>) -> Self {
        BunnyError::Parse {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Creates a server error.
    pub fn server(status_code: u16, message: impl Into<String>) -> Self {
        BunnyError::Server {
            status_code,
            message: message.into(),
        }
    }

    /// The error returned when an operation runs before an API key is set.
    pub fn missing_api_key() -> Self {
        BunnyError::Configuration {
            message: "API key is not set. Use BunnyClient::set_api_key to set it.".to_string(),
        }
    }
}

/// Error body returned by the bunny.net API.
#[derive(Debug, serde::Deserialize)]
pub struct ApiErrorResponse {
    /// Machine-readable error key.
    #[serde(rename = "ErrorKey", default)]
    pub error_key: Option<String>,
    /// Field the error refers to.
    #[serde(rename = "Field", default)]
    pub field: Option<String>,
    /// Human-readable message.
    #[serde(rename = "Message", default)]
    pub message: Option<String>,
}

impl From<serde_json::Error> for BunnyError {
    fn from(err: serde_json::Error) -> Self {
        BunnyError::Serialization {
            message: err.to_string(),
        }
    }
}

impl From<url::ParseError> for BunnyError {
    fn from(err: url::ParseError) -> Self {
        BunnyError::Configuration {
            message: format!("Invalid URL: {}", err),
        }
    }
}

impl From<crate::transport::TransportError> for BunnyError {
    fn from(err: crate::transport::TransportError) -> Self {
        BunnyError::Transport {
            message: err.to_string(),
        }
    }
}
