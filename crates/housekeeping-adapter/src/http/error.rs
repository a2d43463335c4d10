/*
[INPUT]:  Error sources (transport, HTTP status, response bodies, serialization)
[OUTPUT]: Structured error types with classification helpers
[POS]:    Error handling layer - unified error types for entire crate
[UPDATE]: When adding new error sources or changing status classification
*/

use reqwest::StatusCode;
use serde_json::Value;
use thiserror::Error;

/// Main error type for the housekeeping adapter
#[derive(Error, Debug)]
pub enum HousekeepingError {
    /// HTTP request failed after a response was received
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The service could not be reached (connect failure, timeout, aborted request)
    #[error("Task service unreachable: {0}")]
    Unreachable(#[source] reqwest::Error),

    /// The service rejected the credentials (401)
    #[error("Unauthorized")]
    Unauthorized,

    /// API returned a non-success status
    #[error("API error (status {status}): {body}")]
    Api { status: u16, body: ApiErrorBody },

    /// Serialization/deserialization failed
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// URL parsing failed
    #[error("Invalid URL: {0}")]
    UrlParse(#[from] url::ParseError),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl HousekeepingError {
    /// Classify a transport error raised before any response arrived.
    pub fn from_transport(err: reqwest::Error) -> Self {
        if err.is_builder() {
            HousekeepingError::Http(err)
        } else {
            HousekeepingError::Unreachable(err)
        }
    }

    /// Build the error for a non-success response.
    pub fn from_status(status: StatusCode, body: &[u8]) -> Self {
        if status == StatusCode::UNAUTHORIZED {
            return HousekeepingError::Unauthorized;
        }
        HousekeepingError::Api {
            status: status.as_u16(),
            body: ApiErrorBody::parse(body),
        }
    }

    /// The service was never reached; equivalent to a browser's status 0
    pub fn is_unreachable(&self) -> bool {
        matches!(self, HousekeepingError::Unreachable(_))
    }

    pub fn is_auth_error(&self) -> bool {
        matches!(self, HousekeepingError::Unauthorized)
    }

    /// HTTP status associated with the error, if a response was received
    pub fn status_code(&self) -> Option<u16> {
        match self {
            HousekeepingError::Unauthorized => Some(StatusCode::UNAUTHORIZED.as_u16()),
            HousekeepingError::Api { status, .. } => Some(*status),
            HousekeepingError::Http(err) => err.status().map(|status| status.as_u16()),
            _ => None,
        }
    }

    /// Server-supplied message carried in the error body, if any
    pub fn body_message(&self) -> Option<&str> {
        match self {
            HousekeepingError::Api { body, .. } => body.message(),
            _ => None,
        }
    }
}

/// Decoded body of an error response.
///
/// Spring-style services answer with `{"message": ..., "error": ...}` objects,
/// some endpoints with a bare JSON string or plain text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiErrorBody {
    Empty,
    Text(String),
    Structured {
        message: Option<String>,
        error: Option<String>,
    },
}

impl ApiErrorBody {
    pub fn parse(body: &[u8]) -> Self {
        if body.iter().all(u8::is_ascii_whitespace) {
            return ApiErrorBody::Empty;
        }

        match serde_json::from_slice::<Value>(body) {
            Ok(Value::String(text)) => ApiErrorBody::Text(text),
            Ok(Value::Object(map)) => {
                let field = |name: &str| {
                    map.get(name)
                        .and_then(Value::as_str)
                        .map(str::to_string)
                };
                ApiErrorBody::Structured {
                    message: field("message"),
                    error: field("error"),
                }
            }
            Ok(_) => ApiErrorBody::Empty,
            Err(_) => ApiErrorBody::Text(String::from_utf8_lossy(body).trim().to_string()),
        }
    }

    /// First non-empty human-readable message: the text itself, else `message`, else `error`
    pub fn message(&self) -> Option<&str> {
        match self {
            ApiErrorBody::Empty => None,
            ApiErrorBody::Text(text) => non_empty(text),
            ApiErrorBody::Structured { message, error } => message
                .as_deref()
                .and_then(non_empty)
                .or_else(|| error.as_deref().and_then(non_empty)),
        }
    }
}

impl std::fmt::Display for ApiErrorBody {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.message() {
            Some(message) => f.write_str(message),
            None => f.write_str("<no message>"),
        }
    }
}

fn non_empty(value: &str) -> Option<&str> {
    if value.trim().is_empty() {
        None
    } else {
        Some(value)
    }
}

/// Result type alias for housekeeping operations
pub type Result<T> = std::result::Result<T, HousekeepingError>;
