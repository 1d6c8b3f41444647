//! Error types for search operations
//!
//! Every failure a search can end in is one variant of [`SearchError`].
//! Errors reported by the service itself decode into [`ApiError`].

use std::fmt;

use reqwest::StatusCode;
use reqwest::header::InvalidHeaderValue;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::transport::TransportError;

/// Errors that can occur while performing a search
#[derive(Debug, Error)]
pub enum SearchError {
    /// The transport could not complete the request
    #[error(transparent)]
    Transport(TransportError),

    /// The configured base URL is unusable
    #[error("invalid base URL: {0}")]
    InvalidBaseUrl(String),

    /// A request option produced a header value that cannot be sent
    #[error("invalid header value: {0}")]
    InvalidHeader(#[from] InvalidHeaderValue),

    /// The service answered 200 but not with JSON
    #[error("Content-Type not JSON")]
    ContentTypeNotJson,

    /// Non-200 response without a JSON body
    #[error("{} {reason}", .status.as_u16())]
    Status { status: StatusCode, reason: String },

    /// Error object reported by the service
    #[error(transparent)]
    Api(#[from] ApiError),

    /// Non-200 response whose JSON error body could not be decoded
    #[error("{} {reason}; JSON response body malformed ({source})", .status.as_u16())]
    MalformedErrorBody {
        status: StatusCode,
        reason: String,
        source: serde_json::Error,
    },

    /// A hit without a `type` discriminator
    #[error("type missing")]
    TypeMissing,

    /// The success body or one of its hits did not have the expected shape
    #[error("failed to decode search response: {0}")]
    Decode(#[from] serde_json::Error),
}

impl SearchError {
    /// Builds the generic error for a non-200 response.
    pub(crate) fn status(status: StatusCode) -> Self {
        SearchError::Status {
            status,
            reason: reason_phrase(status),
        }
    }

    pub(crate) fn malformed_error_body(status: StatusCode, source: serde_json::Error) -> Self {
        SearchError::MalformedErrorBody {
            status,
            reason: reason_phrase(status),
            source,
        }
    }

    /// HTTP status of the response this error was derived from, if any.
    pub fn status_code(&self) -> Option<StatusCode> {
        match self {
            SearchError::Status { status, .. } | SearchError::MalformedErrorBody { status, .. } => {
                Some(*status)
            }
            _ => None,
        }
    }
}

fn reason_phrase(status: StatusCode) -> String {
    status.canonical_reason().unwrap_or_default().to_string()
}

/// Error code as reported by the service, which uses both numbers and strings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ErrorCode {
    Number(i64),
    Text(String),
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorCode::Number(code) => write!(f, "{}", code),
            ErrorCode::Text(code) => f.write_str(code),
        }
    }
}

/// Structured error returned by the search service for non-200 responses
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ApiError {
    /// Human readable error message
    #[serde(default)]
    pub message: String,

    /// Machine readable error code, when the service sends one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<ErrorCode>,

    /// All remaining fields of the error object, as sent
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.code {
            Some(code) => write!(f, "{} (code {})", self.message, code),
            None => f.write_str(&self.message),
        }
    }
}

impl std::error::Error for ApiError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_error_text() {
        let error = SearchError::status(StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(error.to_string(), "500 Internal Server Error");
        assert_eq!(error.status_code(), Some(StatusCode::INTERNAL_SERVER_ERROR));
    }

    #[test]
    fn test_malformed_error_body_keeps_status() {
        let source = serde_json::from_str::<ApiError>("{").unwrap_err();
        let error = SearchError::malformed_error_body(StatusCode::BAD_GATEWAY, source);
        let text = error.to_string();
        assert!(text.starts_with("502 Bad Gateway; JSON response body malformed ("));
        assert_eq!(error.status_code(), Some(StatusCode::BAD_GATEWAY));
    }

    #[test]
    fn test_sentinel_texts() {
        assert_eq!(SearchError::TypeMissing.to_string(), "type missing");
        assert_eq!(
            SearchError::ContentTypeNotJson.to_string(),
            "Content-Type not JSON"
        );
    }

    #[test]
    fn test_api_error_decoding() {
        let error: ApiError =
            serde_json::from_str(r#"{"message":"not found","code":404,"path":"/search"}"#)
                .unwrap();
        assert_eq!(error.message, "not found");
        assert_eq!(error.code, Some(ErrorCode::Number(404)));
        assert_eq!(error.extra["path"], "/search");
        assert_eq!(error.to_string(), "not found (code 404)");

        let error: ApiError =
            serde_json::from_str(r#"{"message":"bad query","code":"E_QUERY"}"#).unwrap();
        assert_eq!(error.code, Some(ErrorCode::Text("E_QUERY".to_string())));
        assert!(error.extra.is_empty());
    }

    #[test]
    fn test_api_error_display_without_code() {
        let error: ApiError = serde_json::from_str(r#"{"message":"not found"}"#).unwrap();
        assert_eq!(error.to_string(), "not found");
    }
}
