// src/error.rs
//! Application error types with structured error handling.
//!
//! Error types form the vocabulary for failure modes in the system.
//! Each variant tells what went wrong and where; the HTTP layer decides
//! how much of that story reaches the caller.

use std::fmt;
use thiserror::Error;

/// Notion API error codes as a typed vocabulary.
///
/// Instead of matching against magic strings like `"object_not_found"`,
/// the domain vocabulary is encoded in the type system.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NotionErrorCode {
    /// API rate limit exceeded
    RateLimited,
    /// The requested object does not exist or is inaccessible
    ObjectNotFound,
    /// API key is invalid or expired
    Unauthorized,
    /// API key lacks permission for this resource
    RestrictedResource,
    /// Request body contains invalid JSON
    InvalidJson,
    /// Request parameters failed Notion's validation
    ValidationFailed,
    /// Conflict with current state of the resource
    Conflict,
    /// Notion internal server error
    InternalError,
    /// Notion is temporarily unavailable
    ServiceUnavailable,
    /// HTTP status code fallback when the error body is unparseable
    HttpStatus(u16),
    /// An error code this client doesn't recognize yet
    Unknown(String),
}

impl NotionErrorCode {
    /// Parse a Notion API error code string into the typed vocabulary.
    pub fn from_api_response(code: &str) -> Self {
        match code {
            "rate_limited" => Self::RateLimited,
            "object_not_found" => Self::ObjectNotFound,
            "unauthorized" => Self::Unauthorized,
            "restricted_resource" => Self::RestrictedResource,
            "invalid_json" => Self::InvalidJson,
            "validation_error" => Self::ValidationFailed,
            "conflict_error" => Self::Conflict,
            "internal_server_error" => Self::InternalError,
            "service_unavailable" => Self::ServiceUnavailable,
            other => Self::Unknown(other.to_string()),
        }
    }

    /// Create from an HTTP status code when the error body is unparseable.
    pub fn from_http_status(status: u16) -> Self {
        match status {
            404 => Self::ObjectNotFound,
            429 => Self::RateLimited,
            other => Self::HttpStatus(other),
        }
    }

    /// Whether this error means the resource simply doesn't exist.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::ObjectNotFound)
    }
}

impl fmt::Display for NotionErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::RateLimited => write!(f, "rate_limited"),
            Self::ObjectNotFound => write!(f, "object_not_found"),
            Self::Unauthorized => write!(f, "unauthorized"),
            Self::RestrictedResource => write!(f, "restricted_resource"),
            Self::InvalidJson => write!(f, "invalid_json"),
            Self::ValidationFailed => write!(f, "validation_error"),
            Self::Conflict => write!(f, "conflict_error"),
            Self::InternalError => write!(f, "internal_server_error"),
            Self::ServiceUnavailable => write!(f, "service_unavailable"),
            Self::HttpStatus(code) => write!(f, "http_{}", code),
            Self::Unknown(code) => write!(f, "{}", code),
        }
    }
}

/// Main application error type.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Missing configuration: {0}")]
    MissingConfiguration(String),

    #[error("Network failure: {0}")]
    NetworkFailure(#[from] reqwest::Error),

    #[error("Notion API returned an error ({code}): {message}")]
    NotionService {
        code: NotionErrorCode,
        message: String,
        status: reqwest::StatusCode,
    },

    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Request to {url} failed with status {status}: {message}")]
    RemoteRequest {
        url: String,
        status: u16,
        message: String,
    },

    #[error(transparent)]
    ValidationError(#[from] crate::types::ValidationError),

    #[error(transparent)]
    NotionClient(#[from] NotionClientError),
}

impl AppError {
    /// Whether the caller, not the system, is at fault.
    ///
    /// Everything else (configuration, transport, Notion rejections) is
    /// reported as a server-side failure.
    pub fn is_client_error(&self) -> bool {
        matches!(self, Self::Validation(_) | Self::ValidationError(_))
    }

    /// Whether Notion reported that the target object does not exist.
    pub fn is_not_found(&self) -> bool {
        match self {
            Self::NotionService { code, .. } => code.is_not_found(),
            Self::NotionClient(err) => err.error_code().is_some_and(|c| c.is_not_found()),
            _ => false,
        }
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::MalformedResponse(err.to_string())
    }
}

/// Failures reported while talking to the Notion API.
#[derive(Error, Debug)]
pub enum NotionClientError {
    #[error("Failed to deserialize response: {source}\nBody: {body}")]
    Deserialization {
        #[source]
        source: serde_json::Error,
        body: String,
    },

    #[error("Notion API error ({status}): {code} - {message}")]
    NotionApi {
        status: u32,
        code: String,
        message: String,
        request_id: Option<String>,
    },
}

impl NotionClientError {
    /// The typed error code, when Notion sent one.
    pub fn error_code(&self) -> Option<NotionErrorCode> {
        match self {
            Self::NotionApi { code, .. } => Some(NotionErrorCode::from_api_response(code)),
            Self::Deserialization { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ValidationError;

    #[test]
    fn test_error_code_vocabulary_round_trips() {
        for code in [
            "rate_limited",
            "object_not_found",
            "unauthorized",
            "restricted_resource",
            "invalid_json",
            "validation_error",
            "conflict_error",
            "internal_server_error",
            "service_unavailable",
            "something_new",
        ] {
            assert_eq!(NotionErrorCode::from_api_response(code).to_string(), code);
        }
    }

    #[test]
    fn test_http_status_fallback() {
        assert!(NotionErrorCode::from_http_status(404).is_not_found());
        assert_eq!(
            NotionErrorCode::from_http_status(502),
            NotionErrorCode::HttpStatus(502)
        );
    }

    #[test]
    fn test_not_found_detection() {
        let err: AppError = NotionClientError::NotionApi {
            status: 404,
            code: "object_not_found".to_string(),
            message: "Could not find page".to_string(),
            request_id: None,
        }
        .into();
        assert!(err.is_not_found());
        assert!(!err.is_client_error());

        let err = AppError::MissingConfiguration("NOTION_TOKEN".to_string());
        assert!(!err.is_not_found());
    }

    #[test]
    fn test_client_errors() {
        assert!(AppError::Validation("Page ID is required".to_string()).is_client_error());
        assert!(AppError::from(ValidationError::EmptyField("title")).is_client_error());
        assert!(!AppError::MalformedResponse("bad".to_string()).is_client_error());
    }

    #[test]
    fn test_error_messages() {
        let err = AppError::MissingConfiguration(
            "NOTION_PROMPTS_DATABASE_ID environment variable is not set".to_string(),
        );
        assert_eq!(
            err.to_string(),
            "Missing configuration: NOTION_PROMPTS_DATABASE_ID environment variable is not set"
        );

        let err: AppError = NotionClientError::NotionApi {
            status: 400,
            code: "validation_error".to_string(),
            message: "body failed validation".to_string(),
            request_id: Some("req_1".to_string()),
        }
        .into();
        assert_eq!(
            err.to_string(),
            "Notion API error (400): validation_error - body failed validation"
        );
    }
}
