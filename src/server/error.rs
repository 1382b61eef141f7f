// src/server/error.rs
//! Failure responses of the REST layer.
//!
//! Every failure carries the action that failed ("Failed to create prompt")
//! and the underlying [`AppError`]. The action becomes the `error` field of
//! the JSON body; the underlying message becomes `details` unless the route
//! chose to hide it.

use crate::error::AppError;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use std::error::Error as _;

#[derive(Debug)]
pub struct RouteError {
    action: &'static str,
    details: bool,
    source: AppError,
}

impl RouteError {
    pub fn new(action: &'static str, source: impl Into<AppError>) -> Self {
        Self {
            action,
            details: true,
            source: source.into(),
        }
    }

    /// A failure whose body only names the action.
    pub fn without_details(action: &'static str, source: impl Into<AppError>) -> Self {
        Self {
            details: false,
            ..Self::new(action, source)
        }
    }

    /// A request rejected before any Notion call; the message is the whole body.
    pub fn bad_request(message: &'static str) -> Self {
        Self::without_details(message, AppError::Validation(message.to_string()))
    }

    pub fn status(&self) -> StatusCode {
        if self.source.is_client_error() {
            StatusCode::BAD_REQUEST
        } else {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }

    pub fn source(&self) -> &AppError {
        &self.source
    }
}

impl IntoResponse for RouteError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            log::error!("{}: {}", self.action, source_chain(&self.source));
        } else {
            log::warn!("{}: {}", self.action, self.source);
        }

        let body = if self.details {
            json!({ "error": self.action, "details": self.source.to_string() })
        } else {
            json!({ "error": self.action })
        };
        (status, Json(body)).into_response()
    }
}

impl From<JsonRejection> for RouteError {
    fn from(rejection: JsonRejection) -> Self {
        Self::new(
            "Invalid request body",
            AppError::Validation(rejection.body_text()),
        )
    }
}

/// Attaches the failed action to a fallible result.
pub trait RouteContext<T> {
    fn context(self, action: &'static str) -> Result<T, RouteError>;

    /// Like [`context`](RouteContext::context), but the body names only the
    /// action.
    fn context_without_details(self, action: &'static str) -> Result<T, RouteError>;
}

impl<T, E: Into<AppError>> RouteContext<T> for Result<T, E> {
    fn context(self, action: &'static str) -> Result<T, RouteError> {
        self.map_err(|e| RouteError::new(action, e))
    }

    fn context_without_details(self, action: &'static str) -> Result<T, RouteError> {
        self.map_err(|e| RouteError::without_details(action, e))
    }
}

fn source_chain(err: &AppError) -> String {
    let mut message = err.to_string();
    let mut cause = err.source();
    while let Some(inner) = cause {
        message.push_str(": ");
        message.push_str(&inner.to_string());
        cause = inner.source();
    }
    message
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ValidationError;
    use http_body_util::BodyExt;
    use pretty_assertions::assert_eq;
    use serde_json::Value;

    async fn body_of(err: RouteError) -> (StatusCode, Value) {
        let response = err.into_response();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_notion_failure_is_500_with_details() {
        let err = RouteError::new(
            "Failed to update prompt",
            AppError::MalformedResponse("unexpected body".to_string()),
        );
        let (status, body) = body_of(err).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            body,
            json!({"error": "Failed to update prompt", "details": "Malformed response: unexpected body"})
        );
    }

    #[tokio::test]
    async fn test_list_failure_hides_details() {
        let err = RouteError::without_details(
            "Failed to fetch prompts",
            AppError::MissingConfiguration("NOTION_TOKEN environment variable is not set".to_string()),
        );
        let (status, body) = body_of(err).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, json!({"error": "Failed to fetch prompts"}));
    }

    #[tokio::test]
    async fn test_bad_request_body_is_the_message() {
        let (status, body) = body_of(RouteError::bad_request("Page ID is required")).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({"error": "Page ID is required"}));
    }

    #[tokio::test]
    async fn test_validation_failures_are_400() {
        let result: Result<(), ValidationError> = Err(ValidationError::EmptyField("title"));
        let err = result.context("Failed to create prompt").unwrap_err();
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);

        let (_, body) = body_of(err).await;
        assert_eq!(body["error"], "Failed to create prompt");
        assert!(body["details"].as_str().unwrap().contains("title"));
    }

    #[test]
    fn test_source_chain_includes_causes() {
        let source = serde_json::from_str::<Value>("{").unwrap_err();
        let cause = source.to_string();
        let err = AppError::NotionClient(crate::error::NotionClientError::Deserialization {
            source,
            body: "{".to_string(),
        });
        assert_eq!(
            source_chain(&err),
            format!("Failed to deserialize response: {cause}\nBody: {{: {cause}")
        );
    }
}
