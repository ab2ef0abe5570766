use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;

use crate::models::ErrorBody;

/// Generic message surfaced when an upstream failure carries no text of its own.
pub const GENERIC_FAILURE_MESSAGE: &str = "Failed to generate diagram";

/// Top-level application error.
/// Every variant renders a human-readable message suitable for the `error` field
/// of the JSON body returned to the client.
#[derive(Debug, Error)]
pub enum AppError {
    // ── Input errors ─────────────────────────────────────────────────────────
    #[error("Missing required fields")]
    MissingFields,

    #[error("Field '{field_name}' exceeds max length of {max_length} (actual: {actual_length})")]
    FieldTooLong { field_name: String, max_length: usize, actual_length: usize },

    #[error("Invalid request body: {message}")]
    InvalidBody { message: String },

    // ── Extraction errors ────────────────────────────────────────────────────
    #[error("Failed to generate valid Mermaid code")]
    NoCodeExtracted,

    // ── LLM backend errors ───────────────────────────────────────────────────
    #[error("The {backend} backend returned an empty response")]
    UpstreamEmpty { backend: String },

    #[error("{message}")]
    UpstreamFailure { message: String },

    // ── Startup errors ───────────────────────────────────────────────────────
    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

impl AppError {
    /// Wraps a backend error message, substituting a generic one when it is blank.
    pub fn upstream(message: impl Into<String>) -> Self {
        let message = message.into();
        if message.trim().is_empty() {
            AppError::UpstreamFailure { message: GENERIC_FAILURE_MESSAGE.to_string() }
        } else {
            AppError::UpstreamFailure { message }
        }
    }

    pub fn configuration(message: impl Into<String>) -> Self {
        AppError::Configuration { message: message.into() }
    }

    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            AppError::MissingFields | AppError::FieldTooLong { .. } | AppError::InvalidBody { .. }
        )
    }

    pub fn is_extraction(&self) -> bool {
        matches!(self, AppError::NoCodeExtracted)
    }

    pub fn is_upstream(&self) -> bool {
        matches!(self, AppError::UpstreamEmpty { .. } | AppError::UpstreamFailure { .. })
    }

    pub fn status_code(&self) -> StatusCode {
        if self.is_validation() {
            StatusCode::BAD_REQUEST
        } else if self.is_extraction() {
            StatusCode::UNPROCESSABLE_ENTITY
        } else {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let body = ErrorBody { error: self.to_string() };
        (self.status_code(), Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_codes_follow_the_taxonomy() {
        assert_eq!(AppError::MissingFields.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(
            AppError::InvalidBody { message: "eof".into() }.status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(AppError::NoCodeExtracted.status_code(), StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(
            AppError::UpstreamEmpty { backend: "gemini".into() }.status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            AppError::upstream("rate limited").status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn blank_upstream_message_gets_generic_text() {
        assert_eq!(AppError::upstream("  ").to_string(), GENERIC_FAILURE_MESSAGE);
        assert_eq!(AppError::upstream("quota exceeded").to_string(), "quota exceeded");
    }

    #[test]
    fn user_facing_messages_are_stable() {
        assert_eq!(AppError::MissingFields.to_string(), "Missing required fields");
        assert_eq!(AppError::NoCodeExtracted.to_string(), "Failed to generate valid Mermaid code");
    }
}
