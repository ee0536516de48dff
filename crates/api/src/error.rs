//! Error types for the API and their HTTP translation.

use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use database::{DatabaseError, ValidationError};
use summary_core::SummarizerError;
use thiserror::Error;

/// Errors surfaced by request handlers.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Missing or malformed input.
    #[error("{0}")]
    Validation(String),

    /// Missing, invalid or expired token, or bad credentials.
    #[error("{0}")]
    Unauthorized(String),

    /// The target key is already taken.
    #[error("{0}")]
    Conflict(String),

    /// The target record does not exist for this user.
    #[error("{0}")]
    NotFound(String),

    /// Database error.
    #[error("Database error: {0}")]
    Database(#[from] DatabaseError),

    /// Summarizer error.
    #[error("Summarizer error: {0}")]
    Summarizer(#[from] SummarizerError),

    /// Internal server error.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ApiError {
    /// Category reported to clients.
    pub fn category(&self) -> &'static str {
        match self {
            ApiError::Validation(_) => "validation",
            ApiError::Unauthorized(_) => "auth",
            ApiError::Conflict(_) => "conflict",
            ApiError::NotFound(_) => "not_found",
            ApiError::Database(DatabaseError::AlreadyExists { .. }) => "conflict",
            ApiError::Database(DatabaseError::NotFound { .. }) => "not_found",
            ApiError::Database(_) | ApiError::Summarizer(_) | ApiError::Internal(_) => {
                "dependency"
            }
        }
    }

    /// HTTP status for this error.
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            ApiError::Conflict(_) | ApiError::Database(DatabaseError::AlreadyExists { .. }) => {
                StatusCode::CONFLICT
            }
            ApiError::NotFound(_) | ApiError::Database(DatabaseError::NotFound { .. }) => {
                StatusCode::NOT_FOUND
            }
            ApiError::Summarizer(SummarizerError::Timeout) => StatusCode::GATEWAY_TIMEOUT,
            ApiError::Summarizer(_) => StatusCode::BAD_GATEWAY,
            ApiError::Database(_) | ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Message safe to show to the caller.
    ///
    /// Store and model failures are logged in full and reported generically.
    fn public_message(&self) -> String {
        match self {
            ApiError::Validation(msg)
            | ApiError::Unauthorized(msg)
            | ApiError::Conflict(msg)
            | ApiError::NotFound(msg) => msg.clone(),
            ApiError::Database(DatabaseError::AlreadyExists { entity, id }) => {
                format!("{} {} already exists.", entity, id)
            }
            ApiError::Database(DatabaseError::NotFound { entity, id }) => {
                format!("{} {} not found.", entity, id)
            }
            ApiError::Database(err) => {
                tracing::error!("Database error: {}", err);
                "Database unavailable".to_string()
            }
            ApiError::Summarizer(SummarizerError::Timeout) => {
                tracing::error!("Summarizer timed out");
                "Summarization timed out".to_string()
            }
            ApiError::Summarizer(err) => {
                tracing::error!("Summarizer error: {}", err);
                "Failed to generate summary".to_string()
            }
            ApiError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                "Internal Server Error".to_string()
            }
        }
    }
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        ApiError::Validation(err.to_string())
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::Validation(rejection.body_text())
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        ApiError::Validation(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = serde_json::json!({
            "category": self.category(),
            "msg": self.public_message(),
        });

        (status, Json(body)).into_response()
    }
}

/// Result type for API operations.
pub type Result<T> = std::result::Result<T, ApiError>;
