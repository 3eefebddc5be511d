//! Application error type mapping to HTTP status codes.
//!
//! Every error body has the shape `{"error": "<text>"}`.

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use talk2leader_types::chat::ErrorBody;
use talk2leader_types::error::RepositoryError;
use talk2leader_types::llm::LlmError;

/// Application-level error that maps to HTTP responses.
#[derive(Debug)]
pub enum AppError {
    /// The generative provider call failed.
    Chat(LlmError),
    /// Session history storage failed.
    History(RepositoryError),
    /// Malformed or incomplete request.
    Validation(String),
    /// Generic internal error.
    Internal(String),
}

impl From<LlmError> for AppError {
    fn from(e: LlmError) -> Self {
        AppError::Chat(e)
    }
}

impl From<RepositoryError> for AppError {
    fn from(e: RepositoryError) -> Self {
        AppError::History(e)
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::Validation(rejection.body_text())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::Chat(e) => (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()),
            AppError::History(e) => {
                tracing::error!(error = %e, "History storage failed");
                (StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
            }
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
        };

        (status, Json(ErrorBody { error: message })).into_response()
    }
}
