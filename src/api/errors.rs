use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use crate::actions::ActionError;
use crate::domain::repositories::RepositoryError;

/// Body text for 500s; the cause only goes to the log
const INTERNAL_MESSAGE: &str = "Internal server error";

/// API error type with HTTP status code and message
///
/// Used for transport-level problems (auth, validation, missing resources,
/// storage failures). Expected domain refusals go through the response
/// envelope instead.
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
}

impl ApiError {
    /// Creates a new API error
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    /// Creates a 401 Unauthorized error
    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::new(StatusCode::UNAUTHORIZED, message)
    }

    /// Creates a 404 Not Found error
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, message)
    }

    /// Creates a 422 Unprocessable Entity error for failed input validation
    pub fn unprocessable(message: impl Into<String>) -> Self {
        Self::new(StatusCode::UNPROCESSABLE_ENTITY, message)
    }

    /// Creates a 500 Internal Server Error
    pub fn internal_server_error(message: impl Into<String>) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, message)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = Json(json!({
            "error": self.message
        }));

        (self.status, body).into_response()
    }
}

impl From<RepositoryError> for ApiError {
    fn from(err: RepositoryError) -> Self {
        tracing::error!(error = %err, "repository failure");
        match err {
            RepositoryError::NotFound(what) => Self::not_found(format!("{} not found", what)),
            _ => Self::internal_server_error(INTERNAL_MESSAGE),
        }
    }
}

impl From<ActionError> for ApiError {
    fn from(err: ActionError) -> Self {
        match err {
            ActionError::Repository(e) => e.into(),
            other => {
                tracing::error!(error = %other, "team action failed");
                Self::internal_server_error(INTERNAL_MESSAGE)
            }
        }
    }
}
