//! Unified error handling.
//!
//! Provides a unified `AppError` type with a JSON body shaped the way the
//! front end expects: `{"message": ...}` plus a field-level `errors` array
//! for validation failures. All route handlers should return
//! `Result<T, AppError>`.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

use crate::db::RepositoryError;
use crate::services::auth::AuthError;

/// A single failed validation constraint.
#[derive(Debug, Clone, Serialize)]
pub struct FieldError {
    /// Input field the constraint applies to.
    pub field: &'static str,
    /// Human-readable description of the failure.
    pub message: String,
}

impl FieldError {
    pub fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

/// Application-level error type for the site.
#[derive(Debug, Error)]
pub enum AppError {
    /// Database operation failed.
    #[error("Database error: {0}")]
    Database(RepositoryError),

    /// Authentication operation failed.
    #[error("Auth error: {0}")]
    Auth(#[from] AuthError),

    /// Input failed schema validation.
    #[error("Validation failed")]
    Validation(Vec<FieldError>),

    /// Resource not found.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Caller is not authenticated.
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// Bad request from client.
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// Internal server error.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<RepositoryError> for AppError {
    fn from(err: RepositoryError) -> Self {
        // A missing row is a client-visible 404, not a server fault
        match err {
            RepositoryError::NotFound => Self::NotFound("record not found".to_string()),
            other => Self::Database(other),
        }
    }
}

/// JSON error body.
#[derive(Debug, Serialize)]
struct ErrorBody {
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    errors: Option<Vec<FieldError>>,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Log server faults with full detail; the client gets a generic message
        if matches!(self, Self::Database(_) | Self::Internal(_)) {
            tracing::error!(error = %self, "Request error");
        }

        let status = match &self {
            Self::Database(_) | Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::Auth(err) => match err {
                AuthError::InvalidCredentials => StatusCode::UNAUTHORIZED,
                AuthError::PasswordHash | AuthError::Repository(_) | AuthError::Session(_) => {
                    StatusCode::INTERNAL_SERVER_ERROR
                }
            },
            Self::Validation(_) | Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Unauthorized(_) => StatusCode::UNAUTHORIZED,
        };

        // Don't expose internal error details to clients
        let (message, errors) = match self {
            Self::Database(_) | Self::Internal(_) => ("Internal server error".to_string(), None),
            Self::Auth(err) => match err {
                AuthError::InvalidCredentials => ("Invalid credentials".to_string(), None),
                _ => ("Internal server error".to_string(), None),
            },
            Self::Validation(errors) => ("Validation failed".to_string(), Some(errors)),
            Self::NotFound(what) => (what, None),
            Self::Unauthorized(msg) | Self::BadRequest(msg) => (msg, None),
        };

        (status, Json(ErrorBody { message, errors })).into_response()
    }
}

/// Result type alias for `AppError`.
pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_error_display() {
        let err = AppError::NotFound("service not found".to_string());
        assert_eq!(err.to_string(), "Not found: service not found");

        let err = AppError::BadRequest("invalid input".to_string());
        assert_eq!(err.to_string(), "Bad request: invalid input");
    }

    #[test]
    fn test_app_error_status_codes() {
        fn get_status(err: AppError) -> StatusCode {
            let response = err.into_response();
            response.status()
        }

        assert_eq!(
            get_status(AppError::NotFound("test".to_string())),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            get_status(AppError::Unauthorized("test".to_string())),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            get_status(AppError::BadRequest("test".to_string())),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            get_status(AppError::Validation(vec![FieldError::new(
                "email",
                "invalid email"
            )])),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            get_status(AppError::Internal("test".to_string())),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_repository_not_found_maps_to_404() {
        let err = AppError::from(RepositoryError::NotFound);
        assert!(matches!(err, AppError::NotFound(_)));
    }
}
