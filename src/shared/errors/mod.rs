//! Error Types
//!
//! Domain-specific error types with proper HTTP status code mapping.

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;

/// Domain-level errors representing business rule violations
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Gateway not found.")]
    GatewayNotFound(String),

    #[error("Device limit per gateway exceeded.")]
    DeviceLimitExceeded { gateway: String, limit: i64 },
}

/// Repository-level errors for data access failures
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Duplicate key: {0}")]
    Duplicate(String),

    #[error("Data mapping error: {0}")]
    Mapping(String),
}

/// Use case-level errors for application logic failures
#[derive(Debug, Error)]
pub enum UseCaseError {
    #[error("{0}")]
    Validation(String),

    #[error("{resource} not found.")]
    NotFound { resource: &'static str, id: String },

    #[error("Internal error: {0}")]
    Internal(String),

    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

impl UseCaseError {
    /// Build a validation failure for a request field, keeping the
    /// validator's code in the logs and the field message in the response.
    #[must_use]
    pub fn invalid_field(error: &validator::ValidationError, message: &str) -> Self {
        tracing::debug!(code = %error.code, reason = ?error.message, "Field validation failed");
        Self::Validation(message.to_string())
    }

    /// Get the HTTP status code for this error
    #[must_use]
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::Domain(_) => StatusCode::CONFLICT,
            Self::Internal(_) | Self::Repository(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the error code for this error
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::NotFound { .. } => "NOT_FOUND",
            Self::Domain(DomainError::GatewayNotFound(_)) => "GATEWAY_NOT_FOUND",
            Self::Domain(DomainError::DeviceLimitExceeded { .. }) => "DEVICE_LIMIT_EXCEEDED",
            Self::Internal(_) | Self::Repository(_) => "INTERNAL_ERROR",
        }
    }
}

/// API error response for HTTP responses
#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    UseCase(#[from] UseCaseError),

    #[error("{0}")]
    MalformedIdentifier(String),

    #[error(transparent)]
    InvalidBody(#[from] JsonRejection),
}

/// Error response body structure
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub msg: String,
    pub code: String,
    pub timestamp: String,
}

impl ErrorResponse {
    #[must_use]
    pub fn new(code: &str, msg: String) -> Self {
        Self {
            msg,
            code: code.to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code, msg) = match &self {
            ApiError::UseCase(uc_error) => {
                let status = uc_error.status_code();
                if status == StatusCode::INTERNAL_SERVER_ERROR {
                    tracing::error!(error = %uc_error, "Request failed with an internal error");
                    (status, uc_error.error_code(), "An unexpected error occurred.".to_string())
                } else {
                    (status, uc_error.error_code(), uc_error.to_string())
                }
            }
            ApiError::MalformedIdentifier(msg) => (StatusCode::BAD_REQUEST, "MALFORMED_IDENTIFIER", msg.clone()),
            ApiError::InvalidBody(rejection) => {
                let code = match rejection {
                    JsonRejection::JsonDataError(_) => "VALIDATION_ERROR",
                    JsonRejection::JsonSyntaxError(_) => "BAD_REQUEST",
                    JsonRejection::MissingJsonContentType(_) => "UNSUPPORTED_MEDIA_TYPE",
                    _ => "BAD_REQUEST",
                };
                (rejection.status(), code, rejection.body_text())
            }
        };

        (status, Json(ErrorResponse::new(code, msg))).into_response()
    }
}
