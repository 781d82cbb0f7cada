//! Centralized error handling module.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Application-wide error type.
///
/// All errors in the application should be converted to this type
/// for consistent error handling and reporting.
#[derive(Error, Debug)]
pub enum AppError {
    /// Bad request error (400)
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// Validation error (400)
    #[error("Validation error: {0}")]
    Validation(String),

    /// Requested SKU cannot be fulfilled (409)
    #[error("Product with skuCode {0} is not in stock")]
    OutOfStock(String),

    /// Internal server error (500)
    #[error("Internal server error: {0}")]
    Internal(String),

    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Inventory service call error
    #[error("Inventory service error: {0}")]
    Inventory(#[from] reqwest::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message) = match &self {
            Self::BadRequest(msg) | Self::Validation(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            Self::OutOfStock(_) => (StatusCode::CONFLICT, self.to_string()),
            Self::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg.clone()),
            Self::Database(e) => {
                tracing::error!("Database error: {e:?}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Database error occurred".to_string(),
                )
            }
            Self::Inventory(e) => {
                tracing::warn!("Inventory service error: {e:?}");
                (
                    StatusCode::SERVICE_UNAVAILABLE,
                    "Inventory service unavailable".to_string(),
                )
            }
        };

        // Report error to Sentry for server errors
        if status.is_server_error() {
            sentry::capture_error(&self);
        }

        let body = Json(json!({
            "error": error_message,
        }));

        (status, body).into_response()
    }
}

/// Result type alias using `AppError`.
pub type AppResult<T> = Result<T, AppError>;

/// Helper trait for converting validation errors.
pub trait ValidationErrorExt {
    fn to_validation_error(&self) -> AppError;
}

impl ValidationErrorExt for validator::ValidationErrors {
    fn to_validation_error(&self) -> AppError {
        // Get the first field error for a clean message
        if let Some((field, errors)) = self.field_errors().iter().next() {
            if let Some(error) = errors.first() {
                let message = error.message.as_ref().map_or_else(
                    || {
                        format!(
                            "Validation failed on field '{field}' with tag '{}'",
                            error.code
                        )
                    },
                    std::string::ToString::to_string,
                );
                return AppError::Validation(message);
            }
        }
        AppError::Validation(self.to_string())
    }
}
