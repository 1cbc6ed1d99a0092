//! Application error type and its HTTP mapping.
//!
//! Every failure leaves a handler as `{"error": "<message>"}` with a status code
//! chosen by the variant. Store failures are logged in full and reported to the
//! client with a generic message only.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Message returned to clients for any 5xx response.
pub const INTERNAL_ERROR_MESSAGE: &str = "Internal server error";

/// Message returned when a short code is already taken.
pub const CODE_EXISTS_MESSAGE: &str = "Code already exists. Please choose a different code.";

/// Message returned when no link matches a code.
pub const LINK_NOT_FOUND_MESSAGE: &str = "Link not found";

/// JSON body of every error response.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

impl ErrorBody {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
        }
    }
}

#[derive(Debug, Error)]
pub enum AppError {
    /// Malformed client input (bad URL, bad code format). Maps to 400.
    #[error("{0}")]
    Validation(String),

    /// The requested code is already taken. Maps to 409.
    #[error("{0}")]
    Conflict(String),

    /// No link exists for the requested code. Maps to 404.
    #[error("{0}")]
    NotFound(String),

    /// Any failure reported by the database driver. Maps to 500.
    #[error("database error: {0}")]
    Store(#[from] sqlx::Error),

    /// Unexpected failure outside the store. Maps to 500.
    #[error("internal error: {0}")]
    Internal(String),
}

impl AppError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        Self::Conflict(message.into())
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound(message.into())
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    /// HTTP status code for this error kind.
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::Conflict(_) => StatusCode::CONFLICT,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Store(_) | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Message safe to show to the client.
    pub fn public_message(&self) -> String {
        match self {
            AppError::Validation(message)
            | AppError::Conflict(message)
            | AppError::NotFound(message) => message.clone(),
            AppError::Store(_) | AppError::Internal(_) => INTERNAL_ERROR_MESSAGE.to_string(),
        }
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        let message = errors
            .field_errors()
            .values()
            .flat_map(|field_errors| field_errors.iter())
            .find_map(|error| error.message.as_ref().map(|m| m.to_string()))
            .unwrap_or_else(|| "Invalid request".to_string());

        AppError::Validation(message)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        if status.is_server_error() {
            tracing::error!(error = %self, "Request failed");
        }

        (status, Json(ErrorBody::new(self.public_message()))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(
            AppError::bad_request("bad").status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::conflict("taken").status_code(),
            StatusCode::CONFLICT
        );
        assert_eq!(
            AppError::not_found("missing").status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            AppError::internal("boom").status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            AppError::Store(sqlx::Error::PoolTimedOut).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_client_errors_expose_message() {
        let err = AppError::conflict("Code already exists");
        assert_eq!(err.public_message(), "Code already exists");
        assert_eq!(err.to_string(), "Code already exists");
    }

    #[test]
    fn test_server_errors_hide_details() {
        let err = AppError::Store(sqlx::Error::PoolTimedOut);
        assert_eq!(err.public_message(), INTERNAL_ERROR_MESSAGE);
        assert!(err.to_string().starts_with("database error"));

        let err = AppError::internal("secret detail");
        assert_eq!(err.public_message(), INTERNAL_ERROR_MESSAGE);
    }

    #[test]
    fn test_into_response_status() {
        let response = AppError::not_found("Link not found").into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let response = AppError::Store(sqlx::Error::RowNotFound).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
