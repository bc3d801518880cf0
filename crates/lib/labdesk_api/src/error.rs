//! Application error types.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::models::ErrorResponse;

/// Convenience alias for handler return types.
pub type AppResult<T> = Result<T, AppError>;

/// Application-level errors with HTTP status mapping.
#[derive(Debug, Error)]
pub enum AppError {
    /// The experiment store is unreachable, timed out, or rejected the query.
    #[error("{0}")]
    Storage(String),

    /// The request body is missing or malformed.
    #[error("{0}")]
    Validation(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            AppError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
        };
        let body = Json(ErrorResponse {
            error: self.to_string(),
        });
        (status, body).into_response()
    }
}

impl From<sqlx::Error> for AppError {
    fn from(e: sqlx::Error) -> Self {
        AppError::Storage(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn storage_maps_to_internal_error() {
        let resp = AppError::Storage("connection refused".into()).into_response();
        assert_eq!(StatusCode::INTERNAL_SERVER_ERROR, resp.status());
    }

    #[test]
    fn validation_maps_to_bad_request() {
        let resp = AppError::Validation("No file uploaded".into()).into_response();
        assert_eq!(StatusCode::BAD_REQUEST, resp.status());
    }
}
