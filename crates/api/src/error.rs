//! Unified error handling for the API.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

use crate::db::RepositoryError;
use crate::services::auth::AuthError;

/// Application-level error type for the request handlers.
///
/// The HTTP surface answers some endpoints in plain text and others with a
/// `{"message": ...}` JSON object; the `*Json` variants carry the JSON
/// dialect so each handler keeps its historical shape.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Database operation failed.
    #[error("database error: {0}")]
    Repository(#[from] RepositoryError),

    /// Credential handling failed (hashing or token issuance).
    #[error("auth error: {0}")]
    Auth(#[from] AuthError),

    /// Resource not found (plain-text body).
    #[error("not found: {0}")]
    NotFound(String),

    /// Resource not found (`{"message"}` body).
    #[error("not found: {0}")]
    NotFoundJson(String),

    /// Unique-key collision (plain-text body).
    #[error("conflict: {0}")]
    Conflict(String),

    /// Validation failure (plain-text body).
    #[error("bad request: {0}")]
    BadRequest(String),

    /// Validation failure (`{"message"}` body).
    #[error("bad request: {0}")]
    BadRequestJson(String),

    /// Authentication failure (missing/invalid token or wrong password).
    #[error("unauthorized: {0}")]
    Unauthorized(String),

    /// Internal server error (`{"message"}` body).
    #[error("internal error: {0}")]
    InternalJson(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if matches!(
            self,
            Self::Repository(_) | Self::Auth(_) | Self::InternalJson(_)
        ) {
            tracing::error!(error = %self, "request failed");
        }

        // Server faults answer with a generic body; internal detail stays in
        // the logs
        match self {
            Self::Repository(_) | Self::Auth(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "Server error").into_response()
            }
            Self::InternalJson(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "message": "Internal server error" })),
            )
                .into_response(),
            Self::NotFound(message) => (StatusCode::NOT_FOUND, message).into_response(),
            Self::NotFoundJson(message) => {
                (StatusCode::NOT_FOUND, Json(json!({ "message": message }))).into_response()
            }
            Self::Conflict(message) => (StatusCode::CONFLICT, message).into_response(),
            Self::BadRequest(message) => (StatusCode::BAD_REQUEST, message).into_response(),
            Self::BadRequestJson(message) => {
                (StatusCode::BAD_REQUEST, Json(json!({ "message": message }))).into_response()
            }
            Self::Unauthorized(message) => (StatusCode::UNAUTHORIZED, message).into_response(),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn get_status(err: ApiError) -> StatusCode {
        err.into_response().status()
    }

    #[test]
    fn test_api_error_display() {
        let err = ApiError::NotFound("Order not found".to_string());
        assert_eq!(err.to_string(), "not found: Order not found");

        let err = ApiError::BadRequest("Category name is required".to_string());
        assert_eq!(err.to_string(), "bad request: Category name is required");
    }

    #[test]
    fn test_api_error_status_codes() {
        assert_eq!(
            get_status(ApiError::NotFound("test".to_string())),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            get_status(ApiError::NotFoundJson("test".to_string())),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            get_status(ApiError::Conflict("test".to_string())),
            StatusCode::CONFLICT
        );
        assert_eq!(
            get_status(ApiError::BadRequest("test".to_string())),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            get_status(ApiError::BadRequestJson("test".to_string())),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            get_status(ApiError::Unauthorized("test".to_string())),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            get_status(ApiError::InternalJson("test".to_string())),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            get_status(ApiError::Auth(AuthError::PasswordHash)),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[tokio::test]
    async fn test_json_dialect_wraps_message() {
        let response =
            ApiError::BadRequestJson("Both amount and status are required".to_string())
                .into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["message"], "Both amount and status are required");
    }

    #[tokio::test]
    async fn test_text_dialect_is_plain() {
        let response = ApiError::NotFound("Admin not found".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        assert_eq!(&bytes[..], b"Admin not found");
    }

    #[tokio::test]
    async fn test_server_fault_body_is_generic() {
        let err = ApiError::Auth(AuthError::PasswordHash);
        let response = err.into_response();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        assert_eq!(&bytes[..], b"Server error");
    }
}
