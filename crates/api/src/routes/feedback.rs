//! Feedback routes.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Deserialize;

use crate::db::FeedbackRepository;
use crate::error::ApiError;
use crate::middleware::{AdminIdentity, UserIdentity};
use crate::models::Feedback;
use crate::state::AppState;

/// Feedback creation request body.
#[derive(Debug, Deserialize)]
pub struct CreateFeedbackRequest {
    pub user: Option<String>,
    pub message: Option<String>,
}

/// Name the omitted fields for the validation error body.
fn missing_fields_message(body: &CreateFeedbackRequest) -> Option<String> {
    match (&body.user, &body.message) {
        (None, None) => Some("user and message are required".to_string()),
        (None, Some(_)) => Some("user is required".to_string()),
        (Some(_), None) => Some("message is required".to_string()),
        (Some(_), Some(_)) => None,
    }
}

/// Create a feedback entry.
///
/// `user` is taken verbatim - it is not checked against the users
/// collection.
pub async fn create(
    UserIdentity(_): UserIdentity,
    State(state): State<AppState>,
    Json(body): Json<CreateFeedbackRequest>,
) -> Result<Response, ApiError> {
    if let Some(message) = missing_fields_message(&body) {
        return Err(ApiError::BadRequestJson(message));
    }
    let (Some(user), Some(message)) = (body.user, body.message) else {
        return Err(ApiError::BadRequestJson(
            "user and message are required".to_string(),
        ));
    };

    let saved = FeedbackRepository::new(state.database())
        .insert(Feedback {
            id: None,
            user,
            message,
        })
        .await
        .map_err(|e| ApiError::BadRequestJson(e.to_string()))?;

    Ok((StatusCode::CREATED, Json(saved)).into_response())
}

/// List every feedback entry.
pub async fn list(
    AdminIdentity(_): AdminIdentity,
    State(state): State<AppState>,
) -> Result<Json<Vec<Feedback>>, ApiError> {
    let feedback = FeedbackRepository::new(state.database()).list().await?;
    Ok(Json(feedback))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_fields_are_named() {
        let body = CreateFeedbackRequest {
            user: None,
            message: None,
        };
        assert_eq!(
            missing_fields_message(&body).as_deref(),
            Some("user and message are required")
        );

        let body = CreateFeedbackRequest {
            user: Some("jane".to_string()),
            message: None,
        };
        assert_eq!(
            missing_fields_message(&body).as_deref(),
            Some("message is required")
        );

        let body = CreateFeedbackRequest {
            user: None,
            message: Some("hi".to_string()),
        };
        assert_eq!(
            missing_fields_message(&body).as_deref(),
            Some("user is required")
        );
    }

    #[test]
    fn test_complete_body_passes() {
        let body = CreateFeedbackRequest {
            user: Some("jane".to_string()),
            message: Some("great store".to_string()),
        };
        assert!(missing_fields_message(&body).is_none());
    }
}
