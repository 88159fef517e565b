//! End-user account routes.

use axum::Json;
use axum::extract::State;
use axum::response::{IntoResponse, Response};
use serde::Deserialize;

use bodega_core::Email;

use crate::db::UserRepository;
use crate::error::ApiError;
use crate::models::{User, UserRecord};
use crate::routes::admins::TokenResponse;
use crate::services::auth::{self, AuthError, UserClaims};
use crate::state::AppState;

/// Registration request body.
#[derive(Debug, Deserialize)]
pub struct RegisterUserRequest {
    pub firstname: Option<String>,
    pub lastname: Option<String>,
    pub username: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
}

/// Login request body.
#[derive(Debug, Deserialize)]
pub struct LoginUserRequest {
    pub email: Option<String>,
    pub password: Option<String>,
}

/// Deletion request body.
#[derive(Debug, Deserialize)]
pub struct DeleteUserRequest {
    pub username: Option<String>,
}

/// Register a new user.
///
/// Uniqueness is keyed on email. The conflict answers 400 here where the
/// administrator route answers 409; both shapes are part of the surface.
pub async fn register(
    State(state): State<AppState>,
    Json(body): Json<RegisterUserRequest>,
) -> Result<Response, ApiError> {
    let (Some(firstname), Some(lastname), Some(username), Some(email), Some(password)) = (
        body.firstname,
        body.lastname,
        body.username,
        body.email,
        body.password,
    ) else {
        return Err(ApiError::BadRequest(
            "firstname, lastname, username, email and password are required".to_string(),
        ));
    };
    let email = Email::parse(&email).map_err(|e| ApiError::BadRequest(e.to_string()))?;

    let users = UserRepository::new(state.database());
    if users.find_by_email(email.as_str()).await?.is_some() {
        return Err(ApiError::BadRequest("User already exists".to_string()));
    }

    let password_hash = auth::hash_password(&password)?;
    users
        .insert(&UserRecord {
            id: None,
            firstname,
            lastname,
            username,
            email: email.into_inner(),
            password: password_hash,
        })
        .await?;

    Ok("Successfully Registered".into_response())
}

/// Login as a user.
pub async fn login(
    State(state): State<AppState>,
    Json(body): Json<LoginUserRequest>,
) -> Result<Json<TokenResponse>, ApiError> {
    let (Some(email), Some(password)) = (body.email, body.password) else {
        return Err(ApiError::BadRequest(
            "email and password are required".to_string(),
        ));
    };

    let users = UserRepository::new(state.database());
    let user = users
        .find_by_email(&email)
        .await?
        .ok_or_else(|| ApiError::NotFound("User not found".to_string()))?;

    auth::verify_password(&password, &user.password)
        .map_err(|_| ApiError::Unauthorized("Invalid password".to_string()))?;

    let jwt_token = state
        .user_signer()
        .issue(&UserClaims { email })
        .map_err(AuthError::from)?;

    Ok(Json(TokenResponse { jwt_token }))
}

/// List every user.
pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<User>>, ApiError> {
    let users = UserRepository::new(state.database()).list().await?;
    Ok(Json(users))
}

/// Delete a user by username.
///
/// Deleting a user that does not exist answers 404, on every attempt - the
/// operation is idempotent.
pub async fn remove(
    State(state): State<AppState>,
    Json(body): Json<DeleteUserRequest>,
) -> Result<Response, ApiError> {
    let Some(username) = body.username else {
        return Err(ApiError::BadRequest("username is required".to_string()));
    };

    let deleted = UserRepository::new(state.database())
        .delete_by_username(&username)
        .await?;

    match deleted {
        Some(_) => Ok(format!("User {username} deleted").into_response()),
        None => Err(ApiError::NotFound(format!("User {username} not found"))),
    }
}
