//! Administrator account routes.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};

use bodega_core::Username;

use crate::db::AdminRepository;
use crate::error::ApiError;
use crate::models::AdminRecord;
use crate::services::auth::{self, AdminClaims, AuthError};
use crate::state::AppState;

/// Registration request body.
#[derive(Debug, Deserialize)]
pub struct RegisterAdminRequest {
    pub username: Option<String>,
    pub password: Option<String>,
}

/// Login request body.
#[derive(Debug, Deserialize)]
pub struct LoginAdminRequest {
    pub username: Option<String>,
    pub password: Option<String>,
}

/// Login response body.
#[derive(Debug, Serialize)]
pub struct TokenResponse {
    #[serde(rename = "jwtToken")]
    pub jwt_token: String,
}

/// Register a new administrator.
///
/// Duplicate usernames are rejected with 409; the check-then-insert is not
/// atomic, so the store would need a unique index to close the race.
pub async fn register(
    State(state): State<AppState>,
    Json(body): Json<RegisterAdminRequest>,
) -> Result<Response, ApiError> {
    let (Some(username), Some(password)) = (body.username, body.password) else {
        return Err(ApiError::BadRequest(
            "username and password are required".to_string(),
        ));
    };
    let username = Username::parse(&username).map_err(|e| ApiError::BadRequest(e.to_string()))?;

    let admins = AdminRepository::new(state.database());
    if admins.find_by_username(username.as_str()).await?.is_some() {
        return Err(ApiError::Conflict("Admin already exists".to_string()));
    }

    let password_hash = auth::hash_password(&password)?;
    admins
        .insert(&AdminRecord {
            id: None,
            username: username.into_inner(),
            password: password_hash,
        })
        .await?;

    Ok((StatusCode::CREATED, "Admin registration successful").into_response())
}

/// Login as an administrator.
///
/// The token is the only output; its claims carry the username and nothing
/// else.
pub async fn login(
    State(state): State<AppState>,
    Json(body): Json<LoginAdminRequest>,
) -> Result<Json<TokenResponse>, ApiError> {
    let (Some(username), Some(password)) = (body.username, body.password) else {
        return Err(ApiError::BadRequest(
            "username and password are required".to_string(),
        ));
    };

    let admins = AdminRepository::new(state.database());
    let admin = admins
        .find_by_username(&username)
        .await?
        .ok_or_else(|| ApiError::NotFound("Admin not found".to_string()))?;

    auth::verify_password(&password, &admin.password)
        .map_err(|_| ApiError::Unauthorized("Invalid password".to_string()))?;

    let jwt_token = state
        .admin_signer()
        .issue(&AdminClaims { username })
        .map_err(AuthError::from)?;

    Ok(Json(TokenResponse { jwt_token }))
}
