//! Token authentication extractors.
//!
//! One parameterized bearer-token gate serves both signing domains; the
//! extractors pick the domain signer and the claim shape it must decode to.
//!
//! # Example
//!
//! ```rust,ignore
//! async fn protected_handler(
//!     AdminIdentity(claims): AdminIdentity,
//! ) -> impl IntoResponse {
//!     format!("Hello, {}!", claims.username)
//! }
//! ```

use axum::{
    extract::FromRequestParts,
    http::{StatusCode, header::AUTHORIZATION, request::Parts},
    response::{IntoResponse, Response},
};
use serde::de::DeserializeOwned;

use crate::services::auth::{AdminClaims, TokenSigner, UserClaims};
use crate::state::AppState;

/// Extractor that requires a valid administrator token.
#[derive(Debug)]
pub struct AdminIdentity(pub AdminClaims);

/// Extractor that requires a valid end-user token.
#[derive(Debug)]
pub struct UserIdentity(pub UserClaims);

/// Error returned when token authentication fails.
///
/// Missing and invalid tokens both answer 401 with the same body - a
/// verification failure is an authentication failure, not a server fault.
#[derive(Debug, PartialEq, Eq)]
pub enum AuthRejection {
    /// No bearer token in the Authorization header.
    MissingToken,
    /// The token failed signature verification or claim decoding.
    InvalidToken,
}

impl IntoResponse for AuthRejection {
    fn into_response(self) -> Response {
        match self {
            Self::MissingToken | Self::InvalidToken => {
                (StatusCode::UNAUTHORIZED, "Invalid JWT Token").into_response()
            }
        }
    }
}

/// Extract the bearer token from the Authorization header, if any.
fn bearer_token(parts: &Parts) -> Option<&str> {
    parts
        .headers
        .get(AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
}

/// Verify the request's bearer token against one domain signer.
fn authenticate<C: DeserializeOwned>(
    parts: &Parts,
    signer: &TokenSigner,
) -> Result<C, AuthRejection> {
    let token = bearer_token(parts).ok_or(AuthRejection::MissingToken)?;

    signer.verify(token).map_err(|err| {
        tracing::debug!(error = %err, "token verification failed");
        AuthRejection::InvalidToken
    })
}

impl FromRequestParts<AppState> for AdminIdentity {
    type Rejection = AuthRejection;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        authenticate::<AdminClaims>(parts, state.admin_signer()).map(Self)
    }
}

impl FromRequestParts<AppState> for UserIdentity {
    type Rejection = AuthRejection;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        authenticate::<UserClaims>(parts, state.user_signer()).map(Self)
    }
}
