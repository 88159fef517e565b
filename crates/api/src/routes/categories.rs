//! Category routes.

use axum::Json;
use axum::extract::State;
use axum::response::{IntoResponse, Response};
use serde::Deserialize;

use crate::db::CategoryRepository;
use crate::error::ApiError;
use crate::middleware::AdminIdentity;
use crate::models::Category;
use crate::state::AppState;

/// Category creation request body.
///
/// `description` is accepted for compatibility but only the name is stored.
#[derive(Debug, Deserialize)]
pub struct CreateCategoryRequest {
    pub name: Option<String>,
    pub description: Option<String>,
}

/// Create a new category.
pub async fn create(
    AdminIdentity(_): AdminIdentity,
    State(state): State<AppState>,
    Json(body): Json<CreateCategoryRequest>,
) -> Result<Response, ApiError> {
    let name = body.name.unwrap_or_default();
    if name.is_empty() {
        return Err(ApiError::BadRequest("Category name is required".to_string()));
    }

    CategoryRepository::new(state.database())
        .insert(&Category { id: None, name })
        .await?;

    Ok("Category added successfully".into_response())
}
