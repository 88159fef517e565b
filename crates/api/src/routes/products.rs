//! Product routes, including the admin "order" update.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use chrono::Utc;
use mongodb::bson::Document;
use serde::Deserialize;
use serde_json::json;

use crate::db::{CategoryRepository, ProductRepository};
use crate::error::ApiError;
use crate::middleware::AdminIdentity;
use crate::models::Product;
use crate::state::AppState;

/// Product creation request body.
///
/// Every field is required; incomplete bodies are rejected as a batch rather
/// than field by field.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddProductRequest {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<f64>,
    pub brand: Option<String>,
    pub image: Option<String>,
    pub category: Option<String>,
    pub count_in_stock: Option<i32>,
    pub rating: Option<f64>,
}

impl AddProductRequest {
    /// A field counts as missing when absent or, for strings, empty.
    fn has_missing_fields(&self) -> bool {
        let strings = [
            &self.name,
            &self.description,
            &self.brand,
            &self.image,
            &self.category,
        ];
        strings
            .into_iter()
            .any(|field| field.as_deref().unwrap_or("").is_empty())
            || self.price.is_none()
            || self.count_in_stock.is_none()
            || self.rating.is_none()
    }
}

/// Order update request body - the allow-list of mutable product fields.
///
/// Unknown keys in the request are dropped during deserialization; identifier
/// and category references cannot be rewritten through this route.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateOrderRequest {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<f64>,
    pub brand: Option<String>,
    pub image: Option<String>,
    pub count_in_stock: Option<i32>,
    pub rating: Option<f64>,
}

impl UpdateOrderRequest {
    /// Build the `$set` document from the fields present.
    fn set_document(&self) -> Document {
        let mut fields = Document::new();
        if let Some(name) = &self.name {
            fields.insert("name", name);
        }
        if let Some(description) = &self.description {
            fields.insert("description", description);
        }
        if let Some(price) = self.price {
            fields.insert("price", price);
        }
        if let Some(brand) = &self.brand {
            fields.insert("brand", brand);
        }
        if let Some(image) = &self.image {
            fields.insert("image", image);
        }
        if let Some(count_in_stock) = self.count_in_stock {
            fields.insert("countInStock", count_in_stock);
        }
        if let Some(rating) = self.rating {
            fields.insert("rating", rating);
        }
        fields
    }
}

/// Create a new product associated with an existing category.
///
/// The category is referenced by name in the request and stored by id;
/// `dateCreated` is stamped here, not by the caller.
pub async fn create(
    State(state): State<AppState>,
    Json(body): Json<AddProductRequest>,
) -> Result<Response, ApiError> {
    if body.has_missing_fields() {
        return Err(ApiError::BadRequestJson("Missing required fields".to_string()));
    }
    let (
        Some(name),
        Some(description),
        Some(price),
        Some(brand),
        Some(image),
        Some(category),
        Some(count_in_stock),
        Some(rating),
    ) = (
        body.name,
        body.description,
        body.price,
        body.brand,
        body.image,
        body.category,
        body.count_in_stock,
        body.rating,
    )
    else {
        return Err(ApiError::BadRequestJson("Missing required fields".to_string()));
    };

    let found = CategoryRepository::new(state.database())
        .find_by_name(&category)
        .await
        .map_err(|e| ApiError::InternalJson(e.to_string()))?
        .ok_or_else(|| ApiError::NotFoundJson("Category not found".to_string()))?;
    let Some(category_id) = found.id else {
        return Err(ApiError::InternalJson(
            "category document missing id".to_string(),
        ));
    };

    let product = Product {
        id: None,
        name,
        description,
        price,
        brand,
        image,
        category: category_id,
        count_in_stock,
        rating,
        date_created: Utc::now(),
    };

    let created = ProductRepository::new(state.database())
        .insert(product)
        .await
        .map_err(|e| ApiError::InternalJson(e.to_string()))?;

    Ok((StatusCode::CREATED, Json(created)).into_response())
}

/// Update a product through the admin order route.
///
/// Only the allow-listed fields are written; everything else on the stored
/// document is left untouched.
pub async fn update_order(
    AdminIdentity(_): AdminIdentity,
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(body): Json<UpdateOrderRequest>,
) -> Result<Json<Product>, ApiError> {
    let updated = ProductRepository::new(state.database())
        .apply_update(&id, body.set_document())
        .await?
        .ok_or_else(|| ApiError::NotFound("Order not found".to_string()))?;

    Ok(Json(updated))
}

/// List every product.
pub async fn list(State(state): State<AppState>) -> Response {
    match ProductRepository::new(state.database()).list().await {
        Ok(products) => Json(products).into_response(),
        // Store failures on this route answer 200 with an error object
        Err(err) => {
            tracing::error!(error = %err, "product listing failed");
            Json(json!({ "message": "Server error" })).into_response()
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn complete_request() -> AddProductRequest {
        AddProductRequest {
            name: Some("Phone".to_string()),
            description: Some("x".to_string()),
            price: Some(100.0),
            brand: Some("B".to_string()),
            image: Some("i".to_string()),
            category: Some("Electronics".to_string()),
            count_in_stock: Some(5),
            rating: Some(4.0),
        }
    }

    #[test]
    fn test_complete_body_passes_validation() {
        assert!(!complete_request().has_missing_fields());
    }

    #[test]
    fn test_absent_field_fails_validation() {
        let mut body = complete_request();
        body.rating = None;
        assert!(body.has_missing_fields());

        let mut body = complete_request();
        body.category = None;
        assert!(body.has_missing_fields());
    }

    #[test]
    fn test_empty_string_counts_as_missing() {
        let mut body = complete_request();
        body.brand = Some(String::new());
        assert!(body.has_missing_fields());
    }

    #[test]
    fn test_zero_values_are_valid() {
        let mut body = complete_request();
        body.price = Some(0.0);
        body.count_in_stock = Some(0);
        body.rating = Some(0.0);
        assert!(!body.has_missing_fields());
    }

    #[test]
    fn test_set_document_contains_only_present_fields() {
        let update = UpdateOrderRequest {
            count_in_stock: Some(999),
            ..UpdateOrderRequest::default()
        };

        let fields = update.set_document();
        assert_eq!(fields.len(), 1);
        assert_eq!(fields.get_i32("countInStock").unwrap(), 999);
    }

    #[test]
    fn test_set_document_empty_for_empty_update() {
        assert!(UpdateOrderRequest::default().set_document().is_empty());
    }

    #[test]
    fn test_unknown_keys_are_ignored() {
        // _id and category are not on the allow-list and do not deserialize
        let update: UpdateOrderRequest = serde_json::from_value(serde_json::json!({
            "_id": "ffffffffffffffffffffffff",
            "category": "ffffffffffffffffffffffff",
            "countInStock": 7,
        }))
        .unwrap();

        let fields = update.set_document();
        assert_eq!(fields.len(), 1);
        assert_eq!(fields.get_i32("countInStock").unwrap(), 7);
    }

    #[test]
    fn test_set_document_uses_wire_field_names() {
        let update: UpdateOrderRequest = serde_json::from_value(serde_json::json!({
            "countInStock": 3,
            "price": 19.99,
        }))
        .unwrap();

        let fields = update.set_document();
        assert_eq!(fields.len(), 2);
        assert!(fields.contains_key("countInStock"));
        assert!(fields.contains_key("price"));
    }
}
