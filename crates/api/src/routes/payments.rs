//! Payment routes.

use axum::Json;
use axum::extract::{Path, State};
use axum::response::{IntoResponse, Response};
use serde::Deserialize;
use serde_json::json;

use crate::db::{PaymentRepository, RepositoryError};
use crate::error::ApiError;
use crate::middleware::AdminIdentity;
use crate::state::AppState;

/// Payment update request body. Both fields are required.
#[derive(Debug, Deserialize)]
pub struct UpdatePaymentRequest {
    pub amount: Option<f64>,
    pub status: Option<String>,
}

/// Update a payment's amount and status.
///
/// The write is an atomic find-and-update returning the new document.
pub async fn update(
    AdminIdentity(_): AdminIdentity,
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(body): Json<UpdatePaymentRequest>,
) -> Result<Response, ApiError> {
    let payments = PaymentRepository::new(state.database());

    payments
        .find_by_id(&id)
        .await
        .map_err(reject_malformed_id)?
        .ok_or_else(|| ApiError::NotFound("Payment not found".to_string()))?;

    let (Some(amount), Some(status)) = (body.amount, body.status) else {
        return Err(ApiError::BadRequestJson(
            "Both amount and status are required".to_string(),
        ));
    };

    let payment = payments
        .update(&id, amount, &status)
        .await
        .map_err(reject_malformed_id)?
        .ok_or_else(|| ApiError::NotFound("Payment not found".to_string()))?;

    Ok(Json(json!({
        "message": "Payment updated successfully",
        "payment": payment,
    }))
    .into_response())
}

/// A malformed payment id is a client error on this route.
fn reject_malformed_id(err: RepositoryError) -> ApiError {
    match err {
        RepositoryError::MalformedId(_) => {
            ApiError::BadRequestJson("Invalid payment ID".to_string())
        }
        other => ApiError::Repository(other),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use axum::http::StatusCode;
    use mongodb::bson::oid::ObjectId;

    use super::*;

    #[test]
    fn test_malformed_id_maps_to_bad_request() {
        let err = ObjectId::parse_str("not-an-object-id").unwrap_err();
        let mapped = reject_malformed_id(RepositoryError::MalformedId(err));

        let response = mapped.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
