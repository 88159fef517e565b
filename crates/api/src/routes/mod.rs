//! HTTP route handlers.
//!
//! # Route Structure
//!
//! ```text
//! GET    /health                    - Liveness check
//! GET    /health/ready              - Readiness check (store ping)
//!
//! # Administrators
//! POST   /api/admin/register        - Register an administrator
//! POST   /api/admin/login           - Login, returns a signed token
//! POST   /api/admin/add-category    - Create a category (admin token)
//! POST   /api/admin/add-product     - Create a product
//! PUT    /api/admin/order/{id}      - Update a product-as-order (admin token)
//! POST   /api/admin/payment/{id}    - Update a payment (admin token)
//! GET    /api/admin/feedback        - List feedback (admin token)
//!
//! # Users
//! POST   /api/user/register         - Register a user
//! POST   /api/user/login            - Login, returns a signed token
//! POST   /api/user/feedback         - Create feedback (user token)
//! DELETE /api/user                  - Delete a user by username
//! GET    /api/users                 - List users
//! GET    /api/products              - List products
//! ```
//!
//! Every handler is independent - none calls another. Protected routes run
//! the token gate through the extractors in [`crate::middleware`]; the
//! remaining routes are open, including product creation, which the service
//! has always exposed without a token.

pub mod admins;
pub mod categories;
pub mod feedback;
pub mod payments;
pub mod products;
pub mod users;

use axum::http::StatusCode;
use axum::routing::{delete, get, post, put};
use axum::{Router, extract::State};
use mongodb::bson::doc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Assemble the full application router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/health/ready", get(readiness))
        .route("/api/admin/register", post(admins::register))
        .route("/api/admin/login", post(admins::login))
        .route("/api/admin/add-category", post(categories::create))
        .route("/api/admin/add-product", post(products::create))
        .route("/api/admin/order/{id}", put(products::update_order))
        .route("/api/admin/payment/{id}", post(payments::update))
        .route("/api/admin/feedback", get(feedback::list))
        .route("/api/user/register", post(users::register))
        .route("/api/user/login", post(users::login))
        .route("/api/user/feedback", post(feedback::create))
        .route("/api/user", delete(users::remove))
        .route("/api/users", get(users::list))
        .route("/api/products", get(products::list))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Liveness health check endpoint.
///
/// Returns "ok" if the server is running. Does not check dependencies.
async fn health() -> &'static str {
    "ok"
}

/// Readiness health check endpoint.
///
/// Verifies store connectivity before returning OK.
/// Returns 503 Service Unavailable if the store is not reachable.
async fn readiness(State(state): State<AppState>) -> StatusCode {
    match state.database().run_command(doc! { "ping": 1 }).await {
        Ok(_) => StatusCode::OK,
        Err(_) => StatusCode::SERVICE_UNAVAILABLE,
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use axum::body::Body;
    use axum::http::Request;
    use secrecy::SecretString;
    use tower::ServiceExt;

    use super::*;
    use crate::config::ApiConfig;

    async fn test_app() -> Router {
        let config = ApiConfig {
            mongodb_uri: SecretString::from("mongodb://127.0.0.1:27017"),
            database_name: "bodega-test".to_string(),
            host: "127.0.0.1".parse().unwrap(),
            port: 5100,
            admin_token_secret: SecretString::from("k9#mQ2$vX7!pL4@wN8&rT1*zB5^cF3%j"),
            user_token_secret: SecretString::from("f6!uH3@eJ9#sD1$gA7%yV4&xM2*qW8^n"),
        };

        // Lazy client - no live store is needed for routing tests
        let database = crate::db::connect(&config.mongodb_uri, &config.database_name)
            .await
            .unwrap();

        router(AppState::new(config, database))
    }

    #[tokio::test]
    async fn test_health() {
        let app = test_app().await;
        let response = app
            .oneshot(Request::get("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        assert_eq!(&bytes[..], b"ok");
    }

    #[tokio::test]
    async fn test_unknown_route() {
        let app = test_app().await;
        let response = app
            .oneshot(Request::get("/api/unknown").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_protected_route_without_token() {
        let app = test_app().await;
        let response = app
            .oneshot(
                Request::post("/api/admin/add-category")
                    .header("content-type", "application/json")
                    .body(Body::from(r#"{"name":"Electronics"}"#))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        assert_eq!(&bytes[..], b"Invalid JWT Token");
    }

    #[tokio::test]
    async fn test_protected_route_with_garbage_token() {
        let app = test_app().await;
        let response = app
            .oneshot(
                Request::get("/api/admin/feedback")
                    .header("authorization", "Bearer not.a.token")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }
}
