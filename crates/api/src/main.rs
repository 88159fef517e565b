//! Bodega API - e-commerce administrative backend.
//!
//! This binary serves the REST API on port 5100.
//!
//! # Architecture
//!
//! - Axum web framework, one handler per endpoint
//! - MongoDB for all collections (admins, users, categories, products,
//!   payments, feedback)
//! - Two independent token signing domains: administrators and end users
//!
//! # Security
//!
//! Token secrets are loaded once from the environment, validated for
//! strength, and injected through `AppState`; they are never embedded as
//! literals.

#![cfg_attr(not(test), forbid(unsafe_code))]

use bodega_api::config::ApiConfig;
use bodega_api::db;
use bodega_api::routes;
use bodega_api::state::AppState;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    // Load configuration from environment
    let config = ApiConfig::from_env().expect("Failed to load configuration");

    // Initialize tracing with EnvFilter
    // Defaults to info level for our crate if RUST_LOG is not set
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "bodega_api=info,tower_http=debug".into());

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Initialize the database handle (the driver connects lazily)
    let database = db::connect(&config.mongodb_uri, &config.database_name)
        .await
        .expect("Failed to create MongoDB client");
    tracing::info!("Using MongoDB database {}", config.database_name);

    // Build application state and router
    let addr = config.socket_addr();
    let state = AppState::new(config, database);
    let app = routes::router(state);

    // Start server
    tracing::info!("api listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind to address");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("Server error");
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    tracing::info!("Shutdown signal received, starting graceful shutdown");
}
