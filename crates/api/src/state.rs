//! Application state shared across handlers.

use std::sync::Arc;

use mongodb::Database;

use crate::config::ApiConfig;
use crate::services::auth::TokenSigner;

/// Application state shared across all handlers.
///
/// This struct is cheaply cloneable via `Arc` and provides access to the
/// database handle, configuration, and the two token signing domains.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: ApiConfig,
    database: Database,
    admin_signer: TokenSigner,
    user_signer: TokenSigner,
}

impl AppState {
    /// Create a new application state.
    ///
    /// Builds one [`TokenSigner`] per account domain from the secrets in
    /// `config`; nothing else reads the secret material afterwards.
    #[must_use]
    pub fn new(config: ApiConfig, database: Database) -> Self {
        let admin_signer = TokenSigner::new(&config.admin_token_secret);
        let user_signer = TokenSigner::new(&config.user_token_secret);

        Self {
            inner: Arc::new(AppStateInner {
                config,
                database,
                admin_signer,
                user_signer,
            }),
        }
    }

    /// Get a reference to the API configuration.
    #[must_use]
    pub fn config(&self) -> &ApiConfig {
        &self.inner.config
    }

    /// Get a reference to the database handle.
    #[must_use]
    pub fn database(&self) -> &Database {
        &self.inner.database
    }

    /// Get the administrator-domain token signer.
    #[must_use]
    pub fn admin_signer(&self) -> &TokenSigner {
        &self.inner.admin_signer
    }

    /// Get the end-user-domain token signer.
    #[must_use]
    pub fn user_signer(&self) -> &TokenSigner {
        &self.inner.user_signer
    }
}
