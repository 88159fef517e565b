//! Authentication error types.

use thiserror::Error;

/// Errors that can occur during credential handling.
#[derive(Debug, Error)]
pub enum AuthError {
    /// Invalid credentials (wrong password, or the stored hash is unreadable).
    #[error("invalid credentials")]
    InvalidCredentials,

    /// Password hashing error.
    #[error("password hashing error")]
    PasswordHash,

    /// Token signing error.
    #[error("token error: {0}")]
    Token(#[from] jsonwebtoken::errors::Error),
}
