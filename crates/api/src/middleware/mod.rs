//! HTTP middleware and extractors.

pub mod auth;

pub use auth::{AdminIdentity, AuthRejection, UserIdentity};
