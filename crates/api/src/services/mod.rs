//! Service-layer helpers shared by the request handlers.

pub mod auth;
