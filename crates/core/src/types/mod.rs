//! Core types for Bodega.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod email;
pub mod username;

pub use email::{Email, EmailError};
pub use username::{Username, UsernameError};
