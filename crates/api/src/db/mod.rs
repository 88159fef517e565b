//! Database operations against MongoDB.
//!
//! # Collections
//!
//! - `admins` - Administrator credentials
//! - `users` - End-user accounts
//! - `categories` - Product categories
//! - `products` - Products (also addressed as "orders" by the admin order route)
//! - `payments` - Payments
//! - `feedback` - User feedback
//!
//! One repository per collection, each borrowing the shared [`Database`]
//! handle. No cross-collection transactions; uniqueness is enforced by
//! check-then-insert in the handlers, not by store-level indexes.

pub mod admins;
pub mod categories;
pub mod feedback;
pub mod payments;
pub mod products;
pub mod users;

use mongodb::{Client, Database};
use secrecy::{ExposeSecret, SecretString};
use thiserror::Error;

pub use admins::AdminRepository;
pub use categories::CategoryRepository;
pub use feedback::FeedbackRepository;
pub use payments::PaymentRepository;
pub use products::ProductRepository;
pub use users::UserRepository;

/// Errors that can occur during repository operations.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// Driver error from mongodb.
    #[error("database error: {0}")]
    Database(#[from] mongodb::error::Error),

    /// A path identifier is not a valid ObjectId.
    #[error("malformed object id: {0}")]
    MalformedId(#[from] mongodb::bson::oid::Error),
}

/// Create a database handle from a connection URI.
///
/// The driver connects lazily; an unreachable server surfaces on the first
/// operation, not here.
///
/// # Errors
///
/// Returns `mongodb::error::Error` if the URI cannot be parsed.
pub async fn connect(
    uri: &SecretString,
    database_name: &str,
) -> Result<Database, mongodb::error::Error> {
    let client = Client::with_uri_str(uri.expose_secret()).await?;
    Ok(client.database(database_name))
}
