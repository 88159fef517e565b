//! End-user repository.
//!
//! Credential lookups deserialize the full stored record; every read that
//! leaves the service goes through the hash-free [`User`] view instead.

use futures::TryStreamExt;
use mongodb::bson::doc;
use mongodb::{Collection, Database};

use super::RepositoryError;
use crate::models::{User, UserRecord};

const COLLECTION: &str = "users";

/// Repository for end-user accounts.
pub struct UserRepository<'a> {
    db: &'a Database,
}

impl<'a> UserRepository<'a> {
    /// Create a new user repository.
    #[must_use]
    pub const fn new(db: &'a Database) -> Self {
        Self { db }
    }

    fn records(&self) -> Collection<UserRecord> {
        self.db.collection(COLLECTION)
    }

    fn views(&self) -> Collection<User> {
        self.db.collection(COLLECTION)
    }

    /// Get a user record (including the password hash) by email.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn find_by_email(&self, email: &str) -> Result<Option<UserRecord>, RepositoryError> {
        Ok(self.records().find_one(doc! { "email": email }).await?)
    }

    /// Insert a new user record.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the insert fails.
    pub async fn insert(&self, user: &UserRecord) -> Result<(), RepositoryError> {
        self.records().insert_one(user).await?;
        Ok(())
    }

    /// Fetch the entire users collection.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn list(&self) -> Result<Vec<User>, RepositoryError> {
        let cursor = self.views().find(doc! {}).await?;
        Ok(cursor.try_collect().await?)
    }

    /// Delete a user by username, returning the deleted document.
    ///
    /// Returns `None` if no user with that username exists, so repeated
    /// deletes stay idempotent.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the delete fails.
    pub async fn delete_by_username(
        &self,
        username: &str,
    ) -> Result<Option<User>, RepositoryError> {
        Ok(self
            .views()
            .find_one_and_delete(doc! { "username": username })
            .await?)
    }
}
