//! Administrator repository.

use mongodb::bson::doc;
use mongodb::{Collection, Database};

use super::RepositoryError;
use crate::models::AdminRecord;

const COLLECTION: &str = "admins";

/// Repository for administrator credential records.
pub struct AdminRepository<'a> {
    db: &'a Database,
}

impl<'a> AdminRepository<'a> {
    /// Create a new administrator repository.
    #[must_use]
    pub const fn new(db: &'a Database) -> Self {
        Self { db }
    }

    fn collection(&self) -> Collection<AdminRecord> {
        self.db.collection(COLLECTION)
    }

    /// Get an administrator by username.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn find_by_username(
        &self,
        username: &str,
    ) -> Result<Option<AdminRecord>, RepositoryError> {
        Ok(self
            .collection()
            .find_one(doc! { "username": username })
            .await?)
    }

    /// Insert a new administrator record.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the insert fails.
    pub async fn insert(&self, admin: &AdminRecord) -> Result<(), RepositoryError> {
        self.collection().insert_one(admin).await?;
        Ok(())
    }
}
