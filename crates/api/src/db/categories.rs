//! Category repository.

use mongodb::bson::doc;
use mongodb::{Collection, Database};

use super::RepositoryError;
use crate::models::Category;

const COLLECTION: &str = "categories";

/// Repository for product categories.
pub struct CategoryRepository<'a> {
    db: &'a Database,
}

impl<'a> CategoryRepository<'a> {
    /// Create a new category repository.
    #[must_use]
    pub const fn new(db: &'a Database) -> Self {
        Self { db }
    }

    fn collection(&self) -> Collection<Category> {
        self.db.collection(COLLECTION)
    }

    /// Get a category by its name.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn find_by_name(&self, name: &str) -> Result<Option<Category>, RepositoryError> {
        Ok(self.collection().find_one(doc! { "name": name }).await?)
    }

    /// Insert a new category.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the insert fails.
    pub async fn insert(&self, category: &Category) -> Result<(), RepositoryError> {
        self.collection().insert_one(category).await?;
        Ok(())
    }
}
