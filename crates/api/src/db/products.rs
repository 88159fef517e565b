//! Product repository.

use futures::TryStreamExt;
use mongodb::bson::oid::ObjectId;
use mongodb::bson::{Document, doc};
use mongodb::options::ReturnDocument;
use mongodb::{Collection, Database};

use super::RepositoryError;
use crate::models::Product;

const COLLECTION: &str = "products";

/// Repository for products.
pub struct ProductRepository<'a> {
    db: &'a Database,
}

impl<'a> ProductRepository<'a> {
    /// Create a new product repository.
    #[must_use]
    pub const fn new(db: &'a Database) -> Self {
        Self { db }
    }

    fn collection(&self) -> Collection<Product> {
        self.db.collection(COLLECTION)
    }

    /// Insert a new product and return it with the assigned id.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the insert fails.
    pub async fn insert(&self, mut product: Product) -> Result<Product, RepositoryError> {
        let result = self.collection().insert_one(&product).await?;
        product.id = result.inserted_id.as_object_id();
        Ok(product)
    }

    /// Fetch the entire products collection.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn list(&self) -> Result<Vec<Product>, RepositoryError> {
        let cursor = self.collection().find(doc! {}).await?;
        Ok(cursor.try_collect().await?)
    }

    /// Get a product by its identifier.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::MalformedId` if `id` is not a valid ObjectId.
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn find_by_id(&self, id: &str) -> Result<Option<Product>, RepositoryError> {
        let oid = ObjectId::parse_str(id)?;
        Ok(self.collection().find_one(doc! { "_id": oid }).await?)
    }

    /// Apply a `$set` of already-validated fields and return the updated
    /// document.
    ///
    /// An empty `fields` document degenerates to a plain fetch, so callers
    /// can treat "nothing to change" uniformly.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::MalformedId` if `id` is not a valid ObjectId.
    /// Returns `RepositoryError::Database` if the update fails.
    pub async fn apply_update(
        &self,
        id: &str,
        fields: Document,
    ) -> Result<Option<Product>, RepositoryError> {
        let oid = ObjectId::parse_str(id)?;

        if fields.is_empty() {
            return Ok(self.collection().find_one(doc! { "_id": oid }).await?);
        }

        Ok(self
            .collection()
            .find_one_and_update(doc! { "_id": oid }, doc! { "$set": fields })
            .return_document(ReturnDocument::After)
            .await?)
    }
}
