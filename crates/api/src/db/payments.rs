//! Payment repository.

use mongodb::bson::doc;
use mongodb::bson::oid::ObjectId;
use mongodb::options::ReturnDocument;
use mongodb::{Collection, Database};

use super::RepositoryError;
use crate::models::Payment;

const COLLECTION: &str = "payments";

/// Repository for payments.
pub struct PaymentRepository<'a> {
    db: &'a Database,
}

impl<'a> PaymentRepository<'a> {
    /// Create a new payment repository.
    #[must_use]
    pub const fn new(db: &'a Database) -> Self {
        Self { db }
    }

    fn collection(&self) -> Collection<Payment> {
        self.db.collection(COLLECTION)
    }

    /// Get a payment by its identifier.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::MalformedId` if `id` is not a valid ObjectId.
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn find_by_id(&self, id: &str) -> Result<Option<Payment>, RepositoryError> {
        let oid = ObjectId::parse_str(id)?;
        Ok(self.collection().find_one(doc! { "_id": oid }).await?)
    }

    /// Atomically update amount and status, returning the new document.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::MalformedId` if `id` is not a valid ObjectId.
    /// Returns `RepositoryError::Database` if the update fails.
    pub async fn update(
        &self,
        id: &str,
        amount: f64,
        status: &str,
    ) -> Result<Option<Payment>, RepositoryError> {
        let oid = ObjectId::parse_str(id)?;
        Ok(self
            .collection()
            .find_one_and_update(
                doc! { "_id": oid },
                doc! { "$set": { "amount": amount, "status": status } },
            )
            .return_document(ReturnDocument::After)
            .await?)
    }
}
