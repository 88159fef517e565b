//! Feedback repository.

use futures::TryStreamExt;
use mongodb::bson::doc;
use mongodb::{Collection, Database};

use super::RepositoryError;
use crate::models::Feedback;

const COLLECTION: &str = "feedback";

/// Repository for user feedback.
pub struct FeedbackRepository<'a> {
    db: &'a Database,
}

impl<'a> FeedbackRepository<'a> {
    /// Create a new feedback repository.
    #[must_use]
    pub const fn new(db: &'a Database) -> Self {
        Self { db }
    }

    fn collection(&self) -> Collection<Feedback> {
        self.db.collection(COLLECTION)
    }

    /// Insert a feedback entry and return it with the assigned id.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the insert fails.
    pub async fn insert(&self, mut feedback: Feedback) -> Result<Feedback, RepositoryError> {
        let result = self.collection().insert_one(&feedback).await?;
        feedback.id = result.inserted_id.as_object_id();
        Ok(feedback)
    }

    /// Fetch the entire feedback collection.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn list(&self) -> Result<Vec<Feedback>, RepositoryError> {
        let cursor = self.collection().find(doc! {}).await?;
        Ok(cursor.try_collect().await?)
    }
}
