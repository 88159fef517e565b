//! Product category documents.

use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

/// A product category. Flat - there is no parent/child hierarchy.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Category {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub name: String,
}
