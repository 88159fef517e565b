//! User feedback documents.

use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

/// A feedback entry. `user` is free-form and is not validated against the
/// users collection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Feedback {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub user: String,
    pub message: String,
}
