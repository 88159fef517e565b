//! Payment documents.

use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

/// A payment. Standalone - not linked to an order or user record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Payment {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub amount: f64,
    pub status: String,
}
