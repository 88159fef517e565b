//! Administrator account documents.

use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

/// Stored administrator record, including the password hash.
///
/// Only the credential paths (registration, login) handle this type; it is
/// never serialized into a response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdminRecord {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub username: String,
    /// Argon2id hash in PHC string format.
    pub password: String,
}
