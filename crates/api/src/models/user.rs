//! End-user account documents.

use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

/// Stored user record, including the password hash.
///
/// Only the credential paths (registration, login) handle this type; it is
/// never serialized into a response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserRecord {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub firstname: String,
    pub lastname: String,
    pub username: String,
    pub email: String,
    /// Argon2id hash in PHC string format.
    pub password: String,
}

/// User document as exposed by read endpoints.
///
/// Deserializing from the same collection as [`UserRecord`] simply skips the
/// stored `password` field, so the hash cannot leak through a listing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub firstname: String,
    pub lastname: String,
    pub username: String,
    pub email: String,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use mongodb::bson;

    #[test]
    fn test_user_view_drops_password_hash() {
        let record = UserRecord {
            id: Some(ObjectId::new()),
            firstname: "Jane".to_string(),
            lastname: "Doe".to_string(),
            username: "jane".to_string(),
            email: "jane@example.com".to_string(),
            password: "$argon2id$v=19$m=19456,t=2,p=1$abc$def".to_string(),
        };

        let doc = bson::to_document(&record).unwrap();
        let view: User = bson::from_document(doc).unwrap();

        let json = serde_json::to_value(&view).unwrap();
        assert!(json.get("password").is_none());
        assert_eq!(json["email"], "jane@example.com");
    }
}
