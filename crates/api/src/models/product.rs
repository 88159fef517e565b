//! Product documents.

use chrono::{DateTime, Utc};
use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

/// A product, associated with an existing [`Category`](super::Category) by id.
///
/// `category` stores the category's ObjectId - the human-readable name is
/// resolved once at creation time and never stored here. `date_created` is
/// stamped server-side when the document is built.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub brand: String,
    pub image: String,
    pub category: ObjectId,
    pub count_in_stock: i32,
    pub rating: f64,
    pub date_created: DateTime<Utc>,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_field_names_are_camel_case() {
        let product = Product {
            id: None,
            name: "Phone".to_string(),
            description: "x".to_string(),
            price: 100.0,
            brand: "B".to_string(),
            image: "i".to_string(),
            category: ObjectId::new(),
            count_in_stock: 5,
            rating: 4.0,
            date_created: Utc::now(),
        };

        let json = serde_json::to_value(&product).unwrap();
        assert!(json.get("countInStock").is_some());
        assert!(json.get("dateCreated").is_some());
        assert!(json.get("count_in_stock").is_none());
        // _id is omitted until the store assigns one
        assert!(json.get("_id").is_none());
    }
}
