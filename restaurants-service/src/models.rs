//! Data models for the restaurants API

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use uuid::Uuid;

/// Restaurant record
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Restaurant {
    pub restaurant_id: Uuid,
    pub supplier_name: Option<String>,
    pub restaurant_name: String,
    pub cuisine: String,
    pub address: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Restaurant {
    /// Merge a patch onto this record
    ///
    /// Fields present in the patch overwrite the stored values; the
    /// identifier and `created_at` always stay the stored ones.
    pub fn merged(mut self, patch: RestaurantPatch) -> Self {
        if let Some(supplier_name) = patch.supplier_name {
            self.supplier_name = Some(supplier_name);
        }
        if let Some(restaurant_name) = patch.restaurant_name {
            self.restaurant_name = restaurant_name;
        }
        if let Some(cuisine) = patch.cuisine {
            self.cuisine = cuisine;
        }
        if let Some(address) = patch.address {
            self.address = address;
        }
        self
    }
}

/// Request body envelope: `{ "data": { ... } }`
///
/// `data` stays a raw map so the validators can inspect arbitrary keys
/// before any typed conversion; a missing `data` key reads as an empty map.
#[derive(Debug, Default, Deserialize)]
pub struct Payload {
    #[serde(default)]
    pub data: Map<String, Value>,
}

/// Typed input for creating a restaurant
///
/// Converted from the payload map only after the allow-list and
/// required-field validators have passed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewRestaurant {
    #[serde(default)]
    pub supplier_name: Option<String>,
    pub restaurant_name: String,
    pub cuisine: String,
    pub address: String,
}

/// Partial update for a restaurant
///
/// Carries no identifier field, so identity smuggled into a request body
/// can never reach the stored record. Unknown keys are ignored.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RestaurantPatch {
    pub supplier_name: Option<String>,
    pub restaurant_name: Option<String>,
    pub cuisine: Option<String>,
    pub address: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn existing() -> Restaurant {
        Restaurant {
            restaurant_id: Uuid::new_v4(),
            supplier_name: Some("Shady Grove Produce".to_string()),
            restaurant_name: "Mint".to_string(),
            cuisine: "Indian".to_string(),
            address: "1000 N High St".to_string(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_merged_overwrites_present_fields() {
        let record = existing();
        let id = record.restaurant_id;

        let merged = record.merged(RestaurantPatch {
            cuisine: Some("Nepalese".to_string()),
            ..Default::default()
        });

        assert_eq!(merged.restaurant_id, id);
        assert_eq!(merged.cuisine, "Nepalese");
        assert_eq!(merged.restaurant_name, "Mint");
        assert_eq!(merged.supplier_name.as_deref(), Some("Shady Grove Produce"));
    }

    #[test]
    fn test_payload_defaults_to_empty_map() {
        let payload: Payload = serde_json::from_value(json!({})).expect("deserialize");
        assert!(payload.data.is_empty());
    }

    #[test]
    fn test_patch_ignores_identifier_and_unknown_keys() {
        let patch: RestaurantPatch = serde_json::from_value(json!({
            "restaurant_id": "d078b1a4-6bf8-44a8-a4a9-324a3d1f8ea0",
            "rating": 5,
            "address": "2000 S Low St",
        }))
        .expect("deserialize");

        assert_eq!(patch.address.as_deref(), Some("2000 S Low St"));
        assert!(patch.restaurant_name.is_none());
    }

    #[test]
    fn test_new_restaurant_supplier_optional() {
        let input: NewRestaurant = serde_json::from_value(json!({
            "restaurant_name": "Mint",
            "cuisine": "Indian",
            "address": "1000 N High St",
        }))
        .expect("deserialize");

        assert!(input.supplier_name.is_none());
    }
}
