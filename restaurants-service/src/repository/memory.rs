//! In-memory repository backend

use async_trait::async_trait;
use chrono::Utc;
use dashmap::DashMap;
use uuid::Uuid;

use super::error::{RepositoryError, RepositoryOperation};
use super::traits::{RepositoryResult, RestaurantRepository};
use crate::models::{NewRestaurant, Restaurant};

/// Concurrent in-memory restaurant store
///
/// Identifiers are assigned on create; `created_at` is fixed at insert time
/// and `updated_at` bumped on every update.
#[derive(Debug, Default)]
pub struct InMemoryRestaurants {
    records: DashMap<Uuid, Restaurant>,
}

impl InMemoryRestaurants {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored records
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the store holds no records
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[async_trait]
impl RestaurantRepository for InMemoryRestaurants {
    async fn list(&self) -> RepositoryResult<Vec<Restaurant>> {
        Ok(self
            .records
            .iter()
            .map(|entry| entry.value().clone())
            .collect())
    }

    async fn find_by_id(&self, id: &Uuid) -> RepositoryResult<Option<Restaurant>> {
        Ok(self.records.get(id).map(|entry| entry.value().clone()))
    }

    async fn create(&self, data: NewRestaurant) -> RepositoryResult<Restaurant> {
        let now = Utc::now();
        let restaurant = Restaurant {
            restaurant_id: Uuid::new_v4(),
            supplier_name: data.supplier_name,
            restaurant_name: data.restaurant_name,
            cuisine: data.cuisine,
            address: data.address,
            created_at: now,
            updated_at: now,
        };

        self.records
            .insert(restaurant.restaurant_id, restaurant.clone());

        Ok(restaurant)
    }

    async fn update(&self, record: Restaurant) -> RepositoryResult<Restaurant> {
        let mut updated = record;

        match self.records.get_mut(&updated.restaurant_id) {
            Some(mut entry) => {
                // created_at always stays the stored value
                updated.created_at = entry.value().created_at;
                updated.updated_at = Utc::now();
                *entry.value_mut() = updated.clone();
                Ok(updated)
            }
            None => Err(RepositoryError::not_found(updated.restaurant_id.to_string())
                .with_operation(RepositoryOperation::Update)),
        }
    }

    async fn delete(&self, id: &Uuid) -> RepositoryResult<()> {
        match self.records.remove(id) {
            Some(_) => Ok(()),
            None => Err(RepositoryError::not_found(id.to_string())
                .with_operation(RepositoryOperation::Delete)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> NewRestaurant {
        NewRestaurant {
            supplier_name: Some("Shady Grove Produce".to_string()),
            restaurant_name: "Mint".to_string(),
            cuisine: "Indian".to_string(),
            address: "1000 N High St".to_string(),
        }
    }

    #[tokio::test]
    async fn test_create_assigns_identifier_and_timestamps() {
        let repo = InMemoryRestaurants::new();
        let created = repo.create(sample()).await.expect("create");

        assert_eq!(created.restaurant_name, "Mint");
        assert_eq!(created.created_at, created.updated_at);
        assert_eq!(repo.len(), 1);

        let found = repo
            .find_by_id(&created.restaurant_id)
            .await
            .expect("find")
            .expect("present");
        assert_eq!(found.restaurant_id, created.restaurant_id);
    }

    #[tokio::test]
    async fn test_list_empty() {
        let repo = InMemoryRestaurants::new();
        assert!(repo.list().await.expect("list").is_empty());
    }

    #[tokio::test]
    async fn test_update_preserves_created_at() {
        let repo = InMemoryRestaurants::new();
        let created = repo.create(sample()).await.expect("create");

        let mut changed = created.clone();
        changed.cuisine = "Nepalese".to_string();
        let updated = repo.update(changed).await.expect("update");

        assert_eq!(updated.restaurant_id, created.restaurant_id);
        assert_eq!(updated.cuisine, "Nepalese");
        assert_eq!(updated.created_at, created.created_at);
        assert!(updated.updated_at >= created.updated_at);
    }

    #[tokio::test]
    async fn test_update_unknown_record_errors() {
        let repo = InMemoryRestaurants::new();
        let record = Restaurant {
            restaurant_id: Uuid::new_v4(),
            supplier_name: None,
            restaurant_name: "Ghost Kitchen".to_string(),
            cuisine: "Fusion".to_string(),
            address: "Nowhere".to_string(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };

        let err = repo.update(record).await.expect_err("missing record");
        assert_eq!(err.operation, RepositoryOperation::Update);
    }

    #[tokio::test]
    async fn test_delete_removes_record() {
        let repo = InMemoryRestaurants::new();
        let created = repo.create(sample()).await.expect("create");

        repo.delete(&created.restaurant_id).await.expect("delete");
        assert!(repo.is_empty());
        assert!(repo
            .find_by_id(&created.restaurant_id)
            .await
            .expect("find")
            .is_none());
    }

    #[tokio::test]
    async fn test_delete_unknown_record_errors() {
        let repo = InMemoryRestaurants::new();
        let err = repo.delete(&Uuid::new_v4()).await.expect_err("missing");
        assert_eq!(err.operation, RepositoryOperation::Delete);
    }
}
