//! Repository trait definition

use async_trait::async_trait;
use uuid::Uuid;

use super::error::RepositoryError;
use crate::models::{NewRestaurant, Restaurant};

/// Result type for repository operations
pub type RepositoryResult<T> = std::result::Result<T, RepositoryError>;

/// Data-access contract for restaurant records
///
/// Backends assign identifiers and maintain timestamps; callers never pick
/// identities. The trait is object-safe (`async_trait`) so state can hold
/// `Arc<dyn RestaurantRepository>`.
#[async_trait]
pub trait RestaurantRepository: Send + Sync {
    /// All records, unfiltered and unpaginated
    async fn list(&self) -> RepositoryResult<Vec<Restaurant>>;

    /// Returns `Ok(Some(record))` if found, `Ok(None)` if not found
    async fn find_by_id(&self, id: &Uuid) -> RepositoryResult<Option<Restaurant>>;

    /// Insert a new record, assigning its identifier and timestamps
    async fn create(&self, data: NewRestaurant) -> RepositoryResult<Restaurant>;

    /// Replace the stored record matched by `record.restaurant_id`
    async fn update(&self, record: Restaurant) -> RepositoryResult<Restaurant>;

    /// Remove the record with the given identifier
    async fn delete(&self, id: &Uuid) -> RepositoryResult<()>;
}
