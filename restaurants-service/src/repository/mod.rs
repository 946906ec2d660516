//! Repository abstraction for restaurant records
//!
//! The data-access collaborator is expressed as an object-safe trait so the
//! application state can hold any backend as `Arc<dyn RestaurantRepository>`.
//! A [`DashMap`](dashmap::DashMap)-backed in-memory implementation is
//! bundled for the binary and the tests.

mod error;
mod memory;
mod traits;

// Re-export all public types
pub use error::{RepositoryError, RepositoryErrorKind, RepositoryOperation};
pub use memory::InMemoryRestaurants;
pub use traits::{RepositoryResult, RestaurantRepository};
