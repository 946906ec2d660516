//! Application state shared across handlers

use std::sync::Arc;

use crate::config::Config;
use crate::error::{Error, Result};
use crate::repository::{InMemoryRestaurants, RestaurantRepository};

/// Shared application state
///
/// Cheap to clone; handlers receive it via `State`. The repository backend
/// sits behind `Arc<dyn RestaurantRepository>` so tests and alternative
/// deployments can swap it without touching the handlers.
#[derive(Clone)]
pub struct AppState {
    config: Arc<Config>,
    restaurants: Arc<dyn RestaurantRepository>,
}

impl AppState {
    /// Create a builder for application state
    pub fn builder() -> AppStateBuilder {
        AppStateBuilder::default()
    }

    /// Get the configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Get the restaurant repository
    pub fn restaurants(&self) -> &dyn RestaurantRepository {
        self.restaurants.as_ref()
    }
}

/// Builder for [`AppState`]
#[derive(Default)]
pub struct AppStateBuilder {
    config: Option<Config>,
    restaurants: Option<Arc<dyn RestaurantRepository>>,
}

impl AppStateBuilder {
    /// Set the configuration (required)
    pub fn config(mut self, config: Config) -> Self {
        self.config = Some(config);
        self
    }

    /// Set the repository backend; defaults to the in-memory store
    pub fn restaurants(mut self, restaurants: Arc<dyn RestaurantRepository>) -> Self {
        self.restaurants = Some(restaurants);
        self
    }

    /// Build the application state
    pub fn build(self) -> Result<AppState> {
        let config = self
            .config
            .ok_or_else(|| Error::Internal("AppState requires a configuration".to_string()))?;
        let restaurants = self
            .restaurants
            .unwrap_or_else(|| Arc::new(InMemoryRestaurants::new()));

        Ok(AppState {
            config: Arc::new(config),
            restaurants,
        })
    }
}
