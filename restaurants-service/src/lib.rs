//! # restaurants-service
//!
//! REST resource service for a "restaurants" entity: list, read, create,
//! update, delete. Mutating requests pass through a validation chain (field
//! allow-list, ordered required-field checks) and item routes through an
//! existence guard before the terminal handler runs; data access is
//! delegated to a repository trait behind the application state.
//!
//! ## Features
//!
//! - **Validation chain**: schema-less payload inspection before typed
//!   conversion, with the exact error messages clients depend on
//! - **Existence guard**: `ExistingRestaurant` extractor resolves the path
//!   identifier to a stored record or rejects with 404
//! - **Repository seam**: object-safe `RestaurantRepository` trait with a
//!   bundled in-memory backend
//! - **Middleware stack**: request IDs, sensitive-header masking, tracing,
//!   timeouts, body limits, CORS, panic recovery
//! - **Graceful shutdown**: SIGTERM/SIGINT signal handling
//!
//! ## Example
//!
//! ```rust,no_run
//! use restaurants_service::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     // Load configuration
//!     let config = Config::load()?;
//!
//!     // Initialize tracing
//!     init_tracing(&config)?;
//!
//!     // Build application state
//!     let state = AppState::builder()
//!         .config(config.clone())
//!         .build()?;
//!
//!     // Create router and run server
//!     let app = router(state);
//!     Server::new(config).serve(app).await?;
//!
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod error;
pub mod extract;
pub mod handlers;
pub mod health;
pub mod middleware;
pub mod models;
pub mod observability;
pub mod repository;
pub mod responses;
pub mod routes;
pub mod server;
pub mod state;
pub mod validation;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::config::{Config, MiddlewareConfig, ServiceConfig};

    pub use crate::error::{Error, ErrorResponse, Result};

    pub use crate::extract::ExistingRestaurant;

    pub use crate::health::{health, readiness};

    pub use crate::middleware::{
        request_id_layer, request_id_propagation_layer, sensitive_headers_layer,
        SENSITIVE_HEADERS,
    };

    pub use crate::models::{NewRestaurant, Payload, Restaurant, RestaurantPatch};

    pub use crate::observability::init_tracing;

    pub use crate::repository::{
        InMemoryRestaurants, RepositoryError, RepositoryErrorKind, RepositoryOperation,
        RepositoryResult, RestaurantRepository,
    };

    pub use crate::responses::{Created, Data, NoContent};
    pub use crate::routes::router;
    pub use crate::server::Server;
    pub use crate::state::{AppState, AppStateBuilder};

    pub use crate::validation::{REQUIRED_PROPERTIES, VALID_PROPERTIES};

    pub use axum::{
        extract::{Path, State},
        http::{HeaderMap, HeaderValue, StatusCode},
        response::{IntoResponse, Json, Response},
        routing::{delete, get, patch, post, put},
        Router,
    };

    pub use serde::{Deserialize, Serialize};

    // Re-export tracing macros and types
    pub use tracing::{debug, error, info, instrument, trace, warn, Level, Span};

    // Re-export tokio for async runtime
    pub use tokio;

    // Re-export async-trait for async trait definitions
    pub use async_trait::async_trait;

    // Re-export time utilities
    pub use chrono::{DateTime, Utc};

    // Re-export UUID
    pub use uuid::Uuid;

    // Re-export HTTP types
    pub use http::{Method, Uri};
}
