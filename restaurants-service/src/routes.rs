//! Router assembly

use axum::{routing::get, Router};

use crate::{handlers::restaurants, health, state::AppState};

/// Build the application router with resource and probe routes
pub fn router(state: AppState) -> Router {
    Router::new()
        .route(
            "/restaurants",
            get(restaurants::list).post(restaurants::create),
        )
        .route(
            "/restaurants/{restaurant_id}",
            get(restaurants::read)
                .put(restaurants::update)
                .patch(restaurants::update)
                .delete(restaurants::destroy),
        )
        .route("/health", get(health::health))
        .route("/ready", get(health::readiness))
        .with_state(state)
}
