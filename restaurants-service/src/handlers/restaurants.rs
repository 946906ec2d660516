//! HTTP handlers for the restaurants resource
//!
//! Create runs the validation chain (field allow-list, then required-field
//! checks in declared order) over the raw payload map before any typed
//! conversion. Item routes go through the [`ExistingRestaurant`] guard, so
//! by the time a handler runs the record is already resolved.

use axum::extract::State;
use axum::Json;
use serde_json::Value;

use crate::error::{Error, Result};
use crate::extract::ExistingRestaurant;
use crate::models::{NewRestaurant, Payload, Restaurant, RestaurantPatch};
use crate::responses::{Created, Data, NoContent};
use crate::state::AppState;
use crate::validation::{self, REQUIRED_PROPERTIES};

/// List all restaurants
pub async fn list(State(state): State<AppState>) -> Result<Data<Vec<Restaurant>>> {
    let data = state.restaurants().list().await?;
    Ok(Data::new(data))
}

/// Get a restaurant by identifier
pub async fn read(ExistingRestaurant(restaurant): ExistingRestaurant) -> Data<Restaurant> {
    Data::new(restaurant)
}

/// Create a restaurant
pub async fn create(
    State(state): State<AppState>,
    Json(payload): Json<Payload>,
) -> Result<Created<Restaurant>> {
    validation::require_known_fields(&payload.data)?;
    validation::require_fields(&payload.data, &REQUIRED_PROPERTIES)?;

    let input: NewRestaurant = serde_json::from_value(Value::Object(payload.data))
        .map_err(|e| Error::BadRequest(format!("Invalid request body: {e}")))?;

    let restaurant = state.restaurants().create(input).await?;
    tracing::info!(restaurant_id = %restaurant.restaurant_id, "Restaurant created");

    let location = format!("/restaurants/{}", restaurant.restaurant_id);
    Ok(Created::new(restaurant).with_location(location))
}

/// Update a restaurant
///
/// Fields present in the body overwrite the stored record; the identifier
/// always stays the stored one.
pub async fn update(
    State(state): State<AppState>,
    ExistingRestaurant(existing): ExistingRestaurant,
    Json(payload): Json<Payload>,
) -> Result<Data<Restaurant>> {
    let patch: RestaurantPatch = serde_json::from_value(Value::Object(payload.data))
        .map_err(|e| Error::BadRequest(format!("Invalid request body: {e}")))?;

    let data = state.restaurants().update(existing.merged(patch)).await?;
    Ok(Data::new(data))
}

/// Delete a restaurant
pub async fn destroy(
    State(state): State<AppState>,
    ExistingRestaurant(existing): ExistingRestaurant,
) -> Result<NoContent> {
    state.restaurants().delete(&existing.restaurant_id).await?;
    tracing::info!(restaurant_id = %existing.restaurant_id, "Restaurant deleted");
    Ok(NoContent)
}
