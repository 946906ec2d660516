//! Request guards
//!
//! [`ExistingRestaurant`] is the existence guard for item routes: it
//! resolves the path identifier to a stored record before the handler runs,
//! so handlers receive the record itself instead of re-fetching it. A
//! missing record (or an identifier that cannot name one) rejects with 404;
//! repository failures propagate to the error channel untouched.

use axum::extract::{FromRequestParts, Path};
use axum::http::request::Parts;
use uuid::Uuid;

use crate::error::Error;
use crate::models::Restaurant;
use crate::state::AppState;

const NOT_FOUND_MESSAGE: &str = "Restaurant cannot be found.";

/// The record matched by the request path, fetched before the handler runs
#[derive(Debug)]
pub struct ExistingRestaurant(pub Restaurant);

impl FromRequestParts<AppState> for ExistingRestaurant {
    type Rejection = Error;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        // An unparseable identifier cannot name a stored record
        let Ok(Path(restaurant_id)) = Path::<Uuid>::from_request_parts(parts, state).await else {
            return Err(Error::NotFound(NOT_FOUND_MESSAGE.to_string()));
        };

        match state.restaurants().find_by_id(&restaurant_id).await? {
            Some(restaurant) => Ok(Self(restaurant)),
            None => Err(Error::NotFound(NOT_FOUND_MESSAGE.to_string())),
        }
    }
}
