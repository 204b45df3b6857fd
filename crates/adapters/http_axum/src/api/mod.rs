//! JSON REST API handler modules.

#[allow(clippy::missing_errors_doc)]
pub mod places;
#[allow(clippy::missing_errors_doc)]
pub mod users;

use std::str::FromStr;

use axum::Router;
use axum::routing::{get, post};

use places_app::ports::{ImageStore, PlaceRepository, UserRepository};
use places_domain::error::{PlacesError, ValidationError};

use crate::state::AppState;

/// Build the `/api` sub-router.
pub fn routes<P, U, I>() -> Router<AppState<P, U, I>>
where
    P: PlaceRepository + Send + Sync + 'static,
    U: UserRepository + Send + Sync + 'static,
    I: ImageStore + Send + Sync + 'static,
{
    Router::new()
        // Places
        .route("/places", post(places::create::<P, U, I>))
        .route(
            "/places/{id}",
            get(places::get::<P, U, I>)
                .patch(places::update::<P, U, I>)
                .delete(places::delete::<P, U, I>),
        )
        .route("/places/user/{id}", get(places::list_by_user::<P, U, I>))
        // Users
        .route("/users", post(users::create::<P, U, I>))
        .route("/users/{id}", get(users::get::<P, U, I>))
}

/// Parse an identifier taken from the request path or body.
fn parse_id<T: FromStr>(raw: &str) -> Result<T, PlacesError> {
    T::from_str(raw.trim()).map_err(|_| ValidationError::InvalidId(raw.to_string()).into())
}
