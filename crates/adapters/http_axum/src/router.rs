//! Axum router assembly.

use std::path::Path;

use axum::Router;
use axum::routing::get;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use places_app::ports::{ImageStore, PlaceRepository, UserRepository};

use crate::state::AppState;

/// URL prefix under which stored images are served.
pub const IMAGES_ROUTE: &str = "/uploads/images";

/// Build the top-level axum [`Router`].
///
/// Nests API routes under `/api` and serves the files in `images_dir` under
/// [`IMAGES_ROUTE`]. Includes a [`TraceLayer`] that logs each HTTP
/// request/response at the `DEBUG` level using the `tracing` ecosystem.
pub fn build<P, U, I>(state: AppState<P, U, I>, images_dir: impl AsRef<Path>) -> Router
where
    P: PlaceRepository + Send + Sync + 'static,
    U: UserRepository + Send + Sync + 'static,
    I: ImageStore + Send + Sync + 'static,
{
    Router::new()
        .route("/health", get(health_check))
        .nest("/api", crate::api::routes())
        .nest_service(IMAGES_ROUTE, ServeDir::new(images_dir.as_ref()))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health_check() -> &'static str {
    "OK"
}
