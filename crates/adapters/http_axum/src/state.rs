//! Shared application state for axum handlers.

use std::sync::Arc;

use places_app::ports::{ImageStore, PlaceRepository, UserRepository};
use places_app::services::place_service::PlaceService;
use places_app::services::user_service::UserService;

/// Application state shared across all axum handlers.
///
/// Generic over the place repository, user repository and image store to
/// avoid dynamic dispatch. `Clone` is implemented manually so the underlying
/// types themselves do not need to be `Clone`; only the `Arc` wrappers are
/// cloned.
pub struct AppState<P, U, I> {
    /// Place use-cases.
    pub place_service: Arc<PlaceService<P, U, I>>,
    /// User registration and lookup.
    pub user_service: Arc<UserService<U>>,
    /// Where uploaded images are written before a place is created.
    pub images: Arc<I>,
}

impl<P, U, I> Clone for AppState<P, U, I> {
    fn clone(&self) -> Self {
        Self {
            place_service: Arc::clone(&self.place_service),
            user_service: Arc::clone(&self.user_service),
            images: Arc::clone(&self.images),
        }
    }
}

impl<P, U, I> AppState<P, U, I>
where
    P: PlaceRepository + Send + Sync + 'static,
    U: UserRepository + Send + Sync + 'static,
    I: ImageStore + Send + Sync + 'static,
{
    /// Create a new application state from service instances.
    pub fn new(
        place_service: PlaceService<P, U, I>,
        user_service: UserService<U>,
        images: I,
    ) -> Self {
        Self {
            place_service: Arc::new(place_service),
            user_service: Arc::new(user_service),
            images: Arc::new(images),
        }
    }
}
