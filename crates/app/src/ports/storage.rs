//! Storage port: repository traits for persistence.

use std::future::Future;

use places_domain::error::PlacesError;
use places_domain::id::{PlaceId, UserId};
use places_domain::place::Place;
use places_domain::user::User;

/// Repository for persisting and querying [`Place`]s.
pub trait PlaceRepository {
    /// Insert a new place.
    fn create(&self, place: Place) -> impl Future<Output = Result<Place, PlacesError>> + Send;

    /// Get a place by its unique identifier.
    fn get_by_id(
        &self,
        id: PlaceId,
    ) -> impl Future<Output = Result<Option<Place>, PlacesError>> + Send;

    /// Find every place created by `creator`, possibly none.
    fn find_by_creator(
        &self,
        creator: UserId,
    ) -> impl Future<Output = Result<Vec<Place>, PlacesError>> + Send;

    /// Overwrite an existing place.
    ///
    /// Fails with [`PlacesError::NotFound`] when no stored place has that id.
    fn update(&self, place: Place) -> impl Future<Output = Result<Place, PlacesError>> + Send;

    /// Delete a place by its unique identifier.
    fn delete(&self, id: PlaceId) -> impl Future<Output = Result<(), PlacesError>> + Send;
}

/// Repository for persisting and querying [`User`]s.
pub trait UserRepository {
    /// Insert a new user.
    fn create(&self, user: User) -> impl Future<Output = Result<User, PlacesError>> + Send;

    /// Get a user by its unique identifier.
    fn get_by_id(
        &self,
        id: UserId,
    ) -> impl Future<Output = Result<Option<User>, PlacesError>> + Send;

    /// Overwrite an existing user, including its place list.
    ///
    /// Fails with [`PlacesError::NotFound`] when no stored user has that id.
    fn update(&self, user: User) -> impl Future<Output = Result<User, PlacesError>> + Send;
}
