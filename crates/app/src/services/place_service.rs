//! Place service: use-cases for managing places and their owners' lists.
//!
//! Creating and deleting a place touches two records: the place itself and
//! the owning user's place list. The store offers no transaction spanning
//! both, so each of these operations runs as a short saga: when the second
//! write fails, the first one is undone before the error is returned.

use places_domain::error::{Action, ForbiddenError, NotFoundError, PlacesError};
use places_domain::id::{PlaceId, UserId};
use places_domain::place::{Place, PlaceUpdate};
use places_domain::user::User;

use crate::ports::{ImageStore, PlaceRepository, UserRepository};

/// Input for [`PlaceService::create_place`].
#[derive(Debug, Clone)]
pub struct NewPlace {
    pub title: String,
    pub description: String,
    pub address: String,
    pub creator: UserId,
}

/// Application service for place CRUD with ownership checks.
pub struct PlaceService<P, U, I> {
    places: P,
    users: U,
    images: I,
}

impl<P, U, I> PlaceService<P, U, I>
where
    P: PlaceRepository,
    U: UserRepository,
    I: ImageStore,
{
    /// Create a new service backed by the given repositories and image store.
    pub fn new(places: P, users: U, images: I) -> Self {
        Self {
            places,
            users,
            images,
        }
    }

    /// Look up a place by id, returning an error if not found.
    ///
    /// # Errors
    ///
    /// Returns [`PlacesError::NotFound`] when no place with `id` exists,
    /// or a storage error from the repository.
    #[tracing::instrument(skip(self))]
    pub async fn get_place(&self, id: PlaceId) -> Result<Place, PlacesError> {
        self.places
            .get_by_id(id)
            .await?
            .ok_or_else(|| NotFoundError::place(id).into())
    }

    /// List the places created by `owner`.
    ///
    /// An owner without places, or an unknown owner, yields an empty list.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    #[tracing::instrument(skip(self))]
    pub async fn list_places_by_owner(&self, owner: UserId) -> Result<Vec<Place>, PlacesError> {
        self.places.find_by_creator(owner).await
    }

    /// Create a place for `input.creator` with an already stored image.
    ///
    /// Only the creator may add places to their own list. On success the
    /// new place id is appended to the creator's list. On any failure the
    /// image at `image` is removed, since nothing will reference it.
    ///
    /// # Errors
    ///
    /// Returns [`PlacesError::Forbidden`] if `actor` is not the creator,
    /// [`PlacesError::Validation`] if the input breaks an invariant,
    /// [`PlacesError::NotFound`] if the creator does not exist, or a storage
    /// error from either repository.
    #[tracing::instrument(skip(self, input), fields(creator = %input.creator))]
    pub async fn create_place(
        &self,
        input: NewPlace,
        image: String,
        actor: UserId,
    ) -> Result<Place, PlacesError> {
        match self.insert_place(input, &image, actor).await {
            Ok(place) => {
                tracing::info!(place_id = %place.id, "place created");
                Ok(place)
            }
            Err(err) => {
                self.discard_image(&image).await;
                Err(err)
            }
        }
    }

    /// Replace the title and description of a place owned by `actor`.
    ///
    /// # Errors
    ///
    /// Returns [`PlacesError::NotFound`] if the place does not exist,
    /// [`PlacesError::Forbidden`] if `actor` is not its creator,
    /// [`PlacesError::Validation`] if the new values are rejected, or a
    /// storage error from the repository.
    #[tracing::instrument(skip(self, update))]
    pub async fn update_place(
        &self,
        id: PlaceId,
        update: PlaceUpdate,
        actor: UserId,
    ) -> Result<Place, PlacesError> {
        let mut place = self.get_place(id).await?;
        place.authorize(actor, Action::Edit)?;
        place.apply(update)?;
        self.places.update(place).await
    }

    /// Delete a place owned by `actor` and drop it from the owner's list.
    ///
    /// The image file is removed last and only best-effort: a failure there
    /// is logged and the deletion still succeeds.
    ///
    /// # Errors
    ///
    /// Returns [`PlacesError::NotFound`] if the place or its owner does not
    /// exist, [`PlacesError::Forbidden`] if `actor` is not the creator, or a
    /// storage error from either repository.
    #[tracing::instrument(skip(self))]
    pub async fn delete_place(&self, id: PlaceId, actor: UserId) -> Result<Place, PlacesError> {
        let place = self.get_place(id).await?;
        place.authorize(actor, Action::Delete)?;

        let owner = self.find_user(place.creator).await?;
        let mut detached = owner.clone();
        if !detached.remove_place(place.id) {
            tracing::warn!(
                place_id = %place.id,
                user_id = %owner.id,
                "place missing from its owner's list"
            );
        }
        self.users.update(detached).await?;
        tracing::debug!(place_id = %place.id, user_id = %owner.id, "place detached from owner");

        if let Err(err) = self.places.delete(place.id).await {
            self.restore_owner(owner, place.id).await;
            return Err(err);
        }
        tracing::info!(place_id = %place.id, "place deleted");

        self.discard_image(&place.image).await;
        Ok(place)
    }

    async fn find_user(&self, id: UserId) -> Result<User, PlacesError> {
        self.users
            .get_by_id(id)
            .await?
            .ok_or_else(|| NotFoundError::user(id).into())
    }

    async fn insert_place(
        &self,
        input: NewPlace,
        image: &str,
        actor: UserId,
    ) -> Result<Place, PlacesError> {
        if actor != input.creator {
            return Err(ForbiddenError::create_for(input.creator).into());
        }

        let place = Place::builder()
            .title(input.title)
            .description(input.description)
            .address(input.address)
            .image(image)
            .creator(input.creator)
            .build()?;

        let mut owner = self.find_user(input.creator).await?;
        let place = self.places.create(place).await?;
        tracing::debug!(place_id = %place.id, user_id = %owner.id, "place stored");

        owner.add_place(place.id);
        if let Err(err) = self.users.update(owner).await {
            self.remove_orphan(place.id, input.creator).await;
            return Err(err);
        }
        Ok(place)
    }

    /// Undo a place insert whose owner could not be updated.
    async fn remove_orphan(&self, place_id: PlaceId, user_id: UserId) {
        match self.places.delete(place_id).await {
            Ok(()) => {
                tracing::debug!(%place_id, %user_id, "orphaned place removed");
            }
            Err(err) => {
                tracing::error!(
                    %place_id,
                    %user_id,
                    error = %err,
                    "failed to remove orphaned place"
                );
            }
        }
    }

    /// Put back the owner's list as it was before a failed delete.
    async fn restore_owner(&self, owner: User, place_id: PlaceId) {
        let user_id = owner.id;
        match self.users.update(owner).await {
            Ok(_) => {
                tracing::debug!(%place_id, %user_id, "owner's place list restored");
            }
            Err(err) => {
                tracing::error!(
                    %place_id,
                    %user_id,
                    error = %err,
                    "failed to restore owner's place list"
                );
            }
        }
    }

    async fn discard_image(&self, path: &str) {
        if let Err(err) = self.images.remove(path).await {
            tracing::warn!(path, error = %err, "failed to remove image");
        }
    }
}
