//! Place: a location record owned by exactly one user.

use serde::{Deserialize, Serialize};

use crate::error::{Action, ForbiddenError, PlacesError, ValidationError};
use crate::id::{PlaceId, UserId};

/// Minimum number of characters accepted for a description.
pub const DESCRIPTION_MIN_LEN: usize = 5;

/// A location record with descriptive fields, an uploaded image and an owner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Place {
    pub id: PlaceId,
    pub title: String,
    pub description: String,
    pub address: String,
    /// Path of the stored image file.
    pub image: String,
    pub creator: UserId,
}

impl Place {
    /// Create a builder for constructing a [`Place`].
    #[must_use]
    pub fn builder() -> PlaceBuilder {
        PlaceBuilder::default()
    }

    /// Check domain invariants.
    ///
    /// # Errors
    ///
    /// Returns [`PlacesError::Validation`] when the title, address or image
    /// is blank, or when the description is too short.
    pub fn validate(&self) -> Result<(), PlacesError> {
        if self.title.trim().is_empty() {
            return Err(ValidationError::EmptyTitle.into());
        }
        if self.description.trim().chars().count() < DESCRIPTION_MIN_LEN {
            return Err(ValidationError::DescriptionTooShort {
                min: DESCRIPTION_MIN_LEN,
            }
            .into());
        }
        if self.address.trim().is_empty() {
            return Err(ValidationError::EmptyAddress.into());
        }
        if self.image.trim().is_empty() {
            return Err(ValidationError::EmptyImage.into());
        }
        Ok(())
    }

    /// Whether `user` created this place.
    #[must_use]
    pub fn is_owned_by(&self, user: UserId) -> bool {
        self.creator == user
    }

    /// Make sure `actor` may perform `action` on this place.
    ///
    /// # Errors
    ///
    /// Returns [`PlacesError::Forbidden`] unless `actor` is the creator.
    pub fn authorize(&self, actor: UserId, action: Action) -> Result<(), PlacesError> {
        if self.is_owned_by(actor) {
            return Ok(());
        }
        Err(ForbiddenError::on_place(action, self.id).into())
    }

    /// Replace the editable fields and revalidate.
    ///
    /// The place is left untouched when the new values are rejected.
    ///
    /// # Errors
    ///
    /// Returns [`PlacesError::Validation`] if the new values break an invariant.
    pub fn apply(&mut self, update: PlaceUpdate) -> Result<(), PlacesError> {
        let candidate = Self {
            title: update.title,
            description: update.description,
            ..self.clone()
        };
        candidate.validate()?;
        *self = candidate;
        Ok(())
    }
}

/// The fields a creator may change after creation.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PlaceUpdate {
    pub title: String,
    pub description: String,
}

/// Step-by-step builder for [`Place`].
#[derive(Debug, Default)]
pub struct PlaceBuilder {
    title: Option<String>,
    description: Option<String>,
    address: Option<String>,
    image: Option<String>,
    creator: Option<UserId>,
}

impl PlaceBuilder {
    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    #[must_use]
    pub fn address(mut self, address: impl Into<String>) -> Self {
        self.address = Some(address.into());
        self
    }

    #[must_use]
    pub fn image(mut self, image: impl Into<String>) -> Self {
        self.image = Some(image.into());
        self
    }

    #[must_use]
    pub fn creator(mut self, creator: UserId) -> Self {
        self.creator = Some(creator);
        self
    }

    /// Consume the builder, validate, and return a [`Place`].
    ///
    /// # Errors
    ///
    /// Returns [`PlacesError::Validation`] if the creator is missing or any
    /// field breaks an invariant.
    pub fn build(self) -> Result<Place, PlacesError> {
        let creator = self
            .creator
            .ok_or(ValidationError::MissingField("creator"))?;
        let place = Place {
            id: PlaceId::new(),
            title: self.title.unwrap_or_default(),
            description: self.description.unwrap_or_default(),
            address: self.address.unwrap_or_default(),
            image: self.image.unwrap_or_default(),
            creator,
        };
        place.validate()?;
        Ok(place)
    }
}
