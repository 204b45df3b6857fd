//! User: the owner of places.

use serde::{Deserialize, Serialize};

use crate::error::{PlacesError, ValidationError};
use crate::id::{PlaceId, UserId};

/// A user and the ordered list of places they created.
///
/// Each place id appears at most once in `places`; the list is kept in
/// creation order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub name: String,
    pub places: Vec<PlaceId>,
}

impl User {
    /// Create a new user owning no places.
    ///
    /// # Errors
    ///
    /// Returns [`PlacesError::Validation`] when `name` is blank.
    pub fn new(name: impl Into<String>) -> Result<Self, PlacesError> {
        let user = Self {
            id: UserId::new(),
            name: name.into(),
            places: Vec::new(),
        };
        user.validate()?;
        Ok(user)
    }

    /// Check domain invariants.
    ///
    /// # Errors
    ///
    /// Returns [`PlacesError::Validation`] when `name` is blank.
    pub fn validate(&self) -> Result<(), PlacesError> {
        if self.name.trim().is_empty() {
            return Err(ValidationError::EmptyName.into());
        }
        Ok(())
    }

    /// Whether `place` is in this user's list.
    #[must_use]
    pub fn owns(&self, place: PlaceId) -> bool {
        self.places.contains(&place)
    }

    /// Append `place` unless it is already listed.
    pub fn add_place(&mut self, place: PlaceId) {
        if !self.owns(place) {
            self.places.push(place);
        }
    }

    /// Drop `place` from the list, returning whether it was there.
    pub fn remove_place(&mut self, place: PlaceId) -> bool {
        let before = self.places.len();
        self.places.retain(|id| *id != place);
        self.places.len() != before
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_start_without_places() {
        let user = User::new("Max").unwrap();
        assert!(user.places.is_empty());
    }

    #[test]
    fn should_reject_blank_name() {
        let result = User::new(" ");
        assert!(matches!(
            result,
            Err(PlacesError::Validation(ValidationError::EmptyName))
        ));
    }

    #[test]
    fn should_list_place_once_when_added_twice() {
        let mut user = User::new("Max").unwrap();
        let place = PlaceId::new();

        user.add_place(place);
        user.add_place(place);

        assert_eq!(user.places, vec![place]);
    }

    #[test]
    fn should_keep_insertion_order() {
        let mut user = User::new("Max").unwrap();
        let first = PlaceId::new();
        let second = PlaceId::new();

        user.add_place(first);
        user.add_place(second);

        assert_eq!(user.places, vec![first, second]);
    }

    #[test]
    fn should_report_removal_only_when_place_was_listed() {
        let mut user = User::new("Max").unwrap();
        let place = PlaceId::new();
        user.add_place(place);

        assert!(user.remove_place(place));
        assert!(!user.remove_place(place));
        assert!(user.places.is_empty());
    }
}
