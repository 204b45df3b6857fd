//! Common error types used across the workspace.
//!
//! Each layer defines its own typed errors and converts into
//! [`PlacesError`] via `From`. The HTTP adapter is the only place that
//! turns these into user-facing messages and status codes.

use std::error::Error;
use std::fmt;

/// Top-level error returned by services and ports.
#[derive(Debug, thiserror::Error)]
pub enum PlacesError {
    /// Input rejected by a domain invariant.
    #[error("validation error")]
    Validation(#[from] ValidationError),

    /// A referenced place or user does not exist.
    #[error("not found")]
    NotFound(#[from] NotFoundError),

    /// The acting user is not allowed to touch the resource.
    #[error("forbidden")]
    Forbidden(#[from] ForbiddenError),

    /// The underlying store failed.
    #[error("storage error")]
    Storage(#[source] Box<dyn Error + Send + Sync>),
}

/// Domain invariant violations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("title must not be empty")]
    EmptyTitle,
    #[error("description must be at least {min} characters long")]
    DescriptionTooShort { min: usize },
    #[error("address must not be empty")]
    EmptyAddress,
    #[error("image path must not be empty")]
    EmptyImage,
    #[error("name must not be empty")]
    EmptyName,
    #[error("invalid identifier: {0}")]
    InvalidId(String),
    #[error("unsupported image type: {0}")]
    UnsupportedImage(String),
    #[error("missing field: {0}")]
    MissingField(&'static str),
}

/// Kinds of records that can be missing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resource {
    Place,
    User,
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Place => f.write_str("place"),
            Self::User => f.write_str("user"),
        }
    }
}

/// A lookup by id found nothing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{resource} {id} not found")]
pub struct NotFoundError {
    pub resource: Resource,
    pub id: String,
}

impl NotFoundError {
    #[must_use]
    pub fn place(id: impl ToString) -> Self {
        Self {
            resource: Resource::Place,
            id: id.to_string(),
        }
    }

    #[must_use]
    pub fn user(id: impl ToString) -> Self {
        Self {
            resource: Resource::User,
            id: id.to_string(),
        }
    }
}

/// What the actor attempted when authorization failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Create,
    Edit,
    Delete,
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Create => f.write_str("create places for"),
            Self::Edit => f.write_str("edit"),
            Self::Delete => f.write_str("delete"),
        }
    }
}

/// The actor is not the user the place belongs to.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("not allowed to {action} {target}")]
pub struct ForbiddenError {
    pub action: Action,
    pub target: String,
}

impl ForbiddenError {
    /// `action` on an existing place was refused.
    #[must_use]
    pub fn on_place(action: Action, id: impl fmt::Display) -> Self {
        Self {
            action,
            target: format!("place {id}"),
        }
    }

    /// Creating a place on behalf of `owner` was refused.
    #[must_use]
    pub fn create_for(owner: impl fmt::Display) -> Self {
        Self {
            action: Action::Create,
            target: format!("user {owner}"),
        }
    }
}

impl PlacesError {
    /// Wrap any error coming out of a store.
    #[must_use]
    pub fn storage<E>(err: E) -> Self
    where
        E: Error + Send + Sync + 'static,
    {
        Self::Storage(Box::new(err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_convert_validation_error_via_from() {
        let err: PlacesError = ValidationError::EmptyTitle.into();
        assert!(matches!(
            err,
            PlacesError::Validation(ValidationError::EmptyTitle)
        ));
    }

    #[test]
    fn should_describe_missing_place() {
        let err = NotFoundError::place("abc");
        assert_eq!(err.resource, Resource::Place);
        assert_eq!(err.to_string(), "place abc not found");
    }

    #[test]
    fn should_describe_forbidden_action() {
        let err = ForbiddenError::on_place(Action::Delete, "p1");
        assert_eq!(err.to_string(), "not allowed to delete place p1");
    }

    #[test]
    fn should_describe_refused_create() {
        let err = ForbiddenError::create_for("u1");
        assert_eq!(err.action, Action::Create);
        assert_eq!(err.to_string(), "not allowed to create places for user u1");
    }

    #[test]
    fn should_keep_source_when_wrapping_storage_error() {
        let io = std::io::Error::other("disk on fire");
        let err = PlacesError::storage(io);
        let source = std::error::Error::source(&err).unwrap();
        assert_eq!(source.to_string(), "disk on fire");
    }
}
