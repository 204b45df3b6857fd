//! Acting user extraction.
//!
//! Authentication happens upstream of this service; whatever verified the
//! caller forwards its user id in the [`ACTOR_HEADER`] header.

use std::str::FromStr;

use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use places_domain::id::UserId;

use crate::error::ApiError;

/// Header carrying the authenticated user id.
pub const ACTOR_HEADER: &str = "x-user-id";

/// The authenticated user performing the request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Actor(pub UserId);

impl<S> FromRequestParts<S> for Actor
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let raw = parts
            .headers
            .get(ACTOR_HEADER)
            .and_then(|value| value.to_str().ok())
            .ok_or(ApiError::Unauthenticated)?;
        let id = UserId::from_str(raw.trim()).map_err(|_| ApiError::Unauthenticated)?;
        Ok(Self(id))
    }
}
