//! HTTP error response mapping.
//!
//! Every failure leaves a handler as an [`ApiError`] and is rendered here as
//! a status code plus a fixed, user-facing message. Handlers never build
//! error responses themselves.

use axum::Json;
use axum::extract::multipart::{MultipartError, MultipartRejection};
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use places_domain::error::{Action, PlacesError, Resource};

/// Shown for every input the service refuses, whatever the detail.
const INVALID_INPUTS: &str = "Invalid inputs passed, please check your data.";

/// JSON error body returned by API endpoints.
#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

/// The use-case a handler was running when it failed.
///
/// Storage failures carry no detail worth showing to clients, so the
/// message rendered for them depends only on the operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    GetPlace,
    ListPlaces,
    CreatePlace,
    UpdatePlace,
    DeletePlace,
    GetUser,
    CreateUser,
}

impl Operation {
    fn storage_message(self) -> &'static str {
        match self {
            Self::GetPlace => "Something went wrong, could not find a place.",
            Self::ListPlaces => "Fetching places failed, please try again later.",
            Self::CreatePlace => "Creating place failed, please try again.",
            Self::UpdatePlace => "Something went wrong, could not update place.",
            Self::DeletePlace => "Deleting place failed, please try again.",
            Self::GetUser => "Something went wrong, could not find a user.",
            Self::CreateUser => "Creating user failed, please try again.",
        }
    }
}

/// Maps [`PlacesError`] and request-level failures to HTTP responses.
#[derive(Debug)]
pub enum ApiError {
    /// A use-case returned an error.
    Domain {
        operation: Operation,
        error: PlacesError,
    },
    /// The request carried no usable actor identity.
    Unauthenticated,
    /// The request body could not be read into the expected shape.
    InvalidBody(String),
}

impl ApiError {
    /// Tag errors coming out of `operation`, for use with `map_err`.
    pub fn during(operation: Operation) -> impl Fn(PlacesError) -> Self + Copy {
        move |error| Self::Domain { operation, error }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(err: JsonRejection) -> Self {
        Self::InvalidBody(err.body_text())
    }
}

impl From<MultipartRejection> for ApiError {
    fn from(err: MultipartRejection) -> Self {
        Self::InvalidBody(err.body_text())
    }
}

impl From<MultipartError> for ApiError {
    fn from(err: MultipartError) -> Self {
        Self::InvalidBody(err.body_text())
    }
}

fn domain_response(operation: Operation, error: &PlacesError) -> (StatusCode, String) {
    match error {
        PlacesError::Validation(err) => {
            tracing::debug!(?operation, error = %err, "rejected invalid input");
            (StatusCode::UNPROCESSABLE_ENTITY, INVALID_INPUTS.to_string())
        }
        PlacesError::NotFound(err) => {
            let message = match err.resource {
                Resource::Place => "Could not find a place for the provided id.",
                Resource::User => "Could not find user for the provided id.",
            };
            (StatusCode::NOT_FOUND, message.to_string())
        }
        PlacesError::Forbidden(err) => {
            let message = match err.action {
                Action::Create => "You are not allowed to create places for this user.",
                Action::Edit => "You are not allowed to edit this place.",
                Action::Delete => "You are not allowed to delete this place.",
            };
            (StatusCode::FORBIDDEN, message.to_string())
        }
        PlacesError::Storage(source) => {
            tracing::error!(?operation, error = %source, "storage error");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                operation.storage_message().to_string(),
            )
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            Self::Domain { operation, error } => domain_response(*operation, error),
            Self::Unauthenticated => (
                StatusCode::UNAUTHORIZED,
                "Authentication failed!".to_string(),
            ),
            Self::InvalidBody(detail) => {
                tracing::debug!(%detail, "rejected unreadable body");
                (StatusCode::UNPROCESSABLE_ENTITY, INVALID_INPUTS.to_string())
            }
        };

        (status, Json(ErrorBody { error: message })).into_response()
    }
}
