//! JSON REST handlers for users.

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Deserialize;

use places_app::ports::{ImageStore, PlaceRepository, UserRepository};
use places_domain::id::UserId;
use places_domain::user::User;

use crate::api::parse_id;
use crate::error::{ApiError, Operation};
use crate::state::AppState;

/// Request body for registering a user.
#[derive(Deserialize)]
pub struct CreateUserRequest {
    pub name: String,
}

/// Possible responses from the get endpoint.
pub enum GetResponse {
    Ok(Json<User>),
}

impl IntoResponse for GetResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the create endpoint.
pub enum CreateResponse {
    Created(Json<User>),
}

impl IntoResponse for CreateResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Created(json) => (StatusCode::CREATED, json).into_response(),
        }
    }
}

/// `GET /api/users/:id`
pub async fn get<P, U, I>(
    State(state): State<AppState<P, U, I>>,
    Path(id): Path<String>,
) -> Result<GetResponse, ApiError>
where
    P: PlaceRepository + Send + Sync + 'static,
    U: UserRepository + Send + Sync + 'static,
    I: ImageStore + Send + Sync + 'static,
{
    let fail = ApiError::during(Operation::GetUser);
    let user_id: UserId = parse_id(&id).map_err(fail)?;
    let user = state.user_service.get_user(user_id).await.map_err(fail)?;
    Ok(GetResponse::Ok(Json(user)))
}

/// `POST /api/users`
pub async fn create<P, U, I>(
    State(state): State<AppState<P, U, I>>,
    body: Result<Json<CreateUserRequest>, JsonRejection>,
) -> Result<CreateResponse, ApiError>
where
    P: PlaceRepository + Send + Sync + 'static,
    U: UserRepository + Send + Sync + 'static,
    I: ImageStore + Send + Sync + 'static,
{
    let fail = ApiError::during(Operation::CreateUser);
    let Json(req) = body?;
    let user = User::new(req.name).map_err(fail)?;
    let created = state.user_service.create_user(user).await.map_err(fail)?;
    Ok(CreateResponse::Created(Json(created)))
}
