//! JSON REST handlers for places.

use axum::Json;
use axum::extract::multipart::MultipartRejection;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Multipart, Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use places_app::ports::{ImageStore, PlaceRepository, UserRepository};
use places_app::services::place_service::NewPlace;
use places_domain::error::{PlacesError, ValidationError};
use places_domain::id::{PlaceId, UserId};
use places_domain::place::{Place, PlaceUpdate};

use crate::actor::Actor;
use crate::api::parse_id;
use crate::error::{ApiError, Operation};
use crate::state::AppState;

/// Body wrapping a single place.
#[derive(Serialize)]
pub struct PlaceBody {
    pub place: Place,
}

/// Body acknowledging a write.
#[derive(Serialize)]
pub struct MessageBody {
    pub message: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub place: Option<Place>,
}

/// Possible responses from the get endpoint.
pub enum GetResponse {
    Ok(Json<PlaceBody>),
}

impl IntoResponse for GetResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the list-by-user endpoint.
pub enum ListResponse {
    Ok(Json<Vec<Place>>),
}

impl IntoResponse for ListResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the create endpoint.
pub enum CreateResponse {
    Created(Json<MessageBody>),
}

impl IntoResponse for CreateResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Created(json) => (StatusCode::CREATED, json).into_response(),
        }
    }
}

/// Possible responses from the update endpoint.
pub enum UpdateResponse {
    Ok(Json<PlaceBody>),
}

impl IntoResponse for UpdateResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the delete endpoint.
pub enum DeleteResponse {
    Deleted(Json<MessageBody>),
}

impl IntoResponse for DeleteResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Deleted(json) => json.into_response(),
        }
    }
}

/// Fields collected from the multipart create form.
#[derive(Default)]
struct CreateForm {
    title: Option<String>,
    description: Option<String>,
    address: Option<String>,
    creator: Option<String>,
    image: Option<(String, Vec<u8>)>,
}

impl CreateForm {
    async fn read(mut multipart: Multipart) -> Result<Self, ApiError> {
        let mut form = Self::default();
        while let Some(field) = multipart.next_field().await? {
            let name = field.name().unwrap_or_default().to_string();
            match name.as_str() {
                "title" => form.title = Some(field.text().await?),
                "description" => form.description = Some(field.text().await?),
                "address" => form.address = Some(field.text().await?),
                "creator" => form.creator = Some(field.text().await?),
                "image" => {
                    let file_name = field.file_name().unwrap_or_default().to_string();
                    let bytes = field.bytes().await?;
                    form.image = Some((file_name, bytes.to_vec()));
                }
                other => tracing::debug!(field = other, "ignoring unknown form field"),
            }
        }
        Ok(form)
    }

    /// Split into the use-case input and the image upload.
    fn into_parts(self) -> Result<(NewPlace, (String, Vec<u8>)), PlacesError> {
        let creator = self.creator.ok_or(ValidationError::MissingField("creator"))?;
        let creator: UserId = parse_id(&creator)?;
        let input = NewPlace {
            title: self.title.ok_or(ValidationError::MissingField("title"))?,
            description: self
                .description
                .ok_or(ValidationError::MissingField("description"))?,
            address: self.address.ok_or(ValidationError::MissingField("address"))?,
            creator,
        };
        let image = self.image.ok_or(ValidationError::MissingField("image"))?;
        Ok((input, image))
    }
}

/// `GET /api/places/:id`
pub async fn get<P, U, I>(
    State(state): State<AppState<P, U, I>>,
    Path(id): Path<String>,
) -> Result<GetResponse, ApiError>
where
    P: PlaceRepository + Send + Sync + 'static,
    U: UserRepository + Send + Sync + 'static,
    I: ImageStore + Send + Sync + 'static,
{
    let fail = ApiError::during(Operation::GetPlace);
    let place_id: PlaceId = parse_id(&id).map_err(fail)?;
    let place = state.place_service.get_place(place_id).await.map_err(fail)?;
    Ok(GetResponse::Ok(Json(PlaceBody { place })))
}

/// `GET /api/places/user/:id`
pub async fn list_by_user<P, U, I>(
    State(state): State<AppState<P, U, I>>,
    Path(id): Path<String>,
) -> Result<ListResponse, ApiError>
where
    P: PlaceRepository + Send + Sync + 'static,
    U: UserRepository + Send + Sync + 'static,
    I: ImageStore + Send + Sync + 'static,
{
    let fail = ApiError::during(Operation::ListPlaces);
    let user_id: UserId = parse_id(&id).map_err(fail)?;
    let places = state
        .place_service
        .list_places_by_owner(user_id)
        .await
        .map_err(fail)?;
    Ok(ListResponse::Ok(Json(places)))
}

/// `POST /api/places` (multipart form with an `image` file)
pub async fn create<P, U, I>(
    State(state): State<AppState<P, U, I>>,
    Actor(actor): Actor,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<CreateResponse, ApiError>
where
    P: PlaceRepository + Send + Sync + 'static,
    U: UserRepository + Send + Sync + 'static,
    I: ImageStore + Send + Sync + 'static,
{
    let fail = ApiError::during(Operation::CreatePlace);
    let (input, (file_name, bytes)) = CreateForm::read(multipart?)
        .await?
        .into_parts()
        .map_err(fail)?;

    let image = state
        .images
        .store(&file_name, bytes)
        .await
        .map_err(fail)?;
    let place = state
        .place_service
        .create_place(input, image, actor)
        .await
        .map_err(fail)?;
    Ok(CreateResponse::Created(Json(MessageBody {
        message: "Place created.",
        place: Some(place),
    })))
}

/// `PATCH /api/places/:id`
pub async fn update<P, U, I>(
    State(state): State<AppState<P, U, I>>,
    Actor(actor): Actor,
    Path(id): Path<String>,
    body: Result<Json<PlaceUpdate>, JsonRejection>,
) -> Result<UpdateResponse, ApiError>
where
    P: PlaceRepository + Send + Sync + 'static,
    U: UserRepository + Send + Sync + 'static,
    I: ImageStore + Send + Sync + 'static,
{
    let fail = ApiError::during(Operation::UpdatePlace);
    let place_id: PlaceId = parse_id(&id).map_err(fail)?;
    let Json(req) = body?;
    let place = state
        .place_service
        .update_place(place_id, req, actor)
        .await
        .map_err(fail)?;
    Ok(UpdateResponse::Ok(Json(PlaceBody { place })))
}

/// `DELETE /api/places/:id`
pub async fn delete<P, U, I>(
    State(state): State<AppState<P, U, I>>,
    Actor(actor): Actor,
    Path(id): Path<String>,
) -> Result<DeleteResponse, ApiError>
where
    P: PlaceRepository + Send + Sync + 'static,
    U: UserRepository + Send + Sync + 'static,
    I: ImageStore + Send + Sync + 'static,
{
    let fail = ApiError::during(Operation::DeletePlace);
    let place_id: PlaceId = parse_id(&id).map_err(fail)?;
    state
        .place_service
        .delete_place(place_id, actor)
        .await
        .map_err(fail)?;
    Ok(DeleteResponse::Deleted(Json(MessageBody {
        message: "Deleted place.",
        place: None,
    })))
}
