//! JSON REST handlers for users.

use axum::Json;
use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Deserialize;

use holocron_app::ports::{
    FavoriteRepository, PersonRepository, PlanetRepository, UserRepository,
};
use holocron_domain::id::UserId;
use holocron_domain::user::{NewUser, User};

use crate::api::parse_id;
use crate::error::ApiError;
use crate::state::AppState;

/// Request body for creating a user.
///
/// Every field is optional here so a missing key is reported as a
/// validation error instead of a deserialization failure.
#[derive(Deserialize)]
pub struct CreateUserRequest {
    pub username: Option<String>,
    pub name: Option<String>,
    pub lastname: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
}

impl CreateUserRequest {
    fn into_new_user(self) -> Result<NewUser, ApiError> {
        let mut builder = NewUser::builder();
        if let Some(username) = self.username {
            builder = builder.username(username);
        }
        if let Some(name) = self.name {
            builder = builder.name(name);
        }
        if let Some(lastname) = self.lastname {
            builder = builder.lastname(lastname);
        }
        if let Some(email) = self.email {
            builder = builder.email(email);
        }
        if let Some(password) = self.password {
            builder = builder.password(password);
        }
        Ok(builder.build()?)
    }
}

/// Possible responses from the list endpoint.
pub enum ListResponse {
    Ok(Json<Vec<User>>),
}

impl IntoResponse for ListResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
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

/// Possible responses from the delete endpoint.
pub enum DeleteResponse {
    NoContent,
}

impl IntoResponse for DeleteResponse {
    fn into_response(self) -> Response {
        match self {
            Self::NoContent => StatusCode::NO_CONTENT.into_response(),
        }
    }
}

/// `GET /user`
pub async fn list<UR, PLR, PER, FR>(
    State(state): State<AppState<UR, PLR, PER, FR>>,
) -> Result<ListResponse, ApiError>
where
    UR: UserRepository + Send + Sync + 'static,
    PLR: PlanetRepository + Send + Sync + 'static,
    PER: PersonRepository + Send + Sync + 'static,
    FR: FavoriteRepository + Send + Sync + 'static,
{
    let users = state.user_service.list_users().await?;
    Ok(ListResponse::Ok(Json(users)))
}

/// `GET /user/{id}`
pub async fn get<UR, PLR, PER, FR>(
    State(state): State<AppState<UR, PLR, PER, FR>>,
    path: Result<Path<String>, PathRejection>,
) -> Result<GetResponse, ApiError>
where
    UR: UserRepository + Send + Sync + 'static,
    PLR: PlanetRepository + Send + Sync + 'static,
    PER: PersonRepository + Send + Sync + 'static,
    FR: FavoriteRepository + Send + Sync + 'static,
{
    let Path(id) = path?;
    let user_id: UserId = parse_id(&id)?;
    let user = state.user_service.get_user(user_id).await?;
    Ok(GetResponse::Ok(Json(user)))
}

/// `POST /user`
pub async fn create<UR, PLR, PER, FR>(
    State(state): State<AppState<UR, PLR, PER, FR>>,
    payload: Result<Json<CreateUserRequest>, JsonRejection>,
) -> Result<CreateResponse, ApiError>
where
    UR: UserRepository + Send + Sync + 'static,
    PLR: PlanetRepository + Send + Sync + 'static,
    PER: PersonRepository + Send + Sync + 'static,
    FR: FavoriteRepository + Send + Sync + 'static,
{
    let Json(req) = payload?;
    let user = req.into_new_user()?;
    let created = state.user_service.create_user(user).await?;
    Ok(CreateResponse::Created(Json(created)))
}

/// `DELETE /user/{id}`
pub async fn delete<UR, PLR, PER, FR>(
    State(state): State<AppState<UR, PLR, PER, FR>>,
    path: Result<Path<String>, PathRejection>,
) -> Result<DeleteResponse, ApiError>
where
    UR: UserRepository + Send + Sync + 'static,
    PLR: PlanetRepository + Send + Sync + 'static,
    PER: PersonRepository + Send + Sync + 'static,
    FR: FavoriteRepository + Send + Sync + 'static,
{
    let Path(id) = path?;
    let user_id: UserId = parse_id(&id)?;
    state.user_service.delete_user(user_id).await?;
    Ok(DeleteResponse::NoContent)
}
