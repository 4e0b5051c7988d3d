//! JSON REST handlers for favorites.
//!
//! Removal is keyed on the target id. An optional `?user_id=` query
//! parameter restricts it to that user's favorites; without it the oldest
//! favorite of the target is removed.

use axum::Json;
use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};

use holocron_app::ports::{
    FavoriteRepository, PersonRepository, PlanetRepository, UserRepository,
};
use holocron_domain::error::ValidationError;
use holocron_domain::favorite::{FavoritePerson, FavoritePlanet, UserFavorites};
use holocron_domain::id::{PersonId, PlanetId, UserId};

use crate::api::parse_id;
use crate::error::ApiError;
use crate::state::AppState;

/// Request body for `POST /favorite/planet`.
#[derive(Deserialize)]
pub struct AddPlanetRequest {
    pub planet_id: Option<i64>,
    pub user_id: Option<i64>,
}

/// Request body for `POST /favorite/people`.
#[derive(Deserialize)]
pub struct AddPersonRequest {
    pub people_id: Option<i64>,
    pub user_id: Option<i64>,
}

/// Query string accepted by the delete endpoints.
#[derive(Deserialize)]
pub struct RemoveQuery {
    pub user_id: Option<String>,
}

impl RemoveQuery {
    fn user(&self) -> Result<Option<UserId>, ApiError> {
        self.user_id.as_deref().map(parse_id::<UserId>).transpose()
    }
}

#[derive(Serialize)]
pub struct Message {
    pub msg: &'static str,
}

fn required(value: Option<i64>, field: &'static str) -> Result<i64, ApiError> {
    value.ok_or_else(|| ValidationError::MissingField(field).into())
}

pub enum AddPlanetResponse {
    Created(Json<FavoritePlanet>),
}

impl IntoResponse for AddPlanetResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Created(json) => (StatusCode::CREATED, json).into_response(),
        }
    }
}

pub enum AddPersonResponse {
    Created(Json<FavoritePerson>),
}

impl IntoResponse for AddPersonResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Created(json) => (StatusCode::CREATED, json).into_response(),
        }
    }
}

pub enum RemoveResponse {
    Ok(Json<Message>),
}

impl IntoResponse for RemoveResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

impl RemoveResponse {
    fn deleted() -> Self {
        Self::Ok(Json(Message {
            msg: "Favorite deleted",
        }))
    }
}

pub enum ListResponse {
    Ok(Json<UserFavorites>),
}

impl IntoResponse for ListResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// `GET /user/favorites/{id}`
pub async fn list_for_user<UR, PLR, PER, FR>(
    State(state): State<AppState<UR, PLR, PER, FR>>,
    path: Result<Path<String>, PathRejection>,
) -> Result<ListResponse, ApiError>
where
    UR: UserRepository + Send + Sync + 'static,
    PLR: PlanetRepository + Send + Sync + 'static,
    PER: PersonRepository + Send + Sync + 'static,
    FR: FavoriteRepository + Send + Sync + 'static,
{
    let Path(id) = path?;
    let user_id: UserId = parse_id(&id)?;
    let favorites = state.favorite_service.user_favorites(user_id).await?;
    Ok(ListResponse::Ok(Json(favorites)))
}

/// `POST /favorite/planet`
pub async fn add_planet<UR, PLR, PER, FR>(
    State(state): State<AppState<UR, PLR, PER, FR>>,
    payload: Result<Json<AddPlanetRequest>, JsonRejection>,
) -> Result<AddPlanetResponse, ApiError>
where
    UR: UserRepository + Send + Sync + 'static,
    PLR: PlanetRepository + Send + Sync + 'static,
    PER: PersonRepository + Send + Sync + 'static,
    FR: FavoriteRepository + Send + Sync + 'static,
{
    let Json(req) = payload?;
    let planet = PlanetId::new(required(req.planet_id, "planet_id")?);
    let user = UserId::new(required(req.user_id, "user_id")?);
    let favorite = state
        .favorite_service
        .add_planet_favorite(user, planet)
        .await?;
    Ok(AddPlanetResponse::Created(Json(favorite)))
}

/// `POST /favorite/people`
pub async fn add_person<UR, PLR, PER, FR>(
    State(state): State<AppState<UR, PLR, PER, FR>>,
    payload: Result<Json<AddPersonRequest>, JsonRejection>,
) -> Result<AddPersonResponse, ApiError>
where
    UR: UserRepository + Send + Sync + 'static,
    PLR: PlanetRepository + Send + Sync + 'static,
    PER: PersonRepository + Send + Sync + 'static,
    FR: FavoriteRepository + Send + Sync + 'static,
{
    let Json(req) = payload?;
    let person = PersonId::new(required(req.people_id, "people_id")?);
    let user = UserId::new(required(req.user_id, "user_id")?);
    let favorite = state
        .favorite_service
        .add_person_favorite(user, person)
        .await?;
    Ok(AddPersonResponse::Created(Json(favorite)))
}

/// `DELETE /favorite/planet/{planet_id}`
pub async fn remove_planet<UR, PLR, PER, FR>(
    State(state): State<AppState<UR, PLR, PER, FR>>,
    path: Result<Path<String>, PathRejection>,
    query: Result<Query<RemoveQuery>, QueryRejection>,
) -> Result<RemoveResponse, ApiError>
where
    UR: UserRepository + Send + Sync + 'static,
    PLR: PlanetRepository + Send + Sync + 'static,
    PER: PersonRepository + Send + Sync + 'static,
    FR: FavoriteRepository + Send + Sync + 'static,
{
    let Path(planet_id) = path?;
    let planet: PlanetId = parse_id(&planet_id)?;
    let Query(query) = query?;
    let user = query.user()?;
    state
        .favorite_service
        .remove_planet_favorite(planet, user)
        .await?;
    Ok(RemoveResponse::deleted())
}

/// `DELETE /favorite/people/{people_id}`
pub async fn remove_person<UR, PLR, PER, FR>(
    State(state): State<AppState<UR, PLR, PER, FR>>,
    path: Result<Path<String>, PathRejection>,
    query: Result<Query<RemoveQuery>, QueryRejection>,
) -> Result<RemoveResponse, ApiError>
where
    UR: UserRepository + Send + Sync + 'static,
    PLR: PlanetRepository + Send + Sync + 'static,
    PER: PersonRepository + Send + Sync + 'static,
    FR: FavoriteRepository + Send + Sync + 'static,
{
    let Path(people_id) = path?;
    let person: PersonId = parse_id(&people_id)?;
    let Query(query) = query?;
    let user = query.user()?;
    state
        .favorite_service
        .remove_person_favorite(person, user)
        .await?;
    Ok(RemoveResponse::deleted())
}
