//! JSON REST handlers for people, served under `/peoples`.

use axum::Json;
use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Deserialize;

use holocron_app::ports::{
    FavoriteRepository, PersonRepository, PlanetRepository, UserRepository,
};
use holocron_domain::id::PersonId;
use holocron_domain::people::{NewPerson, Person};

use crate::api::parse_id;
use crate::error::ApiError;
use crate::state::AppState;

#[derive(Deserialize)]
pub struct CreatePersonRequest {
    pub name: Option<String>,
    pub gender: Option<String>,
    pub eye_color: Option<String>,
    pub skin_color: Option<String>,
    pub hair_color: Option<String>,
    pub birth_year: Option<String>,
}

impl CreatePersonRequest {
    fn into_new_person(self) -> Result<NewPerson, ApiError> {
        let mut builder = NewPerson::builder();
        if let Some(name) = self.name {
            builder = builder.name(name);
        }
        if let Some(gender) = self.gender {
            builder = builder.gender(gender);
        }
        if let Some(eye_color) = self.eye_color {
            builder = builder.eye_color(eye_color);
        }
        if let Some(skin_color) = self.skin_color {
            builder = builder.skin_color(skin_color);
        }
        if let Some(hair_color) = self.hair_color {
            builder = builder.hair_color(hair_color);
        }
        if let Some(birth_year) = self.birth_year {
            builder = builder.birth_year(birth_year);
        }
        Ok(builder.build()?)
    }
}

pub enum ListResponse {
    Ok(Json<Vec<Person>>),
}

impl IntoResponse for ListResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

pub enum GetResponse {
    Ok(Json<Person>),
}

impl IntoResponse for GetResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

pub enum CreateResponse {
    Created(Json<Person>),
}

impl IntoResponse for CreateResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Created(json) => (StatusCode::CREATED, json).into_response(),
        }
    }
}

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

/// `GET /peoples`
pub async fn list<UR, PLR, PER, FR>(
    State(state): State<AppState<UR, PLR, PER, FR>>,
) -> Result<ListResponse, ApiError>
where
    UR: UserRepository + Send + Sync + 'static,
    PLR: PlanetRepository + Send + Sync + 'static,
    PER: PersonRepository + Send + Sync + 'static,
    FR: FavoriteRepository + Send + Sync + 'static,
{
    let people = state.person_service.list_people().await?;
    Ok(ListResponse::Ok(Json(people)))
}

/// `GET /peoples/{id}`
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
    let person_id: PersonId = parse_id(&id)?;
    let person = state.person_service.get_person(person_id).await?;
    Ok(GetResponse::Ok(Json(person)))
}

/// `POST /peoples`
pub async fn create<UR, PLR, PER, FR>(
    State(state): State<AppState<UR, PLR, PER, FR>>,
    payload: Result<Json<CreatePersonRequest>, JsonRejection>,
) -> Result<CreateResponse, ApiError>
where
    UR: UserRepository + Send + Sync + 'static,
    PLR: PlanetRepository + Send + Sync + 'static,
    PER: PersonRepository + Send + Sync + 'static,
    FR: FavoriteRepository + Send + Sync + 'static,
{
    let Json(req) = payload?;
    let person = req.into_new_person()?;
    let created = state.person_service.create_person(person).await?;
    Ok(CreateResponse::Created(Json(created)))
}

/// `DELETE /peoples/{id}`
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
    let person_id: PersonId = parse_id(&id)?;
    state.person_service.delete_person(person_id).await?;
    Ok(DeleteResponse::NoContent)
}
