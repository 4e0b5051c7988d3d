//! JSON REST handlers for planets.

use axum::Json;
use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Deserialize;

use holocron_app::ports::{
    FavoriteRepository, PersonRepository, PlanetRepository, UserRepository,
};
use holocron_domain::id::PlanetId;
use holocron_domain::planet::{NewPlanet, Planet};

use crate::api::parse_id;
use crate::error::ApiError;
use crate::state::AppState;

/// Request body for creating a planet.
#[derive(Deserialize)]
pub struct CreatePlanetRequest {
    pub name: Option<String>,
    pub climate: Option<String>,
    pub diameter: Option<String>,
    pub gravity: Option<String>,
    pub population: Option<String>,
    pub terrain: Option<String>,
}

impl CreatePlanetRequest {
    fn into_new_planet(self) -> Result<NewPlanet, ApiError> {
        let mut builder = NewPlanet::builder();
        if let Some(name) = self.name {
            builder = builder.name(name);
        }
        if let Some(climate) = self.climate {
            builder = builder.climate(climate);
        }
        if let Some(diameter) = self.diameter {
            builder = builder.diameter(diameter);
        }
        if let Some(gravity) = self.gravity {
            builder = builder.gravity(gravity);
        }
        if let Some(population) = self.population {
            builder = builder.population(population);
        }
        if let Some(terrain) = self.terrain {
            builder = builder.terrain(terrain);
        }
        Ok(builder.build()?)
    }
}

pub enum ListResponse {
    Ok(Json<Vec<Planet>>),
}

impl IntoResponse for ListResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

pub enum GetResponse {
    Ok(Json<Planet>),
}

impl IntoResponse for GetResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

pub enum CreateResponse {
    Created(Json<Planet>),
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

/// `GET /planets`
pub async fn list<UR, PLR, PER, FR>(
    State(state): State<AppState<UR, PLR, PER, FR>>,
) -> Result<ListResponse, ApiError>
where
    UR: UserRepository + Send + Sync + 'static,
    PLR: PlanetRepository + Send + Sync + 'static,
    PER: PersonRepository + Send + Sync + 'static,
    FR: FavoriteRepository + Send + Sync + 'static,
{
    let planets = state.planet_service.list_planets().await?;
    Ok(ListResponse::Ok(Json(planets)))
}

/// `GET /planets/{id}`
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
    let planet_id: PlanetId = parse_id(&id)?;
    let planet = state.planet_service.get_planet(planet_id).await?;
    Ok(GetResponse::Ok(Json(planet)))
}

/// `POST /planets`
pub async fn create<UR, PLR, PER, FR>(
    State(state): State<AppState<UR, PLR, PER, FR>>,
    payload: Result<Json<CreatePlanetRequest>, JsonRejection>,
) -> Result<CreateResponse, ApiError>
where
    UR: UserRepository + Send + Sync + 'static,
    PLR: PlanetRepository + Send + Sync + 'static,
    PER: PersonRepository + Send + Sync + 'static,
    FR: FavoriteRepository + Send + Sync + 'static,
{
    let Json(req) = payload?;
    let planet = req.into_new_planet()?;
    let created = state.planet_service.create_planet(planet).await?;
    Ok(CreateResponse::Created(Json(created)))
}

/// `DELETE /planets/{id}`
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
    let planet_id: PlanetId = parse_id(&id)?;
    state.planet_service.delete_planet(planet_id).await?;
    Ok(DeleteResponse::NoContent)
}
