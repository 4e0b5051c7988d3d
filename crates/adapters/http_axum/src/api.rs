//! JSON REST API handler modules.

#[allow(clippy::missing_errors_doc)]
pub mod favorites;
#[allow(clippy::missing_errors_doc)]
pub mod people;
#[allow(clippy::missing_errors_doc)]
pub mod planets;
#[allow(clippy::missing_errors_doc)]
pub mod users;

use std::str::FromStr;

use axum::Router;
use axum::routing::{delete, get, post};

use holocron_app::ports::{
    FavoriteRepository, PersonRepository, PlanetRepository, UserRepository,
};
use holocron_domain::error::ValidationError;

use crate::error::ApiError;
use crate::state::AppState;

/// Parse a path or query segment into a typed id.
fn parse_id<T: FromStr>(raw: &str) -> Result<T, ApiError> {
    raw.parse()
        .map_err(|_| ValidationError::InvalidId(raw.to_string()).into())
}

/// Build the API router.
pub fn routes<UR, PLR, PER, FR>() -> Router<AppState<UR, PLR, PER, FR>>
where
    UR: UserRepository + Send + Sync + 'static,
    PLR: PlanetRepository + Send + Sync + 'static,
    PER: PersonRepository + Send + Sync + 'static,
    FR: FavoriteRepository + Send + Sync + 'static,
{
    Router::new()
        // Users
        .route(
            "/user",
            get(users::list::<UR, PLR, PER, FR>).post(users::create::<UR, PLR, PER, FR>),
        )
        .route(
            "/user/{id}",
            get(users::get::<UR, PLR, PER, FR>).delete(users::delete::<UR, PLR, PER, FR>),
        )
        .route(
            "/user/favorites/{id}",
            get(favorites::list_for_user::<UR, PLR, PER, FR>),
        )
        // Planets
        .route(
            "/planets",
            get(planets::list::<UR, PLR, PER, FR>).post(planets::create::<UR, PLR, PER, FR>),
        )
        .route(
            "/planets/{id}",
            get(planets::get::<UR, PLR, PER, FR>).delete(planets::delete::<UR, PLR, PER, FR>),
        )
        // People
        .route(
            "/peoples",
            get(people::list::<UR, PLR, PER, FR>).post(people::create::<UR, PLR, PER, FR>),
        )
        .route(
            "/peoples/{id}",
            get(people::get::<UR, PLR, PER, FR>).delete(people::delete::<UR, PLR, PER, FR>),
        )
        // Favorites
        .route(
            "/favorite/planet",
            post(favorites::add_planet::<UR, PLR, PER, FR>),
        )
        .route(
            "/favorite/planet/{planet_id}",
            delete(favorites::remove_planet::<UR, PLR, PER, FR>),
        )
        .route(
            "/favorite/people",
            post(favorites::add_person::<UR, PLR, PER, FR>),
        )
        .route(
            "/favorite/people/{people_id}",
            delete(favorites::remove_person::<UR, PLR, PER, FR>),
        )
}
