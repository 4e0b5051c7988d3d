//! Shared application state for axum handlers.

use std::sync::Arc;

use holocron_app::ports::{
    FavoriteRepository, PersonRepository, PlanetRepository, UserRepository,
};
use holocron_app::services::favorite_service::FavoriteService;
use holocron_app::services::person_service::PersonService;
use holocron_app::services::planet_service::PlanetService;
use holocron_app::services::user_service::UserService;

/// Application state shared across all axum handlers.
///
/// Generic over the repository types to avoid dynamic dispatch.
/// `Clone` is implemented manually so the underlying types themselves do not
/// need to be `Clone`; only the `Arc` wrappers are cloned.
pub struct AppState<UR, PLR, PER, FR> {
    /// User CRUD service.
    pub user_service: Arc<UserService<UR>>,
    /// Planet CRUD service.
    pub planet_service: Arc<PlanetService<PLR>>,
    /// People CRUD service.
    pub person_service: Arc<PersonService<PER>>,
    /// Favorites service.
    pub favorite_service: Arc<FavoriteService<FR>>,
}

impl<UR, PLR, PER, FR> Clone for AppState<UR, PLR, PER, FR> {
    fn clone(&self) -> Self {
        Self {
            user_service: Arc::clone(&self.user_service),
            planet_service: Arc::clone(&self.planet_service),
            person_service: Arc::clone(&self.person_service),
            favorite_service: Arc::clone(&self.favorite_service),
        }
    }
}

impl<UR, PLR, PER, FR> AppState<UR, PLR, PER, FR>
where
    UR: UserRepository + Send + Sync + 'static,
    PLR: PlanetRepository + Send + Sync + 'static,
    PER: PersonRepository + Send + Sync + 'static,
    FR: FavoriteRepository + Send + Sync + 'static,
{
    /// Create a new application state from service instances.
    pub fn new(
        user_service: UserService<UR>,
        planet_service: PlanetService<PLR>,
        person_service: PersonService<PER>,
        favorite_service: FavoriteService<FR>,
    ) -> Self {
        Self {
            user_service: Arc::new(user_service),
            planet_service: Arc::new(planet_service),
            person_service: Arc::new(person_service),
            favorite_service: Arc::new(favorite_service),
        }
    }
}
