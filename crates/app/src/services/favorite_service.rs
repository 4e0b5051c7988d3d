//! Favorite service: use-cases linking users to planets and people.
//!
//! Removing a favorite by target alone deletes the oldest matching row,
//! whoever owns it; pass a user to scope the removal to that user's rows.

use holocron_domain::error::{HolocronError, NotFoundError};
use holocron_domain::favorite::{FavoritePerson, FavoritePlanet, UserFavorites};
use holocron_domain::id::{PersonId, PlanetId, UserId};

use crate::ports::FavoriteRepository;

/// Application service for favorites.
pub struct FavoriteService<R> {
    repo: R,
}

impl<R: FavoriteRepository> FavoriteService<R> {
    /// Create a new service backed by the given repository.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Record that `user` favorites `planet`.
    ///
    /// # Errors
    ///
    /// Returns [`HolocronError::Conflict`] when the user or planet does not
    /// exist, or a storage error from the repository.
    #[tracing::instrument(skip(self))]
    pub async fn add_planet_favorite(
        &self,
        user: UserId,
        planet: PlanetId,
    ) -> Result<FavoritePlanet, HolocronError> {
        self.repo.add_planet(user, planet).await
    }

    /// Record that `user` favorites `person`.
    ///
    /// # Errors
    ///
    /// Returns [`HolocronError::Conflict`] when the user or person does not
    /// exist, or a storage error from the repository.
    #[tracing::instrument(skip(self))]
    pub async fn add_person_favorite(
        &self,
        user: UserId,
        person: PersonId,
    ) -> Result<FavoritePerson, HolocronError> {
        self.repo.add_person(user, person).await
    }

    /// Remove one favorite pointing at `planet`.
    ///
    /// # Errors
    ///
    /// Returns [`HolocronError::NotFound`] when no favorite matches, or a
    /// storage error from the repository.
    #[tracing::instrument(skip(self))]
    pub async fn remove_planet_favorite(
        &self,
        planet: PlanetId,
        user: Option<UserId>,
    ) -> Result<(), HolocronError> {
        match self.repo.remove_planet(planet, user).await? {
            Some(removed) => {
                tracing::debug!(favorite_id = %removed, "planet favorite removed");
                Ok(())
            }
            None => Err(not_found(planet.to_string())),
        }
    }

    /// Remove one favorite pointing at `person`.
    ///
    /// # Errors
    ///
    /// Returns [`HolocronError::NotFound`] when no favorite matches, or a
    /// storage error from the repository.
    #[tracing::instrument(skip(self))]
    pub async fn remove_person_favorite(
        &self,
        person: PersonId,
        user: Option<UserId>,
    ) -> Result<(), HolocronError> {
        match self.repo.remove_person(person, user).await? {
            Some(removed) => {
                tracing::debug!(favorite_id = %removed, "person favorite removed");
                Ok(())
            }
            None => Err(not_found(person.to_string())),
        }
    }

    /// Everything `user` has favorited. An unknown user simply has none.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn user_favorites(&self, user: UserId) -> Result<UserFavorites, HolocronError> {
        Ok(UserFavorites {
            favorite_planet: self.repo.planets_of(user).await?,
            favorite_people: self.repo.people_of(user).await?,
        })
    }
}

fn not_found(id: String) -> HolocronError {
    NotFoundError {
        entity: "Favorite",
        id,
    }
    .into()
}
