//! Favorite repository port: persistence for user → planet / person links.

use std::future::Future;

use holocron_domain::error::HolocronError;
use holocron_domain::favorite::{FavoritePerson, FavoritePlanet};
use holocron_domain::id::{FavoritePersonId, FavoritePlanetId, PersonId, PlanetId, UserId};

/// Repository for favorite join rows.
///
/// Inserts rely on foreign keys to reject unknown users and targets; such a
/// rejection surfaces as [`HolocronError::Conflict`].
pub trait FavoriteRepository {
    /// Link a user to a planet.
    fn add_planet(
        &self,
        user: UserId,
        planet: PlanetId,
    ) -> impl Future<Output = Result<FavoritePlanet, HolocronError>> + Send;

    /// Link a user to a person.
    fn add_person(
        &self,
        user: UserId,
        person: PersonId,
    ) -> impl Future<Output = Result<FavoritePerson, HolocronError>> + Send;

    /// Delete the oldest favorite for `planet`, restricted to `user` when given.
    ///
    /// Returns the id of the removed row, or `None` when nothing matched.
    fn remove_planet(
        &self,
        planet: PlanetId,
        user: Option<UserId>,
    ) -> impl Future<Output = Result<Option<FavoritePlanetId>, HolocronError>> + Send;

    /// Delete the oldest favorite for `person`, restricted to `user` when given.
    fn remove_person(
        &self,
        person: PersonId,
        user: Option<UserId>,
    ) -> impl Future<Output = Result<Option<FavoritePersonId>, HolocronError>> + Send;

    /// All planet favorites of a user, oldest first.
    fn planets_of(
        &self,
        user: UserId,
    ) -> impl Future<Output = Result<Vec<FavoritePlanet>, HolocronError>> + Send;

    /// All person favorites of a user, oldest first.
    fn people_of(
        &self,
        user: UserId,
    ) -> impl Future<Output = Result<Vec<FavoritePerson>, HolocronError>> + Send;
}
