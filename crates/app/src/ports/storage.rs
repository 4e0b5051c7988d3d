//! Storage port: repository traits for the catalogue resources.
//!
//! `delete` reports whether a row was removed so services can turn a miss
//! into [`NotFoundError`](holocron_domain::error::NotFoundError).

use std::future::Future;

use holocron_domain::error::HolocronError;
use holocron_domain::id::{PersonId, PlanetId, UserId};
use holocron_domain::people::{NewPerson, Person};
use holocron_domain::planet::{NewPlanet, Planet};
use holocron_domain::user::{NewUser, User};

/// Salted password hash in PHC string format, as stored at rest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PasswordHash(pub String);

/// Repository for persisting and querying [`User`]s.
pub trait UserRepository {
    /// Store a new user with its already-hashed password.
    fn create(
        &self,
        user: NewUser,
        password_hash: PasswordHash,
    ) -> impl Future<Output = Result<User, HolocronError>> + Send;

    /// Get a user by id.
    fn get_by_id(
        &self,
        id: UserId,
    ) -> impl Future<Output = Result<Option<User>, HolocronError>> + Send;

    /// Get all users.
    fn get_all(&self) -> impl Future<Output = Result<Vec<User>, HolocronError>> + Send;

    /// Delete a user and the favorites it owns.
    fn delete(&self, id: UserId) -> impl Future<Output = Result<bool, HolocronError>> + Send;
}

/// Repository for persisting and querying [`Planet`]s.
pub trait PlanetRepository {
    /// Store a new planet.
    fn create(
        &self,
        planet: NewPlanet,
    ) -> impl Future<Output = Result<Planet, HolocronError>> + Send;

    /// Get a planet by id, with its current star count.
    fn get_by_id(
        &self,
        id: PlanetId,
    ) -> impl Future<Output = Result<Option<Planet>, HolocronError>> + Send;

    /// Get all planets, with their current star counts.
    fn get_all(&self) -> impl Future<Output = Result<Vec<Planet>, HolocronError>> + Send;

    /// Delete a planet and the favorites pointing at it.
    fn delete(&self, id: PlanetId) -> impl Future<Output = Result<bool, HolocronError>> + Send;
}

/// Repository for persisting and querying [`Person`]s.
pub trait PersonRepository {
    /// Store a new person.
    fn create(
        &self,
        person: NewPerson,
    ) -> impl Future<Output = Result<Person, HolocronError>> + Send;

    /// Get a person by id, with the current star count.
    fn get_by_id(
        &self,
        id: PersonId,
    ) -> impl Future<Output = Result<Option<Person>, HolocronError>> + Send;

    /// Get all people, with their current star counts.
    fn get_all(&self) -> impl Future<Output = Result<Vec<Person>, HolocronError>> + Send;

    /// Delete a person and the favorites pointing at them.
    fn delete(&self, id: PersonId) -> impl Future<Output = Result<bool, HolocronError>> + Send;
}
