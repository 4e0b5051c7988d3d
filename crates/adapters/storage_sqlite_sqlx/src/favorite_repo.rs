//! `SQLite` implementation of [`FavoriteRepository`].

use std::future::Future;

use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, Row, SqlitePool};

use holocron_app::ports::FavoriteRepository;
use holocron_domain::error::HolocronError;
use holocron_domain::favorite::{FavoritePerson, FavoritePlanet};
use holocron_domain::id::{FavoritePersonId, FavoritePlanetId, PersonId, PlanetId, UserId};

use crate::error::StorageError;

struct PlanetRow(FavoritePlanet);

impl<'r> FromRow<'r, SqliteRow> for PlanetRow {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        Ok(Self(FavoritePlanet {
            id: FavoritePlanetId::new(row.try_get("id")?),
            planet: PlanetId::new(row.try_get("planet_id")?),
            user: UserId::new(row.try_get("user_id")?),
        }))
    }
}

struct PersonRow(FavoritePerson);

impl<'r> FromRow<'r, SqliteRow> for PersonRow {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        Ok(Self(FavoritePerson {
            id: FavoritePersonId::new(row.try_get("id")?),
            person: PersonId::new(row.try_get("people_id")?),
            user: UserId::new(row.try_get("user_id")?),
        }))
    }
}

const INSERT_PLANET: &str = "INSERT INTO favorite_planets (planet_id, user_id) VALUES (?, ?)";
const INSERT_PERSON: &str = "INSERT INTO favorite_people (people_id, user_id) VALUES (?, ?)";

// Oldest match first; a NULL user matches any owner.
const DELETE_PLANET: &str = "DELETE FROM favorite_planets WHERE id = (SELECT id FROM favorite_planets WHERE planet_id = ? AND (? IS NULL OR user_id = ?) ORDER BY id LIMIT 1) RETURNING id";
const DELETE_PERSON: &str = "DELETE FROM favorite_people WHERE id = (SELECT id FROM favorite_people WHERE people_id = ? AND (? IS NULL OR user_id = ?) ORDER BY id LIMIT 1) RETURNING id";

const SELECT_PLANETS_BY_USER: &str =
    "SELECT id, planet_id, user_id FROM favorite_planets WHERE user_id = ? ORDER BY id";
const SELECT_PEOPLE_BY_USER: &str =
    "SELECT id, people_id, user_id FROM favorite_people WHERE user_id = ? ORDER BY id";

/// `SQLite`-backed favorite repository.
pub struct SqliteFavoriteRepository {
    pool: SqlitePool,
}

impl SqliteFavoriteRepository {
    /// Create a new repository using the given connection pool.
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

impl FavoriteRepository for SqliteFavoriteRepository {
    fn add_planet(
        &self,
        user: UserId,
        planet: PlanetId,
    ) -> impl Future<Output = Result<FavoritePlanet, HolocronError>> + Send {
        let pool = self.pool.clone();
        async move {
            let result = sqlx::query(INSERT_PLANET)
                .bind(planet.get())
                .bind(user.get())
                .execute(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(FavoritePlanet {
                id: FavoritePlanetId::new(result.last_insert_rowid()),
                planet,
                user,
            })
        }
    }

    fn add_person(
        &self,
        user: UserId,
        person: PersonId,
    ) -> impl Future<Output = Result<FavoritePerson, HolocronError>> + Send {
        let pool = self.pool.clone();
        async move {
            let result = sqlx::query(INSERT_PERSON)
                .bind(person.get())
                .bind(user.get())
                .execute(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(FavoritePerson {
                id: FavoritePersonId::new(result.last_insert_rowid()),
                person,
                user,
            })
        }
    }

    fn remove_planet(
        &self,
        planet: PlanetId,
        user: Option<UserId>,
    ) -> impl Future<Output = Result<Option<FavoritePlanetId>, HolocronError>> + Send {
        let pool = self.pool.clone();
        async move {
            let user = user.map(UserId::get);
            let removed: Option<(i64,)> = sqlx::query_as(DELETE_PLANET)
                .bind(planet.get())
                .bind(user)
                .bind(user)
                .fetch_optional(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(removed.map(|(id,)| FavoritePlanetId::new(id)))
        }
    }

    fn remove_person(
        &self,
        person: PersonId,
        user: Option<UserId>,
    ) -> impl Future<Output = Result<Option<FavoritePersonId>, HolocronError>> + Send {
        let pool = self.pool.clone();
        async move {
            let user = user.map(UserId::get);
            let removed: Option<(i64,)> = sqlx::query_as(DELETE_PERSON)
                .bind(person.get())
                .bind(user)
                .bind(user)
                .fetch_optional(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(removed.map(|(id,)| FavoritePersonId::new(id)))
        }
    }

    fn planets_of(
        &self,
        user: UserId,
    ) -> impl Future<Output = Result<Vec<FavoritePlanet>, HolocronError>> + Send {
        let pool = self.pool.clone();
        async move {
            let rows: Vec<PlanetRow> = sqlx::query_as(SELECT_PLANETS_BY_USER)
                .bind(user.get())
                .fetch_all(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(rows.into_iter().map(|r| r.0).collect())
        }
    }

    fn people_of(
        &self,
        user: UserId,
    ) -> impl Future<Output = Result<Vec<FavoritePerson>, HolocronError>> + Send {
        let pool = self.pool.clone();
        async move {
            let rows: Vec<PersonRow> = sqlx::query_as(SELECT_PEOPLE_BY_USER)
                .bind(user.get())
                .fetch_all(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(rows.into_iter().map(|r| r.0).collect())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pool::memory_pool;
    use holocron_domain::error::ConflictError;

    /// Seed two users, one planet and one person; all get id 1 or 2.
    async fn setup() -> (SqliteFavoriteRepository, SqlitePool) {
        let pool = memory_pool().await;
        for statement in [
            "INSERT INTO users (username, email, password_hash) VALUES ('finn', 'finn@fo.org', 'h'), ('poe', 'poe@ra.org', 'h')",
            "INSERT INTO planets (name, climate, diameter, gravity, population, terrain) VALUES ('Jakku', 'arid', '6400', '1', '84000', 'desert')",
            "INSERT INTO people (name, gender, eye_color, skin_color, hair_color, birth_year) VALUES ('BB-8', 'none', 'black', 'none', 'none', 'unknown')",
        ] {
            sqlx::query(statement).execute(&pool).await.unwrap();
        }
        (SqliteFavoriteRepository::new(pool.clone()), pool)
    }

    #[tokio::test]
    async fn should_add_and_list_favorites_for_user() {
        let (repo, _) = setup().await;

        let planet = repo.add_planet(UserId::new(1), PlanetId::new(1)).await.unwrap();
        let person = repo.add_person(UserId::new(1), PersonId::new(1)).await.unwrap();

        assert_eq!(repo.planets_of(UserId::new(1)).await.unwrap(), vec![planet]);
        assert_eq!(repo.people_of(UserId::new(1)).await.unwrap(), vec![person]);
        assert!(repo.planets_of(UserId::new(2)).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn should_reject_unknown_planet_as_conflict() {
        let (repo, _) = setup().await;

        let result = repo.add_planet(UserId::new(1), PlanetId::new(99)).await;
        assert!(matches!(
            result,
            Err(HolocronError::Conflict(ConflictError::UnknownReference))
        ));
    }

    #[tokio::test]
    async fn should_reject_unknown_user_as_conflict() {
        let (repo, _) = setup().await;

        let result = repo.add_person(UserId::new(0), PersonId::new(1)).await;
        assert!(matches!(
            result,
            Err(HolocronError::Conflict(ConflictError::UnknownReference))
        ));
    }

    #[tokio::test]
    async fn should_remove_oldest_match_when_unscoped() {
        let (repo, _) = setup().await;
        let first = repo.add_planet(UserId::new(2), PlanetId::new(1)).await.unwrap();
        repo.add_planet(UserId::new(1), PlanetId::new(1)).await.unwrap();

        let removed = repo.remove_planet(PlanetId::new(1), None).await.unwrap();

        assert_eq!(removed, Some(first.id));
        assert!(repo.planets_of(UserId::new(2)).await.unwrap().is_empty());
        assert_eq!(repo.planets_of(UserId::new(1)).await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn should_only_remove_scoped_users_favorite() {
        let (repo, _) = setup().await;
        repo.add_person(UserId::new(1), PersonId::new(1)).await.unwrap();
        let second = repo.add_person(UserId::new(2), PersonId::new(1)).await.unwrap();

        let removed = repo
            .remove_person(PersonId::new(1), Some(UserId::new(2)))
            .await
            .unwrap();

        assert_eq!(removed, Some(second.id));
        assert_eq!(repo.people_of(UserId::new(1)).await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn should_return_none_when_nothing_to_remove() {
        let (repo, _) = setup().await;
        repo.add_planet(UserId::new(1), PlanetId::new(1)).await.unwrap();

        let removed = repo
            .remove_planet(PlanetId::new(1), Some(UserId::new(2)))
            .await
            .unwrap();
        assert!(removed.is_none());
    }

    #[tokio::test]
    async fn should_cascade_when_user_is_deleted() {
        let (repo, pool) = setup().await;
        repo.add_planet(UserId::new(1), PlanetId::new(1)).await.unwrap();
        repo.add_person(UserId::new(1), PersonId::new(1)).await.unwrap();

        sqlx::query("DELETE FROM users WHERE id = 1")
            .execute(&pool)
            .await
            .unwrap();

        assert!(repo.planets_of(UserId::new(1)).await.unwrap().is_empty());
        assert!(repo.people_of(UserId::new(1)).await.unwrap().is_empty());
    }
}
