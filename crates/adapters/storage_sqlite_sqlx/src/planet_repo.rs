//! `SQLite` implementation of [`PlanetRepository`].

use std::future::Future;

use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, Row, SqlitePool};

use holocron_app::ports::PlanetRepository;
use holocron_domain::error::HolocronError;
use holocron_domain::id::PlanetId;
use holocron_domain::planet::{NewPlanet, Planet};

use crate::error::StorageError;

/// Wrapper for converting database rows into domain [`Planet`].
struct Wrapper(Planet);

impl Wrapper {
    fn maybe(value: Option<Self>) -> Option<Planet> {
        value.map(|w| w.0)
    }
}

impl<'r> FromRow<'r, SqliteRow> for Wrapper {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        let stars: i64 = row.try_get("stars")?;

        Ok(Self(Planet {
            id: PlanetId::new(row.try_get("id")?),
            name: row.try_get("name")?,
            climate: row.try_get("climate")?,
            diameter: row.try_get("diameter")?,
            gravity: row.try_get("gravity")?,
            population: row.try_get("population")?,
            terrain: row.try_get("terrain")?,
            stars: u64::try_from(stars).map_err(|err| sqlx::Error::Decode(Box::new(err)))?,
        }))
    }
}

const INSERT: &str = "INSERT INTO planets (name, climate, diameter, gravity, population, terrain) VALUES (?, ?, ?, ?, ?, ?)";
const SELECT_BY_ID: &str = "SELECT p.*, (SELECT COUNT(*) FROM favorite_planets f WHERE f.planet_id = p.id) AS stars FROM planets p WHERE p.id = ?";
const SELECT_ALL: &str = "SELECT p.*, (SELECT COUNT(*) FROM favorite_planets f WHERE f.planet_id = p.id) AS stars FROM planets p ORDER BY p.id";
const DELETE_BY_ID: &str = "DELETE FROM planets WHERE id = ?";

/// `SQLite`-backed planet repository.
pub struct SqlitePlanetRepository {
    pool: SqlitePool,
}

impl SqlitePlanetRepository {
    /// Create a new repository using the given connection pool.
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

impl PlanetRepository for SqlitePlanetRepository {
    fn create(
        &self,
        planet: NewPlanet,
    ) -> impl Future<Output = Result<Planet, HolocronError>> + Send {
        let pool = self.pool.clone();
        async move {
            let result = sqlx::query(INSERT)
                .bind(&planet.name)
                .bind(&planet.climate)
                .bind(&planet.diameter)
                .bind(&planet.gravity)
                .bind(&planet.population)
                .bind(&planet.terrain)
                .execute(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(planet.into_planet(PlanetId::new(result.last_insert_rowid())))
        }
    }

    fn get_by_id(
        &self,
        id: PlanetId,
    ) -> impl Future<Output = Result<Option<Planet>, HolocronError>> + Send {
        let pool = self.pool.clone();
        async move {
            let row: Option<Wrapper> = sqlx::query_as(SELECT_BY_ID)
                .bind(id.get())
                .fetch_optional(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(Wrapper::maybe(row))
        }
    }

    fn get_all(&self) -> impl Future<Output = Result<Vec<Planet>, HolocronError>> + Send {
        let pool = self.pool.clone();
        async move {
            let rows: Vec<Wrapper> = sqlx::query_as(SELECT_ALL)
                .fetch_all(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(rows.into_iter().map(|w| w.0).collect())
        }
    }

    fn delete(&self, id: PlanetId) -> impl Future<Output = Result<bool, HolocronError>> + Send {
        let pool = self.pool.clone();
        async move {
            let result = sqlx::query(DELETE_BY_ID)
                .bind(id.get())
                .execute(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(result.rows_affected() > 0)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pool::memory_pool;
    use holocron_domain::error::ConflictError;

    fn tatooine() -> NewPlanet {
        NewPlanet::builder()
            .name("Tatooine")
            .climate("arid")
            .diameter("10465")
            .gravity("1")
            .population("200000")
            .terrain("desert")
            .build()
            .unwrap()
    }

    #[tokio::test]
    async fn should_create_and_retrieve_planet_with_zero_stars() {
        let repo = SqlitePlanetRepository::new(memory_pool().await);

        let created = repo.create(tatooine()).await.unwrap();
        let fetched = repo.get_by_id(created.id).await.unwrap().unwrap();

        assert_eq!(fetched, created);
        assert_eq!(fetched.stars, 0);
    }

    #[tokio::test]
    async fn should_reject_duplicate_planet_name() {
        let repo = SqlitePlanetRepository::new(memory_pool().await);
        repo.create(tatooine()).await.unwrap();

        let result = repo.create(tatooine()).await;
        assert!(matches!(
            result,
            Err(HolocronError::Conflict(ConflictError::Duplicate { ref field })) if field == "name"
        ));
    }

    #[tokio::test]
    async fn should_count_favorites_as_stars() {
        let pool = memory_pool().await;
        let repo = SqlitePlanetRepository::new(pool.clone());
        let planet = repo.create(tatooine()).await.unwrap();
        sqlx::query(
            "INSERT INTO users (username, email, password_hash) VALUES ('a', 'a@x', 'h'), ('b', 'b@x', 'h')",
        )
        .execute(&pool)
        .await
        .unwrap();
        sqlx::query("INSERT INTO favorite_planets (planet_id, user_id) VALUES (?, 1), (?, 2), (?, 2)")
            .bind(planet.id.get())
            .bind(planet.id.get())
            .bind(planet.id.get())
            .execute(&pool)
            .await
            .unwrap();

        let fetched = repo.get_by_id(planet.id).await.unwrap().unwrap();
        assert_eq!(fetched.stars, 3);
        assert_eq!(repo.get_all().await.unwrap()[0].stars, 3);
    }

    #[tokio::test]
    async fn should_return_none_after_delete() {
        let repo = SqlitePlanetRepository::new(memory_pool().await);
        let created = repo.create(tatooine()).await.unwrap();

        assert!(repo.delete(created.id).await.unwrap());
        assert!(repo.get_by_id(created.id).await.unwrap().is_none());
        assert!(!repo.delete(created.id).await.unwrap());
    }
}
