//! `SQLite` implementation of [`PersonRepository`].

use std::future::Future;

use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, Row, SqlitePool};

use holocron_app::ports::PersonRepository;
use holocron_domain::error::HolocronError;
use holocron_domain::id::PersonId;
use holocron_domain::people::{NewPerson, Person};

use crate::error::StorageError;

/// Wrapper for converting database rows into domain [`Person`].
struct Wrapper(Person);

impl Wrapper {
    fn maybe(value: Option<Self>) -> Option<Person> {
        value.map(|w| w.0)
    }
}

impl<'r> FromRow<'r, SqliteRow> for Wrapper {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        let stars: i64 = row.try_get("stars")?;

        Ok(Self(Person {
            id: PersonId::new(row.try_get("id")?),
            name: row.try_get("name")?,
            gender: row.try_get("gender")?,
            eye_color: row.try_get("eye_color")?,
            skin_color: row.try_get("skin_color")?,
            hair_color: row.try_get("hair_color")?,
            birth_year: row.try_get("birth_year")?,
            stars: u64::try_from(stars).map_err(|err| sqlx::Error::Decode(Box::new(err)))?,
        }))
    }
}

const INSERT: &str = "INSERT INTO people (name, gender, eye_color, skin_color, hair_color, birth_year) VALUES (?, ?, ?, ?, ?, ?)";
const SELECT_BY_ID: &str = "SELECT p.*, (SELECT COUNT(*) FROM favorite_people f WHERE f.people_id = p.id) AS stars FROM people p WHERE p.id = ?";
const SELECT_ALL: &str = "SELECT p.*, (SELECT COUNT(*) FROM favorite_people f WHERE f.people_id = p.id) AS stars FROM people p ORDER BY p.id";
const DELETE_BY_ID: &str = "DELETE FROM people WHERE id = ?";

/// `SQLite`-backed people repository.
pub struct SqlitePersonRepository {
    pool: SqlitePool,
}

impl SqlitePersonRepository {
    /// Create a new repository using the given connection pool.
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

impl PersonRepository for SqlitePersonRepository {
    fn create(
        &self,
        person: NewPerson,
    ) -> impl Future<Output = Result<Person, HolocronError>> + Send {
        let pool = self.pool.clone();
        async move {
            let result = sqlx::query(INSERT)
                .bind(&person.name)
                .bind(&person.gender)
                .bind(&person.eye_color)
                .bind(&person.skin_color)
                .bind(&person.hair_color)
                .bind(&person.birth_year)
                .execute(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(person.into_person(PersonId::new(result.last_insert_rowid())))
        }
    }

    fn get_by_id(
        &self,
        id: PersonId,
    ) -> impl Future<Output = Result<Option<Person>, HolocronError>> + Send {
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

    fn get_all(&self) -> impl Future<Output = Result<Vec<Person>, HolocronError>> + Send {
        let pool = self.pool.clone();
        async move {
            let rows: Vec<Wrapper> = sqlx::query_as(SELECT_ALL)
                .fetch_all(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(rows.into_iter().map(|w| w.0).collect())
        }
    }

    fn delete(&self, id: PersonId) -> impl Future<Output = Result<bool, HolocronError>> + Send {
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

    fn yoda() -> NewPerson {
        NewPerson::builder()
            .name("Yoda")
            .gender("male")
            .eye_color("brown")
            .skin_color("green")
            .hair_color("white")
            .birth_year("896BBY")
            .build()
            .unwrap()
    }

    #[tokio::test]
    async fn should_create_and_retrieve_person() {
        let repo = SqlitePersonRepository::new(memory_pool().await);

        let created = repo.create(yoda()).await.unwrap();
        let fetched = repo.get_by_id(created.id).await.unwrap().unwrap();

        assert_eq!(fetched, created);
        assert_eq!(fetched.skin_color, "green");
    }

    #[tokio::test]
    async fn should_allow_people_with_the_same_name() {
        let repo = SqlitePersonRepository::new(memory_pool().await);
        repo.create(yoda()).await.unwrap();
        repo.create(yoda()).await.unwrap();

        assert_eq!(repo.get_all().await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn should_return_none_when_person_not_found() {
        let repo = SqlitePersonRepository::new(memory_pool().await);
        assert!(repo.get_by_id(PersonId::new(3)).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn should_delete_person_when_exists() {
        let repo = SqlitePersonRepository::new(memory_pool().await);
        let created = repo.create(yoda()).await.unwrap();

        assert!(repo.delete(created.id).await.unwrap());
        assert!(repo.get_by_id(created.id).await.unwrap().is_none());
    }
}
