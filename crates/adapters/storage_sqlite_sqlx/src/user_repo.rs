//! `SQLite` implementation of [`UserRepository`].

use std::future::Future;

use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, Row, SqlitePool};

use holocron_app::ports::{PasswordHash, UserRepository};
use holocron_domain::error::HolocronError;
use holocron_domain::id::UserId;
use holocron_domain::user::{NewUser, User};

use crate::error::StorageError;

/// Wrapper for converting database rows into domain [`User`].
struct Wrapper(User);

impl Wrapper {
    fn maybe(value: Option<Self>) -> Option<User> {
        value.map(|w| w.0)
    }
}

impl<'r> FromRow<'r, SqliteRow> for Wrapper {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        Ok(Self(User {
            id: UserId::new(row.try_get("id")?),
            username: row.try_get("username")?,
            name: row.try_get("name")?,
            lastname: row.try_get("lastname")?,
            email: row.try_get("email")?,
        }))
    }
}

const INSERT: &str = "INSERT INTO users (username, name, lastname, email, password_hash) VALUES (?, ?, ?, ?, ?)";
const SELECT_BY_ID: &str = "SELECT id, username, name, lastname, email FROM users WHERE id = ?";
const SELECT_ALL: &str = "SELECT id, username, name, lastname, email FROM users ORDER BY id";
const DELETE_BY_ID: &str = "DELETE FROM users WHERE id = ?";

/// `SQLite`-backed user repository.
pub struct SqliteUserRepository {
    pool: SqlitePool,
}

impl SqliteUserRepository {
    /// Create a new repository using the given connection pool.
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

impl UserRepository for SqliteUserRepository {
    fn create(
        &self,
        user: NewUser,
        password_hash: PasswordHash,
    ) -> impl Future<Output = Result<User, HolocronError>> + Send {
        let pool = self.pool.clone();
        async move {
            let result = sqlx::query(INSERT)
                .bind(&user.username)
                .bind(&user.name)
                .bind(&user.lastname)
                .bind(&user.email)
                .bind(&password_hash.0)
                .execute(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(user.into_user(UserId::new(result.last_insert_rowid())))
        }
    }

    fn get_by_id(
        &self,
        id: UserId,
    ) -> impl Future<Output = Result<Option<User>, HolocronError>> + Send {
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

    fn get_all(&self) -> impl Future<Output = Result<Vec<User>, HolocronError>> + Send {
        let pool = self.pool.clone();
        async move {
            let rows: Vec<Wrapper> = sqlx::query_as(SELECT_ALL)
                .fetch_all(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(rows.into_iter().map(|w| w.0).collect())
        }
    }

    fn delete(&self, id: UserId) -> impl Future<Output = Result<bool, HolocronError>> + Send {
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

    fn hash() -> PasswordHash {
        PasswordHash("$argon2id$v=19$stub".to_string())
    }

    fn rey() -> NewUser {
        NewUser::builder()
            .username("rey")
            .email("rey@jakku.net")
            .password("scavenger")
            .build()
            .unwrap()
    }

    #[tokio::test]
    async fn should_create_and_retrieve_user() {
        let repo = SqliteUserRepository::new(memory_pool().await);

        let created = repo.create(rey(), hash()).await.unwrap();
        let fetched = repo.get_by_id(created.id).await.unwrap().unwrap();

        assert_eq!(fetched, created);
        assert!(fetched.name.is_none());
    }

    #[tokio::test]
    async fn should_store_hash_not_plaintext() {
        let pool = memory_pool().await;
        let repo = SqliteUserRepository::new(pool.clone());
        let created = repo.create(rey(), hash()).await.unwrap();

        let (stored,): (String,) = sqlx::query_as("SELECT password_hash FROM users WHERE id = ?")
            .bind(created.id.get())
            .fetch_one(&pool)
            .await
            .unwrap();
        assert_eq!(stored, hash().0);
    }

    #[tokio::test]
    async fn should_report_duplicate_email_as_conflict() {
        let repo = SqliteUserRepository::new(memory_pool().await);
        repo.create(rey(), hash()).await.unwrap();

        let mut other = rey();
        other.username = "kylo".to_string();
        let result = repo.create(other, hash()).await;

        assert!(matches!(
            result,
            Err(HolocronError::Conflict(ConflictError::Duplicate { ref field })) if field == "email"
        ));
    }

    #[tokio::test]
    async fn should_report_duplicate_username_as_conflict() {
        let repo = SqliteUserRepository::new(memory_pool().await);
        repo.create(rey(), hash()).await.unwrap();

        let mut other = rey();
        other.email = "other@jakku.net".to_string();
        let result = repo.create(other, hash()).await;

        assert!(matches!(
            result,
            Err(HolocronError::Conflict(ConflictError::Duplicate { ref field })) if field == "username"
        ));
    }

    #[tokio::test]
    async fn should_return_false_when_deleting_missing_user() {
        let repo = SqliteUserRepository::new(memory_pool().await);
        assert!(!repo.delete(UserId::new(12)).await.unwrap());
    }

    #[tokio::test]
    async fn should_delete_user_when_exists() {
        let repo = SqliteUserRepository::new(memory_pool().await);
        let created = repo.create(rey(), hash()).await.unwrap();

        assert!(repo.delete(created.id).await.unwrap());
        assert!(repo.get_by_id(created.id).await.unwrap().is_none());
        assert!(repo.get_all().await.unwrap().is_empty());
    }
}
