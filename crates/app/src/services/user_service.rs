//! User service: use-cases for managing user accounts.

use holocron_domain::error::{HolocronError, NotFoundError};
use holocron_domain::id::UserId;
use holocron_domain::user::{NewUser, User};

use crate::password;
use crate::ports::UserRepository;

/// Application service for user CRUD operations.
pub struct UserService<R> {
    repo: R,
}

impl<R: UserRepository> UserService<R> {
    /// Create a new service backed by the given repository.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Register a new user. The password is hashed before it reaches storage.
    ///
    /// # Errors
    ///
    /// Returns [`HolocronError::Validation`] if invariants fail,
    /// [`HolocronError::Conflict`] when the username or email is taken, or a
    /// storage error propagated from the repository.
    #[tracing::instrument(skip(self, user), fields(username = %user.username))]
    pub async fn create_user(&self, user: NewUser) -> Result<User, HolocronError> {
        user.validate()?;
        let password_hash = password::hash_blocking(user.password.clone()).await?;
        let created = self.repo.create(user, password_hash).await?;
        tracing::info!(user_id = %created.id, "user created");
        Ok(created)
    }

    /// Look up a user by id, returning an error if not found.
    ///
    /// # Errors
    ///
    /// Returns [`HolocronError::NotFound`] when no user with `id` exists,
    /// or a storage error from the repository.
    pub async fn get_user(&self, id: UserId) -> Result<User, HolocronError> {
        self.repo.get_by_id(id).await?.ok_or_else(|| not_found(id))
    }

    /// List all users.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn list_users(&self) -> Result<Vec<User>, HolocronError> {
        self.repo.get_all().await
    }

    /// Delete a user by id.
    ///
    /// # Errors
    ///
    /// Returns [`HolocronError::NotFound`] when no user with `id` exists,
    /// or a storage error from the repository.
    #[tracing::instrument(skip(self))]
    pub async fn delete_user(&self, id: UserId) -> Result<(), HolocronError> {
        if self.repo.delete(id).await? {
            Ok(())
        } else {
            Err(not_found(id))
        }
    }
}

fn not_found(id: UserId) -> HolocronError {
    NotFoundError {
        entity: "User",
        id: id.to_string(),
    }
    .into()
}
