//! Storage-specific error type wrapping sqlx errors.

use holocron_domain::error::{ConflictError, HolocronError};

/// Errors originating from the `SQLite` storage layer.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// A query or connection failed.
    #[error("database error")]
    Database(#[from] sqlx::Error),

    /// Failed to run migrations.
    #[error("migration error")]
    Migration(#[from] sqlx::migrate::MigrateError),
}

impl StorageError {
    /// Classify a constraint violation, if this is one.
    fn conflict(&self) -> Option<ConflictError> {
        let Self::Database(err) = self else {
            return None;
        };
        let db_err = err.as_database_error()?;
        if db_err.is_unique_violation() {
            return Some(ConflictError::Duplicate {
                field: violated_column(db_err.message()),
            });
        }
        if db_err.is_foreign_key_violation() {
            return Some(ConflictError::UnknownReference);
        }
        None
    }
}

/// Extract the column from `UNIQUE constraint failed: users.email`.
fn violated_column(message: &str) -> String {
    message
        .rsplit(|c: char| c == '.' || c == ' ')
        .next()
        .filter(|column| !column.is_empty())
        .unwrap_or("value")
        .to_string()
}

impl From<StorageError> for HolocronError {
    fn from(err: StorageError) -> Self {
        match err.conflict() {
            Some(conflict) => {
                tracing::debug!(error = %err, ?conflict, "constraint violation");
                Self::Conflict(conflict)
            }
            None => Self::Storage(Box::new(err)),
        }
    }
}
