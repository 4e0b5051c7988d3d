//! # holocron-adapter-storage-sqlite-sqlx
//!
//! `SQLite` persistence adapter using [sqlx](https://docs.rs/sqlx).
//!
//! ## Responsibilities
//! - Implement the repository port traits defined in `holocron-app::ports`
//! - Manage `SQLite` connection pool lifecycle
//! - Run database migrations (using sqlx embedded migrations)
//! - Map between domain types and database rows
//! - Derive `stars` from favorite rows at query time
//! - Translate unique / foreign-key violations into domain conflicts
//!
//! ## Dependency rule
//! Depends on `holocron-app` (for port traits) and `holocron-domain` (for domain types).
//! The `app` and `domain` crates must never reference this adapter.

mod error;
mod favorite_repo;
mod person_repo;
mod planet_repo;
mod pool;
mod user_repo;

pub use error::StorageError;
pub use favorite_repo::SqliteFavoriteRepository;
pub use person_repo::SqlitePersonRepository;
pub use planet_repo::SqlitePlanetRepository;
pub use pool::{Config, Database};
pub use user_repo::SqliteUserRepository;
