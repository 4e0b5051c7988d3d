//! # holocron-app
//!
//! Application layer: use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define **port traits** that adapters must implement (driven/outbound ports):
//!   - `UserRepository`: create/read/delete users (password arrives pre-hashed)
//!   - `PlanetRepository`: create/read/delete planets
//!   - `PersonRepository`: create/read/delete people
//!   - `FavoriteRepository`: add/remove/query favorite links
//! - Define **driving/inbound ports** as use-case structs:
//!   - `UserService`, `PlanetService`, `PersonService`: validate, persist, map misses to not-found
//!   - `FavoriteService`: link users to planets and people
//! - Hash passwords before they reach any adapter
//!
//! ## Dependency rule
//! Depends on `holocron-domain` only (plus `argon2` for password hashing).
//! Never imports adapter crates. Adapters depend on *this* crate, not the reverse.

pub mod password;
pub mod ports;
pub mod services;
