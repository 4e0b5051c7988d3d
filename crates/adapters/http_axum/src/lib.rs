//! # holocron-adapter-http-axum
//!
//! HTTP adapter built on [axum](https://docs.rs/axum).
//!
//! ## Responsibilities
//! - Serve the JSON API for users, planets, people and favorites
//!   (`/user`, `/planets`, `/peoples`, `/favorite/...`)
//! - Map HTTP requests into application service calls (driving adapter)
//! - Normalize every failure into a `{"code", "msg"}` JSON body
//! - Publish a route map at `/`
//!
//! ## Dependency rule
//! Depends on `holocron-app` (for port traits and services) and `holocron-domain`
//! (for domain types used in request/response mapping). Never leaks axum types
//! into the domain.

pub mod api;
pub mod error;
pub mod router;
pub mod sitemap;
pub mod state;
