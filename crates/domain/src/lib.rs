//! # holocron-domain
//!
//! Pure domain model for the holocron catalogue.
//!
//! ## Responsibilities
//! - Foundational types: typed identifiers, error conventions
//! - Define **Users** (accounts; the password never appears in their serialized form)
//! - Define **Planets** and **People** (catalogue records carrying a derived `stars` count)
//! - Define **Favorites** (user → planet / user → person join rows)
//! - Contain all invariant enforcement (required fields, column widths)
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;
pub mod id;

pub mod favorite;
pub mod people;
pub mod planet;
pub mod user;
