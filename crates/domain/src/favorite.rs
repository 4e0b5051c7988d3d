//! Favorites: join rows linking a user to a planet or a person.
//!
//! Duplicates are allowed: favoriting the same target twice stores two rows
//! and counts twice towards its `stars`.

use serde::{Deserialize, Serialize};

use crate::id::{FavoritePersonId, FavoritePlanetId, PersonId, PlanetId, UserId};

/// A user's favorite planet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FavoritePlanet {
    pub id: FavoritePlanetId,
    pub planet: PlanetId,
    pub user: UserId,
}

/// A user's favorite person. Serialized with a `people` key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FavoritePerson {
    pub id: FavoritePersonId,
    #[serde(rename = "people")]
    pub person: PersonId,
    pub user: UserId,
}

/// Everything a user has favorited.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserFavorites {
    pub favorite_planet: Vec<FavoritePlanet>,
    pub favorite_people: Vec<FavoritePerson>,
}
