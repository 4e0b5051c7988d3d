//! Planet: a world users can favorite.

use serde::{Deserialize, Serialize};

use crate::error::{HolocronError, ValidationError, check_text};
use crate::id::PlanetId;

/// A persisted planet.
///
/// `stars` is the number of favorites pointing at this planet, computed by
/// storage at read time rather than stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Planet {
    pub id: PlanetId,
    pub name: String,
    pub climate: String,
    pub diameter: String,
    pub gravity: String,
    pub population: String,
    pub terrain: String,
    pub stars: u64,
}

/// A planet that has not been stored yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPlanet {
    pub name: String,
    pub climate: String,
    pub diameter: String,
    pub gravity: String,
    pub population: String,
    pub terrain: String,
}

impl NewPlanet {
    /// Create a builder for constructing a [`NewPlanet`].
    #[must_use]
    pub fn builder() -> NewPlanetBuilder {
        NewPlanetBuilder::default()
    }

    /// Check domain invariants.
    ///
    /// # Errors
    ///
    /// Returns [`HolocronError::Validation`] when any field is blank.
    pub fn validate(&self) -> Result<(), HolocronError> {
        check_text("name", &self.name, None)?;
        check_text("climate", &self.climate, None)?;
        check_text("diameter", &self.diameter, None)?;
        check_text("gravity", &self.gravity, None)?;
        check_text("population", &self.population, None)?;
        check_text("terrain", &self.terrain, None)?;
        Ok(())
    }

    /// Attach the id assigned by storage. A fresh planet has no stars.
    #[must_use]
    pub fn into_planet(self, id: PlanetId) -> Planet {
        Planet {
            id,
            name: self.name,
            climate: self.climate,
            diameter: self.diameter,
            gravity: self.gravity,
            population: self.population,
            terrain: self.terrain,
            stars: 0,
        }
    }
}

/// Step-by-step builder for [`NewPlanet`].
#[derive(Debug, Default)]
pub struct NewPlanetBuilder {
    name: Option<String>,
    climate: Option<String>,
    diameter: Option<String>,
    gravity: Option<String>,
    population: Option<String>,
    terrain: Option<String>,
}

impl NewPlanetBuilder {
    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn climate(mut self, climate: impl Into<String>) -> Self {
        self.climate = Some(climate.into());
        self
    }

    #[must_use]
    pub fn diameter(mut self, diameter: impl Into<String>) -> Self {
        self.diameter = Some(diameter.into());
        self
    }

    #[must_use]
    pub fn gravity(mut self, gravity: impl Into<String>) -> Self {
        self.gravity = Some(gravity.into());
        self
    }

    #[must_use]
    pub fn population(mut self, population: impl Into<String>) -> Self {
        self.population = Some(population.into());
        self
    }

    #[must_use]
    pub fn terrain(mut self, terrain: impl Into<String>) -> Self {
        self.terrain = Some(terrain.into());
        self
    }

    /// Consume the builder, validate, and return a [`NewPlanet`].
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::MissingField`] for the first field never
    /// set, or any error from [`NewPlanet::validate`].
    pub fn build(self) -> Result<NewPlanet, HolocronError> {
        let planet = NewPlanet {
            name: self.name.ok_or(ValidationError::MissingField("name"))?,
            climate: self
                .climate
                .ok_or(ValidationError::MissingField("climate"))?,
            diameter: self
                .diameter
                .ok_or(ValidationError::MissingField("diameter"))?,
            gravity: self
                .gravity
                .ok_or(ValidationError::MissingField("gravity"))?,
            population: self
                .population
                .ok_or(ValidationError::MissingField("population"))?,
            terrain: self
                .terrain
                .ok_or(ValidationError::MissingField("terrain"))?,
        };
        planet.validate()?;
        Ok(planet)
    }
}
