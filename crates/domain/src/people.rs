//! People: characters users can favorite.

use serde::{Deserialize, Serialize};

use crate::error::{HolocronError, ValidationError, check_text};
use crate::id::PersonId;

/// A persisted person. `stars` is derived from favorites at read time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    pub id: PersonId,
    pub name: String,
    pub gender: String,
    pub eye_color: String,
    pub skin_color: String,
    pub hair_color: String,
    pub birth_year: String,
    pub stars: u64,
}

/// A person that has not been stored yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPerson {
    pub name: String,
    pub gender: String,
    pub eye_color: String,
    pub skin_color: String,
    pub hair_color: String,
    pub birth_year: String,
}

impl NewPerson {
    /// Create a builder for constructing a [`NewPerson`].
    #[must_use]
    pub fn builder() -> NewPersonBuilder {
        NewPersonBuilder::default()
    }

    /// Check domain invariants.
    ///
    /// # Errors
    ///
    /// Returns [`HolocronError::Validation`] when any field is blank.
    pub fn validate(&self) -> Result<(), HolocronError> {
        check_text("name", &self.name, None)?;
        check_text("gender", &self.gender, None)?;
        check_text("eye_color", &self.eye_color, None)?;
        check_text("skin_color", &self.skin_color, None)?;
        check_text("hair_color", &self.hair_color, None)?;
        check_text("birth_year", &self.birth_year, None)?;
        Ok(())
    }

    #[must_use]
    pub fn into_person(self, id: PersonId) -> Person {
        Person {
            id,
            name: self.name,
            gender: self.gender,
            eye_color: self.eye_color,
            skin_color: self.skin_color,
            hair_color: self.hair_color,
            birth_year: self.birth_year,
            stars: 0,
        }
    }
}

/// Step-by-step builder for [`NewPerson`].
#[derive(Debug, Default)]
pub struct NewPersonBuilder {
    name: Option<String>,
    gender: Option<String>,
    eye_color: Option<String>,
    skin_color: Option<String>,
    hair_color: Option<String>,
    birth_year: Option<String>,
}

impl NewPersonBuilder {
    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn gender(mut self, gender: impl Into<String>) -> Self {
        self.gender = Some(gender.into());
        self
    }

    #[must_use]
    pub fn eye_color(mut self, eye_color: impl Into<String>) -> Self {
        self.eye_color = Some(eye_color.into());
        self
    }

    #[must_use]
    pub fn skin_color(mut self, skin_color: impl Into<String>) -> Self {
        self.skin_color = Some(skin_color.into());
        self
    }

    #[must_use]
    pub fn hair_color(mut self, hair_color: impl Into<String>) -> Self {
        self.hair_color = Some(hair_color.into());
        self
    }

    #[must_use]
    pub fn birth_year(mut self, birth_year: impl Into<String>) -> Self {
        self.birth_year = Some(birth_year.into());
        self
    }

    /// Consume the builder, validate, and return a [`NewPerson`].
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::MissingField`] for the first field never
    /// set, or any error from [`NewPerson::validate`].
    pub fn build(self) -> Result<NewPerson, HolocronError> {
        let person = NewPerson {
            name: self.name.ok_or(ValidationError::MissingField("name"))?,
            gender: self.gender.ok_or(ValidationError::MissingField("gender"))?,
            eye_color: self
                .eye_color
                .ok_or(ValidationError::MissingField("eye_color"))?,
            skin_color: self
                .skin_color
                .ok_or(ValidationError::MissingField("skin_color"))?,
            hair_color: self
                .hair_color
                .ok_or(ValidationError::MissingField("hair_color"))?,
            birth_year: self
                .birth_year
                .ok_or(ValidationError::MissingField("birth_year"))?,
        };
        person.validate()?;
        Ok(person)
    }
}
