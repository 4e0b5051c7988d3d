//! User: an account that can favorite planets and people.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{HolocronError, ValidationError, check_length, check_text};
use crate::id::UserId;

/// Column width of `username`, `name` and `lastname`.
pub const MAX_NAME_LEN: usize = 20;
/// Column width of `email`.
pub const MAX_EMAIL_LEN: usize = 120;

/// A persisted user, as exposed to clients. The password never leaves storage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub username: String,
    pub name: Option<String>,
    pub lastname: Option<String>,
    pub email: String,
}

/// A user that has not been stored yet.
#[derive(Clone)]
pub struct NewUser {
    pub username: String,
    pub name: Option<String>,
    pub lastname: Option<String>,
    pub email: String,
    pub password: String,
}

impl fmt::Debug for NewUser {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NewUser")
            .field("username", &self.username)
            .field("name", &self.name)
            .field("lastname", &self.lastname)
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

impl NewUser {
    /// Create a builder for constructing a [`NewUser`].
    #[must_use]
    pub fn builder() -> NewUserBuilder {
        NewUserBuilder::default()
    }

    /// Check domain invariants.
    ///
    /// # Errors
    ///
    /// Returns [`HolocronError::Validation`] when a required field is blank
    /// or any field exceeds its column width.
    pub fn validate(&self) -> Result<(), HolocronError> {
        check_text("username", &self.username, Some(MAX_NAME_LEN))?;
        check_text("email", &self.email, Some(MAX_EMAIL_LEN))?;
        check_text("password", &self.password, None)?;
        if let Some(name) = &self.name {
            check_length("name", name, Some(MAX_NAME_LEN))?;
        }
        if let Some(lastname) = &self.lastname {
            check_length("lastname", lastname, Some(MAX_NAME_LEN))?;
        }
        Ok(())
    }

    /// Attach the id assigned by storage, dropping the password.
    #[must_use]
    pub fn into_user(self, id: UserId) -> User {
        User {
            id,
            username: self.username,
            name: self.name,
            lastname: self.lastname,
            email: self.email,
        }
    }
}

/// Step-by-step builder for [`NewUser`].
#[derive(Debug, Default)]
pub struct NewUserBuilder {
    username: Option<String>,
    name: Option<String>,
    lastname: Option<String>,
    email: Option<String>,
    password: Option<String>,
}

impl NewUserBuilder {
    #[must_use]
    pub fn username(mut self, username: impl Into<String>) -> Self {
        self.username = Some(username.into());
        self
    }

    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn lastname(mut self, lastname: impl Into<String>) -> Self {
        self.lastname = Some(lastname.into());
        self
    }

    #[must_use]
    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    #[must_use]
    pub fn password(mut self, password: impl Into<String>) -> Self {
        self.password = Some(password.into());
        self
    }

    /// Consume the builder, validate, and return a [`NewUser`].
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::MissingField`] when `username`, `email` or
    /// `password` was never set, or any error from [`NewUser::validate`].
    pub fn build(self) -> Result<NewUser, HolocronError> {
        let user = NewUser {
            username: self
                .username
                .ok_or(ValidationError::MissingField("username"))?,
            name: self.name,
            lastname: self.lastname,
            email: self.email.ok_or(ValidationError::MissingField("email"))?,
            password: self
                .password
                .ok_or(ValidationError::MissingField("password"))?,
        };
        user.validate()?;
        Ok(user)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn luke() -> NewUserBuilder {
        NewUser::builder()
            .username("luke")
            .email("luke@tatooine.org")
            .password("blue-milk")
    }

    #[test]
    fn should_build_user_without_optional_names() {
        let user = luke().build().unwrap();
        assert_eq!(user.username, "luke");
        assert!(user.name.is_none());
        assert!(user.lastname.is_none());
    }

    #[test]
    fn should_report_first_missing_required_field() {
        let result = NewUser::builder().username("luke").build();
        assert!(matches!(
            result,
            Err(HolocronError::Validation(ValidationError::MissingField(
                "email"
            )))
        ));
    }

    #[test]
    fn should_reject_username_longer_than_column() {
        let result = luke().username("a".repeat(MAX_NAME_LEN + 1)).build();
        assert!(matches!(
            result,
            Err(HolocronError::Validation(ValidationError::TooLong {
                field: "username",
                ..
            }))
        ));
    }

    #[test]
    fn should_reject_empty_password() {
        let result = luke().password("").build();
        assert!(matches!(
            result,
            Err(HolocronError::Validation(ValidationError::EmptyField(
                "password"
            )))
        ));
    }

    #[test]
    fn should_not_print_password_in_debug_output() {
        let user = luke().build().unwrap();
        let debug = format!("{user:?}");
        assert!(!debug.contains("blue-milk"));
    }

    #[test]
    fn should_serialize_without_password() {
        let user = luke()
            .name("Luke")
            .lastname("Skywalker")
            .build()
            .unwrap()
            .into_user(UserId::new(1));
        let json = serde_json::to_value(&user).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "id": 1,
                "username": "luke",
                "name": "Luke",
                "lastname": "Skywalker",
                "email": "luke@tatooine.org",
            })
        );
    }
}
