//! Common error types used across the workspace.
//!
//! Each layer defines its own typed errors and converts into
//! [`HolocronError`] via `#[from]` or an explicit `From` impl.

/// Top-level error returned by services and repository ports.
#[derive(Debug, thiserror::Error)]
pub enum HolocronError {
    /// Input rejected before reaching storage.
    #[error("validation error")]
    Validation(#[from] ValidationError),

    /// A record looked up by id does not exist.
    #[error("not found")]
    NotFound(#[from] NotFoundError),

    /// A write was rejected by a storage constraint.
    #[error("constraint violation")]
    Conflict(#[from] ConflictError),

    /// The storage backend failed.
    #[error("storage error")]
    Storage(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// Anything else that is not the caller's fault (hashing, ...).
    #[error("internal error")]
    Internal(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// Reasons an input is rejected.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// A required field was absent or `null`.
    #[error("{0} is required")]
    MissingField(&'static str),

    /// A required field was present but blank.
    #[error("{0} must not be empty")]
    EmptyField(&'static str),

    /// A field exceeds its column width.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: &'static str, max: usize },

    /// An identifier could not be parsed.
    #[error("invalid identifier: {0}")]
    InvalidId(String),
}

/// A lookup by id returned nothing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{entity} not found: {id}")]
pub struct NotFoundError {
    pub entity: &'static str,
    pub id: String,
}

/// A write collided with a uniqueness or referential constraint.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConflictError {
    /// Another row already holds this unique value.
    #[error("{field} is already taken")]
    Duplicate { field: String },

    /// A foreign key points at a row that does not exist.
    #[error("referenced record does not exist")]
    UnknownReference,
}

/// Check that a required text field is non-blank and fits `max` characters.
///
/// # Errors
///
/// Returns [`ValidationError::EmptyField`] or [`ValidationError::TooLong`].
pub fn check_text(
    field: &'static str,
    value: &str,
    max: Option<usize>,
) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::EmptyField(field));
    }
    check_length(field, value, max)
}

/// Check that an optional text field fits `max` characters.
///
/// # Errors
///
/// Returns [`ValidationError::TooLong`] when the value is too long.
pub fn check_length(
    field: &'static str,
    value: &str,
    max: Option<usize>,
) -> Result<(), ValidationError> {
    match max {
        Some(max) if value.chars().count() > max => Err(ValidationError::TooLong { field, max }),
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_reject_blank_text() {
        assert_eq!(
            check_text("name", "   ", None),
            Err(ValidationError::EmptyField("name"))
        );
    }

    #[test]
    fn should_reject_text_longer_than_max() {
        assert_eq!(
            check_text("username", "abcdef", Some(5)),
            Err(ValidationError::TooLong {
                field: "username",
                max: 5
            })
        );
    }

    #[test]
    fn should_count_characters_not_bytes() {
        assert!(check_length("name", "ñññññ", Some(5)).is_ok());
    }

    #[test]
    fn should_convert_sub_errors_into_holocron_error() {
        let err: HolocronError = ValidationError::MissingField("email").into();
        assert!(matches!(
            err,
            HolocronError::Validation(ValidationError::MissingField("email"))
        ));

        let err: HolocronError = ConflictError::UnknownReference.into();
        assert!(matches!(err, HolocronError::Conflict(_)));
    }

    #[test]
    fn should_render_not_found_message() {
        let err = NotFoundError {
            entity: "Planet",
            id: "7".to_string(),
        };
        assert_eq!(err.to_string(), "Planet not found: 7");
    }
}
