//! HTTP error response mapping.

use axum::Json;
use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use holocron_domain::error::{ConflictError, HolocronError, ValidationError};

/// JSON error body returned by API endpoints.
#[derive(Serialize)]
struct ErrorBody<'a> {
    code: &'a str,
    msg: &'a str,
}

/// An HTTP status with a stable machine-readable code and a human message.
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    code: &'static str,
    msg: String,
}

impl ApiError {
    fn new(status: StatusCode, code: &'static str, msg: impl Into<String>) -> Self {
        Self {
            status,
            code,
            msg: msg.into(),
        }
    }

    fn internal() -> Self {
        Self::new(
            StatusCode::INTERNAL_SERVER_ERROR,
            "internal_error",
            "internal server error",
        )
    }

    /// HTTP status this error renders with.
    #[must_use]
    pub fn status(&self) -> StatusCode {
        self.status
    }

    /// Stable error code, e.g. `not_found`.
    #[must_use]
    pub fn code(&self) -> &'static str {
        self.code
    }
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        let code = match err {
            ValidationError::MissingField(_) => "missing_field",
            ValidationError::EmptyField(_) => "empty_field",
            ValidationError::TooLong { .. } => "field_too_long",
            ValidationError::InvalidId(_) => "invalid_id",
        };
        Self::new(StatusCode::BAD_REQUEST, code, err.to_string())
    }
}

impl From<HolocronError> for ApiError {
    fn from(err: HolocronError) -> Self {
        match err {
            HolocronError::Validation(err) => err.into(),
            HolocronError::NotFound(err) => {
                Self::new(StatusCode::NOT_FOUND, "not_found", err.to_string())
            }
            HolocronError::Conflict(err) => {
                let code = match err {
                    ConflictError::Duplicate { .. } => "duplicate_value",
                    ConflictError::UnknownReference => "unknown_reference",
                };
                Self::new(StatusCode::BAD_REQUEST, code, err.to_string())
            }
            HolocronError::Storage(err) => {
                tracing::error!(error = %err, "storage error");
                Self::internal()
            }
            HolocronError::Internal(err) => {
                tracing::error!(error = %err, "internal error");
                Self::internal()
            }
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::new(StatusCode::BAD_REQUEST, "invalid_body", rejection.body_text())
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        Self::new(StatusCode::BAD_REQUEST, "invalid_id", rejection.body_text())
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        Self::new(StatusCode::BAD_REQUEST, "invalid_query", rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ErrorBody {
            code: self.code,
            msg: &self.msg,
        };
        (self.status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use holocron_domain::error::NotFoundError;

    #[test]
    fn should_map_validation_errors_to_bad_request() {
        let err = ApiError::from(HolocronError::from(ValidationError::TooLong {
            field: "username",
            max: 20,
        }));
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        assert_eq!(err.code(), "field_too_long");

        let err = ApiError::from(ValidationError::InvalidId("abc".to_string()));
        assert_eq!(err.code(), "invalid_id");
    }

    #[test]
    fn should_map_not_found_to_404() {
        let err = ApiError::from(HolocronError::from(NotFoundError {
            entity: "Planet",
            id: "3".to_string(),
        }));
        assert_eq!(err.status(), StatusCode::NOT_FOUND);
        assert_eq!(err.msg, "Planet not found: 3");
    }

    #[test]
    fn should_map_conflicts_to_bad_request_with_stable_code() {
        let err = ApiError::from(HolocronError::from(ConflictError::Duplicate {
            field: "email".to_string(),
        }));
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        assert_eq!(err.code(), "duplicate_value");

        let err = ApiError::from(HolocronError::from(ConflictError::UnknownReference));
        assert_eq!(err.code(), "unknown_reference");
    }

    #[test]
    fn should_hide_storage_details() {
        let err = ApiError::from(HolocronError::Storage("disk I/O error".into()));
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.code(), "internal_error");
        assert!(!err.msg.contains("disk"));
    }
}
