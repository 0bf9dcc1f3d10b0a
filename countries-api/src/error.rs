use thiserror::Error;

use crate::domain::ResponseStatus;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Import error: {0}")]
    ImportError(String),

    #[error("Internal error: {0}")]
    InternalError(String),

    #[error("Database error: {0}")]
    DatabaseError(String),
}

impl ApiError {
    /// Status a presentation layer should answer with for this failure.
    ///
    /// Duplicate names are reported as `400`, matching the public surface.
    pub fn status(&self) -> ResponseStatus {
        match self {
            ApiError::ValidationError(_) | ApiError::Conflict(_) | ApiError::BadRequest(_) => {
                ResponseStatus::BadRequest
            }
            ApiError::NotFound(_) => ResponseStatus::NotFound,
            ApiError::ImportError(_) => ResponseStatus::BadGateway,
            ApiError::InternalError(_) | ApiError::DatabaseError(_) => {
                ResponseStatus::InternalServerError
            }
        }
    }

    /// Message without the variant prefix.
    pub fn message(&self) -> &str {
        match self {
            ApiError::ValidationError(m)
            | ApiError::Conflict(m)
            | ApiError::NotFound(m)
            | ApiError::BadRequest(m)
            | ApiError::ImportError(m)
            | ApiError::InternalError(m)
            | ApiError::DatabaseError(m) => m,
        }
    }
}

impl From<validator::ValidationErrors> for ApiError {
    fn from(errors: validator::ValidationErrors) -> Self {
        ApiError::ValidationError(errors.to_string())
    }
}

#[cfg(feature = "sqlx")]
impl From<sqlx::Error> for ApiError {
    fn from(error: sqlx::Error) -> Self {
        ApiError::DatabaseError(error.to_string())
    }
}

pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duplicate_and_missing_reference_map_to_bad_request() {
        assert_eq!(
            ApiError::Conflict("El país Chile ya existe.".into()).status(),
            ResponseStatus::BadRequest
        );
        assert_eq!(
            ApiError::BadRequest("unknown hotel id 7".into()).status(),
            ResponseStatus::BadRequest
        );
    }

    #[test]
    fn test_not_found_and_infrastructure_statuses() {
        assert_eq!(ApiError::NotFound("x".into()).status(), ResponseStatus::NotFound);
        assert_eq!(
            ApiError::ImportError("timeout".into()).status(),
            ResponseStatus::BadGateway
        );
        assert_eq!(
            ApiError::DatabaseError("pool closed".into()).status(),
            ResponseStatus::InternalServerError
        );
    }

    #[test]
    fn test_message_strips_variant_prefix() {
        let err = ApiError::NotFound("country Peru".into());
        assert_eq!(err.message(), "country Peru");
        assert_eq!(err.to_string(), "Not found: country Peru");
    }
}
