use axum::extract::rejection::{JsonRejection, PathRejection};
use thiserror::Error;

/// A single field-level validation failure, surfaced in 400 responses.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct ValidationFieldError {
    pub field: String,
    pub message: String,
}

/// Application-wide error type.
///
/// NotFound and validation failures carry structured context for the
/// response body; everything else wraps its source and surfaces as an
/// opaque 5xx. There is no retry or recovery logic anywhere above this
/// type: a failed statement fails the request.
#[derive(Error, Debug)]
pub enum AppError {
    /// Resource not found error with entity, field, and value information
    #[error("Resource not found: {entity} with {field}={value}")]
    NotFound {
        entity: String,
        field: String,
        value: String,
    },

    /// Request payload failed validation, with per-field details
    #[error("Validation failed for {} field(s)", errors.len())]
    ValidationErrors { errors: Vec<ValidationFieldError> },

    /// Bad request error with descriptive message
    #[error("Bad request: {message}")]
    BadRequest { message: String },

    /// Database operation error with operation context
    #[error("Database operation failed: {operation}")]
    Database {
        operation: String,
        #[source]
        source: anyhow::Error,
    },

    /// Configuration error with key information
    #[error("Configuration error: {key}")]
    Configuration {
        key: String,
        #[source]
        source: anyhow::Error,
    },

    /// Connection pool error
    #[error("Connection pool error")]
    ConnectionPool {
        #[source]
        source: anyhow::Error,
    },

    /// Internal error for unexpected failures
    #[error("Internal error")]
    Internal {
        #[source]
        source: anyhow::Error,
    },
}

impl AppError {
    /// Builds the standard NotFound error for an id-keyed lookup miss.
    pub fn not_found(entity: &str, id: i64) -> Self {
        AppError::NotFound {
            entity: entity.to_string(),
            field: "id".to_string(),
            value: id.to_string(),
        }
    }
}

impl From<anyhow::Error> for AppError {
    fn from(error: anyhow::Error) -> Self {
        AppError::Internal { source: error }
    }
}

impl From<diesel::result::Error> for AppError {
    fn from(error: diesel::result::Error) -> Self {
        match error {
            diesel::result::Error::NotFound => AppError::NotFound {
                entity: "resource".to_string(),
                field: "id".to_string(),
                value: "unknown".to_string(),
            },
            // Constraint violations included: they propagate as unhandled
            // faults, the API does no partial-failure compensation.
            other => AppError::Database {
                operation: "database operation".to_string(),
                source: anyhow::Error::from(other),
            },
        }
    }
}

impl From<bb8::RunError<diesel_async::pooled_connection::PoolError>> for AppError {
    fn from(error: bb8::RunError<diesel_async::pooled_connection::PoolError>) -> Self {
        AppError::ConnectionPool {
            source: anyhow::Error::from(error),
        }
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        let mut field_errors: Vec<ValidationFieldError> = errors
            .field_errors()
            .iter()
            .flat_map(|(field, errs)| {
                errs.iter().map(|err| ValidationFieldError {
                    field: field.to_string(),
                    message: err
                        .message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| err.code.to_string()),
                })
            })
            .collect();
        field_errors.sort_by(|a, b| a.field.cmp(&b.field));
        AppError::ValidationErrors {
            errors: field_errors,
        }
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::BadRequest {
            message: rejection.body_text(),
        }
    }
}

impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        AppError::BadRequest {
            message: rejection.body_text(),
        }
    }
}

/// Type alias for Result with AppError to simplify function signatures
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;
    use validator::Validate;

    #[derive(Debug, Validate)]
    struct Payload {
        #[validate(length(min = 3, message = "Name must be at least 3 characters"))]
        name: String,
        #[validate(length(max = 5, message = "Code must be at most 5 characters"))]
        code: String,
    }

    #[test]
    fn test_not_found_constructor() {
        let error = AppError::not_found("postgres user", 42);
        match error {
            AppError::NotFound {
                entity,
                field,
                value,
            } => {
                assert_eq!(entity, "postgres user");
                assert_eq!(field, "id");
                assert_eq!(value, "42");
            }
            other => panic!("Expected NotFound, got {:?}", other),
        }
    }

    #[test]
    fn test_validator_errors_convert_to_field_errors() {
        let payload = Payload {
            name: "ab".to_string(),
            code: "toolong".to_string(),
        };
        let error: AppError = payload.validate().unwrap_err().into();
        match error {
            AppError::ValidationErrors { errors } => {
                assert_eq!(errors.len(), 2);
                // Sorted by field name for deterministic responses.
                assert_eq!(errors[0].field, "code");
                assert!(errors[0].message.contains("at most 5"));
                assert_eq!(errors[1].field, "name");
                assert!(errors[1].message.contains("at least 3"));
            }
            other => panic!("Expected ValidationErrors, got {:?}", other),
        }
    }

    #[test]
    fn test_diesel_not_found_maps_to_not_found() {
        let error: AppError = diesel::result::Error::NotFound.into();
        assert!(matches!(error, AppError::NotFound { .. }));
    }

    #[test]
    fn test_diesel_rollback_maps_to_database() {
        let error: AppError = diesel::result::Error::RollbackTransaction.into();
        assert!(matches!(error, AppError::Database { .. }));
    }
}
