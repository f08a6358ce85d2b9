//! Error handler for converting AppError to HTTP responses.
//!
//! This module implements the IntoResponse trait for AppError,
//! providing consistent error response formatting across the API.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use tracing::error;

use crate::api::dto::ErrorResponse;
use crate::error::AppError;

/// Maps an error variant to its HTTP status code.
///
/// # Status Code Mapping
/// - NotFound → 404 NOT_FOUND
/// - ValidationErrors → 400 BAD_REQUEST
/// - BadRequest → 400 BAD_REQUEST
/// - ConnectionPool → 503 SERVICE_UNAVAILABLE
/// - Database → 500 INTERNAL_SERVER_ERROR
/// - Configuration → 500 INTERNAL_SERVER_ERROR
/// - Internal → 500 INTERNAL_SERVER_ERROR
///
/// Constraint violations sit in the Database bucket: the application
/// performs no recovery or conflict mapping, a failed statement fails the
/// request as a plain 500.
pub fn status_for(error: &AppError) -> StatusCode {
    match error {
        AppError::NotFound { .. } => StatusCode::NOT_FOUND,
        AppError::ValidationErrors { .. } | AppError::BadRequest { .. } => StatusCode::BAD_REQUEST,
        AppError::ConnectionPool { .. } => StatusCode::SERVICE_UNAVAILABLE,
        AppError::Database { .. } | AppError::Configuration { .. } | AppError::Internal { .. } => {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = status_for(&self);

        let error_response = match &self {
            AppError::NotFound {
                entity,
                field,
                value,
            } => ErrorResponse::new(
                "NOT_FOUND",
                &format!("{} not found with {}: {}", entity, field, value),
            ),
            AppError::ValidationErrors { errors } => {
                ErrorResponse::new("VALIDATION_ERROR", "Request payload failed validation")
                    .with_field_errors(errors.clone())
            }
            AppError::BadRequest { message } => ErrorResponse::new("BAD_REQUEST", message),
            AppError::Database { operation, source } => {
                error!(operation = %operation, error = %source, "database operation failed");
                ErrorResponse::new("DATABASE_ERROR", "Database operation failed")
            }
            AppError::Configuration { key, source } => {
                error!(key = %key, error = %source, "configuration error");
                ErrorResponse::new("CONFIGURATION_ERROR", "Configuration error")
            }
            AppError::ConnectionPool { source } => {
                error!(error = %source, "connection pool exhausted or unreachable");
                ErrorResponse::new("SERVICE_UNAVAILABLE", "Database connection unavailable")
            }
            AppError::Internal { source } => {
                error!(error = %source, "internal error");
                ErrorResponse::new("INTERNAL_ERROR", "An internal error occurred")
            }
        };

        (status, Json(error_response)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ValidationFieldError;

    #[test]
    fn test_not_found_maps_to_404() {
        let error = AppError::not_found("postgres user", 42);
        assert_eq!(status_for(&error), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_validation_errors_map_to_400() {
        let error = AppError::ValidationErrors {
            errors: vec![ValidationFieldError {
                field: "name".to_string(),
                message: "must not be blank".to_string(),
            }],
        };
        assert_eq!(status_for(&error), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_bad_request_maps_to_400() {
        let error = AppError::BadRequest {
            message: "malformed body".to_string(),
        };
        assert_eq!(status_for(&error), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_database_error_maps_to_500() {
        // Constraint violations included, the API does not map them to 409.
        let error = AppError::Database {
            operation: "insert".to_string(),
            source: anyhow::anyhow!("duplicate key value violates unique constraint"),
        };
        assert_eq!(status_for(&error), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_connection_pool_maps_to_503() {
        let error = AppError::ConnectionPool {
            source: anyhow::anyhow!("timed out"),
        };
        assert_eq!(status_for(&error), StatusCode::SERVICE_UNAVAILABLE);
    }

    #[tokio::test]
    async fn test_not_found_response_body() {
        let response = AppError::not_found("oracle user", 7).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(json["code"], "NOT_FOUND");
        assert!(json["message"].as_str().unwrap().contains("oracle user"));
    }

    #[tokio::test]
    async fn test_validation_response_carries_field_errors() {
        let error = AppError::ValidationErrors {
            errors: vec![ValidationFieldError {
                field: "birth_date".to_string(),
                message: "Birth date must be in the past".to_string(),
            }],
        };
        let response = error.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(json["errors"][0]["field"], "birth_date");
    }

    #[tokio::test]
    async fn test_internal_error_body_is_opaque() {
        let error = AppError::Internal {
            source: anyhow::anyhow!("secret connection string leaked here"),
        };
        let response = error.into_response();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert!(!json["message"].as_str().unwrap().contains("secret"));
    }
}
