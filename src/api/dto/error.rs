//! Error response DTOs.

use serde::Serialize;

use crate::error::ValidationFieldError;

/// Standard error response format.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<ValidationFieldError>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_id: Option<String>,
}

impl ErrorResponse {
    /// Creates a new error response with code and message.
    pub fn new(code: &str, message: &str) -> Self {
        Self {
            code: code.to_string(),
            message: message.to_string(),
            details: None,
            errors: None,
            request_id: None,
        }
    }

    /// Adds details to the error response.
    pub fn with_details(mut self, details: &str) -> Self {
        self.details = Some(details.to_string());
        self
    }

    /// Adds per-field validation errors to the error response.
    pub fn with_field_errors(mut self, errors: Vec<ValidationFieldError>) -> Self {
        self.errors = Some(errors);
        self
    }

    /// Adds request ID to the error response for correlation.
    pub fn with_request_id(mut self, request_id: &str) -> Self {
        self.request_id = Some(request_id.to_string());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_optional_fields_skipped_when_absent() {
        let response = ErrorResponse::new("NOT_FOUND", "missing");
        let json = serde_json::to_value(&response).unwrap();
        let object = json.as_object().unwrap();
        assert!(!object.contains_key("details"));
        assert!(!object.contains_key("errors"));
        assert!(!object.contains_key("request_id"));
    }

    #[test]
    fn test_builder_chain() {
        let response = ErrorResponse::new("VALIDATION_ERROR", "Validation failed")
            .with_field_errors(vec![ValidationFieldError {
                field: "name".to_string(),
                message: "must not be blank".to_string(),
            }])
            .with_request_id("req-1");
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["errors"][0]["field"], "name");
        assert_eq!(json["request_id"], "req-1");
    }
}
