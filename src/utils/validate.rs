//! Request body validation
//!
//! `ValidatedJson` is a JSON extractor that runs `validator` rules after
//! deserialization. Malformed bodies map to `AppError::BadRequest`,
//! failed rules to `AppError::ValidationErrors`; both render as 400.

use axum::Json;
use axum::extract::{FromRequest, Request, rejection::JsonRejection};
use chrono::NaiveDate;
use serde::de::DeserializeOwned;
use validator::{Validate, ValidationError};

use crate::error::{AppError, AppResult};

#[derive(Debug, Clone, Copy, Default)]
pub struct ValidatedJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> AppResult<Self> {
        let Json(value) = Json::<T>::from_request(req, state).await?;
        value.validate()?;
        Ok(ValidatedJson(value))
    }
}

/// Rejects values that are empty or contain only whitespace.
///
/// Length rules treat `"   "` as three characters; this closes that gap
/// for fields that must carry visible content.
pub fn non_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("non_blank").with_message("must not be blank".into()));
    }
    Ok(())
}

/// Rejects dates that are not strictly in the past.
///
/// Today's date fails: a birth date must precede the current day.
pub fn past_date(value: &NaiveDate) -> Result<(), ValidationError> {
    let today = chrono::Utc::now().date_naive();
    if *value >= today {
        return Err(ValidationError::new("past_date").with_message("must be a past date".into()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Method, header};
    use chrono::Duration;
    use serde::Deserialize;
    use validator::Validate;

    #[derive(Debug, Deserialize, Validate)]
    struct TestPayload {
        #[validate(
            length(min = 3, max = 100, message = "Name must be between 3 and 100 characters"),
            custom(function = non_blank, message = "Name must not be blank")
        )]
        name: String,
        #[validate(custom(function = past_date, message = "Birth date must be in the past"))]
        birth_date: Option<NaiveDate>,
    }

    fn json_request(body: &str) -> Request {
        Request::builder()
            .method(Method::POST)
            .uri("/test")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn test_valid_payload() {
        let request = json_request(r#"{"name":"Alice","birth_date":"1990-05-15"}"#);

        let result = ValidatedJson::<TestPayload>::from_request(request, &()).await;

        assert!(result.is_ok());
        let ValidatedJson(payload) = result.unwrap();
        assert_eq!(payload.name, "Alice");
        assert_eq!(
            payload.birth_date,
            Some(NaiveDate::from_ymd_opt(1990, 5, 15).unwrap())
        );
    }

    #[tokio::test]
    async fn test_optional_field_absent_is_valid() {
        let request = json_request(r#"{"name":"Alice"}"#);

        let result = ValidatedJson::<TestPayload>::from_request(request, &()).await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_validation_error_short_name() {
        let request = json_request(r#"{"name":"ab"}"#);

        let result = ValidatedJson::<TestPayload>::from_request(request, &()).await;

        assert!(result.is_err());
        match result.unwrap_err() {
            AppError::ValidationErrors { errors } => {
                assert_eq!(errors.len(), 1);
                assert_eq!(errors[0].field, "name");
                assert!(errors[0].message.contains("between 3 and 100"));
            }
            other => panic!("Expected ValidationErrors error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_validation_error_blank_name() {
        let request = json_request(r#"{"name":"    "}"#);

        let result = ValidatedJson::<TestPayload>::from_request(request, &()).await;

        assert!(result.is_err());
        match result.unwrap_err() {
            AppError::ValidationErrors { errors } => {
                assert_eq!(errors.len(), 1);
                assert_eq!(errors[0].field, "name");
                assert!(errors[0].message.contains("blank"));
            }
            other => panic!("Expected ValidationErrors error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_validation_error_future_birth_date() {
        let future = chrono::Utc::now().date_naive() + Duration::days(30);
        let body = format!(r#"{{"name":"Alice","birth_date":"{}"}}"#, future);
        let request = json_request(&body);

        let result = ValidatedJson::<TestPayload>::from_request(request, &()).await;

        assert!(result.is_err());
        match result.unwrap_err() {
            AppError::ValidationErrors { errors } => {
                assert_eq!(errors.len(), 1);
                assert_eq!(errors[0].field, "birth_date");
                assert!(errors[0].message.contains("past"));
            }
            other => panic!("Expected ValidationErrors error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_json_rejection_malformed_body() {
        let request = json_request(r#"{"name": "#);

        let result = ValidatedJson::<TestPayload>::from_request(request, &()).await;

        assert!(result.is_err());
        match result.unwrap_err() {
            AppError::BadRequest { message } => assert!(!message.is_empty()),
            other => panic!("Expected BadRequest error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_json_rejection_wrong_content_type() {
        let request = Request::builder()
            .method(Method::POST)
            .uri("/test")
            .header(header::CONTENT_TYPE, "text/plain")
            .body(Body::from(r#"{"name":"Alice"}"#))
            .unwrap();

        let result = ValidatedJson::<TestPayload>::from_request(request, &()).await;

        assert!(result.is_err());
        match result.unwrap_err() {
            AppError::BadRequest { message } => assert!(!message.is_empty()),
            other => panic!("Expected BadRequest error, got {:?}", other),
        }
    }

    #[test]
    fn test_non_blank_accepts_content() {
        assert!(non_blank("hello").is_ok());
        assert!(non_blank("  hello  ").is_ok());
    }

    #[test]
    fn test_past_date_rejects_today() {
        let today = chrono::Utc::now().date_naive();
        assert!(past_date(&today).is_err());
        assert!(past_date(&(today - Duration::days(1))).is_ok());
    }
}
