//! Primary-store user DTOs for API requests and responses.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::{NewPostgresUser, PostgresUser, ReplacePostgresUser};
use crate::utils::validate::{non_blank, past_date};

// ============================================================================
// Request DTOs
// ============================================================================

/// Request body for creating a primary-store user.
///
/// The id is part of the payload: callers assign it, the store never
/// generates one. Role and grant are free-text labels, not references.
#[derive(Debug, Deserialize, Validate)]
pub struct CreatePostgresUserRequest {
    pub id: i64,
    #[validate(
        length(min = 3, max = 100, message = "Name must be between 3 and 100 characters"),
        custom(function = non_blank, message = "Name must not be blank")
    )]
    pub name: String,
    #[validate(custom(function = past_date, message = "Birth date must be in the past"))]
    pub birth_date: Option<NaiveDate>,
    #[validate(length(max = 50, message = "Gender must be at most 50 characters"))]
    pub gender: Option<String>,
    #[validate(
        length(min = 1, max = 100, message = "Role must be between 1 and 100 characters"),
        custom(function = non_blank, message = "Role must not be blank")
    )]
    pub role: String,
    #[validate(length(max = 255, message = "Grant must be at most 255 characters"))]
    pub grant_field: Option<String>,
}

impl CreatePostgresUserRequest {
    /// Converts the request DTO into an insert model.
    pub fn into_new_user(self) -> NewPostgresUser {
        NewPostgresUser {
            id: self.id,
            name: self.name,
            birth_date: self.birth_date,
            gender: self.gender,
            role: self.role,
            grant_field: self.grant_field,
        }
    }
}

/// Request body for replacing a primary-store user.
///
/// Updates are full replacements, not patches: every field is written and
/// an omitted optional field clears the stored value. The id comes from
/// the path, never the body.
#[derive(Debug, Deserialize, Validate)]
pub struct UpdatePostgresUserRequest {
    #[validate(
        length(min = 3, max = 100, message = "Name must be between 3 and 100 characters"),
        custom(function = non_blank, message = "Name must not be blank")
    )]
    pub name: String,
    #[validate(custom(function = past_date, message = "Birth date must be in the past"))]
    pub birth_date: Option<NaiveDate>,
    #[validate(length(max = 50, message = "Gender must be at most 50 characters"))]
    pub gender: Option<String>,
    #[validate(
        length(min = 1, max = 100, message = "Role must be between 1 and 100 characters"),
        custom(function = non_blank, message = "Role must not be blank")
    )]
    pub role: String,
    #[validate(length(max = 255, message = "Grant must be at most 255 characters"))]
    pub grant_field: Option<String>,
}

impl UpdatePostgresUserRequest {
    /// Converts the request DTO into a full-replace changeset.
    pub fn into_replacement(self) -> ReplacePostgresUser {
        ReplacePostgresUser {
            name: self.name,
            birth_date: self.birth_date,
            gender: self.gender,
            role: self.role,
            grant_field: self.grant_field,
        }
    }
}

// ============================================================================
// Response DTOs
// ============================================================================

/// Response body for primary-store user data.
#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct PostgresUserResponse {
    pub id: i64,
    pub name: String,
    pub birth_date: Option<NaiveDate>,
    pub gender: Option<String>,
    pub role: String,
    pub grant_field: Option<String>,
}

impl From<PostgresUser> for PostgresUserResponse {
    fn from(user: PostgresUser) -> Self {
        Self {
            id: user.id,
            name: user.name,
            birth_date: user.birth_date,
            gender: user.gender,
            role: user.role,
            grant_field: user.grant_field,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn valid_request() -> CreatePostgresUserRequest {
        CreatePostgresUserRequest {
            id: 1,
            name: "Ivan Petrov".to_string(),
            birth_date: NaiveDate::from_ymd_opt(1990, 5, 15),
            gender: Some("M".to_string()),
            role: "developer".to_string(),
            grant_field: Some("read".to_string()),
        }
    }

    #[test]
    fn test_valid_request_passes() {
        assert!(valid_request().validate().is_ok());
    }

    #[test]
    fn test_two_char_name_rejected_three_char_accepted() {
        let mut request = valid_request();
        request.name = "ab".to_string();
        assert!(request.validate().is_err());

        request.name = "abc".to_string();
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_blank_name_rejected() {
        let mut request = valid_request();
        request.name = "    ".to_string();
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_future_birth_date_rejected() {
        let mut request = valid_request();
        request.birth_date = Some(chrono::Utc::now().date_naive() + Duration::days(1));
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_absent_birth_date_accepted() {
        let mut request = valid_request();
        request.birth_date = None;
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_oversized_gender_rejected() {
        let mut request = valid_request();
        request.gender = Some("x".repeat(51));
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_oversized_role_rejected() {
        let mut request = valid_request();
        request.role = "x".repeat(101);
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_oversized_grant_rejected() {
        let mut request = valid_request();
        request.grant_field = Some("x".repeat(256));
        assert!(request.validate().is_err());

        request.grant_field = Some("x".repeat(255));
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_into_new_user_preserves_fields() {
        let new_user = valid_request().into_new_user();
        assert_eq!(new_user.id, 1);
        assert_eq!(new_user.name, "Ivan Petrov");
        assert_eq!(new_user.role, "developer");
        assert_eq!(new_user.grant_field.as_deref(), Some("read"));
    }

    #[test]
    fn test_response_from_model() {
        let user = PostgresUser {
            id: 7,
            name: "Anna".to_string(),
            birth_date: None,
            gender: None,
            role: "analyst".to_string(),
            grant_field: None,
        };
        let response = PostgresUserResponse::from(user);
        assert_eq!(response.id, 7);
        assert_eq!(response.name, "Anna");

        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["birth_date"], serde_json::Value::Null);
        assert_eq!(json["role"], "analyst");
    }
}
