//! Secondary-store user DTOs for API requests and responses.
//!
//! Responses enrich the stored role/grant id into a descriptor from the
//! canonical reference values; an id outside the canonical set yields a
//! null role/grant with no error.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::{OracleUserRow, canonical_grant, canonical_role};

// ============================================================================
// Request DTOs
// ============================================================================

/// A role/grant reference in a write payload.
///
/// Only the id is ever written to the store; a reference object without
/// an id is rejected as malformed during deserialization.
#[derive(Debug, Deserialize, Clone, Copy)]
pub struct ReferenceIdRequest {
    pub id: i64,
}

/// Request body for creating or replacing a secondary-store user.
///
/// The id is database-generated on create and path-supplied on update, so
/// the body never carries one. All fields are optional; the store accepts
/// null columns.
#[derive(Debug, Deserialize, Validate, Default)]
pub struct SaveOracleUserRequest {
    pub name: Option<String>,
    pub birth_date: Option<NaiveDate>,
    pub sex: Option<String>,
    pub role: Option<ReferenceIdRequest>,
    pub grant: Option<ReferenceIdRequest>,
}

impl SaveOracleUserRequest {
    /// Extracts the role id to persist, if a reference was supplied.
    pub fn role_id(&self) -> Option<i64> {
        self.role.map(|r| r.id)
    }

    /// Extracts the grant id to persist, if a reference was supplied.
    pub fn grant_id(&self) -> Option<i64> {
        self.grant.map(|g| g.id)
    }
}

// ============================================================================
// Response DTOs
// ============================================================================

/// An enriched role/grant descriptor in a read response.
#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
pub struct ReferenceResponse {
    pub id: i64,
    pub name: String,
    pub description: String,
}

/// Response body for secondary-store user data.
///
/// `role` and `grant` serialize as explicit nulls rather than being
/// skipped, so a miss in the canonical set is visible to clients.
#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct OracleUserResponse {
    pub id: i64,
    pub name: Option<String>,
    pub birth_date: Option<NaiveDate>,
    pub sex: Option<String>,
    pub role: Option<ReferenceResponse>,
    pub grant: Option<ReferenceResponse>,
}

impl From<OracleUserRow> for OracleUserResponse {
    fn from(row: OracleUserRow) -> Self {
        let role = row
            .role_id
            .and_then(canonical_role)
            .map(|r| ReferenceResponse {
                id: r.id,
                name: r.name.to_string(),
                description: r.description.to_string(),
            });
        let grant = row
            .grant_id
            .and_then(canonical_grant)
            .map(|g| ReferenceResponse {
                id: g.id,
                name: g.name.to_string(),
                description: g.description.to_string(),
            });

        Self {
            id: row.id,
            name: row.name,
            birth_date: row.birth_date,
            sex: row.sex,
            role,
            grant,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(role_id: Option<i64>, grant_id: Option<i64>) -> OracleUserRow {
        OracleUserRow {
            id: 1,
            name: Some("Ivan Petrov".to_string()),
            birth_date: NaiveDate::from_ymd_opt(1990, 5, 15),
            sex: Some("M".to_string()),
            role_id,
            grant_id,
        }
    }

    #[test]
    fn test_canonical_role_and_grant_enriched() {
        let response = OracleUserResponse::from(row(Some(2), Some(5)));

        let role = response.role.expect("role should be enriched");
        assert_eq!(role.name, "DEVELOPER");
        assert_eq!(role.description, "Developer role with read and write access");

        let grant = response.grant.expect("grant should be enriched");
        assert_eq!(grant.name, "ADMIN_ACCESS");
    }

    #[test]
    fn test_non_canonical_ids_yield_absent_references() {
        // Ids persisted directly into the table, outside the canonical five.
        let response = OracleUserResponse::from(row(Some(42), Some(7)));
        assert!(response.role.is_none());
        assert!(response.grant.is_none());
    }

    #[test]
    fn test_unset_references_stay_absent() {
        let response = OracleUserResponse::from(row(None, None));
        assert!(response.role.is_none());
        assert!(response.grant.is_none());
    }

    #[test]
    fn test_absent_references_serialize_as_null() {
        let response = OracleUserResponse::from(row(None, Some(99)));
        let json = serde_json::to_value(&response).unwrap();
        assert!(json.as_object().unwrap().contains_key("role"));
        assert_eq!(json["role"], serde_json::Value::Null);
        assert_eq!(json["grant"], serde_json::Value::Null);
    }

    #[test]
    fn test_reference_id_extraction() {
        let request = SaveOracleUserRequest {
            role: Some(ReferenceIdRequest { id: 3 }),
            grant: None,
            ..Default::default()
        };
        assert_eq!(request.role_id(), Some(3));
        assert_eq!(request.grant_id(), None);
    }

    #[test]
    fn test_reference_without_id_is_rejected_on_deserialize() {
        let result: Result<SaveOracleUserRequest, _> =
            serde_json::from_str(r#"{"name":"Ivan","role":{}}"#);
        assert!(result.is_err());
    }
}
