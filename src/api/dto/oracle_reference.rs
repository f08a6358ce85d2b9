//! Secondary-store role and grant DTOs.
//!
//! Roles and grants share one shape: id, name, description. The stored
//! description column is `describe`; the API always says `description`.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::{OracleGrantRow, OracleRoleRow};

/// Request body for creating or replacing a role.
#[derive(Debug, Deserialize, Validate, Default)]
pub struct SaveOracleRoleRequest {
    pub name: Option<String>,
    pub description: Option<String>,
}

/// Request body for creating or replacing a grant.
#[derive(Debug, Deserialize, Validate, Default)]
pub struct SaveOracleGrantRequest {
    pub name: Option<String>,
    pub description: Option<String>,
}

/// Response body for role data.
#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct OracleRoleResponse {
    pub id: i64,
    pub name: Option<String>,
    pub description: Option<String>,
}

impl From<OracleRoleRow> for OracleRoleResponse {
    fn from(row: OracleRoleRow) -> Self {
        Self {
            id: row.id,
            name: row.name,
            description: row.description,
        }
    }
}

/// Response body for grant data.
#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct OracleGrantResponse {
    pub id: i64,
    pub name: Option<String>,
    pub description: Option<String>,
}

impl From<OracleGrantRow> for OracleGrantResponse {
    fn from(row: OracleGrantRow) -> Self {
        Self {
            id: row.id,
            name: row.name,
            description: row.description,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_response_from_row() {
        let row = OracleRoleRow {
            id: 3,
            name: Some("ANALYST".to_string()),
            description: Some("Analyst role with read and execute access".to_string()),
        };
        let response = OracleRoleResponse::from(row);
        assert_eq!(response.id, 3);
        assert_eq!(response.name.as_deref(), Some("ANALYST"));
    }

    #[test]
    fn test_grant_response_null_fields_serialize() {
        let response = OracleGrantResponse::from(OracleGrantRow {
            id: 9,
            name: None,
            description: None,
        });
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["name"], serde_json::Value::Null);
        assert_eq!(json["description"], serde_json::Value::Null);
    }
}
