use diesel::prelude::*;
use diesel::sql_types::{BigInt, Nullable, Text};

/// Secondary-store role row, read back from raw SQL.
///
/// The stored column is named `describe`; SELECT statements alias it to
/// `description` for deserialization.
#[derive(Debug, QueryableByName, Clone, PartialEq, Eq)]
pub struct OracleRoleRow {
    #[diesel(sql_type = BigInt)]
    pub id: i64,
    #[diesel(sql_type = Nullable<Text>)]
    pub name: Option<String>,
    #[diesel(sql_type = Nullable<Text>)]
    pub description: Option<String>,
}
