use diesel::prelude::*;
use diesel::sql_types::{BigInt, Nullable, Text};

/// Secondary-store grant row, read back from raw SQL.
#[derive(Debug, QueryableByName, Clone, PartialEq, Eq)]
pub struct OracleGrantRow {
    #[diesel(sql_type = BigInt)]
    pub id: i64,
    #[diesel(sql_type = Nullable<Text>)]
    pub name: Option<String>,
    #[diesel(sql_type = Nullable<Text>)]
    pub description: Option<String>,
}
