use chrono::NaiveDate;
use diesel::prelude::*;
use diesel::sql_types::{BigInt, Date, Nullable, Text};

/// Secondary-store user row, read back from raw SQL.
///
/// The `oracle_users` table is not declared in the diesel schema; rows
/// are deserialized by column name from `sql_query` results, so the
/// SELECT statements alias `birth_date_ora` to `birth_date`.
#[derive(Debug, QueryableByName, Clone, PartialEq, Eq)]
pub struct OracleUserRow {
    #[diesel(sql_type = BigInt)]
    pub id: i64,
    #[diesel(sql_type = Nullable<Text>)]
    pub name: Option<String>,
    #[diesel(sql_type = Nullable<Date>)]
    pub birth_date: Option<NaiveDate>,
    #[diesel(sql_type = Nullable<Text>)]
    pub sex: Option<String>,
    #[diesel(sql_type = Nullable<BigInt>)]
    pub role_id: Option<i64>,
    #[diesel(sql_type = Nullable<BigInt>)]
    pub grant_id: Option<i64>,
}
