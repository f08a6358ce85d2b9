use chrono::NaiveDate;
use diesel::prelude::*;

/// Primary-store user model for reading from the database.
/// Derives Queryable for SELECT operations and Selectable for type-safe
/// column selection.
#[derive(Debug, Queryable, Selectable, Clone, PartialEq, Eq)]
#[diesel(table_name = crate::schema::postgres_users)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct PostgresUser {
    pub id: i64,
    pub name: String,
    pub birth_date: Option<NaiveDate>,
    pub gender: Option<String>,
    pub role: String,
    pub grant_field: Option<String>,
}

/// Insert model for the primary-store user table.
///
/// The id is caller-assigned, never generated; uniqueness is enforced by
/// the store's primary-key constraint, not by the application.
#[derive(Debug, Insertable, Clone)]
#[diesel(table_name = crate::schema::postgres_users)]
pub struct NewPostgresUser {
    pub id: i64,
    pub name: String,
    pub birth_date: Option<NaiveDate>,
    pub gender: Option<String>,
    pub role: String,
    pub grant_field: Option<String>,
}

/// Full-replace changeset for the primary-store user table.
///
/// Updates overwrite every column; `treat_none_as_null` makes an absent
/// optional field clear the stored value instead of being skipped. This
/// replace-all contract is deliberate, not partial/patch semantics.
#[derive(Debug, AsChangeset, Clone)]
#[diesel(table_name = crate::schema::postgres_users)]
#[diesel(treat_none_as_null = true)]
pub struct ReplacePostgresUser {
    pub name: String,
    pub birth_date: Option<NaiveDate>,
    pub gender: Option<String>,
    pub role: String,
    pub grant_field: Option<String>,
}
