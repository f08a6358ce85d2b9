//! Secondary-store user repository.
//!
//! The secondary store's tables are not declared in the diesel schema;
//! every operation here is a hand-written parameterized statement issued
//! through `sql_query`. Reads alias `birth_date_ora` to `birth_date` so
//! rows deserialize by column name into `OracleUserRow`.

use chrono::NaiveDate;
use diesel::prelude::*;
use diesel::sql_query;
use diesel::sql_types::{BigInt, Date, Nullable, Text};
use diesel_async::RunQueryDsl;

use crate::db::AsyncDbPool;
use crate::error::AppError;
use crate::models::OracleUserRow;

const SELECT_COLUMNS: &str =
    "SELECT id, name, birth_date_ora AS birth_date, sex, role_id, grant_id FROM oracle_users";

/// Secondary-store user repository holding the secondary pool.
#[derive(Clone)]
pub struct OracleUserRepository {
    pool: AsyncDbPool,
}

impl OracleUserRepository {
    /// Creates a new OracleUserRepository with the given connection pool.
    pub fn new(pool: AsyncDbPool) -> Self {
        Self { pool }
    }

    /// Lists all users ordered by ascending id.
    pub async fn list_all(&self) -> Result<Vec<OracleUserRow>, AppError> {
        let mut conn = self.pool.get().await?;

        sql_query(format!("{SELECT_COLUMNS} ORDER BY id ASC"))
            .load(&mut conn)
            .await
            .map_err(AppError::from)
    }

    /// Finds a user by id.
    ///
    /// # Returns
    /// `Some(OracleUserRow)` if found, `None` otherwise
    pub async fn find_by_id(&self, user_id: i64) -> Result<Option<OracleUserRow>, AppError> {
        let mut conn = self.pool.get().await?;

        sql_query(format!("{SELECT_COLUMNS} WHERE id = $1"))
            .bind::<BigInt, _>(user_id)
            .get_result(&mut conn)
            .await
            .optional()
            .map_err(AppError::from)
    }

    /// Inserts a user row.
    ///
    /// The id column is database-generated and never supplied here. Role
    /// and grant are written as bare id columns.
    pub async fn insert(
        &self,
        name: Option<&str>,
        birth_date: Option<NaiveDate>,
        sex: Option<&str>,
        role_id: Option<i64>,
        grant_id: Option<i64>,
    ) -> Result<usize, AppError> {
        let mut conn = self.pool.get().await?;

        sql_query(
            "INSERT INTO oracle_users (name, birth_date_ora, sex, role_id, grant_id) \
             VALUES ($1, $2, $3, $4, $5)",
        )
        .bind::<Nullable<Text>, _>(name)
        .bind::<Nullable<Date>, _>(birth_date)
        .bind::<Nullable<Text>, _>(sex)
        .bind::<Nullable<BigInt>, _>(role_id)
        .bind::<Nullable<BigInt>, _>(grant_id)
        .execute(&mut conn)
        .await
        .map_err(AppError::from)
    }

    /// Updates a user row with a targeted column list.
    ///
    /// # Returns
    /// The number of affected rows (0 when the id does not exist)
    pub async fn update(
        &self,
        user_id: i64,
        name: Option<&str>,
        birth_date: Option<NaiveDate>,
        sex: Option<&str>,
        role_id: Option<i64>,
        grant_id: Option<i64>,
    ) -> Result<usize, AppError> {
        let mut conn = self.pool.get().await?;

        sql_query(
            "UPDATE oracle_users SET name = $1, birth_date_ora = $2, sex = $3, \
             role_id = $4, grant_id = $5 WHERE id = $6",
        )
        .bind::<Nullable<Text>, _>(name)
        .bind::<Nullable<Date>, _>(birth_date)
        .bind::<Nullable<Text>, _>(sex)
        .bind::<Nullable<BigInt>, _>(role_id)
        .bind::<Nullable<BigInt>, _>(grant_id)
        .bind::<BigInt, _>(user_id)
        .execute(&mut conn)
        .await
        .map_err(AppError::from)
    }

    /// Deletes a user row.
    ///
    /// # Returns
    /// The number of affected rows (0 or 1)
    pub async fn delete(&self, user_id: i64) -> Result<usize, AppError> {
        let mut conn = self.pool.get().await?;

        sql_query("DELETE FROM oracle_users WHERE id = $1")
            .bind::<BigInt, _>(user_id)
            .execute(&mut conn)
            .await
            .map_err(AppError::from)
    }
}
