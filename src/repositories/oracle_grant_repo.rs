//! Secondary-store grant repository.
//!
//! Same shape as the role repository, against the `oracle_users_grant`
//! reference table.

use diesel::prelude::*;
use diesel::sql_query;
use diesel::sql_types::{BigInt, Nullable, Text};
use diesel_async::RunQueryDsl;

use crate::db::AsyncDbPool;
use crate::error::AppError;
use crate::models::OracleGrantRow;

const SELECT_COLUMNS: &str = "SELECT id, name, describe AS description FROM oracle_users_grant";

/// Secondary-store grant repository holding the secondary pool.
#[derive(Clone)]
pub struct OracleGrantRepository {
    pool: AsyncDbPool,
}

impl OracleGrantRepository {
    pub fn new(pool: AsyncDbPool) -> Self {
        Self { pool }
    }

    /// Lists all grants ordered by ascending id.
    pub async fn list_all(&self) -> Result<Vec<OracleGrantRow>, AppError> {
        let mut conn = self.pool.get().await?;

        sql_query(format!("{SELECT_COLUMNS} ORDER BY id ASC"))
            .load(&mut conn)
            .await
            .map_err(AppError::from)
    }

    /// Finds a grant by id.
    pub async fn find_by_id(&self, grant_id: i64) -> Result<Option<OracleGrantRow>, AppError> {
        let mut conn = self.pool.get().await?;

        sql_query(format!("{SELECT_COLUMNS} WHERE id = $1"))
            .bind::<BigInt, _>(grant_id)
            .get_result(&mut conn)
            .await
            .optional()
            .map_err(AppError::from)
    }

    /// Inserts a grant row; the id column is database-generated.
    pub async fn insert(
        &self,
        name: Option<&str>,
        description: Option<&str>,
    ) -> Result<usize, AppError> {
        let mut conn = self.pool.get().await?;

        sql_query("INSERT INTO oracle_users_grant (name, describe) VALUES ($1, $2)")
            .bind::<Nullable<Text>, _>(name)
            .bind::<Nullable<Text>, _>(description)
            .execute(&mut conn)
            .await
            .map_err(AppError::from)
    }

    /// Updates a grant row.
    ///
    /// # Returns
    /// The number of affected rows (0 when the id does not exist)
    pub async fn update(
        &self,
        grant_id: i64,
        name: Option<&str>,
        description: Option<&str>,
    ) -> Result<usize, AppError> {
        let mut conn = self.pool.get().await?;

        sql_query("UPDATE oracle_users_grant SET name = $1, describe = $2 WHERE id = $3")
            .bind::<Nullable<Text>, _>(name)
            .bind::<Nullable<Text>, _>(description)
            .bind::<BigInt, _>(grant_id)
            .execute(&mut conn)
            .await
            .map_err(AppError::from)
    }

    /// Deletes a grant row.
    pub async fn delete(&self, grant_id: i64) -> Result<usize, AppError> {
        let mut conn = self.pool.get().await?;

        sql_query("DELETE FROM oracle_users_grant WHERE id = $1")
            .bind::<BigInt, _>(grant_id)
            .execute(&mut conn)
            .await
            .map_err(AppError::from)
    }
}
