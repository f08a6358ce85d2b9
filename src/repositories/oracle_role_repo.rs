//! Secondary-store role repository.
//!
//! Raw parameterized statements against the `oracle_users_role` reference
//! table. The stored description column is named `describe`; reads alias
//! it to `description` for deserialization into `OracleRoleRow`.

use diesel::prelude::*;
use diesel::sql_query;
use diesel::sql_types::{BigInt, Nullable, Text};
use diesel_async::RunQueryDsl;

use crate::db::AsyncDbPool;
use crate::error::AppError;
use crate::models::OracleRoleRow;

const SELECT_COLUMNS: &str = "SELECT id, name, describe AS description FROM oracle_users_role";

/// Secondary-store role repository holding the secondary pool.
#[derive(Clone)]
pub struct OracleRoleRepository {
    pool: AsyncDbPool,
}

impl OracleRoleRepository {
    pub fn new(pool: AsyncDbPool) -> Self {
        Self { pool }
    }

    /// Lists all roles ordered by ascending id.
    pub async fn list_all(&self) -> Result<Vec<OracleRoleRow>, AppError> {
        let mut conn = self.pool.get().await?;

        sql_query(format!("{SELECT_COLUMNS} ORDER BY id ASC"))
            .load(&mut conn)
            .await
            .map_err(AppError::from)
    }

    /// Finds a role by id.
    pub async fn find_by_id(&self, role_id: i64) -> Result<Option<OracleRoleRow>, AppError> {
        let mut conn = self.pool.get().await?;

        sql_query(format!("{SELECT_COLUMNS} WHERE id = $1"))
            .bind::<BigInt, _>(role_id)
            .get_result(&mut conn)
            .await
            .optional()
            .map_err(AppError::from)
    }

    /// Inserts a role row; the id column is database-generated.
    pub async fn insert(
        &self,
        name: Option<&str>,
        description: Option<&str>,
    ) -> Result<usize, AppError> {
        let mut conn = self.pool.get().await?;

        sql_query("INSERT INTO oracle_users_role (name, describe) VALUES ($1, $2)")
            .bind::<Nullable<Text>, _>(name)
            .bind::<Nullable<Text>, _>(description)
            .execute(&mut conn)
            .await
            .map_err(AppError::from)
    }

    /// Updates a role row.
    ///
    /// # Returns
    /// The number of affected rows (0 when the id does not exist)
    pub async fn update(
        &self,
        role_id: i64,
        name: Option<&str>,
        description: Option<&str>,
    ) -> Result<usize, AppError> {
        let mut conn = self.pool.get().await?;

        sql_query("UPDATE oracle_users_role SET name = $1, describe = $2 WHERE id = $3")
            .bind::<Nullable<Text>, _>(name)
            .bind::<Nullable<Text>, _>(description)
            .bind::<BigInt, _>(role_id)
            .execute(&mut conn)
            .await
            .map_err(AppError::from)
    }

    /// Deletes a role row.
    pub async fn delete(&self, role_id: i64) -> Result<usize, AppError> {
        let mut conn = self.pool.get().await?;

        sql_query("DELETE FROM oracle_users_role WHERE id = $1")
            .bind::<BigInt, _>(role_id)
            .execute(&mut conn)
            .await
            .map_err(AppError::from)
    }
}
