//! Secondary-store user service.
//!
//! Wraps the raw-SQL user repository. Writes only ever persist the bare
//! role/grant id columns; reads hand rows to the DTO layer, where the
//! canonical enrichment happens. Update and delete check affected rows so
//! a missing id surfaces as `NotFound` instead of a silent no-op.

use chrono::NaiveDate;
use tracing::info;

use crate::error::{AppError, AppResult};
use crate::models::OracleUserRow;
use crate::repositories::OracleUserRepository;

const ENTITY: &str = "oracle user";

/// Parameters for a secondary-store user write.
///
/// One struct serves insert and update; the row id never appears here
/// (database-generated on insert, path-supplied on update).
#[derive(Debug, Clone, Default)]
pub struct OracleUserWrite {
    pub name: Option<String>,
    pub birth_date: Option<NaiveDate>,
    pub sex: Option<String>,
    pub role_id: Option<i64>,
    pub grant_id: Option<i64>,
}

/// Secondary-store user service.
#[derive(Clone)]
pub struct OracleUserService {
    repo: OracleUserRepository,
}

impl OracleUserService {
    pub fn new(repo: OracleUserRepository) -> Self {
        Self { repo }
    }

    /// Lists all users ordered by ascending id.
    pub async fn list_users(&self) -> AppResult<Vec<OracleUserRow>> {
        self.repo.list_all().await
    }

    /// Gets a user by id, or `NotFound`.
    pub async fn get_user(&self, id: i64) -> AppResult<OracleUserRow> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found(ENTITY, id))
    }

    /// Creates a user; the store generates the id.
    pub async fn create_user(&self, write: OracleUserWrite) -> AppResult<()> {
        info!(name = ?write.name, "creating oracle user via SQL");
        self.repo
            .insert(
                write.name.as_deref(),
                write.birth_date,
                write.sex.as_deref(),
                write.role_id,
                write.grant_id,
            )
            .await?;
        Ok(())
    }

    /// Updates a user, or `NotFound` when the id is absent.
    pub async fn update_user(&self, id: i64, write: OracleUserWrite) -> AppResult<()> {
        info!(id, "updating oracle user via SQL");
        let affected = self
            .repo
            .update(
                id,
                write.name.as_deref(),
                write.birth_date,
                write.sex.as_deref(),
                write.role_id,
                write.grant_id,
            )
            .await?;
        if affected == 0 {
            return Err(AppError::not_found(ENTITY, id));
        }
        Ok(())
    }

    /// Deletes a user, or `NotFound` when the id is absent.
    pub async fn delete_user(&self, id: i64) -> AppResult<()> {
        info!(id, "deleting oracle user");
        let affected = self.repo.delete(id).await?;
        if affected == 0 {
            return Err(AppError::not_found(ENTITY, id));
        }
        Ok(())
    }
}
