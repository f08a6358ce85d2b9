//! Secondary-store role service.

use tracing::info;

use crate::error::{AppError, AppResult};
use crate::models::OracleRoleRow;
use crate::repositories::OracleRoleRepository;

const ENTITY: &str = "oracle role";

/// Secondary-store role service over the `oracle_users_role` table.
#[derive(Clone)]
pub struct OracleRoleService {
    repo: OracleRoleRepository,
}

impl OracleRoleService {
    pub fn new(repo: OracleRoleRepository) -> Self {
        Self { repo }
    }

    /// Lists all roles ordered by ascending id.
    pub async fn list_roles(&self) -> AppResult<Vec<OracleRoleRow>> {
        self.repo.list_all().await
    }

    /// Gets a role by id, or `NotFound`.
    pub async fn get_role(&self, id: i64) -> AppResult<OracleRoleRow> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found(ENTITY, id))
    }

    /// Creates a role; the store generates the id.
    pub async fn create_role(
        &self,
        name: Option<&str>,
        description: Option<&str>,
    ) -> AppResult<()> {
        info!(?name, "creating oracle role via SQL");
        self.repo.insert(name, description).await?;
        Ok(())
    }

    /// Updates a role, or `NotFound` when the id is absent.
    pub async fn update_role(
        &self,
        id: i64,
        name: Option<&str>,
        description: Option<&str>,
    ) -> AppResult<()> {
        info!(id, "updating oracle role via SQL");
        let affected = self.repo.update(id, name, description).await?;
        if affected == 0 {
            return Err(AppError::not_found(ENTITY, id));
        }
        Ok(())
    }

    /// Deletes a role, or `NotFound` when the id is absent.
    pub async fn delete_role(&self, id: i64) -> AppResult<()> {
        info!(id, "deleting oracle role");
        let affected = self.repo.delete(id).await?;
        if affected == 0 {
            return Err(AppError::not_found(ENTITY, id));
        }
        Ok(())
    }
}
