//! Secondary-store grant service.

use tracing::info;

use crate::error::{AppError, AppResult};
use crate::models::OracleGrantRow;
use crate::repositories::OracleGrantRepository;

const ENTITY: &str = "oracle grant";

/// Secondary-store grant service over the `oracle_users_grant` table.
#[derive(Clone)]
pub struct OracleGrantService {
    repo: OracleGrantRepository,
}

impl OracleGrantService {
    pub fn new(repo: OracleGrantRepository) -> Self {
        Self { repo }
    }

    /// Lists all grants ordered by ascending id.
    pub async fn list_grants(&self) -> AppResult<Vec<OracleGrantRow>> {
        self.repo.list_all().await
    }

    /// Gets a grant by id, or `NotFound`.
    pub async fn get_grant(&self, id: i64) -> AppResult<OracleGrantRow> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found(ENTITY, id))
    }

    /// Creates a grant; the store generates the id.
    pub async fn create_grant(
        &self,
        name: Option<&str>,
        description: Option<&str>,
    ) -> AppResult<()> {
        info!(?name, "creating oracle grant via SQL");
        self.repo.insert(name, description).await?;
        Ok(())
    }

    /// Updates a grant, or `NotFound` when the id is absent.
    pub async fn update_grant(
        &self,
        id: i64,
        name: Option<&str>,
        description: Option<&str>,
    ) -> AppResult<()> {
        info!(id, "updating oracle grant via SQL");
        let affected = self.repo.update(id, name, description).await?;
        if affected == 0 {
            return Err(AppError::not_found(ENTITY, id));
        }
        Ok(())
    }

    /// Deletes a grant, or `NotFound` when the id is absent.
    pub async fn delete_grant(&self, id: i64) -> AppResult<()> {
        info!(id, "deleting oracle grant");
        let affected = self.repo.delete(id).await?;
        if affected == 0 {
            return Err(AppError::not_found(ENTITY, id));
        }
        Ok(())
    }
}
