//! Primary-store user service.
//!
//! Thin business layer over the primary-store repository: raises
//! `NotFound` for id-keyed misses and leaves everything else to the
//! repository. No cross-store coordination happens here; the primary
//! store's transactions are independent of the secondary store's.

use tracing::info;

use crate::error::{AppError, AppResult};
use crate::models::{NewPostgresUser, PostgresUser, ReplacePostgresUser};
use crate::repositories::PostgresUserRepository;

const ENTITY: &str = "postgres user";

/// Primary-store user service.
///
/// Cloning is cheap since the repository holds an `Arc`-backed pool.
#[derive(Clone)]
pub struct PostgresUserService {
    repo: PostgresUserRepository,
}

impl PostgresUserService {
    /// Creates a new PostgresUserService with the given repository.
    pub fn new(repo: PostgresUserRepository) -> Self {
        Self { repo }
    }

    /// Creates a new user with a caller-assigned id.
    ///
    /// A duplicate id is a store-level constraint violation and
    /// propagates as a database error, not a validation failure.
    pub async fn create_user(&self, new_user: NewPostgresUser) -> AppResult<PostgresUser> {
        info!(id = new_user.id, "creating postgres user");
        self.repo.create(new_user).await
    }

    /// Gets a user by id, or `NotFound`.
    pub async fn get_user(&self, id: i64) -> AppResult<PostgresUser> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found(ENTITY, id))
    }

    /// Lists all users ordered by ascending id.
    pub async fn list_users(&self) -> AppResult<Vec<PostgresUser>> {
        self.repo.list_all().await
    }

    /// Fully replaces a user's data, or `NotFound` when the id is absent.
    pub async fn update_user(
        &self,
        id: i64,
        replacement: ReplacePostgresUser,
    ) -> AppResult<PostgresUser> {
        info!(id, "updating postgres user");
        self.repo
            .update(id, replacement)
            .await?
            .ok_or_else(|| AppError::not_found(ENTITY, id))
    }

    /// Deletes a user, or `NotFound` when the id is absent.
    pub async fn delete_user(&self, id: i64) -> AppResult<()> {
        info!(id, "deleting postgres user");
        let affected = self.repo.delete(id).await?;
        if affected == 0 {
            return Err(AppError::not_found(ENTITY, id));
        }
        Ok(())
    }
}
