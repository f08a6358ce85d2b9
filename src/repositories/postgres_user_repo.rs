//! Primary-store user repository for async database operations.
//!
//! Provides CRUD operations for the postgres_users table using diesel_async.

use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::db::AsyncDbPool;
use crate::error::AppError;
use crate::models::{NewPostgresUser, PostgresUser, ReplacePostgresUser};

/// Primary-store user repository holding an async connection pool.
///
/// Since `AsyncDbPool` (bb8::Pool) internally uses `Arc`, cloning is cheap
/// (just reference count increment). No need for `Arc<PostgresUserRepository>`.
#[derive(Clone)]
pub struct PostgresUserRepository {
    pool: AsyncDbPool,
}

impl PostgresUserRepository {
    /// Creates a new PostgresUserRepository with the given connection pool.
    pub fn new(pool: AsyncDbPool) -> Self {
        Self { pool }
    }

    /// Creates a new user row.
    ///
    /// The id is caller-assigned; a duplicate id violates the store's
    /// primary-key constraint and surfaces as a database error.
    ///
    /// # Returns
    /// The created user as persisted
    pub async fn create(&self, new_user: NewPostgresUser) -> Result<PostgresUser, AppError> {
        use crate::schema::postgres_users::dsl::*;
        let mut conn = self.pool.get().await?;

        diesel::insert_into(postgres_users)
            .values(&new_user)
            .returning(PostgresUser::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(AppError::from)
    }

    /// Finds a user by id.
    ///
    /// # Returns
    /// `Some(PostgresUser)` if found, `None` otherwise
    pub async fn find_by_id(&self, user_id: i64) -> Result<Option<PostgresUser>, AppError> {
        use crate::schema::postgres_users::dsl::*;
        let mut conn = self.pool.get().await?;

        postgres_users
            .filter(id.eq(user_id))
            .select(PostgresUser::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(AppError::from)
    }

    /// Lists all users ordered by ascending id.
    ///
    /// Insertion order is irrelevant; listings are always id-sorted.
    pub async fn list_all(&self) -> Result<Vec<PostgresUser>, AppError> {
        use crate::schema::postgres_users::dsl::*;
        let mut conn = self.pool.get().await?;

        postgres_users
            .order(id.asc())
            .select(PostgresUser::as_select())
            .load(&mut conn)
            .await
            .map_err(AppError::from)
    }

    /// Fully replaces a user's data.
    ///
    /// Every column is overwritten; absent optional fields clear the
    /// stored value (see `ReplacePostgresUser`).
    ///
    /// # Returns
    /// `Some(PostgresUser)` with the updated row, `None` when the id does
    /// not exist
    pub async fn update(
        &self,
        user_id: i64,
        replacement: ReplacePostgresUser,
    ) -> Result<Option<PostgresUser>, AppError> {
        use crate::schema::postgres_users::dsl::*;
        let mut conn = self.pool.get().await?;

        diesel::update(postgres_users.filter(id.eq(user_id)))
            .set(&replacement)
            .returning(PostgresUser::as_returning())
            .get_result(&mut conn)
            .await
            .optional()
            .map_err(AppError::from)
    }

    /// Deletes a user row.
    ///
    /// # Returns
    /// The number of affected rows (0 or 1)
    pub async fn delete(&self, user_id: i64) -> Result<usize, AppError> {
        use crate::schema::postgres_users::dsl::*;
        let mut conn = self.pool.get().await?;

        diesel::delete(postgres_users.filter(id.eq(user_id)))
            .execute(&mut conn)
            .await
            .map_err(AppError::from)
    }
}
