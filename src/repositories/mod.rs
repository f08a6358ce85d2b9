//! Repository layer for data access operations.
//!
//! Provides async CRUD operations for all domain entities. The primary
//! store is reached through the diesel DSL; the secondary store through
//! raw parameterized statements. Each repository is bound to exactly one
//! of the two pools.

mod oracle_grant_repo;
mod oracle_role_repo;
mod oracle_user_repo;
mod postgres_user_repo;

pub use oracle_grant_repo::OracleGrantRepository;
pub use oracle_role_repo::OracleRoleRepository;
pub use oracle_user_repo::OracleUserRepository;
pub use postgres_user_repo::PostgresUserRepository;

use crate::db::AsyncDbPool;

/// Aggregates all repositories for convenient access.
///
/// Since `AsyncDbPool` uses `Arc` internally, cloning is cheap.
#[derive(Clone)]
pub struct Repositories {
    pub postgres_users: PostgresUserRepository,
    pub oracle_users: OracleUserRepository,
    pub oracle_roles: OracleRoleRepository,
    pub oracle_grants: OracleGrantRepository,
}

impl Repositories {
    /// Creates a new Repositories instance with all repositories initialized.
    ///
    /// # Arguments
    /// * `primary_pool` - Pool for the primary store
    /// * `secondary_pool` - Pool for the secondary store
    pub fn new(primary_pool: AsyncDbPool, secondary_pool: AsyncDbPool) -> Self {
        Self {
            postgres_users: PostgresUserRepository::new(primary_pool),
            oracle_users: OracleUserRepository::new(secondary_pool.clone()),
            oracle_roles: OracleRoleRepository::new(secondary_pool.clone()),
            oracle_grants: OracleGrantRepository::new(secondary_pool),
        }
    }
}
