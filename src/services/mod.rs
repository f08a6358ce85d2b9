//! Service layer for business logic operations.
//!
//! Services encapsulate business logic and coordinate between
//! repositories and handlers. Each service is bound to one store; no
//! service touches both.

mod oracle_grant_service;
mod oracle_role_service;
mod oracle_user_service;
mod postgres_user_service;

pub use oracle_grant_service::OracleGrantService;
pub use oracle_role_service::OracleRoleService;
pub use oracle_user_service::{OracleUserService, OracleUserWrite};
pub use postgres_user_service::PostgresUserService;

use crate::repositories::Repositories;

/// Aggregates all services for convenient access.
///
/// This struct is designed to be used as Axum application state.
/// Cloning is cheap since underlying pools use `Arc` internally.
#[derive(Clone)]
pub struct Services {
    pub postgres_users: PostgresUserService,
    pub oracle_users: OracleUserService,
    pub oracle_roles: OracleRoleService,
    pub oracle_grants: OracleGrantService,
}

impl Services {
    /// Creates a new Services instance from Repositories.
    pub fn new(repos: Repositories) -> Self {
        Self {
            postgres_users: PostgresUserService::new(repos.postgres_users),
            oracle_users: OracleUserService::new(repos.oracle_users),
            oracle_roles: OracleRoleService::new(repos.oracle_roles),
            oracle_grants: OracleGrantService::new(repos.oracle_grants),
        }
    }
}
