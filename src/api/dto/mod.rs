//! Data Transfer Objects for API requests and responses.
//!
//! DTOs are organized by domain:
//! - `postgres_user` - Primary-store user request/response DTOs
//! - `oracle_user` - Secondary-store user DTOs with reference enrichment
//! - `oracle_reference` - Secondary-store role and grant DTOs
//! - `error` - Common error response DTOs
//! - `health` - Health check DTOs

mod error;
mod health;
mod oracle_reference;
mod oracle_user;
mod postgres_user;

pub use error::ErrorResponse;
pub use health::{ComponentHealth, HealthResponse, HealthStatus};
pub use oracle_reference::{
    OracleGrantResponse, OracleRoleResponse, SaveOracleGrantRequest, SaveOracleRoleRequest,
};
pub use oracle_user::{OracleUserResponse, ReferenceIdRequest, ReferenceResponse, SaveOracleUserRequest};
pub use postgres_user::{
    CreatePostgresUserRequest, PostgresUserResponse, UpdatePostgresUserRequest,
};
