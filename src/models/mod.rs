mod oracle_grant;
mod oracle_role;
mod oracle_user;
mod postgres_user;
mod reference;

pub use oracle_grant::OracleGrantRow;
pub use oracle_role::OracleRoleRow;
pub use oracle_user::OracleUserRow;
pub use postgres_user::{NewPostgresUser, PostgresUser, ReplacePostgresUser};
pub use reference::{
    CANONICAL_GRANTS, CANONICAL_ROLES, ReferenceValue, canonical_grant, canonical_role,
};
