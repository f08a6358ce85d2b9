//! Diesel table definitions for the primary store.
//!
//! Only the primary store's `postgres_users` table is mapped through the
//! diesel DSL; its schema is migrated by an external tool. The secondary
//! store's tables (`oracle_users`, `oracle_users_role`,
//! `oracle_users_grant`) are managed out-of-band and accessed exclusively
//! through raw parameterized statements, so they are not declared here.

diesel::table! {
    postgres_users (id) {
        id -> Int8,
        #[max_length = 100]
        name -> Varchar,
        birth_date -> Nullable<Date>,
        #[max_length = 50]
        gender -> Nullable<Varchar>,
        #[max_length = 100]
        role -> Varchar,
        #[max_length = 255]
        grant_field -> Nullable<Varchar>,
    }
}
