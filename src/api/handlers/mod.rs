//! HTTP request handlers for API endpoints.
//!
//! This module contains all request handlers organized by resource type.

pub mod health;
pub mod oracle_grants;
pub mod oracle_roles;
pub mod oracle_users;
pub mod postgres_users;
