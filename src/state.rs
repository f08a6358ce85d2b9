//! Application state for Axum web framework.
//!
//! Contains shared services and resources that are accessible
//! across all request handlers.

use crate::db::AsyncDbPool;
use crate::repositories::Repositories;
use crate::services::Services;

/// Application state containing all shared services and resources.
///
/// This struct is designed to be used with Axum's State extractor.
/// Cloning is cheap since both Services and AsyncDbPool use Arc internally.
#[derive(Clone)]
pub struct AppState {
    /// All business logic services
    pub services: Services,
    /// Direct access to the primary-store connection pool
    pub primary_pool: AsyncDbPool,
    /// Direct access to the secondary-store connection pool
    pub secondary_pool: AsyncDbPool,
}

impl AppState {
    /// Creates a new AppState from the two connection pools.
    ///
    /// Initializes all repositories and services; each repository is
    /// bound to the pool of the store it serves.
    pub fn new(primary_pool: AsyncDbPool, secondary_pool: AsyncDbPool) -> Self {
        let repos = Repositories::new(primary_pool.clone(), secondary_pool.clone());
        let services = Services::new(repos);
        Self {
            services,
            primary_pool,
            secondary_pool,
        }
    }
}
