//! Router configuration for the API.
//!
//! This module provides centralized route registration and middleware
//! configuration for the application.

use axum::{Router, middleware};
use tower_http::compression::CompressionLayer;
use tower_http::cors::CorsLayer;

use crate::api::handlers;
use crate::api::middleware::{logging_middleware, request_id_middleware};
use crate::state::AppState;

/// Creates the main application router with all routes and middleware.
///
/// # Middleware Order
/// Middleware is applied in reverse order of declaration (last added runs first):
/// 1. Request ID middleware (runs first) - generates/propagates request IDs
/// 2. Logging middleware (runs second) - logs requests with request IDs
///
/// # Routes
/// - `/postgres-users` - Primary-store user CRUD
/// - `/oracle/users` - Secondary-store user CRUD
/// - `/oracle/roles` - Secondary-store role CRUD
/// - `/oracle/grants` - Secondary-store grant CRUD
/// - `/health` - Health and probe endpoints
pub fn create_router(state: AppState) -> Router {
    let oracle_routes = Router::new()
        .nest("/users", handlers::oracle_users::oracle_user_routes())
        .nest("/roles", handlers::oracle_roles::oracle_role_routes())
        .nest("/grants", handlers::oracle_grants::oracle_grant_routes());

    Router::new()
        .nest(
            "/postgres-users",
            handlers::postgres_users::postgres_user_routes(),
        )
        .nest("/oracle", oracle_routes)
        .merge(handlers::health::health_routes())
        .layer(CompressionLayer::new())
        .layer(CorsLayer::permissive())
        // Middleware is applied in reverse order - last added runs first
        // So logging runs after request_id has set the ID
        .layer(middleware::from_fn(logging_middleware))
        .layer(middleware::from_fn(request_id_middleware))
        .with_state(state)
}
