//! Secondary-store role CRUD request handlers.

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    routing::get,
};

use crate::api::dto::{OracleRoleResponse, SaveOracleRoleRequest};
use crate::error::AppError;
use crate::state::AppState;
use crate::utils::ValidatedJson;

/// Creates secondary-store role routes.
///
/// Routes:
/// - GET /        - List all roles
/// - POST /       - Create a new role
/// - GET /{id}    - Get role by ID
/// - PUT /{id}    - Update role by ID
/// - DELETE /{id} - Delete role by ID
pub fn oracle_role_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_roles).post(create_role))
        .route("/{id}", get(get_role).put(update_role).delete(delete_role))
}

/// GET /oracle/roles - List all roles.
async fn list_roles(
    State(state): State<AppState>,
) -> Result<Json<Vec<OracleRoleResponse>>, AppError> {
    let roles = state.services.oracle_roles.list_roles().await?;
    let responses: Vec<OracleRoleResponse> =
        roles.into_iter().map(OracleRoleResponse::from).collect();
    Ok(Json(responses))
}

/// GET /oracle/roles/{id} - Get role by ID, 404 if absent.
async fn get_role(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<OracleRoleResponse>, AppError> {
    let role = state.services.oracle_roles.get_role(id).await?;
    Ok(Json(OracleRoleResponse::from(role)))
}

/// POST /oracle/roles - Create a role, 201 with empty body.
async fn create_role(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<SaveOracleRoleRequest>,
) -> Result<StatusCode, AppError> {
    state
        .services
        .oracle_roles
        .create_role(payload.name.as_deref(), payload.description.as_deref())
        .await?;
    Ok(StatusCode::CREATED)
}

/// PUT /oracle/roles/{id} - Update a role, 200 with empty body, 404 if absent.
async fn update_role(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    ValidatedJson(payload): ValidatedJson<SaveOracleRoleRequest>,
) -> Result<StatusCode, AppError> {
    state
        .services
        .oracle_roles
        .update_role(id, payload.name.as_deref(), payload.description.as_deref())
        .await?;
    Ok(StatusCode::OK)
}

/// DELETE /oracle/roles/{id} - Delete a role, 204 on success, 404 if absent.
async fn delete_role(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, AppError> {
    state.services.oracle_roles.delete_role(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
