//! Secondary-store user CRUD request handlers.
//!
//! Write endpoints return empty bodies: the store generates ids on
//! insert and the insert statement does not return the row, so there is
//! nothing authoritative to echo back.

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    routing::get,
};

use crate::api::dto::{OracleUserResponse, SaveOracleUserRequest};
use crate::error::AppError;
use crate::services::OracleUserWrite;
use crate::state::AppState;
use crate::utils::ValidatedJson;

/// Creates secondary-store user routes.
///
/// Routes:
/// - GET /        - List all users
/// - POST /       - Create a new user
/// - GET /{id}    - Get user by ID
/// - PUT /{id}    - Update user by ID
/// - DELETE /{id} - Delete user by ID
pub fn oracle_user_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_users).post(create_user))
        .route("/{id}", get(get_user).put(update_user).delete(delete_user))
}

fn into_write(payload: SaveOracleUserRequest) -> OracleUserWrite {
    let role_id = payload.role_id();
    let grant_id = payload.grant_id();
    OracleUserWrite {
        name: payload.name,
        birth_date: payload.birth_date,
        sex: payload.sex,
        role_id,
        grant_id,
    }
}

/// GET /oracle/users - List all users with enriched role/grant references.
async fn list_users(
    State(state): State<AppState>,
) -> Result<Json<Vec<OracleUserResponse>>, AppError> {
    let users = state.services.oracle_users.list_users().await?;
    let responses: Vec<OracleUserResponse> =
        users.into_iter().map(OracleUserResponse::from).collect();
    Ok(Json(responses))
}

/// GET /oracle/users/{id} - Get user by ID, 404 if absent.
async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<OracleUserResponse>, AppError> {
    let user = state.services.oracle_users.get_user(id).await?;
    Ok(Json(OracleUserResponse::from(user)))
}

/// POST /oracle/users - Create a user, 201 with empty body.
async fn create_user(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<SaveOracleUserRequest>,
) -> Result<StatusCode, AppError> {
    state
        .services
        .oracle_users
        .create_user(into_write(payload))
        .await?;
    Ok(StatusCode::CREATED)
}

/// PUT /oracle/users/{id} - Update a user, 200 with empty body, 404 if absent.
async fn update_user(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    ValidatedJson(payload): ValidatedJson<SaveOracleUserRequest>,
) -> Result<StatusCode, AppError> {
    state
        .services
        .oracle_users
        .update_user(id, into_write(payload))
        .await?;
    Ok(StatusCode::OK)
}

/// DELETE /oracle/users/{id} - Delete a user, 204 on success, 404 if absent.
async fn delete_user(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, AppError> {
    state.services.oracle_users.delete_user(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
