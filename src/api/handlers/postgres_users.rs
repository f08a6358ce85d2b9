//! Primary-store user CRUD request handlers.
//!
//! Validation runs in the `ValidatedJson` extractor before any handler
//! body executes; an invalid payload never reaches the store.

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    routing::get,
};

use crate::api::dto::{CreatePostgresUserRequest, PostgresUserResponse, UpdatePostgresUserRequest};
use crate::error::AppError;
use crate::state::AppState;
use crate::utils::ValidatedJson;

/// Creates primary-store user routes.
///
/// Routes:
/// - GET /        - List all users
/// - POST /       - Create a new user
/// - GET /{id}    - Get user by ID
/// - PUT /{id}    - Replace user by ID
/// - DELETE /{id} - Delete user by ID
pub fn postgres_user_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_users).post(create_user))
        .route("/{id}", get(get_user).put(update_user).delete(delete_user))
}

/// GET /postgres-users - List all users ordered by ascending id.
async fn list_users(
    State(state): State<AppState>,
) -> Result<Json<Vec<PostgresUserResponse>>, AppError> {
    let users = state.services.postgres_users.list_users().await?;
    let responses: Vec<PostgresUserResponse> =
        users.into_iter().map(PostgresUserResponse::from).collect();
    Ok(Json(responses))
}

/// GET /postgres-users/{id} - Get user by ID, 404 if absent.
async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<PostgresUserResponse>, AppError> {
    let user = state.services.postgres_users.get_user(id).await?;
    Ok(Json(PostgresUserResponse::from(user)))
}

/// POST /postgres-users - Create a user with a caller-assigned id.
///
/// Returns 201 Created with the created user data, or 400 when the
/// payload fails validation.
async fn create_user(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CreatePostgresUserRequest>,
) -> Result<(StatusCode, Json<PostgresUserResponse>), AppError> {
    let new_user = payload.into_new_user();
    let user = state.services.postgres_users.create_user(new_user).await?;
    Ok((StatusCode::CREATED, Json(PostgresUserResponse::from(user))))
}

/// PUT /postgres-users/{id} - Fully replace a user, 404 if absent.
///
/// Every field is overwritten; omitted optional fields clear the stored
/// values.
async fn update_user(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    ValidatedJson(payload): ValidatedJson<UpdatePostgresUserRequest>,
) -> Result<Json<PostgresUserResponse>, AppError> {
    let replacement = payload.into_replacement();
    let user = state
        .services
        .postgres_users
        .update_user(id, replacement)
        .await?;
    Ok(Json(PostgresUserResponse::from(user)))
}

/// DELETE /postgres-users/{id} - Delete a user, 204 on success, 404 if absent.
async fn delete_user(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, AppError> {
    state.services.postgres_users.delete_user(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
