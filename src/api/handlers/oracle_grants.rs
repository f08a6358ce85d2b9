//! Secondary-store grant CRUD request handlers.

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    routing::get,
};

use crate::api::dto::{OracleGrantResponse, SaveOracleGrantRequest};
use crate::error::AppError;
use crate::state::AppState;
use crate::utils::ValidatedJson;

/// Creates secondary-store grant routes.
///
/// Routes:
/// - GET /        - List all grants
/// - POST /       - Create a new grant
/// - GET /{id}    - Get grant by ID
/// - PUT /{id}    - Update grant by ID
/// - DELETE /{id} - Delete grant by ID
pub fn oracle_grant_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_grants).post(create_grant))
        .route(
            "/{id}",
            get(get_grant).put(update_grant).delete(delete_grant),
        )
}

/// GET /oracle/grants - List all grants.
async fn list_grants(
    State(state): State<AppState>,
) -> Result<Json<Vec<OracleGrantResponse>>, AppError> {
    let grants = state.services.oracle_grants.list_grants().await?;
    let responses: Vec<OracleGrantResponse> =
        grants.into_iter().map(OracleGrantResponse::from).collect();
    Ok(Json(responses))
}

/// GET /oracle/grants/{id} - Get grant by ID, 404 if absent.
async fn get_grant(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<OracleGrantResponse>, AppError> {
    let grant = state.services.oracle_grants.get_grant(id).await?;
    Ok(Json(OracleGrantResponse::from(grant)))
}

/// POST /oracle/grants - Create a grant, 201 with empty body.
async fn create_grant(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<SaveOracleGrantRequest>,
) -> Result<StatusCode, AppError> {
    state
        .services
        .oracle_grants
        .create_grant(payload.name.as_deref(), payload.description.as_deref())
        .await?;
    Ok(StatusCode::CREATED)
}

/// PUT /oracle/grants/{id} - Update a grant, 200 with empty body, 404 if absent.
async fn update_grant(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    ValidatedJson(payload): ValidatedJson<SaveOracleGrantRequest>,
) -> Result<StatusCode, AppError> {
    state
        .services
        .oracle_grants
        .update_grant(id, payload.name.as_deref(), payload.description.as_deref())
        .await?;
    Ok(StatusCode::OK)
}

/// DELETE /oracle/grants/{id} - Delete a grant, 204 on success, 404 if absent.
async fn delete_grant(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, AppError> {
    state.services.oracle_grants.delete_grant(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
