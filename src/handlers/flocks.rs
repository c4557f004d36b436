use axum::{
    extract::{Path, State},
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use uuid::Uuid;

use super::common::{created_response, success_response};
use crate::{errors::ServiceError, models::NewFlock, ApiResponse, AppState};

/// Register a new flock
async fn register_flock(
    State(state): State<AppState>,
    Json(input): Json<NewFlock>,
) -> Result<impl IntoResponse, ServiceError> {
    let flock = state.services.flocks.register_flock(input).await?;
    Ok(created_response(ApiResponse::success(flock)))
}

/// List all flocks with their running totals
async fn list_flocks(State(state): State<AppState>) -> Result<impl IntoResponse, ServiceError> {
    let flocks = state.services.flocks.list_flocks().await;
    Ok(success_response(ApiResponse::success(flocks)))
}

/// Fetch one flock by id
async fn get_flock(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, ServiceError> {
    let flock = state.services.flocks.get_flock(id).await?;
    Ok(success_response(ApiResponse::success(flock)))
}

pub fn flock_routes() -> Router<AppState> {
    Router::new()
        .route("/", axum::routing::post(register_flock).get(list_flocks))
        .route("/:id", get(get_flock))
}
