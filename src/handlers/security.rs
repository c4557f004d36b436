use axum::{extract::State, response::IntoResponse, Json, Router};

use super::common::{created_response, success_response};
use crate::{errors::ServiceError, models::NewSecurityLog, ApiResponse, AppState};

/// Record a gate movement
async fn record_log(
    State(state): State<AppState>,
    Json(input): Json<NewSecurityLog>,
) -> Result<impl IntoResponse, ServiceError> {
    let log = state.services.security.record_log(input).await?;
    Ok(created_response(ApiResponse::success(log)))
}

/// List gate logs, newest first
async fn list_logs(State(state): State<AppState>) -> Result<impl IntoResponse, ServiceError> {
    let logs = state.services.security.list_logs().await;
    Ok(success_response(ApiResponse::success(logs)))
}

pub fn security_routes() -> Router<AppState> {
    Router::new().route("/logs", axum::routing::post(record_log).get(list_logs))
}
