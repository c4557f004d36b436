use axum::{extract::State, response::IntoResponse, routing::get, Router};

use super::common::success_response;
use crate::{errors::ServiceError, ApiResponse, AppState};

/// Today's headline numbers for the overview cards
async fn summary(State(state): State<AppState>) -> Result<impl IntoResponse, ServiceError> {
    let summary = state.services.metrics.todays_summary().await;
    Ok(success_response(ApiResponse::success(summary)))
}

/// Egg production and feed usage series for the trailing window
async fn trends(State(state): State<AppState>) -> Result<impl IntoResponse, ServiceError> {
    let trends = state.services.metrics.trends().await;
    Ok(success_response(ApiResponse::success(trends)))
}

pub fn dashboard_routes() -> Router<AppState> {
    Router::new()
        .route("/summary", get(summary))
        .route("/trends", get(trends))
}
