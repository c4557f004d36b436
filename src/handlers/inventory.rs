use axum::{extract::State, response::IntoResponse, routing::get, Json, Router};

use super::common::{created_response, success_response};
use crate::{errors::ServiceError, models::NewInventoryItem, ApiResponse, AppState};

/// Register a stock item
async fn add_item(
    State(state): State<AppState>,
    Json(input): Json<NewInventoryItem>,
) -> Result<impl IntoResponse, ServiceError> {
    let item = state.services.inventory.add_item(input).await?;
    Ok(created_response(ApiResponse::success(item)))
}

async fn list_items(State(state): State<AppState>) -> Result<impl IntoResponse, ServiceError> {
    let items = state.services.inventory.list_items().await;
    Ok(success_response(ApiResponse::success(items)))
}

/// Items at or below their reorder threshold
async fn low_stock_items(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, ServiceError> {
    let items = state.services.inventory.low_stock_items().await;
    Ok(success_response(ApiResponse::success(items)))
}

pub fn inventory_routes() -> Router<AppState> {
    Router::new()
        .route("/", axum::routing::post(add_item).get(list_items))
        .route("/low-stock", get(low_stock_items))
}
