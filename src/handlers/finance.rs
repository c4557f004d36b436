use axum::{
    extract::{Query, State},
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use chrono::NaiveDate;
use serde::Deserialize;

use super::common::{created_response, success_response};
use crate::{
    errors::ServiceError,
    models::{NewFinanceTransaction, TransactionDirection},
    store::DateRange,
    ApiResponse, AppState,
};

#[derive(Debug, Deserialize)]
struct TransactionFilters {
    direction: Option<TransactionDirection>,
    start_date: Option<NaiveDate>,
    end_date: Option<NaiveDate>,
}

/// Record a cash ledger entry
async fn record_transaction(
    State(state): State<AppState>,
    Json(input): Json<NewFinanceTransaction>,
) -> Result<impl IntoResponse, ServiceError> {
    let transaction = state.services.finance.record_transaction(input).await?;
    Ok(created_response(ApiResponse::success(transaction)))
}

/// List transactions, optionally filtered by direction and date range
async fn list_transactions(
    State(state): State<AppState>,
    Query(filters): Query<TransactionFilters>,
) -> Result<impl IntoResponse, ServiceError> {
    let transactions = state
        .services
        .finance
        .list_transactions(
            filters.direction,
            DateRange::new(filters.start_date, filters.end_date),
        )
        .await;
    Ok(success_response(ApiResponse::success(transactions)))
}

/// All-time cash position: opening + inward - outward
async fn cash_balance(State(state): State<AppState>) -> Result<impl IntoResponse, ServiceError> {
    let balances = state.services.metrics.cash_balances().await;
    Ok(success_response(ApiResponse::success(balances)))
}

pub fn finance_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/transactions",
            axum::routing::post(record_transaction).get(list_transactions),
        )
        .route("/balance", get(cash_balance))
}
