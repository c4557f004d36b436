use axum::{
    extract::{Query, State},
    response::IntoResponse,
    routing::get,
    Json, Router,
};

use super::common::{created_response, success_response, DateRangeQuery};
use crate::{
    errors::ServiceError,
    models::{NewEggProductionReport, NewFeedReport, NewMedicineReport, NewMortalityReport},
    ApiResponse, AppState,
};

/// Record a daily feed & water report
async fn record_feed_report(
    State(state): State<AppState>,
    Json(input): Json<NewFeedReport>,
) -> Result<impl IntoResponse, ServiceError> {
    let report = state.services.reports.record_feed_report(input).await?;
    Ok(created_response(ApiResponse::success(report)))
}

/// List feed reports inside an optional date range, newest first
async fn list_feed_reports(
    State(state): State<AppState>,
    Query(query): Query<DateRangeQuery>,
) -> Result<impl IntoResponse, ServiceError> {
    let reports = state.services.reports.list_feed_reports(query.range()).await;
    Ok(success_response(ApiResponse::success(reports)))
}

/// Record a mortality report
async fn record_mortality_report(
    State(state): State<AppState>,
    Json(input): Json<NewMortalityReport>,
) -> Result<impl IntoResponse, ServiceError> {
    let report = state
        .services
        .reports
        .record_mortality_report(input)
        .await?;
    Ok(created_response(ApiResponse::success(report)))
}

async fn list_mortality_reports(
    State(state): State<AppState>,
    Query(query): Query<DateRangeQuery>,
) -> Result<impl IntoResponse, ServiceError> {
    let reports = state
        .services
        .reports
        .list_mortality_reports(query.range())
        .await;
    Ok(success_response(ApiResponse::success(reports)))
}

/// Record a medicine administration report
async fn record_medicine_report(
    State(state): State<AppState>,
    Json(input): Json<NewMedicineReport>,
) -> Result<impl IntoResponse, ServiceError> {
    let report = state.services.reports.record_medicine_report(input).await?;
    Ok(created_response(ApiResponse::success(report)))
}

async fn list_medicine_reports(
    State(state): State<AppState>,
    Query(query): Query<DateRangeQuery>,
) -> Result<impl IntoResponse, ServiceError> {
    let reports = state
        .services
        .reports
        .list_medicine_reports(query.range())
        .await;
    Ok(success_response(ApiResponse::success(reports)))
}

/// Record a daily egg production report
async fn record_egg_production_report(
    State(state): State<AppState>,
    Json(input): Json<NewEggProductionReport>,
) -> Result<impl IntoResponse, ServiceError> {
    let report = state
        .services
        .reports
        .record_egg_production_report(input)
        .await?;
    Ok(created_response(ApiResponse::success(report)))
}

async fn list_egg_reports(
    State(state): State<AppState>,
    Query(query): Query<DateRangeQuery>,
) -> Result<impl IntoResponse, ServiceError> {
    let reports = state.services.reports.list_egg_reports(query.range()).await;
    Ok(success_response(ApiResponse::success(reports)))
}

/// Report-page rows: per-category totals plus production percentage
async fn egg_production_rows(
    State(state): State<AppState>,
    Query(query): Query<DateRangeQuery>,
) -> Result<impl IntoResponse, ServiceError> {
    let rows = state
        .services
        .metrics
        .egg_production_rows(query.range())
        .await;
    Ok(success_response(ApiResponse::success(rows)))
}

pub fn report_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/feed",
            axum::routing::post(record_feed_report).get(list_feed_reports),
        )
        .route(
            "/mortality",
            axum::routing::post(record_mortality_report).get(list_mortality_reports),
        )
        .route(
            "/medicine",
            axum::routing::post(record_medicine_report).get(list_medicine_reports),
        )
        .route(
            "/eggs",
            axum::routing::post(record_egg_production_report).get(list_egg_reports),
        )
        .route("/eggs/production", get(egg_production_rows))
}
