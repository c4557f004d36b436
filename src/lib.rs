//! Farmstead API Library
//!
//! Core of a poultry-farm operations dashboard: an in-memory flock ledger
//! and report store, a derived-metrics engine over them, and a role-based
//! page policy, exposed over HTTP for the UI layer.
#![forbid(unsafe_code)]
#![deny(rust_2018_idioms)]
#![allow(elided_lifetimes_in_paths)]
#![warn(clippy::all, clippy::perf, clippy::dbg_macro)]

// Core modules
pub mod auth;
pub mod clock;
pub mod config;
pub mod errors;
pub mod events;
pub mod handlers;
pub mod models;
pub mod seed;
pub mod services;
pub mod store;

use std::sync::Arc;

use axum::Router;
use chrono::Utc;
use serde::Serialize;

use crate::clock::SharedClock;
use crate::events::EventSender;
use crate::services::AppServices;
use crate::store::FarmStore;

// App state definition
#[derive(Clone)]
pub struct AppState {
    pub config: config::AppConfig,
    pub store: Arc<FarmStore>,
    pub clock: SharedClock,
    pub event_sender: EventSender,
    pub services: AppServices,
}

impl AppState {
    pub fn new(
        config: config::AppConfig,
        store: Arc<FarmStore>,
        clock: SharedClock,
        event_sender: EventSender,
    ) -> Self {
        let services = AppServices::new(
            store.clone(),
            clock.clone(),
            event_sender.clone(),
            &config,
        );
        Self {
            config,
            store,
            clock,
            event_sender,
            services,
        }
    }
}

// Common response wrappers
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: Option<T>,
    pub message: Option<String>,
    pub errors: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta: Option<ResponseMeta>,
}

#[derive(Debug, Serialize)]
pub struct ResponseMeta {
    pub timestamp: String,
}

impl ResponseMeta {
    fn capture() -> Self {
        Self {
            timestamp: Utc::now().to_rfc3339(),
        }
    }
}

impl<T> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            message: None,
            errors: None,
            meta: Some(ResponseMeta::capture()),
        }
    }

    pub fn error(message: String) -> Self {
        Self {
            success: false,
            data: None,
            message: Some(message),
            errors: None,
            meta: Some(ResponseMeta::capture()),
        }
    }
}

/// Full v1 API surface, one nested router per area.
pub fn api_v1_routes() -> Router<AppState> {
    Router::new()
        .nest("/flocks", handlers::flocks::flock_routes())
        .nest("/reports", handlers::reports::report_routes())
        .nest("/finance", handlers::finance::finance_routes())
        .nest("/inventory", handlers::inventory::inventory_routes())
        .nest("/security", handlers::security::security_routes())
        .nest("/dashboard", handlers::dashboard::dashboard_routes())
        .nest("/policy", handlers::policy::policy_routes())
}
