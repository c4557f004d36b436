#![allow(dead_code)]

use std::sync::Arc;

use axum::{
    body::{to_bytes, Body},
    http::{Method, Request},
    response::Response,
    Router,
};
use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use serde_json::Value;
use tokio::sync::mpsc;
use tower::ServiceExt;

use farmstead_api::{
    clock::{FixedClock, SharedClock},
    config::AppConfig,
    events::{self, EventSender},
    seed,
    store::{FarmData, FarmStore},
    AppState,
};

/// The instant every test clock is pinned to.
pub fn test_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 7, 27, 10, 30, 0).unwrap()
}

pub fn today() -> NaiveDate {
    test_now().date_naive()
}

/// Harness wiring the full v1 router over a fresh in-memory store pinned to
/// a fixed clock.
pub struct TestApp {
    router: Router,
    pub state: AppState,
    _event_task: tokio::task::JoinHandle<()>,
}

impl TestApp {
    /// App primed with the fixed seed dataset.
    pub fn seeded() -> Self {
        let clock = FixedClock(test_now());
        Self::build(seed::seed_data(&clock))
    }

    /// App with no flocks, reports or inventory at all.
    pub fn empty() -> Self {
        Self::build(FarmData::default())
    }

    fn build(data: FarmData) -> Self {
        let clock: SharedClock = Arc::new(FixedClock(test_now()));
        let store = Arc::new(FarmStore::with_data(data));
        let (event_tx, event_rx) = mpsc::channel(64);
        let event_sender = EventSender::new(event_tx);
        let event_task = tokio::spawn(events::process_events(event_rx));

        let state = AppState::new(AppConfig::default(), store, clock, event_sender);
        let router = Router::new()
            .nest("/api/v1", farmstead_api::api_v1_routes())
            .with_state(state.clone());

        Self {
            router,
            state,
            _event_task: event_task,
        }
    }

    pub async fn request(&self, method: Method, uri: &str, body: Option<Value>) -> Response {
        let builder = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(json) => builder
                .header("content-type", "application/json")
                .body(Body::from(json.to_string()))
                .expect("request"),
            None => builder.body(Body::empty()).expect("request"),
        };
        self.router
            .clone()
            .oneshot(request)
            .await
            .expect("router response")
    }

    pub async fn get(&self, uri: &str) -> Response {
        self.request(Method::GET, uri, None).await
    }

    pub async fn post(&self, uri: &str, body: Value) -> Response {
        self.request(Method::POST, uri, Some(body)).await
    }
}

pub async fn response_json(response: Response) -> Value {
    let bytes = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("response body bytes");
    serde_json::from_slice(&bytes).expect("json response")
}
