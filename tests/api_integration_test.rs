//! End-to-end flow over the HTTP surface: register a flock, submit daily
//! reports, and watch the ledger and policy endpoints respond.

mod common;

use axum::http::StatusCode;
use serde_json::json;

use common::{response_json, today, TestApp};

#[tokio::test]
async fn flock_lifecycle_over_http() {
    let app = TestApp::empty();

    let response = app
        .post(
            "/api/v1/flocks",
            json!({
                "name": "H4",
                "breed": "Hy-Line Brown",
                "arrival_date": "2024-06-01",
                "initial_bird_count": 5000,
                "cost_per_chick": "125"
            }),
        )
        .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let body = response_json(response).await;
    assert!(body["success"].as_bool().unwrap());
    let flock_id = body["data"]["id"].as_str().expect("flock id").to_string();
    assert_eq!(body["data"]["current_bird_count"], 5000);
    assert_eq!(body["data"]["total_mortality"], 0);

    // Mortality drops the live count.
    let response = app
        .post(
            "/api/v1/reports/mortality",
            json!({
                "date": today().to_string(),
                "flock_id": flock_id,
                "night_mortality": 2,
                "hospital_mortality": 1,
                "remarks": "Normal mortality rate"
            }),
        )
        .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let body = response_json(response).await;
    assert_eq!(body["data"]["total"], 3);

    // Feed is computed against the post-mortality head count.
    let response = app
        .post(
            "/api/v1/reports/feed",
            json!({
                "date": today().to_string(),
                "flock_id": flock_id,
                "feed_consumed_per_bird": 110.0
            }),
        )
        .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let body = response_json(response).await;
    assert_eq!(body["data"]["bird_count_at_report"], 4997);
    let used = body["data"]["total_feed_used"].as_f64().expect("kg");
    assert!((used - 549.67).abs() < 1e-9);

    let response = app.get(&format!("/api/v1/flocks/{}", flock_id)).await;
    let body = response_json(response).await;
    assert_eq!(body["data"]["current_bird_count"], 4997);
    let total_feed = body["data"]["total_feed_kg"].as_f64().expect("kg");
    assert!((total_feed - 549.67).abs() < 1e-9);
}

#[tokio::test]
async fn egg_production_accepts_partial_denominations() {
    let app = TestApp::empty();

    let flock = app
        .state
        .services
        .flocks
        .register_flock(farmstead_api::models::NewFlock {
            name: "H5".into(),
            breed: "ISA Brown".into(),
            arrival_date: today(),
            initial_bird_count: 4850,
            cost_per_chick: Default::default(),
        })
        .await
        .expect("register flock");

    // Categories and denominations not mentioned default to zero.
    let response = app
        .post(
            "/api/v1/reports/eggs",
            json!({
                "date": today().to_string(),
                "flock_id": flock.id,
                "standard": { "today": { "petti": 9, "tray": 23, "eggs": 4 } },
                "broken": { "today": { "eggs": 20 } }
            }),
        )
        .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let flock = app
        .state
        .services
        .flocks
        .get_flock(flock.id)
        .await
        .expect("flock");
    assert_eq!(flock.total_eggs, 3934 + 20);
}

#[tokio::test]
async fn omitted_numeric_fields_default_to_zero() {
    let app = TestApp::seeded();
    let flock_id = app.state.services.flocks.list_flocks().await[0].id;

    let response = app
        .post(
            "/api/v1/reports/feed",
            json!({ "date": today().to_string(), "flock_id": flock_id }),
        )
        .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let body = response_json(response).await;
    assert_eq!(body["data"]["feed_consumed_per_bird"], 0.0);
    assert_eq!(body["data"]["total_feed_used"], 0.0);
}

#[tokio::test]
async fn unknown_flock_is_404_and_overdrawn_mortality_is_400() {
    let app = TestApp::seeded();

    let response = app
        .post(
            "/api/v1/reports/feed",
            json!({
                "date": today().to_string(),
                "flock_id": "00000000-0000-0000-0000-000000000000",
                "feed_consumed_per_bird": 110.0
            }),
        )
        .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = response_json(response).await;
    assert_eq!(body["error"], "Not Found");

    let flock_id = app.state.services.flocks.list_flocks().await[0].id;
    let response = app
        .post(
            "/api/v1/reports/mortality",
            json!({
                "date": today().to_string(),
                "flock_id": flock_id,
                "night_mortality": 1_000_000,
                "hospital_mortality": 0
            }),
        )
        .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn finance_transactions_filter_by_direction() {
    let app = TestApp::seeded();

    let body = response_json(
        app.get("/api/v1/finance/transactions?direction=Outward")
            .await,
    )
    .await;
    let transactions = body["data"].as_array().expect("transactions");
    assert_eq!(transactions.len(), 2);
    assert!(transactions
        .iter()
        .all(|t| t["direction"] == "Outward"));

    let response = app
        .post(
            "/api/v1/finance/transactions",
            json!({
                "date": today().to_string(),
                "voucher_no": "IN-002",
                "direction": "Inward",
                "source_or_expense_type": "Egg Sales - Wholesale",
                "amount": "30000",
                "remarks": ""
            }),
        )
        .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let body = response_json(app.get("/api/v1/finance/balance").await).await;
    assert_eq!(body["data"]["closing"], "10000");
}

#[tokio::test]
async fn gate_log_defaults_to_submission_instant() {
    let app = TestApp::empty();

    let response = app
        .post(
            "/api/v1/security/logs",
            json!({
                "movement": "Inward",
                "vehicle_number": "MNC-1234",
                "driver_name": "Ali Khan",
                "material_type": "Feed",
                "quantity": "200 bags"
            }),
        )
        .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let body = response_json(response).await;
    let timestamp = body["data"]["timestamp"].as_str().expect("timestamp");
    assert!(timestamp.starts_with("2024-07-27T10:30:00"));

    let body = response_json(app.get("/api/v1/security/logs").await).await;
    assert_eq!(body["data"].as_array().expect("logs").len(), 1);
}

#[tokio::test]
async fn policy_endpoints_expose_pages_and_gates() {
    let app = TestApp::empty();

    let body = response_json(app.get("/api/v1/policy/Worker/pages").await).await;
    let pages = body["data"]["pages"].as_array().expect("pages");
    assert_eq!(
        pages
            .iter()
            .map(|p| p.as_str().unwrap())
            .collect::<Vec<_>>(),
        ["Daily Feed & Water", "Mortality & Health", "Egg Production"]
    );
    assert_eq!(body["data"]["default_page"], "Daily Feed & Water");

    let body = response_json(
        app.get("/api/v1/policy/Accountant/actions/record-finance-transaction")
            .await,
    )
    .await;
    assert_eq!(body["data"]["allowed"], true);

    let body = response_json(
        app.get("/api/v1/policy/Accountant/actions/add-inventory-item")
            .await,
    )
    .await;
    assert_eq!(body["data"]["allowed"], false);

    let body = response_json(
        app.get("/api/v1/policy/Security%20Guard/pages").await,
    )
    .await;
    assert_eq!(body["data"]["pages"].as_array().unwrap().len(), 1);
}
