//! Integration tests for `GET /api/v1/dashboard`.

mod common;

use axum::http::StatusCode;
use chrono::{Duration, Utc};
use common::{body_json, get, post_empty, post_json};
use serde_json::{json, Value};

async fn stock(app: &axum::Router, name: &str, category: &str, days: i64) -> Value {
    let response = post_json(
        app.clone(),
        "/api/v1/inventory",
        json!({
            "name": name,
            "category": category,
            "quantity": 1,
            "expiration_date": Utc::now() + Duration::days(days),
        }),
    )
    .await;
    body_json(response).await["data"].clone()
}

#[tokio::test]
async fn empty_dashboard_is_all_zero() {
    let dir = tempfile::tempdir().unwrap();
    let app = common::build_test_app(&dir).await;

    let response = get(app, "/api/v1/dashboard").await;
    assert_eq!(response.status(), StatusCode::OK);

    let data = body_json(response).await["data"].clone();
    assert_eq!(data["total_items"], 0);
    assert_eq!(data["expiring_soon"], 0);
    assert_eq!(data["soonest"], json!([]));
    assert_eq!(data["leftovers"], json!({ "active": 0, "used": 0, "trashed": 0 }));
}

#[tokio::test]
async fn dashboard_counts_tiers_and_waste() {
    let dir = tempfile::tempdir().unwrap();
    let app = common::build_test_app(&dir).await;
    stock(&app, "Milk", "Dairy", 1).await;
    stock(&app, "Spinach", "Produce", 3).await;
    stock(&app, "Bread", "Bakery", 5).await;
    stock(&app, "Rice", "Pantry", 30).await;
    let yogurt = stock(&app, "Yogurt", "Dairy", 2).await;
    post_empty(
        app.clone(),
        &format!("/api/v1/inventory/{}/mark-discarded", yogurt["id"].as_str().unwrap()),
    )
    .await;
    post_json(app.clone(), "/api/v1/leftovers", json!({ "name": "Soup" })).await;

    let data = body_json(get(app, "/api/v1/dashboard").await).await["data"].clone();

    assert_eq!(data["total_items"], 4);
    assert_eq!(data["categories"], 4);
    assert_eq!(data["tiers"], json!({ "critical": 1, "warning": 2, "good": 1 }));
    assert_eq!(data["expiring_soon"], 2);
    assert_eq!(data["used_items"], 0);
    assert_eq!(data["discarded_items"], 1);
    assert_eq!(data["leftovers"]["active"], 1);

    let soonest: Vec<&str> = data["soonest"]
        .as_array()
        .unwrap()
        .iter()
        .map(|i| i["name"].as_str().unwrap())
        .collect();
    assert_eq!(soonest, ["Milk", "Spinach", "Bread", "Rice"]);
}
