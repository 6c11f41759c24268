mod common;

use axum::http::StatusCode;
use common::{TestApp, is_order_number};
use serde_json::json;
use std::collections::HashSet;

fn soup() -> serde_json::Value {
    json!({ "mealName": "Soup", "quantity": 2, "tableNumber": 5 })
}

#[tokio::test]
async fn valid_order_is_created_with_a_six_digit_number() {
    let app = TestApp::new().await;

    let (status, body) = app.post_json("/commandes", soup()).await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["orderNumber"], "000001");
    assert!(is_order_number(&body["order"]["orderNumber"]));
    assert_eq!(body["order"]["mealName"], "Soup");
    assert_eq!(body["order"]["tableNumber"], "5");
}

#[tokio::test]
async fn form_style_values_are_accepted() {
    let app = TestApp::new().await;

    let (status, body) = app
        .post_json(
            "/commandes",
            json!({
                "mealName": "Grilled Chicken",
                "softDrink": "Lemonade",
                "quantity": "3",
                "tableNumber": "12"
            }),
        )
        .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["order"]["quantity"], 3);
    assert_eq!(body["order"]["sideItem"], "Lemonade");
}

#[tokio::test]
async fn invalid_orders_are_rejected_without_consuming_numbers() {
    let app = TestApp::new().await;

    let (status, body) = app
        .post_json("/commandes", json!({ "quantity": 2, "tableNumber": 5 }))
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Validation failed");
    assert_eq!(body["message"], "mealName: is required");
    assert!(body["details"]["mealName"].is_array());
    assert!(body["details"].get("meal_name").is_none());

    let (status, _) = app
        .post_json(
            "/commandes",
            json!({ "mealName": "Soup", "quantity": 0, "tableNumber": 5 }),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = app.post_raw("/commandes", "{not json").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (_, body) = app.post_json("/commandes", soup()).await;
    assert_eq!(body["orderNumber"], "000001");
}

#[tokio::test]
async fn reserved_number_can_be_claimed_once() {
    let app = TestApp::new().await;

    let (status, body) = app.get("/generateOrderNumber").await;
    assert_eq!(status, StatusCode::OK);
    let reserved = body["orderNumber"].clone();
    assert_eq!(reserved, "000001");

    let mut claim = soup();
    claim["orderNumber"] = reserved.clone();

    let (status, body) = app.post_json("/commandes", claim.clone()).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["orderNumber"], reserved);

    let (status, body) = app.post_json("/commandes", claim).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["status"], "error");

    let (_, body) = app.post_json("/commandes", soup()).await;
    assert_eq!(body["orderNumber"], "000002");
}

#[tokio::test]
async fn unissued_number_cannot_be_claimed() {
    let app = TestApp::new().await;

    let mut claim = soup();
    claim["orderNumber"] = json!("000777");

    let (status, body) = app.post_json("/commandes", claim).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["status"], "error");
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_orders_receive_distinct_numbers() {
    let app = TestApp::new().await;

    let requests: Vec<_> = (0..40)
        .map(|_| {
            let app = app.clone();
            tokio::spawn(async move { app.post_json("/commandes", soup()).await })
        })
        .collect();

    let mut numbers = HashSet::new();
    for request in requests {
        let (status, body) = request.await.unwrap();
        assert_eq!(status, StatusCode::CREATED);
        assert!(is_order_number(&body["orderNumber"]));
        numbers.insert(body["orderNumber"].as_str().unwrap().to_string());
    }

    assert_eq!(numbers.len(), 40);
}

#[tokio::test]
async fn numbering_restarts_after_daily_rollover() {
    let app = TestApp::new().await;

    for _ in 0..3 {
        app.post_json("/commandes", soup()).await;
    }

    let report = app.state.di_container.scheduler.rollover().await.unwrap();
    assert_eq!(report.deleted_orders, 3);

    let (status, body) = app.post_json("/commandes", soup()).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["orderNumber"], "000001");
}
