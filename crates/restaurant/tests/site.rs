mod common;

use axum::http::StatusCode;
use common::TestApp;
use serde_json::json;

#[tokio::test]
async fn menu_lists_seeded_items() {
    let app = TestApp::new().await;

    let (status, body) = app.get("/menus").await;

    assert_eq!(status, StatusCode::OK);
    let items = body.as_array().unwrap();
    assert!(!items.is_empty());
    assert!(items.iter().any(|item| item["name"] == "Soup of the Day"));
}

#[tokio::test]
async fn menu_item_can_be_added() {
    let app = TestApp::new().await;
    let (_, before) = app.get("/menus").await;

    let (status, body) = app
        .post_json(
            "/menus",
            json!({
                "name": "Crème Brûlée",
                "description": "Vanilla custard, burnt sugar",
                "price": 6.0,
                "image": "/images/creme-brulee.jpg"
            }),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["name"], "Crème Brûlée");

    let (_, after) = app.get("/menus").await;
    assert_eq!(
        after.as_array().unwrap().len(),
        before.as_array().unwrap().len() + 1
    );
}

#[tokio::test]
async fn contact_message_is_acknowledged() {
    let app = TestApp::new().await;

    let (status, body) = app
        .post_json(
            "/contacts",
            json!({
                "name": "Ada",
                "email": "ada@example.com",
                "message": "Do you have a private room?"
            }),
        )
        .await;

    assert_eq!(status, StatusCode::OK);
    assert!(body["contactId"].is_string());
    assert!(body["message"].is_string());
}

#[tokio::test]
async fn contact_without_email_is_rejected() {
    let app = TestApp::new().await;

    let (status, body) = app
        .post_json("/contacts", json!({ "name": "Ada", "message": "Hello" }))
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["details"]["email"].is_array());
}

#[tokio::test]
async fn reservation_is_acknowledged() {
    let app = TestApp::new().await;

    let (status, body) = app
        .post_json(
            "/reservations",
            json!({
                "firstname": "Grace",
                "name": "Hopper",
                "email": "grace@example.com",
                "dateTime": "2026-03-14T19:30",
                "guests": "4"
            }),
        )
        .await;

    assert_eq!(status, StatusCode::OK);
    assert!(body["reservationId"].is_string());
}

#[tokio::test]
async fn reservation_for_nobody_is_rejected() {
    let app = TestApp::new().await;

    let (status, _) = app
        .post_json(
            "/reservations",
            json!({
                "firstname": "Grace",
                "email": "grace@example.com",
                "dateTime": "2026-03-14T19:30:00Z",
                "guests": 0
            }),
        )
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn metrics_and_api_docs_are_served() {
    let app = TestApp::new().await;
    app.get("/menus").await;

    let (status, metrics) = app.get_text("/metrics").await;
    assert_eq!(status, StatusCode::OK);
    assert!(metrics.contains("menu_service_request_counter"));

    let (status, openapi) = app.get("/api-docs/openapi.json").await;
    assert_eq!(status, StatusCode::OK);
    assert!(openapi["paths"]["/commandes"].is_object());
}
