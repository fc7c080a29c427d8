mod common;

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use tower::ServiceExt;

use crate::common::build_test_router;

async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let request = match body {
        Some(body) => Request::builder()
            .method(method)
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => Request::builder()
            .method(method)
            .uri(uri)
            .body(Body::empty())
            .unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();

    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::Null)
    };

    (status, json)
}

#[tokio::test]
async fn test_create_and_fetch_subcategory() {
    let app = build_test_router().await;

    let (status, category) = send(
        &app,
        "POST",
        "/api/categories",
        Some(json!({ "name": "Electronics" })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(category["slug"], "electronics");

    let (status, created) = send(
        &app,
        "POST",
        "/api/categories/electronics/subcategories",
        Some(json!({ "name": "Smart Phones", "description": "Handsets" })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["slug"], "smart-phones");
    assert_eq!(created["categoryId"], category["id"]);

    let (status, fetched) = send(
        &app,
        "GET",
        "/api/categories/electronics/subcategories/smart-phones",
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched["id"], created["id"]);
    assert_eq!(fetched["description"], "Handsets");

    let (status, list) = send(&app, "GET", "/api/categories/electronics/subcategories", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(list["category"], "electronics");
    assert_eq!(list["subcategories"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_duplicate_slug_returns_conflict() {
    let app = build_test_router().await;

    send(&app, "POST", "/api/categories", Some(json!({ "name": "Food" }))).await;

    let (status, _) = send(
        &app,
        "POST",
        "/api/categories/food/subcategories",
        Some(json!({ "name": "Fruit", "slug": "fresh" })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, body) = send(
        &app,
        "POST",
        "/api/categories/food/subcategories",
        Some(json!({ "name": "Vegetables", "slug": "fresh" })),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert!(body["error"].as_str().unwrap().contains("constraint violation"));
}

#[tokio::test]
async fn test_unknown_category_returns_not_found() {
    let app = build_test_router().await;

    let (status, _) = send(&app, "GET", "/api/categories/missing/subcategories", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = send(
        &app,
        "POST",
        "/api/categories/missing/subcategories",
        Some(json!({ "name": "Anything" })),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_invalid_slug_is_unprocessable() {
    let app = build_test_router().await;

    let (status, body) = send(
        &app,
        "POST",
        "/api/categories",
        Some(json!({ "name": "Books", "slug": "books and more" })),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn test_malformed_body_renders_json_error() {
    let app = build_test_router().await;

    let (status, body) = send(&app, "POST", "/api/categories", Some(json!({ "slug": "x" }))).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(body["error"].as_str().unwrap().contains("name"));

    send(&app, "POST", "/api/categories", Some(json!({ "name": "Food" }))).await;

    let (status, body) = send(
        &app,
        "POST",
        "/api/categories/food/subcategories",
        Some(json!({ "description": "no name" })),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn test_categories_are_listed_by_name() {
    let app = build_test_router().await;

    send(&app, "POST", "/api/categories", Some(json!({ "name": "Toys" }))).await;
    send(&app, "POST", "/api/categories", Some(json!({ "name": "Books" }))).await;

    let (status, body) = send(&app, "GET", "/api/categories", None).await;
    assert_eq!(status, StatusCode::OK);

    let names: Vec<&str> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["Books", "Toys"]);
}

#[tokio::test]
async fn test_migration_status_endpoint() {
    let app = build_test_router().await;

    let (status, body) = send(&app, "GET", "/api/migrations", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["pendingCount"], 0);

    let migrations = body["migrations"].as_array().unwrap();
    assert_eq!(migrations.len(), 2);
    assert_eq!(
        migrations[1]["name"],
        "m20250114_000002_alter_subcategory_unique_together"
    );
    assert_eq!(migrations[1]["status"], "applied");
}

#[tokio::test]
async fn test_health() {
    let app = build_test_router().await;

    let (status, body) = send(&app, "GET", "/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
}
