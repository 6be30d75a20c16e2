//! HTTP-level tests driving the router directly.
//!
//! Run with: cargo test --test api_test

mod common;

use axum::body::{Body, to_bytes};
use axum::http::{Request, StatusCode, header};
use axum::response::Response;
use axum::Router;
use serde_json::{Value, json};
use tower::ServiceExt;

use common::{setup_test_db, test_router};

async fn response_json(response: Response) -> Value {
    let bytes = to_bytes(response.into_body(), 1024 * 1024)
        .await
        .unwrap_or_else(|err| panic!("failed to read response body: {err}"));
    serde_json::from_slice(&bytes)
        .unwrap_or_else(|err| panic!("response body is not JSON: {err}"))
}

async fn get(app: &Router, uri: &str) -> (StatusCode, Value) {
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .uri(uri)
                .method("GET")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    let status = response.status();
    (status, response_json(response).await)
}

async fn post(app: &Router, uri: &str, body: Value) -> (StatusCode, Value) {
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .uri(uri)
                .method("POST")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();
    let status = response.status();
    (status, response_json(response).await)
}

/// House GH1 with crop C001 and the given days.
async fn seeded_app(days: &[&str]) -> Router {
    let app = test_router(setup_test_db().await);
    post(&app, "/house", json!({"house": "GH1"})).await;
    post(
        &app,
        "/crop",
        json!({"house": "GH1", "crop_no": "C001", "crop_name": "Tomato", "start_date": "2024-01-01"}),
    )
    .await;
    for day in days {
        post(
            &app,
            "/day",
            json!({"house": "GH1", "crop_no": "C001", "day": day, "date": "2024-01-02"}),
        )
        .await;
    }
    app
}

#[tokio::test]
async fn home_and_health_respond() {
    let app = test_router(setup_test_db().await);

    let (status, body) = get(&app, "/home").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"Products": "From The Farm"}));

    let response = app
        .oneshot(
            Request::builder()
                .uri("/healthz")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn create_house_then_duplicate_conflicts() {
    let app = test_router(setup_test_db().await);

    let (status, body) = post(&app, "/house", json!({"house": "GH1"})).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body, json!({"House": "GH1"}));

    let (status, body) = post(&app, "/house", json!({"house": "GH1"})).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body, json!({"Message": "House Present"}));
}

#[tokio::test]
async fn houses_listing_and_lookup() {
    let app = test_router(setup_test_db().await);

    let (status, body) = get(&app, "/get/houses").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({"Message": "No Houses Created"}));

    post(&app, "/house", json!({"house": "GH1"})).await;

    let (status, body) = get(&app, "/get/houses").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([{"id": 1, "name": "GH1"}]));

    let (status, body) = get(&app, "/get/GH1").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], "GH1");

    let (status, body) = get(&app, "/get/GH2").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({"Message": "House GH2 not found"}));
}

#[tokio::test]
async fn crop_routes_serialize_flat_fields() {
    let app = seeded_app(&[]).await;

    let (status, body) = get(&app, "/get/crop/GH1/C001").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({
            "crop_name": "Tomato",
            "crop_number": "C001",
            "house_name": "GH1",
            "start_date": "2024-01-01",
        })
    );

    let (status, body) = get(&app, "/get/crops/GH1").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().map(Vec::len), Some(1));

    let (status, body) = get(&app, "/get/crop/NoSuchHouse/C001").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({"Message": "House NoSuchHouse not found"}));
}

#[tokio::test]
async fn crop_for_missing_house_is_not_found() {
    let app = test_router(setup_test_db().await);

    let (status, body) = post(
        &app,
        "/crop",
        json!({"house": "GH9", "crop_no": "C001", "crop_name": "Tomato", "start_date": "2024-01-01"}),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({"Message": "House GH9 not found"}));
}

#[tokio::test]
async fn crops_of_house_without_crops_is_empty_list() {
    let app = test_router(setup_test_db().await);
    post(&app, "/house", json!({"house": "GH1"})).await;

    let (status, body) = get(&app, "/get/crops/GH1").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));
}

#[tokio::test]
async fn day_routes_round_trip() {
    let app = seeded_app(&["D1"]).await;

    let (status, body) = get(&app, "/day/GH1/C001/D1").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({"day": "D1", "crop_number": "C001", "date": "2024-01-02"})
    );

    let (status, body) = get(&app, "/get/days/GH1/C001").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().map(Vec::len), Some(1));

    let (status, _) = post(
        &app,
        "/day",
        json!({"house": "GH1", "crop_no": "C001", "day": "D1"}),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);

    let (status, body) = get(&app, "/day/GH1/C001/D7").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(
        body,
        json!({"Message": "Day D7 of crop number C001 in house GH1 not found"})
    );
}

#[tokio::test]
async fn condition_routes() {
    let app = seeded_app(&["D1", "D2"]).await;

    let (status, body) = get(&app, "/condition/GH1/C001").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({"Message": "No conditions update as yet"}));

    let reading = json!({
        "house": "GH1",
        "crop_no": "C001",
        "day": "D1",
        "time": "08:00",
        "temperature": 24.5,
        "humidity": 61.0,
    });
    let (status, body) = post(&app, "/condition", reading.clone()).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(
        body,
        json!({"temperature": 24.5, "humidity": 61.0, "time": "08:00", "day_no": "D1"})
    );

    let (status, body) = post(&app, "/condition", reading).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body, json!({"Message": "Data already filled"}));

    let (status, body) = get(&app, "/condition/GH1/C001/D1").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().map(Vec::len), Some(1));

    let (status, _) = get(&app, "/condition/GH1/C001/D2").await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, body) = get(&app, "/condition/GH1/C001").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({"D1": {"temperature": 24.5, "humidity": 61.0, "time": "08:00", "day_no": "D1"}})
    );
}

#[tokio::test]
async fn harvest_routes() {
    let app = seeded_app(&["D1", "D2"]).await;

    let (status, body) = post(
        &app,
        "/harvest",
        json!({"house": "GH1", "crop_no": "C001", "day_no": "D1", "punnets": 12}),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body, json!({"punnets": 12, "day_no": "D1"}));

    let (status, body) = get(&app, "/harvest/GH1/C001/D1").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"punnets": 12, "day_no": "D1"}));

    let (status, body) = post(
        &app,
        "/harvest",
        json!({"house": "GH1", "crop_no": "C001", "day_no": "D1", "punnets": 4}),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body, json!({"Message": "Harvest for day D1 present"}));

    let (status, body) = get(&app, "/harvest/GH1/C001").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"D1": 12}));

    let (status, body) = get(&app, "/harvest/GH1/C001/D2").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({"Message": "No harvest record for day D2"}));
}

#[tokio::test]
async fn activity_routes() {
    let app = seeded_app(&["D1"]).await;

    let (status, body) = get(&app, "/get/activities/GH1/C001").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({}));

    let (status, body) = post(
        &app,
        "/activity",
        json!({"house": "GH1", "crop_no": "C001", "day_no": "D1", "activity": "Sprayed"}),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body, json!({"day_no": "D1", "description": "Sprayed"}));

    let (status, body) = get(&app, "/get/activity/GH1/C001/D1").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"day_no": "D1", "description": "Sprayed"}));

    let (status, body) = get(&app, "/get/activities/GH1/C001").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"D1": "Sprayed"}));

    let (status, _) = post(
        &app,
        "/activity",
        json!({"house": "GH1", "crop_no": "C001", "day_no": "D1", "activity": "Again"}),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);
}

#[tokio::test]
async fn crop_number_taken_by_other_house_conflicts() {
    let app = seeded_app(&[]).await;
    post(&app, "/house", json!({"house": "GH2"})).await;

    let (status, body) = post(
        &app,
        "/crop",
        json!({"house": "GH2", "crop_no": "C001", "crop_name": "Pepper", "start_date": "2024-03-01"}),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert!(body["Message"].is_string());
}

#[tokio::test]
async fn day_label_taken_by_other_crop_conflicts() {
    let app = seeded_app(&["D1"]).await;
    post(
        &app,
        "/crop",
        json!({"house": "GH1", "crop_no": "C002", "crop_name": "Pepper", "start_date": "2024-03-01"}),
    )
    .await;

    let (status, body) = post(
        &app,
        "/day",
        json!({"house": "GH1", "crop_no": "C002", "day": "D1"}),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert!(body["Message"].is_string());

    let (status, body) = get(&app, "/get/days/GH1/C002").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));
}

#[tokio::test]
async fn crop_for_missing_house_ignores_invalid_fields() {
    let app = test_router(setup_test_db().await);

    let (status, body) = post(
        &app,
        "/crop",
        json!({"house": "GH9", "crop_no": "", "crop_name": "x".repeat(40), "start_date": ""}),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({"Message": "House GH9 not found"}));
}

#[tokio::test]
async fn malformed_body_is_bad_request() {
    let app = test_router(setup_test_db().await);

    let (status, body) = post(&app, "/crop", json!({"house": "GH1"})).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["Message"].is_string());
}
