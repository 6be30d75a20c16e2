use axum::{Json, http::StatusCode};
use serde_json::{Value, json};

/// Health check endpoint
///
/// Returns 200 OK if the service is running.
#[utoipa::path(
    get,
    path = "/healthz",
    responses(
        (status = 200, description = "Service is healthy"),
    ),
    tag = "health"
)]
pub async fn healthz() -> StatusCode {
    StatusCode::OK
}

/// Landing route
#[utoipa::path(
    get,
    path = "/home",
    responses(
        (status = 200, description = "Service banner"),
    ),
    tag = "health"
)]
pub async fn home() -> Json<Value> {
    Json(json!({ "Products": "From The Farm" }))
}
