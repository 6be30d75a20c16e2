use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
};
use serde::Deserialize;
use utoipa::ToSchema;

use crate::common::AppState;
use crate::error::AppResult;
use crate::services::{queries, records};
use crate::views::{HouseCreated, HouseView, MessageBody};

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateHouseRequest {
    /// House name
    pub house: String,
}

/// Create a house
#[utoipa::path(
    post,
    path = "/house",
    request_body = CreateHouseRequest,
    responses(
        (status = 201, description = "House created", body = HouseCreated),
        (status = 409, description = "House already present", body = MessageBody),
    ),
    tag = "houses"
)]
pub async fn create_house(
    State(state): State<AppState>,
    payload: Result<Json<CreateHouseRequest>, JsonRejection>,
) -> AppResult<(StatusCode, Json<HouseCreated>)> {
    let Json(body) = payload?;
    let house = records::create_house(&state.db, &body.house).await?;

    Ok((StatusCode::CREATED, Json(HouseCreated { house: house.name })))
}

/// List all houses
#[utoipa::path(
    get,
    path = "/get/houses",
    responses(
        (status = 200, description = "Houses retrieved", body = Vec<HouseView>),
        (status = 404, description = "No houses created yet", body = MessageBody),
    ),
    tag = "houses"
)]
pub async fn list_houses(State(state): State<AppState>) -> AppResult<Json<Vec<HouseView>>> {
    let houses = queries::list_houses(&state.db).await?;

    Ok(Json(houses.into_iter().map(HouseView::from).collect()))
}

/// Get a house by name
#[utoipa::path(
    get,
    path = "/get/{house_name}",
    params(
        ("house_name" = String, Path, description = "House name"),
    ),
    responses(
        (status = 200, description = "House retrieved", body = HouseView),
        (status = 404, description = "House not found", body = MessageBody),
    ),
    tag = "houses"
)]
pub async fn get_house(
    State(state): State<AppState>,
    Path(house_name): Path<String>,
) -> AppResult<Json<HouseView>> {
    let house = queries::get_house(&state.db, &house_name).await?;

    Ok(Json(house.into()))
}
