use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
};
use serde::Deserialize;
use utoipa::ToSchema;

use crate::common::AppState;
use crate::error::AppResult;
use crate::repository::CropKey;
use crate::services::{queries, records};
use crate::views::{CropView, MessageBody};

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateCropRequest {
    pub house: String,
    pub crop_no: String,
    pub crop_name: String,
    pub start_date: String,
}

/// Plant a crop in a house
#[utoipa::path(
    post,
    path = "/crop",
    request_body = CreateCropRequest,
    responses(
        (status = 201, description = "Crop created", body = CropView),
        (status = 404, description = "House not found", body = MessageBody),
        (status = 409, description = "Crop number already in use", body = MessageBody),
    ),
    tag = "crops"
)]
pub async fn create_crop(
    State(state): State<AppState>,
    payload: Result<Json<CreateCropRequest>, JsonRejection>,
) -> AppResult<(StatusCode, Json<CropView>)> {
    let Json(body) = payload?;
    let key = CropKey {
        house: &body.house,
        crop_number: &body.crop_no,
    };
    let crop = records::create_crop(&state.db, key, &body.crop_name, &body.start_date).await?;

    Ok((StatusCode::CREATED, Json(crop.into())))
}

/// List the crops of a house
#[utoipa::path(
    get,
    path = "/get/crops/{house_name}",
    params(
        ("house_name" = String, Path, description = "House name"),
    ),
    responses(
        (status = 200, description = "Crops retrieved", body = Vec<CropView>),
        (status = 404, description = "House not found", body = MessageBody),
    ),
    tag = "crops"
)]
pub async fn list_crops(
    State(state): State<AppState>,
    Path(house_name): Path<String>,
) -> AppResult<Json<Vec<CropView>>> {
    let crops = queries::list_crops(&state.db, &house_name).await?;

    Ok(Json(crops.into_iter().map(CropView::from).collect()))
}

/// Get one crop of a house
#[utoipa::path(
    get,
    path = "/get/crop/{house_name}/{crop_no}",
    params(
        ("house_name" = String, Path, description = "House name"),
        ("crop_no" = String, Path, description = "Crop number"),
    ),
    responses(
        (status = 200, description = "Crop retrieved", body = CropView),
        (status = 404, description = "House or crop not found", body = MessageBody),
    ),
    tag = "crops"
)]
pub async fn get_crop(
    State(state): State<AppState>,
    Path((house_name, crop_no)): Path<(String, String)>,
) -> AppResult<Json<CropView>> {
    let key = CropKey {
        house: &house_name,
        crop_number: &crop_no,
    };
    let crop = queries::get_crop(&state.db, key).await?;

    Ok(Json(crop.into()))
}
