use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
};
use serde::Deserialize;
use utoipa::ToSchema;

use crate::common::AppState;
use crate::error::AppResult;
use crate::repository::{CropKey, DayKey};
use crate::services::{queries, records};
use crate::views::{HarvestView, MessageBody, PunnetsByDay};

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateHarvestRequest {
    pub house: String,
    pub crop_no: String,
    pub day_no: String,
    #[serde(default)]
    pub punnets: Option<i32>,
}

/// Harvest of one day
#[utoipa::path(
    get,
    path = "/harvest/{house_name}/{crop_no}/{day_no}",
    params(
        ("house_name" = String, Path, description = "House name"),
        ("crop_no" = String, Path, description = "Crop number"),
        ("day_no" = String, Path, description = "Day label"),
    ),
    responses(
        (status = 200, description = "Harvest retrieved", body = HarvestView),
        (status = 404, description = "Ancestor or harvest missing", body = MessageBody),
    ),
    tag = "harvests"
)]
pub async fn get_harvest_for_day(
    State(state): State<AppState>,
    Path((house_name, crop_no, day_no)): Path<(String, String, String)>,
) -> AppResult<Json<HarvestView>> {
    let key = DayKey {
        house: &house_name,
        crop_number: &crop_no,
        day: &day_no,
    };
    let harvest = queries::get_harvest_for_day(&state.db, key).await?;

    Ok(Json(harvest.into()))
}

/// Punnets harvested on each day of a crop
#[utoipa::path(
    get,
    path = "/harvest/{house_name}/{crop_no}",
    params(
        ("house_name" = String, Path, description = "House name"),
        ("crop_no" = String, Path, description = "Crop number"),
    ),
    responses(
        (status = 200, description = "Harvests retrieved", body = PunnetsByDay),
        (status = 404, description = "House or crop not found", body = MessageBody),
    ),
    tag = "harvests"
)]
pub async fn get_harvest_for_crop(
    State(state): State<AppState>,
    Path((house_name, crop_no)): Path<(String, String)>,
) -> AppResult<Json<PunnetsByDay>> {
    let key = CropKey {
        house: &house_name,
        crop_number: &crop_no,
    };
    let by_day = queries::get_harvest_for_crop(&state.db, key).await?;

    Ok(Json(PunnetsByDay(by_day)))
}

/// Record a day's harvest
#[utoipa::path(
    post,
    path = "/harvest",
    request_body = CreateHarvestRequest,
    responses(
        (status = 201, description = "Harvest recorded", body = HarvestView),
        (status = 404, description = "House, crop or day not found", body = MessageBody),
        (status = 409, description = "Harvest already recorded for the day", body = MessageBody),
    ),
    tag = "harvests"
)]
pub async fn create_harvest(
    State(state): State<AppState>,
    payload: Result<Json<CreateHarvestRequest>, JsonRejection>,
) -> AppResult<(StatusCode, Json<HarvestView>)> {
    let Json(body) = payload?;
    let key = DayKey {
        house: &body.house,
        crop_number: &body.crop_no,
        day: &body.day_no,
    };
    let harvest = records::create_harvest(&state.db, key, body.punnets).await?;

    Ok((StatusCode::CREATED, Json(harvest.into())))
}
