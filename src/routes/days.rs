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
use crate::views::{DayView, MessageBody};

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateDayRequest {
    pub house: String,
    pub crop_no: String,
    /// Day label, e.g. "D1"
    pub day: String,
    #[serde(default)]
    pub date: Option<String>,
}

/// List the days of a crop
#[utoipa::path(
    get,
    path = "/get/days/{house_name}/{crop_no}",
    params(
        ("house_name" = String, Path, description = "House name"),
        ("crop_no" = String, Path, description = "Crop number"),
    ),
    responses(
        (status = 200, description = "Days retrieved", body = Vec<DayView>),
        (status = 404, description = "House or crop not found", body = MessageBody),
    ),
    tag = "days"
)]
pub async fn list_days(
    State(state): State<AppState>,
    Path((house_name, crop_no)): Path<(String, String)>,
) -> AppResult<Json<Vec<DayView>>> {
    let key = CropKey {
        house: &house_name,
        crop_number: &crop_no,
    };
    let days = queries::list_days(&state.db, key).await?;

    Ok(Json(days.into_iter().map(DayView::from).collect()))
}

/// Add a day to a crop's calendar
#[utoipa::path(
    post,
    path = "/day",
    request_body = CreateDayRequest,
    responses(
        (status = 201, description = "Day created", body = DayView),
        (status = 404, description = "House or crop not found", body = MessageBody),
        (status = 409, description = "Day already present", body = MessageBody),
    ),
    tag = "days"
)]
pub async fn create_day(
    State(state): State<AppState>,
    payload: Result<Json<CreateDayRequest>, JsonRejection>,
) -> AppResult<(StatusCode, Json<DayView>)> {
    let Json(body) = payload?;
    let key = DayKey {
        house: &body.house,
        crop_number: &body.crop_no,
        day: &body.day,
    };
    let day = records::create_day(&state.db, key, body.date.as_deref()).await?;

    Ok((StatusCode::CREATED, Json(day.into())))
}

/// Get one day of a crop
#[utoipa::path(
    get,
    path = "/day/{house_name}/{crop_no}/{day_no}",
    params(
        ("house_name" = String, Path, description = "House name"),
        ("crop_no" = String, Path, description = "Crop number"),
        ("day_no" = String, Path, description = "Day label"),
    ),
    responses(
        (status = 200, description = "Day retrieved", body = DayView),
        (status = 404, description = "House, crop or day not found", body = MessageBody),
    ),
    tag = "days"
)]
pub async fn get_day(
    State(state): State<AppState>,
    Path((house_name, crop_no, day_no)): Path<(String, String, String)>,
) -> AppResult<Json<DayView>> {
    let key = DayKey {
        house: &house_name,
        crop_number: &crop_no,
        day: &day_no,
    };
    let day = queries::get_day(&state.db, key).await?;

    Ok(Json(day.into()))
}
