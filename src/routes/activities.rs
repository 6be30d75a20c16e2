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
use crate::views::{ActivitiesByDay, ActivityView, MessageBody};

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateActivityRequest {
    pub house: String,
    pub crop_no: String,
    pub day_no: String,
    /// Short description of the work done
    #[serde(default)]
    pub activity: Option<String>,
}

/// Record the activity done on a day
#[utoipa::path(
    post,
    path = "/activity",
    request_body = CreateActivityRequest,
    responses(
        (status = 201, description = "Activity recorded", body = ActivityView),
        (status = 404, description = "House, crop or day not found", body = MessageBody),
        (status = 409, description = "Activity already recorded for the day", body = MessageBody),
    ),
    tag = "activities"
)]
pub async fn create_activity(
    State(state): State<AppState>,
    payload: Result<Json<CreateActivityRequest>, JsonRejection>,
) -> AppResult<(StatusCode, Json<ActivityView>)> {
    let Json(body) = payload?;
    let key = DayKey {
        house: &body.house,
        crop_number: &body.crop_no,
        day: &body.day_no,
    };
    let activity = records::create_activity(&state.db, key, body.activity.as_deref()).await?;

    Ok((StatusCode::CREATED, Json(activity.into())))
}

/// Activities of every day of a crop, keyed by day label
#[utoipa::path(
    get,
    path = "/get/activities/{house_name}/{crop_no}",
    params(
        ("house_name" = String, Path, description = "House name"),
        ("crop_no" = String, Path, description = "Crop number"),
    ),
    responses(
        (status = 200, description = "Activities retrieved", body = ActivitiesByDay),
        (status = 404, description = "House or crop not found", body = MessageBody),
    ),
    tag = "activities"
)]
pub async fn get_activities_for_crop(
    State(state): State<AppState>,
    Path((house_name, crop_no)): Path<(String, String)>,
) -> AppResult<Json<ActivitiesByDay>> {
    let key = CropKey {
        house: &house_name,
        crop_number: &crop_no,
    };
    let by_day = queries::get_activities_for_crop(&state.db, key).await?;

    Ok(Json(ActivitiesByDay(by_day)))
}

/// Activity of one day
#[utoipa::path(
    get,
    path = "/get/activity/{house_name}/{crop_no}/{day_no}",
    params(
        ("house_name" = String, Path, description = "House name"),
        ("crop_no" = String, Path, description = "Crop number"),
        ("day_no" = String, Path, description = "Day label"),
    ),
    responses(
        (status = 200, description = "Activity retrieved", body = ActivityView),
        (status = 404, description = "Ancestor or activity missing", body = MessageBody),
    ),
    tag = "activities"
)]
pub async fn get_activity_for_day(
    State(state): State<AppState>,
    Path((house_name, crop_no, day_no)): Path<(String, String, String)>,
) -> AppResult<Json<ActivityView>> {
    let key = DayKey {
        house: &house_name,
        crop_number: &crop_no,
        day: &day_no,
    };
    let activity = queries::get_activity_for_day(&state.db, key).await?;

    Ok(Json(activity.into()))
}
