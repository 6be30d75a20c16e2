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
use crate::views::{ConditionView, ConditionsByDay, MessageBody};

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateConditionRequest {
    pub house: String,
    pub crop_no: String,
    /// Day label
    pub day: String,
    /// Time of the reading, e.g. "14:30"
    #[serde(default)]
    pub time: Option<String>,
    /// Degrees Celsius
    #[serde(default)]
    pub temperature: Option<f64>,
    /// Relative humidity
    #[serde(default)]
    pub humidity: Option<f64>,
}

/// Conditions recorded on one day
#[utoipa::path(
    get,
    path = "/condition/{house_name}/{crop_no}/{day_no}",
    params(
        ("house_name" = String, Path, description = "House name"),
        ("crop_no" = String, Path, description = "Crop number"),
        ("day_no" = String, Path, description = "Day label"),
    ),
    responses(
        (status = 200, description = "Conditions retrieved", body = Vec<ConditionView>),
        (status = 404, description = "Ancestor missing or no condition recorded", body = MessageBody),
    ),
    tag = "conditions"
)]
pub async fn get_conditions_for_day(
    State(state): State<AppState>,
    Path((house_name, crop_no, day_no)): Path<(String, String, String)>,
) -> AppResult<Json<Vec<ConditionView>>> {
    let key = DayKey {
        house: &house_name,
        crop_number: &crop_no,
        day: &day_no,
    };
    let conditions = queries::get_conditions_for_day(&state.db, key).await?;

    Ok(Json(conditions.into_iter().map(ConditionView::from).collect()))
}

/// Conditions of every day of a crop, keyed by day label
#[utoipa::path(
    get,
    path = "/condition/{house_name}/{crop_no}",
    params(
        ("house_name" = String, Path, description = "House name"),
        ("crop_no" = String, Path, description = "Crop number"),
    ),
    responses(
        (status = 200, description = "Conditions retrieved", body = ConditionsByDay),
        (status = 404, description = "Ancestor missing or no condition recorded yet", body = MessageBody),
    ),
    tag = "conditions"
)]
pub async fn get_conditions_for_crop(
    State(state): State<AppState>,
    Path((house_name, crop_no)): Path<(String, String)>,
) -> AppResult<Json<ConditionsByDay>> {
    let key = CropKey {
        house: &house_name,
        crop_number: &crop_no,
    };
    let by_day = queries::get_conditions_for_crop(&state.db, key).await?;

    Ok(Json(ConditionsByDay(
        by_day
            .into_iter()
            .map(|(day, c)| (day, ConditionView::from(c)))
            .collect(),
    )))
}

/// Record a day's conditions
#[utoipa::path(
    post,
    path = "/condition",
    request_body = CreateConditionRequest,
    responses(
        (status = 201, description = "Condition recorded", body = ConditionView),
        (status = 404, description = "House, crop or day not found", body = MessageBody),
        (status = 409, description = "Condition already recorded for the day", body = MessageBody),
    ),
    tag = "conditions"
)]
pub async fn create_condition(
    State(state): State<AppState>,
    payload: Result<Json<CreateConditionRequest>, JsonRejection>,
) -> AppResult<(StatusCode, Json<ConditionView>)> {
    let Json(body) = payload?;
    let key = DayKey {
        house: &body.house,
        crop_number: &body.crop_no,
        day: &body.day,
    };
    let condition = records::create_condition(
        &state.db,
        key,
        body.temperature,
        body.humidity,
        body.time.as_deref(),
    )
    .await?;

    Ok((StatusCode::CREATED, Json(condition.into())))
}
