pub mod activities;
pub mod conditions;
pub mod crops;
pub mod days;
pub mod harvests;
pub mod health;
pub mod houses;

use axum::{
    Router,
    http::StatusCode,
    routing::{get, post},
};
use std::time::Duration;
use tower::ServiceBuilder;
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    limit::RequestBodyLimitLayer,
    timeout::TimeoutLayer,
    trace::TraceLayer,
};
use utoipa::OpenApi;
use utoipa_scalar::{Scalar, Servable};

use crate::common::AppState;
use crate::views;

#[derive(OpenApi)]
#[openapi(
    paths(
        health::healthz,
        health::home,
        houses::create_house,
        houses::list_houses,
        houses::get_house,
        crops::create_crop,
        crops::list_crops,
        crops::get_crop,
        days::list_days,
        days::create_day,
        days::get_day,
        conditions::get_conditions_for_day,
        conditions::get_conditions_for_crop,
        conditions::create_condition,
        harvests::get_harvest_for_day,
        harvests::get_harvest_for_crop,
        harvests::create_harvest,
        activities::create_activity,
        activities::get_activities_for_crop,
        activities::get_activity_for_day,
    ),
    components(
        schemas(
            views::HouseView,
            views::CropView,
            views::DayView,
            views::ConditionView,
            views::HarvestView,
            views::ActivityView,
            views::HouseCreated,
            views::MessageBody,
            views::ConditionsByDay,
            views::PunnetsByDay,
            views::ActivitiesByDay,
            houses::CreateHouseRequest,
            crops::CreateCropRequest,
            days::CreateDayRequest,
            conditions::CreateConditionRequest,
            harvests::CreateHarvestRequest,
            activities::CreateActivityRequest,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "houses", description = "Growing houses"),
        (name = "crops", description = "Crops planted in a house"),
        (name = "days", description = "Daily entries of a crop"),
        (name = "conditions", description = "Temperature and humidity readings"),
        (name = "harvests", description = "Punnets harvested per day"),
        (name = "activities", description = "Work done per day"),
    ),
    info(
        title = "Farm Records API",
        description = "Greenhouse record keeping: houses, crops, days and daily measurements",
        version = "0.1.0"
    )
)]
struct ApiDoc;

pub fn build_router(state: AppState) -> Router {
    let config = &state.config;

    tracing::info!(
        max_body_bytes = config.max_body_bytes,
        timeout_seconds = config.request_timeout_seconds,
        "Building router"
    );

    // Static segments (e.g. /get/houses) take priority over /get/{house_name}
    let record_routes = Router::new()
        .route("/house", post(houses::create_house))
        .route("/get/houses", get(houses::list_houses))
        .route("/get/{house_name}", get(houses::get_house))
        .route("/crop", post(crops::create_crop))
        .route("/get/crops/{house_name}", get(crops::list_crops))
        .route("/get/crop/{house_name}/{crop_no}", get(crops::get_crop))
        .route("/get/days/{house_name}/{crop_no}", get(days::list_days))
        .route("/day", post(days::create_day))
        .route("/day/{house_name}/{crop_no}/{day_no}", get(days::get_day))
        .route("/condition", post(conditions::create_condition))
        .route(
            "/condition/{house_name}/{crop_no}",
            get(conditions::get_conditions_for_crop),
        )
        .route(
            "/condition/{house_name}/{crop_no}/{day_no}",
            get(conditions::get_conditions_for_day),
        )
        .route("/harvest", post(harvests::create_harvest))
        .route(
            "/harvest/{house_name}/{crop_no}",
            get(harvests::get_harvest_for_crop),
        )
        .route(
            "/harvest/{house_name}/{crop_no}/{day_no}",
            get(harvests::get_harvest_for_day),
        )
        .route("/activity", post(activities::create_activity))
        .route(
            "/get/activities/{house_name}/{crop_no}",
            get(activities::get_activities_for_crop),
        )
        .route(
            "/get/activity/{house_name}/{crop_no}/{day_no}",
            get(activities::get_activity_for_day),
        )
        .layer(RequestBodyLimitLayer::new(config.max_body_bytes));

    let service_routes = Router::new()
        .route("/", get(health::home))
        .route("/home", get(health::home))
        .route("/healthz", get(health::healthz));

    // OpenAPI documentation
    let docs_routes = Router::new().merge(Scalar::with_url("/docs", ApiDoc::openapi()));

    let timeout = Duration::from_secs(config.request_timeout_seconds);

    Router::new()
        .merge(record_routes)
        .merge(service_routes)
        .merge(docs_routes)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(TimeoutLayer::with_status_code(
                    StatusCode::REQUEST_TIMEOUT,
                    timeout,
                ))
                .layer(
                    CorsLayer::new()
                        .allow_origin(Any)
                        .allow_methods(Any)
                        .allow_headers(Any),
                )
                .layer(CompressionLayer::new()),
        )
        .with_state(state)
}
