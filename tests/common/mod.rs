//! Shared helpers for the integration tests.
#![allow(dead_code)]

use axum::Router;
use farm_records::common::AppState;
use farm_records::config::Config;
use farm_records::repository::{CropKey, DayKey};
use farm_records::routes;
use farm_records::services::records;
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use sea_orm_migration::MigratorTrait;

const MEMORY_URL: &str = "sqlite::memory:";

/// Fresh in-memory SQLite store with the production schema applied.
pub async fn setup_test_db() -> DatabaseConnection {
    let mut opts = ConnectOptions::new(MEMORY_URL);
    // An in-memory database lives and dies with its single connection
    opts.max_connections(1)
        .min_connections(1)
        .sqlx_logging(false);

    let db = Database::connect(opts)
        .await
        .unwrap_or_else(|e| panic!("failed to open test database: {e}"));
    migration::Migrator::up(&db, None)
        .await
        .unwrap_or_else(|e| panic!("failed to migrate test database: {e}"));
    db
}

pub fn test_router(db: DatabaseConnection) -> Router {
    routes::build_router(AppState::new(db, Config::local(MEMORY_URL)))
}

pub fn crop_key<'a>(house: &'a str, crop_number: &'a str) -> CropKey<'a> {
    CropKey { house, crop_number }
}

pub fn day_key<'a>(house: &'a str, crop_number: &'a str, day: &'a str) -> DayKey<'a> {
    DayKey {
        house,
        crop_number,
        day,
    }
}

/// Create a house if needed, one crop in it and the given days of that crop.
pub async fn seed_crop(db: &DatabaseConnection, house: &str, crop_number: &str, days: &[&str]) {
    // The house may already exist from an earlier seed in the same test
    let _ = records::create_house(db, house).await;
    records::create_crop(db, crop_key(house, crop_number), "Tomato", "2024-01-01")
        .await
        .unwrap_or_else(|e| panic!("failed to seed crop {crop_number}: {e}"));
    for day in days {
        records::create_day(db, day_key(house, crop_number, day), None)
            .await
            .unwrap_or_else(|e| panic!("failed to seed day {day}: {e}"));
    }
}
