//! Create operations.
//!
//! Each create resolves its ancestors, validates its own fields, rejects a
//! duplicate at the target level, then inserts, all inside one transaction.
//! A missing ancestor is reported before anything wrong with the new record's
//! fields. A racing insert that slips
//! past the duplicate check is caught by the store's unique keys and comes
//! back as [`AppError::Conflict`].

use chrono::{DateTime, FixedOffset, Utc};
use sea_orm::{ActiveModelTrait, DatabaseConnection, Set, TransactionTrait};

use crate::entity::{activities, conditions, crops, days, harvests, houses};
use crate::error::{AppError, AppResult};
use crate::repository::{self, CropKey, DayKey};

// Column widths from the schema
const HOUSE_NAME_MAX: usize = 20;
const CROP_NUMBER_MAX: usize = 10;
const CROP_NAME_MAX: usize = 30;
const DAY_LABEL_MAX: usize = 10;
const TIME_MAX: usize = 20;
const DESCRIPTION_MAX: usize = 100;

fn now() -> DateTime<FixedOffset> {
    Utc::now().fixed_offset()
}

fn check_len(field: &str, value: &str, max: usize) -> AppResult<()> {
    if value.chars().count() > max {
        return Err(AppError::BadRequest(format!(
            "{field} must be at most {max} characters"
        )));
    }
    Ok(())
}

fn check_key(field: &str, value: &str, max: usize) -> AppResult<()> {
    if value.is_empty() {
        return Err(AppError::BadRequest(format!("{field} must not be empty")));
    }
    check_len(field, value, max)
}

#[tracing::instrument(skip(db))]
pub async fn create_house(db: &DatabaseConnection, name: &str) -> AppResult<houses::Model> {
    check_key("house", name, HOUSE_NAME_MAX)?;

    let txn = db.begin().await?;
    if repository::find_house(&txn, name).await?.is_some() {
        tracing::debug!("House already present");
        return Err(AppError::AlreadyExists("House Present".to_string()));
    }

    let house = houses::ActiveModel {
        name: Set(name.to_string()),
        created_at: Set(Some(now())),
        ..Default::default()
    }
    .insert(&txn)
    .await
    .map_err(|e| AppError::from_insert(e, &format!("House {name}")))?;
    txn.commit().await?;

    tracing::info!(id = house.id, "House created");
    Ok(house)
}

#[tracing::instrument(skip(db))]
pub async fn create_crop(
    db: &DatabaseConnection,
    key: CropKey<'_>,
    crop_name: &str,
    start_date: &str,
) -> AppResult<crops::Model> {
    let txn = db.begin().await?;
    let house = repository::resolve_house(&txn, key.house).await?;
    check_key("crop_no", key.crop_number, CROP_NUMBER_MAX)?;
    check_len("crop_name", crop_name, CROP_NAME_MAX)?;

    if repository::find_crop(&txn, &house, key.crop_number)
        .await?
        .is_some()
    {
        tracing::debug!("Crop number already present");
        return Err(AppError::AlreadyExists("Crop Number Present".to_string()));
    }

    let crop = crops::ActiveModel {
        crop_number: Set(key.crop_number.to_string()),
        crop_name: Set(crop_name.to_string()),
        start_date: Set(start_date.to_string()),
        house_name: Set(house.name),
        created_at: Set(Some(now())),
        ..Default::default()
    }
    .insert(&txn)
    .await
    .map_err(|e| AppError::from_insert(e, &format!("Crop number {}", key.crop_number)))?;
    txn.commit().await?;

    tracing::info!(id = crop.id, "Crop created");
    Ok(crop)
}

#[tracing::instrument(skip(db))]
pub async fn create_day(
    db: &DatabaseConnection,
    key: DayKey<'_>,
    date: Option<&str>,
) -> AppResult<days::Model> {
    let txn = db.begin().await?;
    let (_, crop) = repository::resolve_crop(&txn, key.crop()).await?;
    check_key("day", key.day, DAY_LABEL_MAX)?;

    if repository::find_day(&txn, &crop, key.day).await?.is_some() {
        tracing::debug!("Day already present");
        return Err(AppError::AlreadyExists(format!(
            "Day {} of the crop {} is present",
            key.day, key.crop_number
        )));
    }

    let day = days::ActiveModel {
        day: Set(key.day.to_string()),
        date: Set(date.map(str::to_string)),
        crop_number: Set(crop.crop_number),
        created_at: Set(Some(now())),
        ..Default::default()
    }
    .insert(&txn)
    .await
    .map_err(|e| AppError::from_insert(e, &format!("Day {}", key.day)))?;
    txn.commit().await?;

    tracing::info!(id = day.id, "Day created");
    Ok(day)
}

/// Record the day's conditions. A day keeps its first reading; later ones are rejected.
#[tracing::instrument(skip(db))]
pub async fn create_condition(
    db: &DatabaseConnection,
    key: DayKey<'_>,
    temperature: Option<f64>,
    humidity: Option<f64>,
    time: Option<&str>,
) -> AppResult<conditions::Model> {
    let txn = db.begin().await?;
    let day = repository::resolve_day(&txn, key).await?;
    if let Some(time) = time {
        check_len("time", time, TIME_MAX)?;
    }

    if repository::find_condition(&txn, &day).await?.is_some() {
        tracing::debug!("Condition already recorded");
        return Err(AppError::AlreadyExists("Data already filled".to_string()));
    }

    let condition = conditions::ActiveModel {
        temperature: Set(temperature),
        humidity: Set(humidity),
        time: Set(time.map(str::to_string)),
        day_no: Set(day.day),
        created_at: Set(Some(now())),
        ..Default::default()
    }
    .insert(&txn)
    .await
    .map_err(|e| AppError::from_insert(e, &format!("Condition for day {}", key.day)))?;
    txn.commit().await?;

    tracing::info!(id = condition.id, "Condition recorded");
    Ok(condition)
}

#[tracing::instrument(skip(db))]
pub async fn create_harvest(
    db: &DatabaseConnection,
    key: DayKey<'_>,
    punnets: Option<i32>,
) -> AppResult<harvests::Model> {
    let txn = db.begin().await?;
    let day = repository::resolve_day(&txn, key).await?;

    if repository::find_harvest(&txn, &day).await?.is_some() {
        tracing::debug!("Harvest already recorded");
        return Err(AppError::AlreadyExists(format!(
            "Harvest for day {} present",
            key.day
        )));
    }

    let harvest = harvests::ActiveModel {
        punnets: Set(punnets),
        day_no: Set(day.day),
        created_at: Set(Some(now())),
        ..Default::default()
    }
    .insert(&txn)
    .await
    .map_err(|e| AppError::from_insert(e, &format!("Harvest for day {}", key.day)))?;
    txn.commit().await?;

    tracing::info!(id = harvest.id, "Harvest recorded");
    Ok(harvest)
}

#[tracing::instrument(skip(db))]
pub async fn create_activity(
    db: &DatabaseConnection,
    key: DayKey<'_>,
    description: Option<&str>,
) -> AppResult<activities::Model> {
    let txn = db.begin().await?;
    let day = repository::resolve_day(&txn, key).await?;
    if let Some(description) = description {
        check_len("activity", description, DESCRIPTION_MAX)?;
    }

    if repository::find_activity(&txn, &day).await?.is_some() {
        tracing::debug!("Activity already recorded");
        return Err(AppError::AlreadyExists(format!(
            "Activity for day {} present",
            key.day
        )));
    }

    let activity = activities::ActiveModel {
        description: Set(description.map(str::to_string)),
        day_no: Set(day.day),
        created_at: Set(Some(now())),
        ..Default::default()
    }
    .insert(&txn)
    .await
    .map_err(|e| AppError::from_insert(e, &format!("Activity for day {}", key.day)))?;
    txn.commit().await?;

    tracing::info!(id = activity.id, "Activity recorded");
    Ok(activity)
}
