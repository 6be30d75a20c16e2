//! Natural-key lookups over the house → crop → day → measurement tree.
//!
//! Every lookup is an exact, case-sensitive match. Hierarchy resolution goes
//! strictly left to right and stops at the first missing level, so a missing
//! house is reported even when the crop number would not match either.

use sea_orm::{
    ColumnTrait, ConnectionTrait, EntityTrait, ModelTrait, QueryFilter, QueryOrder,
};

use crate::entity::{activities, conditions, crops, days, harvests, houses};
use crate::error::{AppError, AppResult};

/// Natural-key path to a crop.
#[derive(Debug, Clone, Copy)]
pub struct CropKey<'a> {
    pub house: &'a str,
    pub crop_number: &'a str,
}

/// Natural-key path to a day of a crop.
#[derive(Debug, Clone, Copy)]
pub struct DayKey<'a> {
    pub house: &'a str,
    pub crop_number: &'a str,
    pub day: &'a str,
}

impl<'a> DayKey<'a> {
    #[must_use]
    pub fn crop(&self) -> CropKey<'a> {
        CropKey {
            house: self.house,
            crop_number: self.crop_number,
        }
    }
}

pub async fn find_house<C: ConnectionTrait>(db: &C, name: &str) -> AppResult<Option<houses::Model>> {
    Ok(houses::Entity::find()
        .filter(houses::Column::Name.eq(name))
        .one(db)
        .await?)
}

/// Find a crop among the crops of `house`.
pub async fn find_crop<C: ConnectionTrait>(
    db: &C,
    house: &houses::Model,
    crop_number: &str,
) -> AppResult<Option<crops::Model>> {
    Ok(crops::Entity::find()
        .filter(crops::Column::HouseName.eq(house.name.as_str()))
        .filter(crops::Column::CropNumber.eq(crop_number))
        .one(db)
        .await?)
}

/// Find a day among the days of `crop`.
pub async fn find_day<C: ConnectionTrait>(
    db: &C,
    crop: &crops::Model,
    day: &str,
) -> AppResult<Option<days::Model>> {
    Ok(days::Entity::find()
        .filter(days::Column::CropNumber.eq(crop.crop_number.as_str()))
        .filter(days::Column::Day.eq(day))
        .one(db)
        .await?)
}

// Measurements: expect zero or one per day, but take the earliest insert if
// more than one is ever present.

pub async fn find_condition<C: ConnectionTrait>(
    db: &C,
    day: &days::Model,
) -> AppResult<Option<conditions::Model>> {
    Ok(conditions::Entity::find()
        .filter(conditions::Column::DayNo.eq(day.day.as_str()))
        .order_by_asc(conditions::Column::Id)
        .one(db)
        .await?)
}

pub async fn find_harvest<C: ConnectionTrait>(
    db: &C,
    day: &days::Model,
) -> AppResult<Option<harvests::Model>> {
    Ok(harvests::Entity::find()
        .filter(harvests::Column::DayNo.eq(day.day.as_str()))
        .order_by_asc(harvests::Column::Id)
        .one(db)
        .await?)
}

pub async fn find_activity<C: ConnectionTrait>(
    db: &C,
    day: &days::Model,
) -> AppResult<Option<activities::Model>> {
    Ok(activities::Entity::find()
        .filter(activities::Column::DayNo.eq(day.day.as_str()))
        .order_by_asc(activities::Column::Id)
        .one(db)
        .await?)
}

pub async fn list_houses<C: ConnectionTrait>(db: &C) -> AppResult<Vec<houses::Model>> {
    Ok(houses::Entity::find()
        .order_by_asc(houses::Column::Id)
        .all(db)
        .await?)
}

pub async fn list_crops_of_house<C: ConnectionTrait>(
    db: &C,
    house: &houses::Model,
) -> AppResult<Vec<crops::Model>> {
    Ok(house
        .find_related(crops::Entity)
        .order_by_asc(crops::Column::Id)
        .all(db)
        .await?)
}

pub async fn list_days_of_crop<C: ConnectionTrait>(
    db: &C,
    crop: &crops::Model,
) -> AppResult<Vec<days::Model>> {
    Ok(crop
        .find_related(days::Entity)
        .order_by_asc(days::Column::Id)
        .all(db)
        .await?)
}

pub async fn list_conditions_of_day<C: ConnectionTrait>(
    db: &C,
    day: &days::Model,
) -> AppResult<Vec<conditions::Model>> {
    Ok(day
        .find_related(conditions::Entity)
        .order_by_asc(conditions::Column::Id)
        .all(db)
        .await?)
}

/// Conditions of several days at once, earliest insert first.
pub async fn list_conditions_of_days<C: ConnectionTrait>(
    db: &C,
    labels: &[String],
) -> AppResult<Vec<conditions::Model>> {
    Ok(conditions::Entity::find()
        .filter(conditions::Column::DayNo.is_in(labels.iter().map(String::as_str)))
        .order_by_asc(conditions::Column::Id)
        .all(db)
        .await?)
}

pub async fn list_harvests_of_days<C: ConnectionTrait>(
    db: &C,
    labels: &[String],
) -> AppResult<Vec<harvests::Model>> {
    Ok(harvests::Entity::find()
        .filter(harvests::Column::DayNo.is_in(labels.iter().map(String::as_str)))
        .order_by_asc(harvests::Column::Id)
        .all(db)
        .await?)
}

pub async fn list_activities_of_days<C: ConnectionTrait>(
    db: &C,
    labels: &[String],
) -> AppResult<Vec<activities::Model>> {
    Ok(activities::Entity::find()
        .filter(activities::Column::DayNo.is_in(labels.iter().map(String::as_str)))
        .order_by_asc(activities::Column::Id)
        .all(db)
        .await?)
}

pub async fn resolve_house<C: ConnectionTrait>(db: &C, name: &str) -> AppResult<houses::Model> {
    find_house(db, name)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("House {name} not found")))
}

pub async fn resolve_crop<C: ConnectionTrait>(
    db: &C,
    key: CropKey<'_>,
) -> AppResult<(houses::Model, crops::Model)> {
    let house = resolve_house(db, key.house).await?;
    let crop = find_crop(db, &house, key.crop_number)
        .await?
        .ok_or_else(|| {
            AppError::NotFound(format!(
                "Crop number {} not found for house {}",
                key.crop_number, key.house
            ))
        })?;
    Ok((house, crop))
}

pub async fn resolve_day<C: ConnectionTrait>(db: &C, key: DayKey<'_>) -> AppResult<days::Model> {
    let (_, crop) = resolve_crop(db, key.crop()).await?;
    find_day(db, &crop, key.day).await?.ok_or_else(|| {
        AppError::NotFound(format!(
            "Day {} of crop number {} in house {} not found",
            key.day, key.crop_number, key.house
        ))
    })
}
