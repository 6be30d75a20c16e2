//! Read operations and per-crop aggregations keyed by day label.

use sea_orm::ConnectionTrait;
use std::collections::BTreeMap;

use crate::entity::{activities, conditions, crops, days, harvests, houses};
use crate::error::{AppError, AppResult};
use crate::repository::{self, CropKey, DayKey};

pub async fn list_houses<C: ConnectionTrait>(db: &C) -> AppResult<Vec<houses::Model>> {
    let houses = repository::list_houses(db).await?;
    if houses.is_empty() {
        return Err(AppError::NotFound("No Houses Created".to_string()));
    }
    Ok(houses)
}

pub async fn get_house<C: ConnectionTrait>(db: &C, name: &str) -> AppResult<houses::Model> {
    repository::resolve_house(db, name).await
}

pub async fn list_crops<C: ConnectionTrait>(db: &C, house: &str) -> AppResult<Vec<crops::Model>> {
    let house = repository::resolve_house(db, house).await?;
    repository::list_crops_of_house(db, &house).await
}

pub async fn get_crop<C: ConnectionTrait>(db: &C, key: CropKey<'_>) -> AppResult<crops::Model> {
    let (_, crop) = repository::resolve_crop(db, key).await?;
    Ok(crop)
}

pub async fn list_days<C: ConnectionTrait>(db: &C, key: CropKey<'_>) -> AppResult<Vec<days::Model>> {
    let (_, crop) = repository::resolve_crop(db, key).await?;
    repository::list_days_of_crop(db, &crop).await
}

pub async fn get_day<C: ConnectionTrait>(db: &C, key: DayKey<'_>) -> AppResult<days::Model> {
    repository::resolve_day(db, key).await
}

pub async fn get_conditions_for_day<C: ConnectionTrait>(
    db: &C,
    key: DayKey<'_>,
) -> AppResult<Vec<conditions::Model>> {
    let day = repository::resolve_day(db, key).await?;
    let conditions = repository::list_conditions_of_day(db, &day).await?;
    if conditions.is_empty() {
        return Err(AppError::NotFound("No condition update".to_string()));
    }
    Ok(conditions)
}

/// Day label → condition for every day of the crop that has one.
///
/// Days without a condition are left out. A crop where no day has a
/// condition yet is reported as not found rather than as an empty map.
pub async fn get_conditions_for_crop<C: ConnectionTrait>(
    db: &C,
    key: CropKey<'_>,
) -> AppResult<BTreeMap<String, conditions::Model>> {
    let labels = day_labels(db, key).await?;
    let rows = repository::list_conditions_of_days(db, &labels).await?;
    let by_day = first_per_day(rows, |c| c.day_no.clone());
    if by_day.is_empty() {
        return Err(AppError::NotFound("No conditions update as yet".to_string()));
    }
    Ok(by_day)
}

pub async fn get_harvest_for_day<C: ConnectionTrait>(
    db: &C,
    key: DayKey<'_>,
) -> AppResult<harvests::Model> {
    let day = repository::resolve_day(db, key).await?;
    repository::find_harvest(db, &day)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("No harvest record for day {}", key.day)))
}

/// Day label → punnets for every day of the crop with a harvest.
pub async fn get_harvest_for_crop<C: ConnectionTrait>(
    db: &C,
    key: CropKey<'_>,
) -> AppResult<BTreeMap<String, Option<i32>>> {
    let labels = day_labels(db, key).await?;
    let rows = repository::list_harvests_of_days(db, &labels).await?;
    Ok(first_per_day(rows, |h| h.day_no.clone())
        .into_iter()
        .map(|(day, h)| (day, h.punnets))
        .collect())
}

/// Day label → description for every day of the crop with an activity.
pub async fn get_activities_for_crop<C: ConnectionTrait>(
    db: &C,
    key: CropKey<'_>,
) -> AppResult<BTreeMap<String, Option<String>>> {
    let labels = day_labels(db, key).await?;
    let rows = repository::list_activities_of_days(db, &labels).await?;
    Ok(first_per_day(rows, |a| a.day_no.clone())
        .into_iter()
        .map(|(day, a)| (day, a.description))
        .collect())
}

pub async fn get_activity_for_day<C: ConnectionTrait>(
    db: &C,
    key: DayKey<'_>,
) -> AppResult<activities::Model> {
    let day = repository::resolve_day(db, key).await?;
    repository::find_activity(db, &day)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("No activity record for day {}", key.day)))
}

async fn day_labels<C: ConnectionTrait>(db: &C, key: CropKey<'_>) -> AppResult<Vec<String>> {
    let (_, crop) = repository::resolve_crop(db, key).await?;
    Ok(repository::list_days_of_crop(db, &crop)
        .await?
        .into_iter()
        .map(|d| d.day)
        .collect())
}

/// Keep the first row seen for each day. Rows arrive in insertion order.
fn first_per_day<T>(rows: Vec<T>, day_of: impl Fn(&T) -> String) -> BTreeMap<String, T> {
    let mut by_day = BTreeMap::new();
    for row in rows {
        by_day.entry(day_of(&row)).or_insert(row);
    }
    by_day
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_per_day_keeps_earliest_row() {
        let rows = vec![("D1", 1), ("D2", 2), ("D1", 3)];
        let by_day = first_per_day(rows, |(day, _)| (*day).to_string());

        assert_eq!(by_day.len(), 2);
        assert_eq!(by_day["D1"], ("D1", 1));
        assert_eq!(by_day["D2"], ("D2", 2));
    }
}
