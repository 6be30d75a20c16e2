//! Flat JSON views of the stored entities.
//!
//! Field names are part of the client contract. Surrogate ids are only
//! exposed for houses.

use serde::Serialize;
use std::collections::BTreeMap;
use utoipa::ToSchema;

use crate::entity::{activities, conditions, crops, days, harvests, houses};

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct HouseView {
    pub id: i32,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct CropView {
    pub crop_name: String,
    pub crop_number: String,
    pub house_name: String,
    pub start_date: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct DayView {
    pub day: String,
    pub crop_number: String,
    pub date: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct ConditionView {
    pub temperature: Option<f64>,
    pub humidity: Option<f64>,
    pub time: Option<String>,
    pub day_no: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct HarvestView {
    pub punnets: Option<i32>,
    pub day_no: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct ActivityView {
    pub day_no: String,
    pub description: Option<String>,
}

/// Body returned when a house is created.
#[derive(Debug, Serialize, ToSchema)]
pub struct HouseCreated {
    #[serde(rename = "House")]
    pub house: String,
}

/// Error body shared by every failing route.
#[derive(Debug, Serialize, ToSchema)]
pub struct MessageBody {
    #[serde(rename = "Message")]
    pub message: String,
}

/// Day label → condition, for days that have one.
#[derive(Debug, Serialize, ToSchema)]
pub struct ConditionsByDay(pub BTreeMap<String, ConditionView>);

/// Day label → punnets harvested that day.
#[derive(Debug, Serialize, ToSchema)]
pub struct PunnetsByDay(pub BTreeMap<String, Option<i32>>);

/// Day label → activity description.
#[derive(Debug, Serialize, ToSchema)]
pub struct ActivitiesByDay(pub BTreeMap<String, Option<String>>);

impl From<houses::Model> for HouseView {
    fn from(h: houses::Model) -> Self {
        Self {
            id: h.id,
            name: h.name,
        }
    }
}

impl From<crops::Model> for CropView {
    fn from(c: crops::Model) -> Self {
        Self {
            crop_name: c.crop_name,
            crop_number: c.crop_number,
            house_name: c.house_name,
            start_date: c.start_date,
        }
    }
}

impl From<days::Model> for DayView {
    fn from(d: days::Model) -> Self {
        Self {
            day: d.day,
            crop_number: d.crop_number,
            date: d.date,
        }
    }
}

impl From<conditions::Model> for ConditionView {
    fn from(c: conditions::Model) -> Self {
        Self {
            temperature: c.temperature,
            humidity: c.humidity,
            time: c.time,
            day_no: c.day_no,
        }
    }
}

impl From<harvests::Model> for HarvestView {
    fn from(h: harvests::Model) -> Self {
        Self {
            punnets: h.punnets,
            day_no: h.day_no,
        }
    }
}

impl From<activities::Model> for ActivityView {
    fn from(a: activities::Model) -> Self {
        Self {
            day_no: a.day_no,
            description: a.description,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn crop_view_omits_surrogate_id() {
        let view = CropView::from(crops::Model {
            id: 7,
            crop_number: "C001".into(),
            crop_name: "Tomato".into(),
            start_date: "2024-01-01".into(),
            house_name: "GH1".into(),
            created_at: None,
        });

        assert_eq!(
            serde_json::to_value(view).unwrap(),
            json!({
                "crop_name": "Tomato",
                "crop_number": "C001",
                "house_name": "GH1",
                "start_date": "2024-01-01",
            })
        );
    }

    #[test]
    fn condition_view_uses_day_no() {
        let view = ConditionView::from(conditions::Model {
            id: 1,
            temperature: Some(24.5),
            humidity: None,
            time: Some("08:00".into()),
            day_no: "D1".into(),
            created_at: None,
        });

        assert_eq!(
            serde_json::to_value(view).unwrap(),
            json!({"temperature": 24.5, "humidity": null, "time": "08:00", "day_no": "D1"})
        );
    }

    #[test]
    fn wrapper_bodies_use_capitalized_keys() {
        let created = serde_json::to_value(HouseCreated { house: "GH1".into() }).unwrap();
        assert_eq!(created, json!({"House": "GH1"}));

        let message = serde_json::to_value(MessageBody {
            message: "House Present".into(),
        })
        .unwrap();
        assert_eq!(message, json!({"Message": "House Present"}));
    }
}
