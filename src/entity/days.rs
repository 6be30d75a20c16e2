use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// One entry in a crop's calendar. `day` is unique across every crop.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "days")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub day: String,
    pub date: Option<String>,
    pub crop_number: String,
    pub created_at: Option<DateTimeWithTimeZone>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::crops::Entity",
        from = "Column::CropNumber",
        to = "super::crops::Column::CropNumber"
    )]
    Crop,
    #[sea_orm(has_one = "super::conditions::Entity")]
    Condition,
    #[sea_orm(has_one = "super::harvests::Entity")]
    Harvest,
    #[sea_orm(has_one = "super::activities::Entity")]
    Activity,
}

impl Related<super::crops::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Crop.def()
    }
}

impl Related<super::conditions::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Condition.def()
    }
}

impl Related<super::harvests::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Harvest.def()
    }
}

impl Related<super::activities::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Activity.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
