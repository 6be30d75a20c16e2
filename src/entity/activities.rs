use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "activities")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub description: Option<String>,
    #[sea_orm(unique)]
    pub day_no: String,
    pub created_at: Option<DateTimeWithTimeZone>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::days::Entity",
        from = "Column::DayNo",
        to = "super::days::Column::Day"
    )]
    Day,
}

impl Related<super::days::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Day.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
