use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// A crop planted in a house. `crop_number` is unique across every house.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "crops")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub crop_number: String,
    pub crop_name: String,
    pub start_date: String,
    pub house_name: String,
    pub created_at: Option<DateTimeWithTimeZone>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::houses::Entity",
        from = "Column::HouseName",
        to = "super::houses::Column::Name"
    )]
    House,
    #[sea_orm(has_many = "super::days::Entity")]
    Days,
}

impl Related<super::houses::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::House.def()
    }
}

impl Related<super::days::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Days.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
