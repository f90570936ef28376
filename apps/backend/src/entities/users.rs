use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: i64,
    pub points: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_one = "super::bids::Entity")]
    Bids,
    #[sea_orm(has_one = "super::daily_points::Entity")]
    DailyPoints,
}

impl Related<super::bids::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Bids.def()
    }
}

impl Related<super::daily_points::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::DailyPoints.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
