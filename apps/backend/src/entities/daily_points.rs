use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "daily_points")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: i64,
    /// Daily-claim feature marker. Written once at row creation, never
    /// mutated by the award path.
    #[sea_orm(column_name = "last_claim")]
    pub last_claim: OffsetDateTime,
    /// Cutover-anchored day on which participation was last recorded.
    #[sea_orm(column_name = "last_particip_dt")]
    pub last_particip_dt: OffsetDateTime,
    /// Participation points earned within the current day window.
    pub particip: i64,
    /// Bonus points earned within the current day window.
    pub won: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::users::Entity",
        from = "Column::Id",
        to = "super::users::Column::Id"
    )]
    Users,
}

impl Related<super::users::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Users.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
