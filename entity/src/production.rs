use sea_orm::entity::prelude::*;

use super::sea_orm_active_enums::ProductionStatus;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "production")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub pair_id: i32,
    pub start_date: Date,
    pub end_date: Option<DateTimeUtc>,
    pub status: ProductionStatus,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::pair::Entity",
        from = "Column::PairId",
        to = "super::pair::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Pair,
    #[sea_orm(has_many = "super::egg::Entity")]
    Egg,
}

impl Related<super::pair::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Pair.def()
    }
}

impl Related<super::egg::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Egg.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
