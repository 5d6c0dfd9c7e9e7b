use sea_orm::entity::prelude::*;

use super::sea_orm_active_enums::PairStatus;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "pair")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub user_id: i32,
    pub cage_name: String,
    pub sire_id: i32,
    pub dam_id: i32,
    pub pairing_date: Date,
    pub end_date: Option<DateTimeUtc>,
    pub status: PairStatus,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::UserId",
        to = "super::user::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    User,
    #[sea_orm(
        belongs_to = "super::bird::Entity",
        from = "Column::SireId",
        to = "super::bird::Column::Id",
        on_update = "Cascade",
        on_delete = "Restrict"
    )]
    Sire,
    #[sea_orm(
        belongs_to = "super::bird::Entity",
        from = "Column::DamId",
        to = "super::bird::Column::Id",
        on_update = "Cascade",
        on_delete = "Restrict"
    )]
    Dam,
    #[sea_orm(has_many = "super::production::Entity")]
    Production,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl Related<super::production::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Production.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
