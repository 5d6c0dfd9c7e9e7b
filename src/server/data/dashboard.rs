//! Read-only count queries backing the dashboard.

use entity::sea_orm_active_enums::{BirdStatus, EggStatus, PairStatus, ProductionStatus};
use sea_orm::{
    ColumnTrait, ConnectionTrait, DbErr, EntityTrait, JoinType, PaginatorTrait, QueryFilter,
    QuerySelect, RelationTrait,
};

pub struct DashboardRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> DashboardRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Counts a user's live birds, optionally restricted to one status.
    pub async fn count_birds(
        &self,
        user_id: i32,
        status: Option<BirdStatus>,
    ) -> Result<u64, DbErr> {
        let mut query = entity::prelude::Bird::find()
            .filter(entity::bird::Column::UserId.eq(user_id))
            .filter(entity::bird::Column::DeletedAt.is_null());

        if let Some(status) = status {
            query = query.filter(entity::bird::Column::Status.eq(status));
        }

        query.count(self.db).await
    }

    pub async fn count_active_pairs(&self, user_id: i32) -> Result<u64, DbErr> {
        entity::prelude::Pair::find()
            .filter(entity::pair::Column::UserId.eq(user_id))
            .filter(entity::pair::Column::Status.eq(PairStatus::Active))
            .count(self.db)
            .await
    }

    /// Counts PENDING or FERTILE eggs in ACTIVE productions of the user's ACTIVE pairs.
    ///
    /// Eggs left behind under a disbanded pair are excluded even if still PENDING.
    pub async fn count_incubating_eggs(&self, user_id: i32) -> Result<u64, DbErr> {
        entity::prelude::Egg::find()
            .join(JoinType::InnerJoin, entity::egg::Relation::Production.def())
            .join(JoinType::InnerJoin, entity::production::Relation::Pair.def())
            .filter(entity::pair::Column::UserId.eq(user_id))
            .filter(entity::pair::Column::Status.eq(PairStatus::Active))
            .filter(entity::production::Column::Status.eq(ProductionStatus::Active))
            .filter(entity::egg::Column::Status.is_in([EggStatus::Pending, EggStatus::Fertile]))
            .count(self.db)
            .await
    }
}
