use entity::sea_orm_active_enums::BirdStatus;
use sea_orm::DatabaseConnection;

use crate::server::{
    data::dashboard::DashboardRepository, error::AppError, model::dashboard::DashboardStats,
};

pub struct DashboardService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> DashboardService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Counts the user's live birds by status, ACTIVE pairs and incubating eggs.
    pub async fn stats(&self, user_id: i32) -> Result<DashboardStats, AppError> {
        let repo = DashboardRepository::new(self.db);

        Ok(DashboardStats {
            total_birds: repo.count_birds(user_id, None).await?,
            available_birds: repo
                .count_birds(user_id, Some(BirdStatus::Available))
                .await?,
            sold_birds: repo.count_birds(user_id, Some(BirdStatus::Sold)).await?,
            deceased_birds: repo.count_birds(user_id, Some(BirdStatus::Dead)).await?,
            active_pairs: repo.count_active_pairs(user_id).await?,
            incubating_eggs: repo.count_incubating_eggs(user_id).await?,
        })
    }
}
