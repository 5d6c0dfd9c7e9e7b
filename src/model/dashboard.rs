use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, ToSchema)]
pub struct DashboardStatsDto {
    pub total_birds: u64,
    pub available_birds: u64,
    pub sold_birds: u64,
    pub deceased_birds: u64,
    pub active_pairs: u64,
    pub incubating_eggs: u64,
}
