use crate::model::dashboard::DashboardStatsDto;

/// Roll-up of a breeder's collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DashboardStats {
    pub total_birds: u64,
    pub available_birds: u64,
    pub sold_birds: u64,
    pub deceased_birds: u64,
    pub active_pairs: u64,
    /// PENDING or FERTILE eggs in ACTIVE productions of ACTIVE pairs.
    pub incubating_eggs: u64,
}

impl DashboardStats {
    pub fn into_dto(self) -> DashboardStatsDto {
        DashboardStatsDto {
            total_birds: self.total_birds,
            available_birds: self.available_birds,
            sold_birds: self.sold_birds,
            deceased_birds: self.deceased_birds,
            active_pairs: self.active_pairs,
            incubating_eggs: self.incubating_eggs,
        }
    }
}
