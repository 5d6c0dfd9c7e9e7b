use crate::server::data::dashboard::DashboardRepository;
use entity::sea_orm_active_enums::{BirdStatus, EggStatus, PairStatus};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod count_birds;
mod count_incubating_eggs;
