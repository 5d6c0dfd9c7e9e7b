use crate::server::data::production::ProductionRepository;
use chrono::{NaiveDate, Utc};
use entity::sea_orm_active_enums::ProductionStatus;
use sea_orm::{DbErr, EntityTrait};
use test_utils::{builder::TestBuilder, factory};

mod complete_active_by_pair;
mod create;
mod find_active_by_pair;
