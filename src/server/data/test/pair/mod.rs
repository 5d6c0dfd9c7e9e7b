use crate::server::{data::pair::PairRepository, model::pair::CreatePairParam};
use chrono::{NaiveDate, Utc};
use entity::sea_orm_active_enums::PairStatus;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod close;
mod create;
mod find;
