use crate::server::{data::egg::EggRepository, model::production::CreateEggParam};
use chrono::{NaiveDate, Utc};
use entity::sea_orm_active_enums::EggStatus;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod update_status;
