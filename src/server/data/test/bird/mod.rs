use crate::server::{
    data::bird::BirdRepository,
    model::bird::{CreateBirdParam, UpdateBirdParam},
};
use chrono::{NaiveDate, Utc};
use entity::sea_orm_active_enums::{BirdStatus, Gender};
use sea_orm::{DbErr, EntityTrait};
use test_utils::{builder::TestBuilder, factory};

mod claim_for_pairing;
mod create;
mod find;
mod release;
mod soft_delete;
mod update;
