use crate::server::{
    data::user::UserRepository,
    model::user::{CreateUserParam, ProfileChanges},
};
use chrono::{Duration, Utc};
use entity::sea_orm_active_enums::UserRole;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod find_credential;
mod is_taken;
mod update_profile;
