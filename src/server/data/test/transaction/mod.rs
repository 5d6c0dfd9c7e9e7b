use crate::server::{data::transaction::TransactionRepository, model::finance::CreateTransactionParam};
use chrono::NaiveDate;
use entity::sea_orm_active_enums::TransactionType;
use rust_decimal::Decimal;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete_owned;
mod find_by_owner;
