//! SeaORM entity definitions for the aviary schema.

pub mod prelude;

pub mod bird;
pub mod egg;
pub mod pair;
pub mod production;
pub mod sea_orm_active_enums;
pub mod transaction;
pub mod user;
