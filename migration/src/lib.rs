pub use sea_orm_migration::prelude::*;

mod m20260101_000001_create_user_table;
mod m20260101_000002_create_bird_table;
mod m20260101_000003_create_pair_table;
mod m20260101_000004_create_production_table;
mod m20260101_000005_create_egg_table;
mod m20260101_000006_create_finance_transaction_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260101_000001_create_user_table::Migration),
            Box::new(m20260101_000002_create_bird_table::Migration),
            Box::new(m20260101_000003_create_pair_table::Migration),
            Box::new(m20260101_000004_create_production_table::Migration),
            Box::new(m20260101_000005_create_egg_table::Migration),
            Box::new(m20260101_000006_create_finance_transaction_table::Migration),
        ]
    }
}
