use sea_orm_migration::{prelude::*, schema::*};

use super::m20260101_000004_create_production_table::Production;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Egg::Table)
                    .if_not_exists()
                    .col(pk_auto(Egg::Id))
                    .col(integer(Egg::ProductionId))
                    .col(integer(Egg::EggOrder))
                    .col(date(Egg::LaidDate))
                    .col(date(Egg::EstHatchDate))
                    .col(timestamp_with_time_zone_null(Egg::HatchDate))
                    .col(string_len(Egg::Status, 16).default("PENDING"))
                    .col(timestamp_with_time_zone(Egg::CreatedAt).default(Expr::current_timestamp()))
                    .col(timestamp_with_time_zone(Egg::UpdatedAt).default(Expr::current_timestamp()))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_egg_production_id")
                            .from(Egg::Table, Egg::ProductionId)
                            .to(Production::Table, Production::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Egg::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Egg {
    Table,
    Id,
    ProductionId,
    EggOrder,
    LaidDate,
    EstHatchDate,
    HatchDate,
    Status,
    CreatedAt,
    UpdatedAt,
}
