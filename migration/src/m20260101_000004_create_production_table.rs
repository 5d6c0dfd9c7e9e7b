use sea_orm_migration::{prelude::*, schema::*};

use super::m20260101_000003_create_pair_table::Pair;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Production::Table)
                    .if_not_exists()
                    .col(pk_auto(Production::Id))
                    .col(integer(Production::PairId))
                    .col(date(Production::StartDate))
                    .col(timestamp_with_time_zone_null(Production::EndDate))
                    .col(string_len(Production::Status, 16).default("ACTIVE"))
                    .col(timestamp_with_time_zone(Production::CreatedAt).default(Expr::current_timestamp()))
                    .col(timestamp_with_time_zone(Production::UpdatedAt).default(Expr::current_timestamp()))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_production_pair_id")
                            .from(Production::Table, Production::PairId)
                            .to(Pair::Table, Pair::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Production::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Production {
    Table,
    Id,
    PairId,
    StartDate,
    EndDate,
    Status,
    CreatedAt,
    UpdatedAt,
}
