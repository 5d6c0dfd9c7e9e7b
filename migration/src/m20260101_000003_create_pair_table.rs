use sea_orm_migration::{prelude::*, schema::*};

use super::{m20260101_000001_create_user_table::User, m20260101_000002_create_bird_table::Bird};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Pair::Table)
                    .if_not_exists()
                    .col(pk_auto(Pair::Id))
                    .col(integer(Pair::UserId))
                    .col(string(Pair::CageName))
                    .col(integer(Pair::SireId))
                    .col(integer(Pair::DamId))
                    .col(date(Pair::PairingDate))
                    .col(timestamp_with_time_zone_null(Pair::EndDate))
                    .col(string_len(Pair::Status, 16).default("ACTIVE"))
                    .col(timestamp_with_time_zone(Pair::CreatedAt).default(Expr::current_timestamp()))
                    .col(timestamp_with_time_zone(Pair::UpdatedAt).default(Expr::current_timestamp()))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_pair_user_id")
                            .from(Pair::Table, Pair::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_pair_sire_id")
                            .from(Pair::Table, Pair::SireId)
                            .to(Bird::Table, Bird::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_pair_dam_id")
                            .from(Pair::Table, Pair::DamId)
                            .to(Bird::Table, Bird::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Pair::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Pair {
    Table,
    Id,
    UserId,
    CageName,
    SireId,
    DamId,
    PairingDate,
    EndDate,
    Status,
    CreatedAt,
    UpdatedAt,
}
