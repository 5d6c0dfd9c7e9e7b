use sea_orm_migration::{prelude::*, schema::*};

use super::m20260101_000001_create_user_table::User;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Bird::Table)
                    .if_not_exists()
                    .col(pk_auto(Bird::Id))
                    .col(integer(Bird::UserId))
                    .col(string(Bird::RingNumber))
                    .col(string(Bird::Species))
                    .col(string(Bird::Mutation).default(""))
                    .col(string_len(Bird::Gender, 16).default("UNKNOWN"))
                    .col(string_len(Bird::Status, 16).default("AVAILABLE"))
                    .col(integer_null(Bird::SireId))
                    .col(integer_null(Bird::DamId))
                    .col(date_null(Bird::Dob))
                    .col(text(Bird::Notes).default(""))
                    .col(timestamp_with_time_zone(Bird::CreatedAt).default(Expr::current_timestamp()))
                    .col(timestamp_with_time_zone(Bird::UpdatedAt).default(Expr::current_timestamp()))
                    .col(timestamp_with_time_zone_null(Bird::DeletedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_bird_user_id")
                            .from(Bird::Table, Bird::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_bird_sire_id")
                            .from(Bird::Table, Bird::SireId)
                            .to(Bird::Table, Bird::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_bird_dam_id")
                            .from(Bird::Table, Bird::DamId)
                            .to(Bird::Table, Bird::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_bird_user_id")
                    .table(Bird::Table)
                    .col(Bird::UserId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Bird::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Bird {
    Table,
    Id,
    UserId,
    RingNumber,
    Species,
    Mutation,
    Gender,
    Status,
    SireId,
    DamId,
    Dob,
    Notes,
    CreatedAt,
    UpdatedAt,
    DeletedAt,
}
