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
                    .table(FinanceTransaction::Table)
                    .if_not_exists()
                    .col(pk_auto(FinanceTransaction::Id))
                    .col(integer(FinanceTransaction::UserId))
                    .col(string_len(FinanceTransaction::Type, 16))
                    .col(string(FinanceTransaction::Category))
                    .col(decimal_len(FinanceTransaction::Amount, 15, 2))
                    .col(date(FinanceTransaction::Date))
                    .col(text(FinanceTransaction::Description).default(""))
                    .col(
                        timestamp_with_time_zone(FinanceTransaction::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        timestamp_with_time_zone(FinanceTransaction::UpdatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_finance_transaction_user_id")
                            .from(FinanceTransaction::Table, FinanceTransaction::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(FinanceTransaction::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum FinanceTransaction {
    Table,
    Id,
    UserId,
    Type,
    Category,
    Amount,
    Date,
    Description,
    CreatedAt,
    UpdatedAt,
}
