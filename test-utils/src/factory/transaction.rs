//! Finance transaction factory.

use chrono::{NaiveDate, Utc};
use entity::sea_orm_active_enums::TransactionType;
use rust_decimal::Decimal;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating ledger entries.
pub struct TransactionFactory<'a> {
    db: &'a DatabaseConnection,
    user_id: i32,
    kind: TransactionType,
    category: String,
    amount: Decimal,
    date: NaiveDate,
    description: String,
}

impl<'a> TransactionFactory<'a> {
    /// Defaults to a 10.00 EXPENSE in category "Feed" dated today.
    pub fn new(db: &'a DatabaseConnection, user_id: i32) -> Self {
        Self {
            db,
            user_id,
            kind: TransactionType::Expense,
            category: "Feed".to_string(),
            amount: Decimal::new(1000, 2),
            date: Utc::now().date_naive(),
            description: String::new(),
        }
    }

    pub fn kind(mut self, kind: TransactionType) -> Self {
        self.kind = kind;
        self
    }

    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    pub fn amount(mut self, amount: Decimal) -> Self {
        self.amount = amount;
        self
    }

    pub fn date(mut self, date: NaiveDate) -> Self {
        self.date = date;
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub async fn build(self) -> Result<entity::transaction::Model, DbErr> {
        let now = Utc::now();
        entity::transaction::ActiveModel {
            user_id: ActiveValue::Set(self.user_id),
            kind: ActiveValue::Set(self.kind),
            category: ActiveValue::Set(self.category),
            amount: ActiveValue::Set(self.amount),
            date: ActiveValue::Set(self.date),
            description: ActiveValue::Set(self.description),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a default expense for `user_id`.
pub async fn create_transaction(
    db: &DatabaseConnection,
    user_id: i32,
) -> Result<entity::transaction::Model, DbErr> {
    TransactionFactory::new(db, user_id).build().await
}
