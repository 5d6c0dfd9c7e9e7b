use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QueryOrder,
};

use crate::server::model::finance::{CreateTransactionParam, Transaction};

/// Repository over the finance ledger.
pub struct TransactionRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> TransactionRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(&self, param: CreateTransactionParam) -> Result<Transaction, DbErr> {
        let now = Utc::now();

        let entity = entity::transaction::ActiveModel {
            user_id: ActiveValue::Set(param.user_id),
            kind: ActiveValue::Set(param.kind),
            category: ActiveValue::Set(param.category),
            amount: ActiveValue::Set(param.amount),
            date: ActiveValue::Set(param.date),
            description: ActiveValue::Set(param.description),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Transaction::from_entity(entity))
    }

    /// Gets a user's transactions, newest date first, ties broken by newest ID.
    pub async fn find_by_owner(&self, user_id: i32) -> Result<Vec<Transaction>, DbErr> {
        let entities = entity::prelude::Transaction::find()
            .filter(entity::transaction::Column::UserId.eq(user_id))
            .order_by_desc(entity::transaction::Column::Date)
            .order_by_desc(entity::transaction::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Transaction::from_entity).collect())
    }

    /// Deletes a transaction only if it belongs to the user.
    ///
    /// # Returns
    /// - `Ok(true)` - Transaction deleted
    /// - `Ok(false)` - No such transaction for this user
    pub async fn delete_owned(&self, user_id: i32, transaction_id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Transaction::delete_many()
            .filter(entity::transaction::Column::Id.eq(transaction_id))
            .filter(entity::transaction::Column::UserId.eq(user_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
