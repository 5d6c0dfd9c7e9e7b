use sea_orm::DatabaseConnection;

use crate::server::{
    data::transaction::TransactionRepository,
    error::AppError,
    model::finance::{CreateTransactionParam, FinanceSummary, Transaction},
};

pub struct FinanceService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> FinanceService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets the user's ledger, newest first.
    pub async fn list(&self, user_id: i32) -> Result<Vec<Transaction>, AppError> {
        Ok(TransactionRepository::new(self.db)
            .find_by_owner(user_id)
            .await?)
    }

    /// Totals the user's income and expenses.
    ///
    /// Fails with `AppError::InternalErr` if the stored amounts overflow their totals.
    pub async fn summary(&self, user_id: i32) -> Result<FinanceSummary, AppError> {
        let transactions = TransactionRepository::new(self.db)
            .find_by_owner(user_id)
            .await?;

        FinanceSummary::from_transactions(&transactions)
    }

    pub async fn create(&self, param: CreateTransactionParam) -> Result<Transaction, AppError> {
        Ok(TransactionRepository::new(self.db).create(param).await?)
    }

    /// Deletes one of the user's transactions.
    ///
    /// # Returns
    /// - `Ok(())` - Transaction deleted
    /// - `Err(AppError::NotFound)` - No transaction with that ID owned by the user
    pub async fn delete(&self, user_id: i32, transaction_id: i32) -> Result<(), AppError> {
        let deleted = TransactionRepository::new(self.db)
            .delete_owned(user_id, transaction_id)
            .await?;

        if !deleted {
            return Err(AppError::NotFound("Transaction not found".to_string()));
        }

        Ok(())
    }
}
