//! Ledger domain models and parameters.

use chrono::{DateTime, NaiveDate, Utc};
use entity::sea_orm_active_enums::TransactionType;
use rust_decimal::Decimal;

use crate::{
    model::finance::{CreateTransactionDto, FinanceSummaryDto, TransactionDto},
    server::{
        error::{internal::InternalError, AppError},
        util::parse::{parse_date, require_text},
    },
};

/// Largest magnitude a ledger amount may have, matching the `decimal(15,2)` column.
pub const MAX_AMOUNT: Decimal = Decimal::from_parts(2_764_472_319, 232_830, 0, false, 2);

/// Decimal places a ledger amount may carry.
pub const AMOUNT_SCALE: u32 = 2;

#[derive(Debug, Clone, PartialEq)]
pub struct Transaction {
    pub id: i32,
    pub user_id: i32,
    pub kind: TransactionType,
    pub category: String,
    pub amount: Decimal,
    pub date: NaiveDate,
    pub description: String,
    pub created_at: DateTime<Utc>,
}

impl Transaction {
    pub fn from_entity(entity: entity::transaction::Model) -> Self {
        Self {
            id: entity.id,
            user_id: entity.user_id,
            kind: entity.kind,
            category: entity.category,
            amount: entity.amount,
            date: entity.date,
            description: entity.description,
            created_at: entity.created_at,
        }
    }

    pub fn into_dto(self) -> TransactionDto {
        TransactionDto {
            id: self.id,
            kind: self.kind,
            category: self.category,
            amount: self.amount,
            date: self.date,
            description: self.description,
            created_at: self.created_at,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateTransactionParam {
    pub user_id: i32,
    pub kind: TransactionType,
    pub category: String,
    pub amount: Decimal,
    pub date: NaiveDate,
    pub description: String,
}

impl CreateTransactionParam {
    /// Validates a ledger entry; type, category, amount and date are required.
    pub fn from_dto(user_id: i32, dto: CreateTransactionDto) -> Result<Self, AppError> {
        let kind = dto
            .kind
            .ok_or_else(|| AppError::BadRequest("type is required".to_string()))?;
        let category = require_text(dto.category, "category")?;
        let amount = dto
            .amount
            .ok_or_else(|| AppError::BadRequest("amount is required".to_string()))?;
        validate_amount(amount)?;
        let date = require_text(dto.date, "date")?;

        Ok(Self {
            user_id,
            kind,
            category,
            amount,
            date: parse_date(&date, "date")?,
            description: dto.description.unwrap_or_default(),
        })
    }
}

fn validate_amount(amount: Decimal) -> Result<(), AppError> {
    if amount.abs() > MAX_AMOUNT {
        return Err(AppError::BadRequest(format!(
            "amount must be between -{} and {}",
            MAX_AMOUNT, MAX_AMOUNT
        )));
    }

    if amount.normalize().scale() > AMOUNT_SCALE {
        return Err(AppError::BadRequest(format!(
            "amount must have at most {} decimal places",
            AMOUNT_SCALE
        )));
    }

    Ok(())
}

/// Income and expense totals of a ledger.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FinanceSummary {
    pub income: Decimal,
    pub expense: Decimal,
}

impl FinanceSummary {
    /// Folds transactions into totals.
    ///
    /// # Returns
    /// - `Ok(FinanceSummary)` - Totals whose balance is representable
    /// - `Err(AppError::InternalErr)` - A total or the balance overflowed `Decimal`
    pub fn from_transactions<'a>(
        transactions: impl IntoIterator<Item = &'a Transaction>,
    ) -> Result<Self, AppError> {
        let summary = transactions
            .into_iter()
            .try_fold(Self::default(), |mut summary, t| {
                let total = match t.kind {
                    TransactionType::Income => &mut summary.income,
                    TransactionType::Expense => &mut summary.expense,
                };
                *total = total.checked_add(t.amount)?;
                Some(summary)
            })
            .ok_or(InternalError::LedgerOverflow)?;

        summary
            .income
            .checked_sub(summary.expense)
            .ok_or(InternalError::LedgerOverflow)?;

        Ok(summary)
    }

    pub fn balance(&self) -> Decimal {
        self.income - self.expense
    }

    pub fn into_dto(self) -> FinanceSummaryDto {
        FinanceSummaryDto {
            income: self.income,
            expense: self.expense,
            balance: self.balance(),
        }
    }
}
