use chrono::{DateTime, NaiveDate, Utc};
use entity::sea_orm_active_enums::TransactionType;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, Clone, ToSchema)]
pub struct TransactionDto {
    pub id: i32,
    #[serde(rename = "type")]
    #[schema(value_type = String, example = "INCOME")]
    pub kind: TransactionType,
    pub category: String,
    #[serde(with = "rust_decimal::serde::float")]
    #[schema(value_type = f64)]
    pub amount: Decimal,
    pub date: NaiveDate,
    pub description: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct TransactionListDto {
    pub data: Vec<TransactionDto>,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct CreateTransactionDto {
    #[serde(rename = "type", default)]
    #[schema(value_type = Option<String>, example = "EXPENSE")]
    pub kind: Option<TransactionType>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default, with = "rust_decimal::serde::float_option")]
    #[schema(value_type = Option<f64>)]
    pub amount: Option<Decimal>,
    /// Transaction date as `YYYY-MM-DD`.
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct FinanceSummaryDto {
    #[serde(with = "rust_decimal::serde::float")]
    #[schema(value_type = f64)]
    pub income: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    #[schema(value_type = f64)]
    pub expense: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    #[schema(value_type = f64)]
    pub balance: Decimal,
}
