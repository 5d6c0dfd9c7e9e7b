use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use axum_extra::extract::cookie::CookieJar;

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        finance::{CreateTransactionDto, FinanceSummaryDto, TransactionDto, TransactionListDto},
    },
    server::{
        error::AppError,
        middleware::auth::AuthGuard,
        model::finance::{CreateTransactionParam, Transaction},
        service::finance::FinanceService,
        state::AppState,
    },
};

/// Tag for grouping finance endpoints in OpenAPI documentation
pub static FINANCE_TAG: &str = "finance";

/// List the caller's transactions, newest first.
///
/// # Access Control
/// - Requires a valid access token cookie
///
/// # Returns
/// - `200 OK` - Transactions ordered by date then ID, descending
/// - `401 Unauthorized` - Not authenticated
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/finance",
    tag = FINANCE_TAG,
    responses(
        (status = 200, description = "Transactions of the caller", body = TransactionListDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_transactions(
    State(state): State<AppState>,
    jar: CookieJar,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &jar)
        .require()
        .await?;

    let transactions = FinanceService::new(&state.db).list(user.id).await?;

    Ok((
        StatusCode::OK,
        Json(TransactionListDto {
            data: transactions
                .into_iter()
                .map(Transaction::into_dto)
                .collect(),
        }),
    ))
}

/// Get income, expense and balance totals.
///
/// # Access Control
/// - Requires a valid access token cookie
///
/// # Returns
/// - `200 OK` - Totals over all of the caller's transactions
/// - `401 Unauthorized` - Not authenticated
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/finance/summary",
    tag = FINANCE_TAG,
    responses(
        (status = 200, description = "Ledger totals", body = FinanceSummaryDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_summary(
    State(state): State<AppState>,
    jar: CookieJar,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &jar)
        .require()
        .await?;

    let summary = FinanceService::new(&state.db).summary(user.id).await?;

    Ok((StatusCode::OK, Json(summary.into_dto())))
}

/// Record a transaction.
///
/// # Access Control
/// - Requires a valid access token cookie
///
/// # Returns
/// - `201 Created` - Recorded transaction
/// - `400 Bad Request` - Missing type, category, amount or date, or malformed date
/// - `401 Unauthorized` - Not authenticated
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/finance",
    tag = FINANCE_TAG,
    request_body = CreateTransactionDto,
    responses(
        (status = 201, description = "Transaction recorded", body = TransactionDto),
        (status = 400, description = "Invalid transaction data", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_transaction(
    State(state): State<AppState>,
    jar: CookieJar,
    Json(payload): Json<CreateTransactionDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &jar)
        .require()
        .await?;

    let param = CreateTransactionParam::from_dto(user.id, payload)?;

    let transaction = FinanceService::new(&state.db).create(param).await?;

    Ok((StatusCode::CREATED, Json(transaction.into_dto())))
}

/// Delete one of the caller's transactions.
///
/// # Access Control
/// - Requires a valid access token cookie; the transaction must belong to the caller
///
/// # Returns
/// - `200 OK` - Transaction deleted
/// - `401 Unauthorized` - Not authenticated
/// - `404 Not Found` - Transaction not found
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/api/finance/{id}",
    tag = FINANCE_TAG,
    params(
        ("id" = i32, Path, description = "Transaction ID")
    ),
    responses(
        (status = 200, description = "Transaction deleted", body = MessageDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 404, description = "Transaction not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_transaction(
    State(state): State<AppState>,
    jar: CookieJar,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &jar)
        .require()
        .await?;

    FinanceService::new(&state.db).delete(user.id, id).await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto {
            message: "Transaction deleted".to_string(),
        }),
    ))
}
