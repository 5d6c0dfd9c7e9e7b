use super::*;

/// Tests recording a ledger entry.
///
/// Expected: Ok with the decimal amount stored exactly
#[tokio::test]
async fn creates_transaction() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_aviary_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    let transaction = TransactionRepository::new(db)
        .create(CreateTransactionParam {
            user_id: user.id,
            kind: TransactionType::Income,
            category: "Sales".to_string(),
            amount: Decimal::new(12550, 2),
            date: NaiveDate::from_ymd_opt(2024, 2, 1).unwrap(),
            description: "Pair of lutinos".to_string(),
        })
        .await?;

    assert_eq!(transaction.user_id, user.id);
    assert_eq!(transaction.kind, TransactionType::Income);
    assert_eq!(transaction.amount, Decimal::new(12550, 2));
    assert_eq!(transaction.date, NaiveDate::from_ymd_opt(2024, 2, 1).unwrap());

    Ok(())
}
