use super::*;

/// Tests ledger ordering.
///
/// Verifies newest dates come first and same-day entries are ordered by newest ID.
///
/// Expected: [newer date, same-day later id, same-day earlier id]
#[tokio::test]
async fn orders_by_date_then_id_descending() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_aviary_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let other = factory::create_user(db).await?;
    let day = NaiveDate::from_ymd_opt(2024, 1, 10).unwrap();

    let first = factory::transaction::TransactionFactory::new(db, user.id)
        .date(day)
        .build()
        .await?;
    let second = factory::transaction::TransactionFactory::new(db, user.id)
        .date(day)
        .build()
        .await?;
    let newest = factory::transaction::TransactionFactory::new(db, user.id)
        .date(NaiveDate::from_ymd_opt(2024, 3, 1).unwrap())
        .build()
        .await?;
    factory::create_transaction(db, other.id).await?;

    let ledger = TransactionRepository::new(db).find_by_owner(user.id).await?;

    let ids: Vec<i32> = ledger.iter().map(|t| t.id).collect();
    assert_eq!(ids, vec![newest.id, second.id, first.id]);

    Ok(())
}
