use super::*;

/// Tests deleting one's own transaction.
///
/// Expected: Ok(true) and the ledger is empty afterwards
#[tokio::test]
async fn deletes_own_transaction() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_aviary_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let transaction = factory::create_transaction(db, user.id).await?;

    let repo = TransactionRepository::new(db);

    assert!(repo.delete_owned(user.id, transaction.id).await?);
    assert!(repo.find_by_owner(user.id).await?.is_empty());

    Ok(())
}

/// Tests deleting another user's transaction.
///
/// Expected: Ok(false) and the transaction still exists
#[tokio::test]
async fn refuses_foreign_transaction() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_aviary_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_user(db).await?;
    let stranger = factory::create_user(db).await?;
    let transaction = factory::create_transaction(db, owner.id).await?;

    let repo = TransactionRepository::new(db);

    assert!(!repo.delete_owned(stranger.id, transaction.id).await?);
    assert_eq!(repo.find_by_owner(owner.id).await?.len(), 1);

    Ok(())
}
