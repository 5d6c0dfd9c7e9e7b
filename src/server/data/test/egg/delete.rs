use super::*;

/// Tests deleting an egg from the middle of a clutch.
///
/// Expected: remaining eggs keep ordinals 1 and 3
#[tokio::test]
async fn deleting_does_not_renumber() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_aviary_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let (_, _, _, production) = factory::helpers::create_active_pair(db, user.id).await?;
    factory::create_egg(db, production.id, 1).await?;
    let middle = factory::create_egg(db, production.id, 2).await?;
    factory::create_egg(db, production.id, 3).await?;

    let repo = EggRepository::new(db);

    assert!(repo.delete(middle.id).await?);

    let orders: Vec<i32> = repo
        .find_by_production(production.id)
        .await?
        .iter()
        .map(|e| e.egg_order)
        .collect();
    assert_eq!(orders, vec![1, 3]);

    Ok(())
}

/// Tests deleting a missing egg.
///
/// Expected: Ok(false)
#[tokio::test]
async fn reports_missing_egg() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_aviary_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    assert!(!EggRepository::new(db).delete(42).await?);

    Ok(())
}
