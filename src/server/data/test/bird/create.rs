use super::*;

/// Tests registering a bird.
///
/// Verifies that every provided field is stored and the status starts AVAILABLE.
///
/// Expected: Ok with AVAILABLE bird owned by the user
#[tokio::test]
async fn creates_available_bird() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_aviary_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let sire = factory::create_bird(db, user.id).await?;

    let bird = BirdRepository::new(db)
        .create(CreateBirdParam {
            user_id: user.id,
            ring_number: "NL-2024-001".to_string(),
            species: "Budgerigar".to_string(),
            mutation: "Opaline".to_string(),
            gender: Gender::Female,
            sire_id: Some(sire.id),
            dam_id: None,
            dob: NaiveDate::from_ymd_opt(2024, 3, 1),
            notes: "Hand raised".to_string(),
        })
        .await?;

    assert_eq!(bird.user_id, user.id);
    assert_eq!(bird.ring_number, "NL-2024-001");
    assert_eq!(bird.gender, Gender::Female);
    assert_eq!(bird.status, BirdStatus::Available);
    assert_eq!(bird.sire_id, Some(sire.id));
    assert_eq!(bird.dam_id, None);
    assert_eq!(bird.dob, NaiveDate::from_ymd_opt(2024, 3, 1));
    assert!(bird.deleted_at.is_none());

    Ok(())
}
