use super::*;

/// Tests replacing a bird's fields.
///
/// Verifies that every mutable field, including status and parent links, is overwritten.
///
/// Expected: Ok with all fields replaced
#[tokio::test]
async fn replaces_all_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_aviary_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let old_sire = factory::create_bird(db, user.id).await?;
    let bird = factory::bird::BirdFactory::new(db, user.id)
        .sire_id(old_sire.id)
        .mutation("Lutino")
        .notes("old")
        .build()
        .await?;

    let updated = BirdRepository::new(db)
        .update(UpdateBirdParam {
            id: bird.id,
            user_id: user.id,
            ring_number: "R-2".to_string(),
            species: "Cockatiel".to_string(),
            mutation: String::new(),
            gender: Gender::Male,
            status: BirdStatus::Sold,
            sire_id: None,
            dam_id: None,
            dob: None,
            notes: String::new(),
        })
        .await?;

    assert_eq!(updated.ring_number, "R-2");
    assert_eq!(updated.species, "Cockatiel");
    assert_eq!(updated.mutation, "");
    assert_eq!(updated.gender, Gender::Male);
    assert_eq!(updated.status, BirdStatus::Sold);
    assert_eq!(updated.sire_id, None);
    assert_eq!(updated.notes, "");
    assert_eq!(updated.created_at, bird.created_at);

    Ok(())
}
