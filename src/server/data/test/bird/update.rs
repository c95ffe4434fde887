use super::*;

/// Tests updating a bird's mutable fields.
///
/// Verifies that breed, description and age change while the name is kept.
///
/// Expected: Ok(Some) with updated fields and original name
#[tokio::test]
async fn updates_fields_but_not_name() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_bird_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let bird = factory::bird::BirdFactory::new(db, user.id)
        .name("Robin")
        .breed("Finch")
        .age(1)
        .build()
        .await?;

    let updated = BirdRepository::new(db)
        .update(
            bird.id,
            UpdateBirdParams {
                breed: "Canary".to_string(),
                description: "Yellow".to_string(),
                age: 3,
            },
        )
        .await?
        .unwrap();

    assert_eq!(updated.name, "Robin");
    assert_eq!(updated.breed, "Canary");
    assert_eq!(updated.description, "Yellow");
    assert_eq!(updated.age, 3);

    let stored = entity::prelude::Bird::find_by_id(bird.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(stored.name, "Robin");
    assert_eq!(stored.breed, "Canary");

    Ok(())
}

/// Tests updating a bird that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_bird() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_bird_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let result = BirdRepository::new(db)
        .update(
            42,
            UpdateBirdParams {
                breed: "Canary".to_string(),
                description: String::new(),
                age: 1,
            },
        )
        .await?;

    assert!(result.is_none());

    Ok(())
}
