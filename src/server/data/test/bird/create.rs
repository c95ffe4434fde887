use super::*;

/// Tests creating a bird for a user.
///
/// Expected: Ok with the bird persisted and owned by the given user
#[tokio::test]
async fn creates_bird_for_owner() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_bird_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    let repo = BirdRepository::new(db);
    let bird = repo
        .create(CreateBirdParams {
            user_id: user.id,
            name: "Robin".to_string(),
            breed: "Finch".to_string(),
            description: "Sings at dawn".to_string(),
            age: 2,
        })
        .await?;

    assert_eq!(bird.user_id, user.id);
    assert_eq!(bird.name, "Robin");
    assert_eq!(bird.age, 2);

    let stored = entity::prelude::Bird::find_by_id(bird.id).one(db).await?;
    assert!(stored.is_some());

    Ok(())
}

/// Tests that a bird cannot reference a user that does not exist.
///
/// Expected: Err from the foreign key constraint
#[tokio::test]
async fn fails_for_unknown_owner() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_bird_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = BirdRepository::new(db);
    let result = repo
        .create(CreateBirdParams {
            user_id: 999,
            name: "Ghost".to_string(),
            breed: "Unknown".to_string(),
            description: String::new(),
            age: 0,
        })
        .await;

    assert!(result.is_err());

    Ok(())
}
