use super::*;

/// Tests that listing birds only returns the requesting user's birds.
///
/// Expected: Ok with exactly the owner's birds, in creation order
#[tokio::test]
async fn returns_only_owned_birds() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_bird_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let alice = factory::user::UserFactory::new(db)
        .username("alice")
        .build()
        .await?;
    let bob = factory::create_user(db).await?;

    let first = factory::bird::BirdFactory::new(db, alice.id)
        .name("Robin")
        .build()
        .await?;
    let second = factory::bird::BirdFactory::new(db, alice.id)
        .name("Wren")
        .build()
        .await?;
    factory::create_bird(db, bob.id).await?;

    let birds = BirdRepository::new(db).get_by_user(alice.id).await?;

    let ids: Vec<i32> = birds.iter().map(|bird| bird.id).collect();
    assert_eq!(ids, vec![first.id, second.id]);
    assert!(birds.iter().all(|bird| bird.user_id == alice.id));

    Ok(())
}

/// Tests listing for a user without birds.
///
/// Expected: Ok with empty list
#[tokio::test]
async fn returns_empty_for_user_without_birds() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_bird_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    let birds = BirdRepository::new(db).get_by_user(user.id).await?;

    assert!(birds.is_empty());

    Ok(())
}
