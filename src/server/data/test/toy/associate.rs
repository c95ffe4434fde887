use super::*;

/// Tests associating a toy with a bird.
///
/// Expected: Ok(true) and the toy listed for the bird
#[tokio::test]
async fn associates_toy_with_bird() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_bird_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, bird) = factory::helpers::create_bird_with_owner(db).await?;
    let toy = factory::create_toy(db).await?;

    let repo = ToyRepository::new(db);
    let inserted = repo.associate(bird.id, toy.id).await?;

    assert!(inserted);
    let toys = repo.get_for_bird(bird.id).await?;
    assert_eq!(toys.len(), 1);
    assert_eq!(toys[0].id, toy.id);

    Ok(())
}

/// Tests that associating the same pair twice keeps a single row.
///
/// Expected: Ok(false) on the second call and one association row
#[tokio::test]
async fn is_idempotent() -> Result<(), DbErr> {
    let mut test = TestBuilder::new().with_bird_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, bird) = factory::helpers::create_bird_with_owner(db).await?;
    let toy = factory::create_toy(db).await?;

    let repo = ToyRepository::new(db);
    repo.associate(bird.id, toy.id).await?;
    let inserted_again = repo.associate(bird.id, toy.id).await?;

    assert!(!inserted_again);
    assert_eq!(test.count(entity::prelude::BirdToy).await.unwrap(), 1);

    Ok(())
}

/// Tests that a toy can be shared by several birds.
///
/// Expected: Ok with the toy listed for both birds
#[tokio::test]
async fn shares_toy_between_birds() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_bird_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, first) = factory::helpers::create_bird_with_owner(db).await?;
    let (_, second) = factory::helpers::create_bird_with_owner(db).await?;
    let toy = factory::create_toy(db).await?;

    let repo = ToyRepository::new(db);
    repo.associate(first.id, toy.id).await?;
    repo.associate(second.id, toy.id).await?;

    assert_eq!(repo.get_for_bird(first.id).await?.len(), 1);
    assert_eq!(repo.get_for_bird(second.id).await?.len(), 1);

    Ok(())
}
