use super::*;

/// Tests removing an association.
///
/// Expected: Ok(true) and the toy no longer listed for the bird, but still existing
#[tokio::test]
async fn removes_association() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_bird_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, bird) = factory::helpers::create_bird_with_owner(db).await?;
    let toy = factory::create_toy(db).await?;
    factory::associate_toy(db, bird.id, toy.id).await?;

    let repo = ToyRepository::new(db);
    let removed = repo.remove(bird.id, toy.id).await?;

    assert!(removed);
    assert!(repo.get_for_bird(bird.id).await?.is_empty());
    assert!(entity::prelude::Toy::find_by_id(toy.id)
        .one(db)
        .await?
        .is_some());

    Ok(())
}

/// Tests removing a pair that was never associated.
///
/// Expected: Ok(false) with nothing changed
#[tokio::test]
async fn ignores_missing_association() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_bird_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, bird) = factory::helpers::create_bird_with_owner(db).await?;
    let toy = factory::create_toy(db).await?;

    let removed = ToyRepository::new(db).remove(bird.id, toy.id).await?;

    assert!(!removed);

    Ok(())
}
