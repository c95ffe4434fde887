use super::*;

/// Tests that deleting a toy also removes its associations.
///
/// Expected: Ok(true) with the bird kept and no association rows left
#[tokio::test]
async fn deletes_toy_and_associations() -> Result<(), DbErr> {
    let mut test = TestBuilder::new().with_bird_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, bird, toy) = factory::helpers::create_bird_with_dependents(db).await?;

    let deleted = ToyRepository::new(db).delete(toy.id).await?;

    assert!(deleted);
    assert_eq!(test.count(entity::prelude::Toy).await.unwrap(), 0);
    assert_eq!(test.count(entity::prelude::BirdToy).await.unwrap(), 0);

    let db = test.db.as_ref().unwrap();
    assert!(entity::prelude::Bird::find_by_id(bird.id)
        .one(db)
        .await?
        .is_some());

    Ok(())
}

/// Expected: Ok(false) for an unknown toy
#[tokio::test]
async fn returns_false_for_missing_toy() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_bird_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    assert!(!ToyRepository::new(db).delete(7).await?);

    Ok(())
}
