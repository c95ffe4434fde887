use super::*;

/// Tests that deleting a bird removes its feedings, photos and toy associations.
///
/// The toy itself must survive since other birds may still use it.
///
/// Expected: Ok(true) with no dependent rows left
#[tokio::test]
async fn deletes_bird_and_dependents() -> Result<(), DbErr> {
    let mut test = TestBuilder::new().with_bird_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, bird, toy) = factory::helpers::create_bird_with_dependents(db).await?;

    let deleted = BirdRepository::new(db).delete(bird.id).await?;

    assert!(deleted);
    assert_eq!(test.count(entity::prelude::Bird).await.unwrap(), 0);
    assert_eq!(test.count(entity::prelude::Feeding).await.unwrap(), 0);
    assert_eq!(test.count(entity::prelude::Photo).await.unwrap(), 0);
    assert_eq!(test.count(entity::prelude::BirdToy).await.unwrap(), 0);

    let db = test.db.as_ref().unwrap();
    let stored_toy = entity::prelude::Toy::find_by_id(toy.id).one(db).await?;
    assert!(stored_toy.is_some());

    Ok(())
}

/// Tests that deleting one bird leaves another bird's data alone.
///
/// Expected: Ok(true) with the other bird's feeding, photo and association intact
#[tokio::test]
async fn leaves_other_birds_untouched() -> Result<(), DbErr> {
    let mut test = TestBuilder::new().with_bird_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, doomed, _) = factory::helpers::create_bird_with_dependents(db).await?;
    let (_, survivor, _) = factory::helpers::create_bird_with_dependents(db).await?;

    BirdRepository::new(db).delete(doomed.id).await?;

    assert_eq!(test.count(entity::prelude::Bird).await.unwrap(), 1);
    assert_eq!(test.count(entity::prelude::Feeding).await.unwrap(), 1);
    assert_eq!(test.count(entity::prelude::Photo).await.unwrap(), 1);
    assert_eq!(test.count(entity::prelude::BirdToy).await.unwrap(), 1);

    let db = test.db.as_ref().unwrap();
    let stored = entity::prelude::Bird::find_by_id(survivor.id).one(db).await?;
    assert!(stored.is_some());

    Ok(())
}

/// Tests deleting a bird that does not exist.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_for_missing_bird() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_bird_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let deleted = BirdRepository::new(db).delete(42).await?;

    assert!(!deleted);

    Ok(())
}
