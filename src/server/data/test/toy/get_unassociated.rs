use super::*;

/// Tests that associated and unassociated toys partition all toys.
///
/// Expected: Ok with disjoint lists whose union is every toy
#[tokio::test]
async fn partitions_all_toys() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_bird_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, bird) = factory::helpers::create_bird_with_owner(db).await?;
    let (_, other_bird) = factory::helpers::create_bird_with_owner(db).await?;
    let ball = factory::create_toy(db).await?;
    let bell = factory::create_toy(db).await?;
    let mirror = factory::create_toy(db).await?;
    factory::associate_toy(db, bird.id, bell.id).await?;
    factory::associate_toy(db, other_bird.id, mirror.id).await?;

    let repo = ToyRepository::new(db);
    let associated: Vec<i32> = repo
        .get_for_bird(bird.id)
        .await?
        .iter()
        .map(|toy| toy.id)
        .collect();
    let available: Vec<i32> = repo
        .get_unassociated(bird.id)
        .await?
        .iter()
        .map(|toy| toy.id)
        .collect();

    assert_eq!(associated, vec![bell.id]);
    assert_eq!(available, vec![ball.id, mirror.id]);

    Ok(())
}

/// Tests a bird without associations.
///
/// Expected: Ok with every toy available
#[tokio::test]
async fn returns_all_toys_when_none_associated() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_bird_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, bird) = factory::helpers::create_bird_with_owner(db).await?;
    factory::create_toy(db).await?;
    factory::create_toy(db).await?;

    let available = ToyRepository::new(db).get_unassociated(bird.id).await?;

    assert_eq!(available.len(), 2);

    Ok(())
}
