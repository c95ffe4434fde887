use super::*;

/// Tests that feedings come back newest first and only for the given bird.
///
/// Expected: Ok with the bird's feedings ordered by date descending
#[tokio::test]
async fn orders_newest_first() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_bird_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, bird) = factory::helpers::create_bird_with_owner(db).await?;
    let (_, other) = factory::helpers::create_bird_with_owner(db).await?;

    let older = NaiveDate::from_ymd_opt(2026, 1, 1).unwrap();
    let newer = NaiveDate::from_ymd_opt(2026, 2, 1).unwrap();

    factory::feeding::FeedingFactory::new(db, bird.id)
        .date(older)
        .meal(Meal::Breakfast)
        .build()
        .await?;
    factory::feeding::FeedingFactory::new(db, bird.id)
        .date(newer)
        .meal(Meal::Dinner)
        .build()
        .await?;
    factory::create_feeding(db, other.id).await?;

    let feedings = FeedingRepository::new(db).get_for_bird(bird.id).await?;

    let dates: Vec<NaiveDate> = feedings.iter().map(|feeding| feeding.date).collect();
    assert_eq!(dates, vec![newer, older]);
    assert_eq!(feedings[0].meal, Meal::Dinner);

    Ok(())
}
