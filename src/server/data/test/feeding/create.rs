use super::*;

/// Tests recording a feeding for a bird.
///
/// Expected: Ok with the date and meal stored as submitted
#[tokio::test]
async fn creates_feeding() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_bird_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, bird) = factory::helpers::create_bird_with_owner(db).await?;
    let date = NaiveDate::from_ymd_opt(2026, 3, 14).unwrap();

    let repo = FeedingRepository::new(db);
    let feeding = repo
        .create(CreateFeedingParams {
            bird_id: bird.id,
            date,
            meal: Meal::Snack,
        })
        .await?;

    assert_eq!(feeding.bird_id, bird.id);
    assert_eq!(feeding.date, date);
    assert_eq!(feeding.meal, Meal::Snack);

    let stored = repo.get_for_bird(bird.id).await?;
    assert_eq!(stored, vec![feeding]);

    Ok(())
}
