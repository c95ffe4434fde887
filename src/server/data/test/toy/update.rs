use super::*;

/// Tests creating then updating a toy.
///
/// Expected: Ok(Some) with the new color and description
#[tokio::test]
async fn updates_toy() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_bird_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ToyRepository::new(db);
    let toy = repo
        .create(ToyParams {
            color: "Red".to_string(),
            description: "Ball".to_string(),
        })
        .await?;

    let updated = repo
        .update(
            toy.id,
            ToyParams {
                color: "Blue".to_string(),
                description: "Bell".to_string(),
            },
        )
        .await?
        .unwrap();

    assert_eq!(updated.id, toy.id);
    assert_eq!(updated.color, "Blue");
    assert_eq!(updated.description, "Bell");
    assert_eq!(repo.get_all().await?.len(), 1);

    Ok(())
}

/// Tests updating a toy that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_toy() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_bird_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let result = ToyRepository::new(db)
        .update(
            7,
            ToyParams {
                color: "Blue".to_string(),
                description: String::new(),
            },
        )
        .await?;

    assert!(result.is_none());

    Ok(())
}
