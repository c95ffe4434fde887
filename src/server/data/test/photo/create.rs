use super::*;

/// Tests recording an uploaded photo for a bird.
///
/// Expected: Ok with the photo listed for the bird and no other
#[tokio::test]
async fn creates_photo_for_bird() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_bird_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, bird) = factory::helpers::create_bird_with_owner(db).await?;
    let (_, other) = factory::helpers::create_bird_with_owner(db).await?;

    let repo = PhotoRepository::new(db);
    let photo = repo
        .create(
            bird.id,
            "https://storage.test/birdcollector/a1b2c3.png".to_string(),
        )
        .await?;

    assert_eq!(photo.bird_id, bird.id);
    assert_eq!(repo.get_for_bird(bird.id).await?, vec![photo]);
    assert!(repo.get_for_bird(other.id).await?.is_empty());

    Ok(())
}
