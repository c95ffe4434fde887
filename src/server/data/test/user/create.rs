use super::*;

/// Tests creating a user.
///
/// Expected: Ok with the user retrievable by id
#[tokio::test]
async fn creates_user() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_bird_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let user = repo
        .create("alice".to_string(), "hash".to_string())
        .await?;

    let found = repo.find_by_id(user.id).await?;

    assert_eq!(found, Some(user));
    assert!(repo.username_exists("alice").await?);
    assert!(!repo.username_exists("bob").await?);

    Ok(())
}

/// Tests that usernames are unique.
///
/// Expected: Err on the second insert with the same username
#[tokio::test]
async fn rejects_duplicate_username() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_bird_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::UserFactory::new(db)
        .username("alice")
        .build()
        .await?;

    let result = UserRepository::new(db)
        .create("alice".to_string(), "hash".to_string())
        .await;

    assert!(result.is_err());

    Ok(())
}
