use super::*;

/// Tests looking up login credentials by username.
///
/// Expected: Ok(Some) with the stored hash
#[tokio::test]
async fn returns_user_and_hash() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_bird_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::user::UserFactory::new(db)
        .username("alice")
        .password_hash("stored-hash")
        .build()
        .await?;

    let (user, hash) = UserRepository::new(db)
        .find_with_password_hash("alice")
        .await?
        .unwrap();

    assert_eq!(user.id, created.id);
    assert_eq!(hash, "stored-hash");

    Ok(())
}

/// Expected: Ok(None) for an unknown username
#[tokio::test]
async fn returns_none_for_unknown_username() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_bird_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let result = UserRepository::new(db)
        .find_with_password_hash("nobody")
        .await?;

    assert!(result.is_none());

    Ok(())
}
