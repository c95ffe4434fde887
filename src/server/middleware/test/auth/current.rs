use super::*;

/// Expected: Ok(None) for an anonymous session
#[tokio::test]
async fn returns_none_when_anonymous() -> Result<(), AppError> {
    let mut test = TestBuilder::new().with_bird_tables().build().await.unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let user = AuthGuard::new(db, session).current().await?;

    assert!(user.is_none());

    Ok(())
}

/// Expected: Ok(Some(User)) for a logged-in session
#[tokio::test]
async fn returns_logged_in_user() -> Result<(), AppError> {
    let mut test = TestBuilder::new().with_bird_tables().build().await.unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let created = factory::create_user(db).await?;
    AuthSession::new(session).set_user_id(created.id).await?;

    let user = AuthGuard::new(db, session).current().await?;

    assert_eq!(user.map(|user| user.id), Some(created.id));

    Ok(())
}

/// Tests that a stale user id is dropped from the session.
///
/// Expected: Ok(None) and the session no longer holds a user id
#[tokio::test]
async fn clears_stale_user() -> Result<(), AppError> {
    let mut test = TestBuilder::new().with_bird_tables().build().await.unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let auth_session = AuthSession::new(session);
    auth_session.set_user_id(77).await?;

    let user = AuthGuard::new(db, session).current().await?;

    assert!(user.is_none());
    assert_eq!(auth_session.get_user_id().await?, None);

    Ok(())
}
