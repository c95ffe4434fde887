use super::*;

/// Tests that an empty session is rejected.
///
/// Expected: Err(AuthError::UserNotInSession)
#[tokio::test]
async fn rejects_anonymous_session() -> Result<(), AppError> {
    let mut test = TestBuilder::new().with_bird_tables().build().await.unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let result = AuthGuard::new(db, session).require(&[]).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::UserNotInSession))
    ));

    Ok(())
}

/// Tests that a session for a deleted user is rejected and cleared.
///
/// Expected: Err(AuthError::UserNotInDatabase) and no user id left in the session
#[tokio::test]
async fn rejects_and_clears_missing_user() -> Result<(), AppError> {
    let mut test = TestBuilder::new().with_bird_tables().build().await.unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let auth_session = AuthSession::new(session);
    auth_session.set_user_id(404).await?;

    let result = AuthGuard::new(db, session).require(&[]).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::UserNotInDatabase(404)))
    ));
    assert_eq!(auth_session.get_user_id().await?, None);

    Ok(())
}

/// Tests that a logged-in user passes without permissions.
///
/// Expected: Ok(User) matching the session
#[tokio::test]
async fn returns_logged_in_user() -> Result<(), AppError> {
    let mut test = TestBuilder::new().with_bird_tables().build().await.unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let user = factory::user::UserFactory::new(db)
        .username("alice")
        .build()
        .await?;
    AuthSession::new(session).set_user_id(user.id).await?;

    let returned = AuthGuard::new(db, session).require(&[]).await?;

    assert_eq!(returned.id, user.id);
    assert_eq!(returned.username, "alice");

    Ok(())
}

/// Tests that the owner of a bird passes the ownership check.
///
/// Expected: Ok(User)
#[tokio::test]
async fn grants_access_to_bird_owner() -> Result<(), AppError> {
    let mut test = TestBuilder::new().with_bird_tables().build().await.unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let (owner, bird) = factory::helpers::create_bird_with_owner(db).await?;
    AuthSession::new(session).set_user_id(owner.id).await?;

    let result = AuthGuard::new(db, session)
        .require(&[Permission::BirdOwner(bird.id)])
        .await;

    assert!(result.is_ok());

    Ok(())
}

/// Tests that another user's bird is off limits.
///
/// Expected: Err(AuthError::AccessDenied)
#[tokio::test]
async fn denies_access_to_other_users_bird() -> Result<(), AppError> {
    let mut test = TestBuilder::new().with_bird_tables().build().await.unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let (_, bird) = factory::helpers::create_bird_with_owner(db).await?;
    let intruder = factory::create_user(db).await?;
    AuthSession::new(session).set_user_id(intruder.id).await?;

    let result = AuthGuard::new(db, session)
        .require(&[Permission::BirdOwner(bird.id)])
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::AccessDenied(id, _))) if id == intruder.id
    ));

    Ok(())
}

/// Tests that a missing bird is reported as not found rather than forbidden.
///
/// Expected: Err(AppError::NotFound)
#[tokio::test]
async fn reports_missing_bird_as_not_found() -> Result<(), AppError> {
    let mut test = TestBuilder::new().with_bird_tables().build().await.unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let user = factory::create_user(db).await?;
    AuthSession::new(session).set_user_id(user.id).await?;

    let result = AuthGuard::new(db, session)
        .require(&[Permission::BirdOwner(9999)])
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}
