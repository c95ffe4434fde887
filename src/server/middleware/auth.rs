//! Authentication and ownership guard.

use dioxus_logger::tracing;
use sea_orm::DatabaseConnection;
use tower_sessions::Session;

use crate::server::{
    data::{bird::BirdRepository, user::UserRepository},
    error::{auth::AuthError, AppError},
    middleware::session::AuthSession,
    model::user::User,
};

/// A requirement checked after the user has been resolved from the session.
pub enum Permission {
    /// The user must own the bird with this id. A missing bird is reported as not found.
    BirdOwner(i32),
}

/// Resolves the logged-in user from the session and enforces permissions.
pub struct AuthGuard<'a> {
    db: &'a DatabaseConnection,
    session: &'a Session,
}

impl<'a> AuthGuard<'a> {
    pub fn new(db: &'a DatabaseConnection, session: &'a Session) -> Self {
        Self { db, session }
    }

    /// Requires a logged-in user satisfying every permission.
    ///
    /// # Returns
    /// - `Ok(User)` - The authenticated user
    /// - `Err(AuthError::UserNotInSession)` - Nobody is logged in
    /// - `Err(AuthError::UserNotInDatabase)` - Session refers to a deleted user
    /// - `Err(AppError::NotFound)` - A `BirdOwner` permission names a missing bird
    /// - `Err(AuthError::AccessDenied)` - The user does not own the bird
    pub async fn require(&self, permissions: &[Permission]) -> Result<User, AppError> {
        let auth_session = AuthSession::new(self.session);

        let Some(user_id) = auth_session.get_user_id().await? else {
            return Err(AuthError::UserNotInSession.into());
        };

        let Some(user) = UserRepository::new(self.db).find_by_id(user_id).await? else {
            auth_session.clear().await;
            return Err(AuthError::UserNotInDatabase(user_id).into());
        };

        for permission in permissions {
            match permission {
                Permission::BirdOwner(bird_id) => {
                    let Some(bird) = BirdRepository::new(self.db).find_by_id(*bird_id).await?
                    else {
                        return Err(AppError::NotFound("Bird not found".to_string()));
                    };

                    if bird.user_id != user.id {
                        return Err(AuthError::AccessDenied(
                            user.id,
                            format!(
                                "User attempted to access bird {} owned by user {}",
                                bird_id, bird.user_id
                            ),
                        )
                        .into());
                    }
                }
            }
        }

        Ok(user)
    }

    /// Resolves the logged-in user without requiring one.
    ///
    /// Used by public pages to render the navigation. A session pointing at a user that no
    /// longer exists is cleared and treated as anonymous.
    pub async fn current(&self) -> Result<Option<User>, AppError> {
        let auth_session = AuthSession::new(self.session);

        let Some(user_id) = auth_session.get_user_id().await? else {
            return Ok(None);
        };

        let user = UserRepository::new(self.db).find_by_id(user_id).await?;
        if user.is_none() {
            tracing::debug!("Clearing session for missing user {}", user_id);
            auth_session.clear().await;
        }

        Ok(user)
    }
}
