use axum::{
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
};
use dioxus_logger::tracing;
use thiserror::Error;

use crate::view;

/// Path unauthenticated visitors are sent to.
pub const LOGIN_PATH: &str = "/accounts/login/";

#[derive(Error, Debug)]
pub enum AuthError {
    /// No user id is stored in the session.
    ///
    /// The visitor is not logged in. Results in a redirect to the login page.
    #[error("User not found in session")]
    UserNotInSession,

    /// The session references a user id that no longer exists.
    ///
    /// Results in a redirect to the login page.
    #[error("User {0} from session not found in database")]
    UserNotInDatabase(i32),

    /// The user is logged in but may not touch the requested resource.
    ///
    /// Results in a 403 Forbidden page.
    ///
    /// # Fields
    /// - Id of the user that was denied
    /// - Description of the denied action for server-side logs
    #[error("Access denied for user {0}: {1}")]
    AccessDenied(i32, String),
}

/// Converts authentication errors into HTTP responses.
///
/// - `UserNotInSession` / `UserNotInDatabase` → redirect to the login page
/// - `AccessDenied` → 403 Forbidden page with a generic message
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        match self {
            Self::UserNotInSession | Self::UserNotInDatabase(_) => {
                tracing::debug!("{}", self);
                Redirect::to(LOGIN_PATH).into_response()
            }
            Self::AccessDenied(..) => {
                tracing::warn!("{}", self);
                view::error::render(
                    StatusCode::FORBIDDEN,
                    "You don't have permission to access this bird.",
                )
            }
        }
    }
}
