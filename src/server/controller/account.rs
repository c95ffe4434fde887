use axum::{
    extract::State,
    response::{IntoResponse, Redirect, Response},
    Form,
};
use dioxus_logger::tracing;
use tower_sessions::Session;

use crate::{
    model::auth::{LoginDto, SignupDto},
    server::{
        error::AppError,
        middleware::session::AuthSession,
        model::user::{LoginParams, SignupParams},
        service::auth::AuthService,
        state::AppState,
    },
    view,
};

const SIGNUP_FAILED: &str = "Invalid sign up - try again";
const LOGIN_FAILED: &str = "Please enter a correct username and password.";

/// Where users land after signing up or logging in.
const AFTER_LOGIN_PATH: &str = "/birds/";

pub async fn signup_page() -> impl IntoResponse {
    view::account::signup("", None)
}

/// Registers an account and logs it in.
///
/// Any failure, from a malformed username to a taken one, re-renders the form with one
/// generic message.
pub async fn signup(
    State(state): State<AppState>,
    session: Session,
    Form(payload): Form<SignupDto>,
) -> Result<Response, AppError> {
    let username = payload.username.clone();

    let params = match SignupParams::from_dto(payload) {
        Ok(params) => params,
        Err(err) => {
            tracing::debug!("Rejected signup for '{}': {}", username, err);
            return Ok(view::account::signup(&username, Some(SIGNUP_FAILED)).into_response());
        }
    };

    let user = match AuthService::new(&state.db).signup(params).await {
        Ok(user) => user,
        Err(AppError::ValidationErr(err)) => {
            tracing::debug!("Rejected signup for '{}': {}", username, err);
            return Ok(view::account::signup(&username, Some(SIGNUP_FAILED)).into_response());
        }
        Err(err) => return Err(err),
    };

    AuthSession::new(&session).set_user_id(user.id).await?;
    tracing::info!("User {} signed up", user.username);

    Ok(Redirect::to(AFTER_LOGIN_PATH).into_response())
}

pub async fn login_page() -> impl IntoResponse {
    view::account::login("", None)
}

pub async fn login(
    State(state): State<AppState>,
    session: Session,
    Form(payload): Form<LoginDto>,
) -> Result<Response, AppError> {
    let username = payload.username.clone();

    let Ok(params) = LoginParams::from_dto(payload) else {
        return Ok(view::account::login(&username, Some(LOGIN_FAILED)).into_response());
    };

    let Some(user) = AuthService::new(&state.db).login(params).await? else {
        tracing::debug!("Failed login for '{}'", username);
        return Ok(view::account::login(&username, Some(LOGIN_FAILED)).into_response());
    };

    AuthSession::new(&session).set_user_id(user.id).await?;

    Ok(Redirect::to(AFTER_LOGIN_PATH).into_response())
}

pub async fn logout(session: Session) -> impl IntoResponse {
    AuthSession::new(&session).clear().await;

    Redirect::to("/")
}
