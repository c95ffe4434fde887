use axum::{extract::State, response::IntoResponse};
use tower_sessions::Session;

use crate::{
    server::{error::AppError, middleware::auth::AuthGuard, state::AppState},
    view,
};

/// Landing page. Public.
pub async fn home(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).current().await?;

    Ok(view::page::home(user))
}

/// About page. Public.
pub async fn about(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).current().await?;

    Ok(view::page::about(user))
}
