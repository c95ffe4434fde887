use axum::{
    extract::{Path, State},
    response::{IntoResponse, Redirect, Response},
    Form,
};
use tower_sessions::Session;

use crate::{
    model::toy::ToyDto,
    server::{
        error::AppError, middleware::auth::AuthGuard, model::toy::ToyParams,
        service::toy::ToyService, state::AppState,
    },
    view,
};

fn toy_not_found() -> AppError {
    AppError::NotFound("Toy not found".to_string())
}

pub async fn index(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let toys = ToyService::new(&state.db).get_all().await?;

    Ok(view::toy::index(user, toys))
}

pub async fn detail(
    State(state): State<AppState>,
    session: Session,
    Path(toy_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let toy = ToyService::new(&state.db)
        .get_by_id(toy_id)
        .await?
        .ok_or_else(toy_not_found)?;

    Ok(view::toy::detail(user, toy))
}

pub async fn create_page(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    Ok(view::toy::form(
        user,
        "Add a Toy",
        "/toys/create/",
        ToyDto::default(),
        Vec::new(),
    ))
}

pub async fn create(
    State(state): State<AppState>,
    session: Session,
    Form(payload): Form<ToyDto>,
) -> Result<Response, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let params = match ToyParams::from_dto(payload.clone()) {
        Ok(params) => params,
        Err(err) => {
            let errors = err.messages().to_vec();
            return Ok(
                view::toy::form(user, "Add a Toy", "/toys/create/", payload, errors)
                    .into_response(),
            );
        }
    };

    let toy = ToyService::new(&state.db).create(params).await?;

    Ok(Redirect::to(&format!("/toys/{}/", toy.id)).into_response())
}

pub async fn update_page(
    State(state): State<AppState>,
    session: Session,
    Path(toy_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let toy = ToyService::new(&state.db)
        .get_by_id(toy_id)
        .await?
        .ok_or_else(toy_not_found)?;
    let form = ToyDto {
        color: toy.color,
        description: toy.description,
    };

    Ok(view::toy::form(
        user,
        "Edit Toy",
        &format!("/toys/{}/update/", toy_id),
        form,
        Vec::new(),
    ))
}

pub async fn update(
    State(state): State<AppState>,
    session: Session,
    Path(toy_id): Path<i32>,
    Form(payload): Form<ToyDto>,
) -> Result<Response, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let params = match ToyParams::from_dto(payload.clone()) {
        Ok(params) => params,
        Err(err) => {
            let action = format!("/toys/{}/update/", toy_id);
            let errors = err.messages().to_vec();
            return Ok(
                view::toy::form(user, "Edit Toy", &action, payload, errors).into_response(),
            );
        }
    };

    ToyService::new(&state.db).update(toy_id, params).await?;

    Ok(Redirect::to(&format!("/toys/{}/", toy_id)).into_response())
}

pub async fn delete_page(
    State(state): State<AppState>,
    session: Session,
    Path(toy_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let toy = ToyService::new(&state.db)
        .get_by_id(toy_id)
        .await?
        .ok_or_else(toy_not_found)?;

    Ok(view::toy::confirm_delete(user, toy))
}

/// Deletes a toy; birds that had it simply lose the association.
pub async fn delete(
    State(state): State<AppState>,
    session: Session,
    Path(toy_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &session).require(&[]).await?;

    ToyService::new(&state.db).delete(toy_id).await?;

    Ok(Redirect::to("/toys/"))
}
