use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use tower_http::trace::TraceLayer;

use crate::server::{
    controller::{account, bird, page, toy},
    state::AppState,
};

/// Largest accepted photo upload request.
pub(crate) const PHOTO_BODY_LIMIT: usize = 10 * 1024 * 1024;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(page::home))
        .route("/about", get(page::about))
        .route("/about/", get(page::about))
        .merge(bird_routes())
        .merge(toy_routes())
        .merge(account_routes())
        .layer(TraceLayer::new_for_http())
}

fn bird_routes() -> Router<AppState> {
    Router::new()
        .route("/birds/", get(bird::index))
        .route("/birds/create/", get(bird::create_page).post(bird::create))
        .route("/birds/{bird_id}/", get(bird::detail))
        .route(
            "/birds/{bird_id}/update/",
            get(bird::update_page).post(bird::update),
        )
        .route(
            "/birds/{bird_id}/delete/",
            get(bird::delete_page).post(bird::delete),
        )
        .route("/birds/{bird_id}/feedings/", post(bird::add_feeding))
        .route(
            "/birds/{bird_id}/associate-toy/{toy_id}/",
            post(bird::associate_toy),
        )
        .route(
            "/birds/{bird_id}/remove-toy/{toy_id}/",
            post(bird::remove_toy),
        )
        .route(
            "/birds/{bird_id}/add-photo/",
            post(bird::add_photo).layer(DefaultBodyLimit::max(PHOTO_BODY_LIMIT)),
        )
}

fn toy_routes() -> Router<AppState> {
    Router::new()
        .route("/toys/", get(toy::index))
        .route("/toys/create/", get(toy::create_page).post(toy::create))
        .route("/toys/{toy_id}/", get(toy::detail))
        .route(
            "/toys/{toy_id}/update/",
            get(toy::update_page).post(toy::update),
        )
        .route(
            "/toys/{toy_id}/delete/",
            get(toy::delete_page).post(toy::delete),
        )
}

fn account_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/accounts/signup/",
            get(account::signup_page).post(account::signup),
        )
        .route(
            "/accounts/login/",
            get(account::login_page).post(account::login),
        )
        .route("/accounts/logout/", post(account::logout))
}
