//! Error types and HTTP response handling.
//!
//! This module provides the application's error hierarchy and conversion logic for
//! transforming errors into HTTP responses. The `AppError` enum serves as the top-level
//! error type that wraps domain-specific errors and implements `IntoResponse` so handlers
//! can simply propagate with `?`. Error pages are rendered as HTML through the view layer.

pub mod auth;
pub mod config;
pub mod storage;
pub mod validation;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use dioxus_logger::tracing;
use thiserror::Error;

use crate::{
    server::error::{
        auth::AuthError, config::ConfigError, storage::StorageError, validation::ValidationError,
    },
    view,
};

/// Top-level application error type.
///
/// Aggregates all possible error types that can occur in the application and provides
/// automatic conversion to HTTP responses. Most variants use `#[from]` for automatic
/// error conversion. `AuthError` handles its own response mapping, while generic variants
/// provide standard HTTP status codes.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Authentication or authorization error.
    ///
    /// Delegates to `AuthError::into_response()` (login redirect or 403 page).
    #[error(transparent)]
    AuthErr(#[from] AuthError),

    /// Database operation error from SeaORM.
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    /// SQLx database driver error, raised by the session store setup.
    #[error(transparent)]
    SqlxErr(#[from] sea_orm::SqlxError),

    /// Session store operation error.
    #[error(transparent)]
    SessionErr(#[from] tower_sessions::session::Error),

    /// Object storage error.
    ///
    /// Photo uploads catch this themselves; it only reaches a response when storage
    /// setup fails.
    #[error(transparent)]
    StorageErr(#[from] StorageError),

    /// Form validation error that a handler chose not to handle itself.
    ///
    /// Results in 400 Bad Request listing the failed constraints.
    #[error(transparent)]
    ValidationErr(#[from] ValidationError),

    /// Failed to bind or serve the HTTP listener.
    #[error(transparent)]
    IoErr(#[from] std::io::Error),

    /// Resource not found error.
    ///
    /// Results in 404 Not Found with the provided message.
    #[error("{0}")]
    NotFound(String),

    /// Invalid request error.
    ///
    /// Results in 400 Bad Request with the provided message.
    #[error("{0}")]
    BadRequest(String),

    /// Internal server error with custom message.
    ///
    /// The message is logged but a generic message is returned to the client.
    #[error("{0}")]
    InternalError(String),
}

/// Converts application errors into HTML error pages.
///
/// # Returns
/// - Redirect or 403 - For `AuthErr`, delegated to `AuthError::into_response()`
/// - 400 Bad Request - For `BadRequest` and `ValidationErr`
/// - 404 Not Found - For `NotFound`
/// - 500 Internal Server Error - For all other variants
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            Self::AuthErr(err) => err.into_response(),
            Self::NotFound(msg) => view::error::render(StatusCode::NOT_FOUND, &msg),
            Self::BadRequest(msg) => view::error::render(StatusCode::BAD_REQUEST, &msg),
            Self::ValidationErr(err) => {
                view::error::render(StatusCode::BAD_REQUEST, &err.to_string())
            }
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// Logs the error message and returns a generic page so implementation details are not
/// leaked to the client.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        view::error::render(StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
    }
}
