//! Application state shared across all request handlers.
//!
//! `AppState` is built once during startup and cloned into each handler through axum's
//! state extraction. Both fields are cheap to clone: `DatabaseConnection` is a pool handle
//! and `PhotoStorage` wraps an opendal `Operator`, which is reference counted.

use sea_orm::DatabaseConnection;

use crate::server::storage::PhotoStorage;

#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub db: DatabaseConnection,

    /// Object storage for bird photos.
    pub storage: PhotoStorage,
}

impl AppState {
    pub fn new(db: DatabaseConnection, storage: PhotoStorage) -> Self {
        Self { db, storage }
    }
}
