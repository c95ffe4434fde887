mod model;
mod server;
mod view;

use dioxus_logger::tracing::{self, Level};

use crate::server::{config::Config, error::AppError, router, startup, state::AppState};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dioxus_logger::init(Level::INFO)
        .map_err(|e| AppError::InternalError(format!("Failed to initialize logger: {}", e)))?;

    dotenvy::dotenv().ok();
    let config = Config::from_env()?;

    let db = startup::connect_to_database(&config).await?;
    let session = startup::connect_to_session(&db).await?;
    let storage = startup::setup_storage(&config.storage)?;

    let app = router::router()
        .with_state(AppState::new(db, storage))
        .layer(session);

    let listener = tokio::net::TcpListener::bind(&config.bind_address).await?;
    tracing::info!("Listening on {}", config.bind_address);

    axum::serve(listener, app).await?;

    Ok(())
}
