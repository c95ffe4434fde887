use time::Duration;
use tower_sessions::{cookie::SameSite, Expiry, SessionManagerLayer};
use tower_sessions_sqlx_store::SqliteStore;

use crate::server::{
    config::{Config, StorageConfig},
    error::AppError,
    storage::PhotoStorage,
};

/// Sessions expire after this many days without a request.
const SESSION_INACTIVITY_DAYS: i64 = 7;

/// Connects to the Sqlite database and runs pending migrations.
///
/// Establishes a connection pool to the Sqlite database using the connection string from
/// configuration, then runs all pending SeaORM migrations so the schema is up to date before
/// any request is served.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(AppError::DbErr)` - Failed to connect to database or run migrations
pub async fn connect_to_database(config: &Config) -> Result<sea_orm::DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Creates the session layer backed by the application database.
///
/// The session table lives in the same Sqlite database as the application tables and is
/// migrated here. Cookies are `SameSite=Lax` and not marked secure so the app also works
/// behind plain HTTP during development.
///
/// # Returns
/// - `Ok(SessionManagerLayer)` - Layer to wrap the router with
/// - `Err(AppError::SqlxErr)` - Failed to create the session table
pub async fn connect_to_session(
    db: &sea_orm::DatabaseConnection,
) -> Result<SessionManagerLayer<SqliteStore>, AppError> {
    let store = SqliteStore::new(db.get_sqlite_connection_pool().clone());
    store.migrate().await?;

    Ok(SessionManagerLayer::new(store)
        .with_secure(false)
        .with_same_site(SameSite::Lax)
        .with_expiry(Expiry::OnInactivity(Duration::days(
            SESSION_INACTIVITY_DAYS,
        ))))
}

/// Builds the photo storage adapter from configuration.
pub fn setup_storage(config: &StorageConfig) -> Result<PhotoStorage, AppError> {
    Ok(PhotoStorage::from_config(config)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::{EntityTrait, PaginatorTrait};
    use test_utils::factory;

    fn memory_config() -> Config {
        Config {
            database_url: "sqlite::memory:".to_string(),
            bind_address: "127.0.0.1:0".to_string(),
            storage: StorageConfig {
                base_url: "https://storage.test".to_string(),
                bucket: "birdcollector".to_string(),
                region: "us-east-1".to_string(),
                endpoint: None,
                access_key_id: None,
                secret_access_key: None,
                timeout: std::time::Duration::from_secs(5),
            },
        }
    }

    /// Tests that the migrated schema cascades a bird delete to its dependents.
    ///
    /// Deletes the bird row directly, bypassing the repository, so only the foreign keys
    /// created by the migrations can clean up feedings, photos and toy associations.
    ///
    /// Expected: no dependent rows left, the toy survives
    #[tokio::test]
    async fn migrations_cascade_bird_delete() -> Result<(), AppError> {
        let db = connect_to_database(&memory_config()).await?;

        let (_, bird, toy) = factory::helpers::create_bird_with_dependents(&db).await?;

        entity::prelude::Bird::delete_by_id(bird.id).exec(&db).await?;

        assert_eq!(entity::prelude::Feeding::find().count(&db).await?, 0);
        assert_eq!(entity::prelude::Photo::find().count(&db).await?, 0);
        assert_eq!(entity::prelude::BirdToy::find().count(&db).await?, 0);
        assert!(entity::prelude::Toy::find_by_id(toy.id)
            .one(&db)
            .await?
            .is_some());

        Ok(())
    }

    /// Tests that migrations can run twice against the same database.
    ///
    /// Expected: Ok on the second run and the session table is created alongside
    #[tokio::test]
    async fn migrations_are_idempotent() -> Result<(), AppError> {
        use migration::{Migrator, MigratorTrait};

        let db = connect_to_database(&memory_config()).await?;
        Migrator::up(&db, None).await?;
        connect_to_session(&db).await?;

        Ok(())
    }
}
