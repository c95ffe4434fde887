use sea_orm::{
    sea_query::TableCreateStatement, ConnectionTrait, Database, DatabaseConnection, DbErr,
    EntityTrait, PaginatorTrait,
};
use std::sync::Arc;
use time::Duration;
use tower_sessions::{Expiry, Session};
use tower_sessions_sqlx_store::SqliteStore;

use crate::error::TestError;

/// Test context holding an in-memory SQLite database and a session backed by it.
///
/// Both are created lazily on first access and live as long as the context. SeaORM limits
/// in-memory SQLite pools to a single connection, so the session store and the application
/// tables share one database.
#[derive(Default)]
pub struct TestContext {
    /// Connection to the in-memory database, created by `database()`.
    pub db: Option<DatabaseConnection>,

    /// Session stored in the same database, created by `session()`.
    pub session: Option<Session>,
}

impl TestContext {
    /// Creates an empty test context without a database connection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Gets or creates the in-memory SQLite database connection.
    ///
    /// # Returns
    /// - `Ok(&DatabaseConnection)` - Reference to the database connection
    /// - `Err(TestError::Database)` - Failed to connect to in-memory SQLite database
    pub async fn database(&mut self) -> Result<&DatabaseConnection, TestError> {
        if self.db.is_none() {
            let db = Database::connect("sqlite::memory:").await?;
            self.db = Some(db);
        }

        Ok(self.db.as_ref().expect("database initialized above"))
    }

    /// Executes the provided CREATE TABLE statements in order.
    ///
    /// Typically called by `TestBuilder::build()` rather than directly.
    pub async fn with_tables(&mut self, stmts: Vec<TableCreateStatement>) -> Result<(), TestError> {
        let db = self.database().await?;

        for stmt in stmts {
            db.execute(&stmt).await?;
        }

        Ok(())
    }

    /// Gets or creates a session backed by the test database.
    ///
    /// On first call the session table is migrated into the in-memory database and a fresh
    /// session with a 7 day inactivity expiry is created. Later calls return the same session.
    ///
    /// # Example
    /// ```rust,ignore
    /// let mut test = TestContext::new();
    /// let session = test.session().await?;
    /// session.insert("auth:user", 1).await?;
    /// ```
    pub async fn session(&mut self) -> Result<&Session, TestError> {
        if self.session.is_none() {
            let db = self.database().await?;

            let store = SqliteStore::new(db.get_sqlite_connection_pool().clone());
            store
                .migrate()
                .await
                .map_err(|e| DbErr::Custom(e.to_string()))?;

            self.session = Some(Session::new(
                None,
                Arc::new(store),
                Some(Expiry::OnInactivity(Duration::days(7))),
            ));
        }

        Ok(self.session.as_ref().expect("session initialized above"))
    }

    /// Gets or creates both the database and the session.
    ///
    /// Avoids holding two mutable borrows when a test needs both.
    pub async fn db_and_session(&mut self) -> Result<(&DatabaseConnection, &Session), TestError> {
        self.database().await?;
        self.session().await?;

        match (self.db.as_ref(), self.session.as_ref()) {
            (Some(db), Some(session)) => Ok((db, session)),
            _ => Err(DbErr::Custom("test context failed to initialize".to_string()).into()),
        }
    }

    /// Counts the rows currently stored for an entity.
    ///
    /// Handy for asserting that an operation did or did not persist anything.
    pub async fn count<E>(&mut self, _entity: E) -> Result<u64, TestError>
    where
        E: EntityTrait,
        E::Model: Sync,
    {
        let db = self.database().await?;
        Ok(E::find().count(db).await?)
    }
}
