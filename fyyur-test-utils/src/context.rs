//! Test context structure and utilities.
//!
//! The context returned by [`TestBuilder::build`](crate::TestBuilder::build) holds an
//! in-memory SQLite database and a session backed by a `MemoryStore`.

use std::sync::Arc;

use sea_orm::{
    sea_query::{IndexCreateStatement, TableCreateStatement},
    ConnectionTrait, Database, DatabaseConnection,
};
use tower_sessions::{MemoryStore, Session};

use crate::error::TestError;

/// Test environment created by [`TestBuilder`](crate::TestBuilder).
///
/// ```ignore
/// let test = TestBuilder::new().with_fyyur_tables().build().await?;
///
/// let area = test.fyyur().insert_mock_area("Boston", "MA").await?;
/// let app_state: AppState = test.to_app_state();
/// ```
pub struct TestContext {
    /// Connection to an in-memory SQLite database
    pub db: DatabaseConnection,
    /// Session for handlers that read or write flash messages
    pub session: Session,
}

impl TestContext {
    /// Convert the database connection into any type that can be built from it
    ///
    /// Lets integration tests construct the application's `AppState` without the
    /// test utilities depending on the main crate.
    pub fn to_app_state<T>(&self) -> T
    where
        T: From<DatabaseConnection>,
    {
        T::from(self.db.clone())
    }

    pub(crate) async fn new() -> Result<Self, TestError> {
        let store = Arc::new(MemoryStore::default());
        let session = Session::new(None, store, None);

        let db = Database::connect("sqlite::memory:").await?;

        Ok(TestContext { db, session })
    }

    /// Execute CREATE TABLE statements followed by CREATE INDEX statements.
    pub(crate) async fn with_schema(
        &self,
        tables: Vec<TableCreateStatement>,
        indexes: Vec<IndexCreateStatement>,
    ) -> Result<(), TestError> {
        for stmt in tables {
            self.db.execute(&stmt).await?;
        }

        for stmt in indexes {
            self.db.execute(&stmt).await?;
        }

        Ok(())
    }
}
