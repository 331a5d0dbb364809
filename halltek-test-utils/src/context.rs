//! Test context structure and utilities.
//!
//! This module provides the `TestContext` returned by `TestBuilder`. The context includes an
//! in-memory SQLite database, a session backed by a memory store and a temporary directory
//! for uploaded files.

use std::{path::PathBuf, sync::Arc};

use sea_orm::{sea_query::TableCreateStatement, ConnectionTrait, Database, DatabaseConnection};
use tempfile::TempDir;
use tower_sessions::{MemoryStore, Session};

use crate::error::TestError;

/// Test context structure returned by `TestBuilder`
///
/// # Usage
///
/// ```ignore
/// let test = TestBuilder::new().with_user_tables().build().await?;
///
/// // Access the database
/// let db = &test.db;
///
/// // Access fixtures helpers
/// test.user().insert_user("alice", "alice@example.com", TEST_PASSWORD, false).await?;
/// ```
pub struct TestContext {
    /// Database connection to in-memory SQLite database
    pub db: DatabaseConnection,
    /// Session for test authentication flows
    pub session: Session,
    /// Upload directory, removed when the context is dropped
    pub upload_dir: TempDir,
}

impl TestContext {
    /// Convert database and upload directory into any type that can be constructed from them
    ///
    /// This allows conversion to AppState without creating a circular dependency
    /// between the test-utils crate and the main halltek crate.
    ///
    /// # Example
    ///
    /// ```ignore
    /// // In integration tests
    /// let app_state: AppState = test.to_app_state();
    /// ```
    pub fn to_app_state<T>(&self) -> T
    where
        T: From<(DatabaseConnection, PathBuf)>,
    {
        T::from((self.db.clone(), self.upload_path()))
    }

    pub fn upload_path(&self) -> PathBuf {
        self.upload_dir.path().to_path_buf()
    }

    /// Create a new test context.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Initialized test context without any tables
    /// - `Err(TestError::DbErr)` - Database connection failed
    /// - `Err(TestError::IoError)` - Temporary directory could not be created
    pub(crate) async fn new() -> Result<Self, TestError> {
        let store = Arc::new(MemoryStore::default());
        let session = Session::new(None, store, None);

        let db = Database::connect("sqlite::memory:").await?;

        Ok(TestContext {
            db,
            session,
            upload_dir: TempDir::new()?,
        })
    }

    /// Create database tables from schema statements.
    ///
    /// # Returns
    /// - `Ok(())` - All tables created successfully
    /// - `Err(TestError::DbErr)` - Table creation failed
    pub(crate) async fn with_tables(
        &self,
        stmts: Vec<TableCreateStatement>,
    ) -> Result<(), TestError> {
        for stmt in stmts {
            self.db.execute(&stmt).await?;
        }

        Ok(())
    }
}
