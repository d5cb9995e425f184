//! Common test utilities and fixtures for integration tests.
//!
//! This module provides shared test infrastructure including:
//! - TestContext for setting up test environment with a database
//! - Helper functions for creating test data

pub mod fixtures;

use std::sync::Arc;

use axum::Router;
use tempfile::TempDir;

use zetamac_backend::db::Database;
use zetamac_backend::models::RunRecorded;
use zetamac_backend::{router, AppState};

/// Test context containing database connection and test router.
pub struct TestContext {
    pub db: Arc<Database>,
    app: Router,
    // Keeps a file-backed database alive for the context's lifetime.
    _dir: Option<TempDir>,
}

impl TestContext {
    /// Create a new test context backed by a private in-memory database.
    pub async fn new() -> Self {
        let db = Database::in_memory()
            .await
            .expect("Failed to open in-memory database");
        Self::with_database(db, None).await
    }

    /// Create a new test context backed by a SQLite file in a temp dir.
    ///
    /// Use this when several pooled connections must see the same data.
    pub async fn new_file_backed() -> Self {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let url = format!("sqlite://{}", dir.path().join("zetamac.db").display());

        let db = Database::connect(&url)
            .await
            .expect("Failed to open file database");
        Self::with_database(db, Some(dir)).await
    }

    async fn with_database(db: Database, dir: Option<TempDir>) -> Self {
        db.run_migrations()
            .await
            .expect("Failed to run migrations");

        let db = Arc::new(db);
        let app = router(AppState { db: db.clone() });

        Self { db, app, _dir: dir }
    }

    /// Get the router for use with axum-test.
    pub fn router(&self) -> Router {
        self.app.clone()
    }

    /// Record a run directly through the store.
    pub async fn record_run(&self, mode: &str, ops: &str, score: i64) -> RunRecorded {
        self.db
            .record_run(&fixtures::new_run(mode, "easy", ops, score))
            .await
            .expect("Failed to record run")
    }
}
