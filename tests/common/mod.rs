//! Shared test harness for integration tests.
//!
//! Provides [`TestHarness`] which creates an in-memory DB, a
//! [`FormsStore`] over it, and helpers for seeding owners.

use std::sync::Arc;

use formstore::{FormsStore, SqliteFormsRepository, UserId};
use formstore_db::pool::{init_memory_pool, DbPool};
use formstore_db::queries::users;

/// Test harness wrapping a [`FormsStore`] backed by an in-memory database.
pub struct TestHarness {
    pub store: FormsStore,
    pub db: DbPool,
}

impl TestHarness {
    /// Create a new harness with an empty, migrated in-memory DB.
    pub fn new() -> Self {
        let db = init_memory_pool().expect("failed to create in-memory pool");
        let store = FormsStore::new(Arc::new(SqliteFormsRepository::new(db.clone())));
        Self { store, db }
    }

    /// Insert a user row and return its ID.
    pub fn create_user(&self, username: &str) -> UserId {
        let conn = self.db.get().expect("failed to get connection");
        users::create_user(&conn, username)
            .expect("failed to create user")
            .id
    }

    /// Count rows in `table`.
    pub fn count(&self, table: &str) -> i64 {
        let conn = self.db.get().expect("failed to get connection");
        conn.query_row(&format!("SELECT COUNT(*) FROM {table}"), [], |row| {
            row.get(0)
        })
        .expect("count query failed")
    }
}
