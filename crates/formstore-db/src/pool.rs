//! Connection pool management for SQLite via r2d2.

use std::time::Duration;

use formstore_common::{Error, Result};
use r2d2::Pool;
use r2d2_sqlite::SqliteConnectionManager;

use crate::migrations;

/// Type alias for the database connection pool.
pub type DbPool = Pool<SqliteConnectionManager>;

/// Type alias for a pooled database connection.
pub type PooledConnection = r2d2::PooledConnection<SqliteConnectionManager>;

/// Initialize a database pool backed by a file on disk.
///
/// Creates the SQLite file if it does not exist, enables foreign keys and
/// WAL journal mode on every new connection, and runs pending migrations.
pub fn init_pool(db_path: &str, max_size: u32, busy_timeout: Duration) -> Result<DbPool> {
    let manager = SqliteConnectionManager::file(db_path).with_init(move |conn| {
        conn.busy_timeout(busy_timeout)?;
        conn.execute_batch(
            "PRAGMA foreign_keys = ON;
             PRAGMA journal_mode = WAL;",
        )
    });

    let pool = Pool::builder()
        .max_size(max_size)
        .build(manager)
        .map_err(Error::database)?;

    let conn = get_conn(&pool)?;
    migrations::run_migrations(&conn)?;
    let schema_version = migrations::current_version(&conn)?;

    tracing::debug!(path = %db_path, max_size, schema_version, "Database pool ready");
    Ok(pool)
}

/// Initialize an in-memory database pool (useful for tests).
///
/// Each call creates a uniquely-named shared-cache in-memory database so
/// that parallel tests do not interfere with each other, while all
/// connections *within* a single pool still share state.
pub fn init_memory_pool() -> Result<DbPool> {
    use std::sync::atomic::{AtomicU64, Ordering};
    static COUNTER: AtomicU64 = AtomicU64::new(0);
    let n = COUNTER.fetch_add(1, Ordering::Relaxed);
    let uri = format!("file:formstore_mem_{n}?mode=memory&cache=shared");

    let manager = SqliteConnectionManager::file(uri)
        .with_init(|conn| conn.execute_batch("PRAGMA foreign_keys = ON;"));

    let pool = Pool::builder()
        .max_size(4)
        .build(manager)
        .map_err(Error::database)?;

    let conn = get_conn(&pool)?;
    migrations::run_migrations(&conn)?;

    Ok(pool)
}

/// Convenience helper to get a connection from the pool.
pub fn get_conn(pool: &DbPool) -> Result<PooledConnection> {
    pool.get().map_err(Error::database)
}
