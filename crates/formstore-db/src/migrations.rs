//! Embedded SQL migrations and runner.
//!
//! Migrations are stored as `&str` constants and executed in order.  A
//! `schema_migrations` table tracks which versions have been applied.

use formstore_common::{Error, Result};
use rusqlite::Connection;

/// V1: initial schema -- users, forms, form instances and the version trigger.
const V1_INITIAL: &str = r#"
-- Owners. Only the key matters to the forms store.
CREATE TABLE users (
    id         INTEGER PRIMARY KEY AUTOINCREMENT,
    username   TEXT UNIQUE NOT NULL,
    created_at TEXT NOT NULL DEFAULT (strftime('%Y-%m-%dT%H:%M:%fZ', 'now'))
);

CREATE TABLE forms (
    id           INTEGER PRIMARY KEY AUTOINCREMENT,
    user_id      INTEGER NOT NULL REFERENCES users(id) ON DELETE CASCADE,
    name         TEXT NOT NULL CHECK (name <> ''),
    description  TEXT,
    created_at   TEXT NOT NULL DEFAULT (strftime('%Y-%m-%dT%H:%M:%fZ', 'now')),
    updated_at   TEXT NOT NULL DEFAULT (strftime('%Y-%m-%dT%H:%M:%fZ', 'now')),
    form_version INTEGER NOT NULL DEFAULT 1
);

CREATE INDEX idx_forms_user_id ON forms(user_id);

-- Snapshots are append-only; form_version is copied from the parent at insert.
CREATE TABLE form_instances (
    id           INTEGER PRIMARY KEY AUTOINCREMENT,
    form_id      INTEGER NOT NULL REFERENCES forms(id) ON DELETE CASCADE,
    fields       TEXT NOT NULL,
    created_at   TEXT NOT NULL DEFAULT (strftime('%Y-%m-%dT%H:%M:%fZ', 'now')),
    form_version INTEGER NOT NULL
);

CREATE INDEX idx_form_instances_form_id ON form_instances(form_id);

CREATE TRIGGER forms_bump_version
AFTER UPDATE OF name, description ON forms
FOR EACH ROW
BEGIN
    UPDATE forms SET form_version = OLD.form_version + 1 WHERE id = NEW.id;
END;
"#;

const MIGRATIONS: &[(i64, &str)] = &[(1, V1_INITIAL)];

/// Initial value of `forms.form_version`.
pub const INITIAL_FORM_VERSION: i64 = 1;

/// Run all pending migrations on `conn`.
///
/// Creates the `schema_migrations` tracking table if it does not exist,
/// then applies each outstanding migration inside a transaction. A database
/// already migrated past [`latest_version`] is rejected untouched.
pub fn run_migrations(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        "CREATE TABLE IF NOT EXISTS schema_migrations (
            version    INTEGER PRIMARY KEY,
            applied_at TEXT NOT NULL DEFAULT (datetime('now'))
        )",
    )
    .map_err(Error::database)?;

    let applied = current_version(conn)?;
    if applied > latest_version() {
        return Err(Error::database(format!(
            "Database schema version {applied} is newer than supported {}",
            latest_version()
        )));
    }

    for &(version, sql) in MIGRATIONS {
        let already: bool = conn
            .query_row(
                "SELECT COUNT(*) > 0 FROM schema_migrations WHERE version = ?1",
                [version],
                |row| row.get(0),
            )
            .map_err(Error::database)?;

        if already {
            continue;
        }

        let tx = conn.unchecked_transaction().map_err(Error::database)?;

        tx.execute_batch(sql)
            .map_err(|e| Error::database(format!("Migration V{version} failed: {e}")))?;

        tx.execute(
            "INSERT INTO schema_migrations (version) VALUES (?1)",
            [version],
        )
        .map_err(Error::database)?;

        tx.commit().map_err(Error::database)?;

        tracing::info!(version, "Applied migration");
    }

    Ok(())
}

/// Latest schema version known to this build.
pub fn latest_version() -> i64 {
    MIGRATIONS.last().map_or(0, |&(version, _)| version)
}

/// Highest applied schema version recorded in `schema_migrations`.
pub fn current_version(conn: &Connection) -> Result<i64> {
    conn.query_row(
        "SELECT COALESCE(MAX(version), 0) FROM schema_migrations",
        [],
        |row| row.get(0),
    )
    .map_err(Error::database)
}
