//! User queries.
//!
//! Users are managed outside the forms store; these helpers exist so that
//! forms have an owner row to reference.

use formstore_common::{Error, Result};
use rusqlite::Connection;

use crate::models::User;

/// Create a new user and return it.
pub fn create_user(conn: &Connection, username: &str) -> Result<User> {
    conn.query_row(
        &format!(
            "INSERT INTO users (username) VALUES (?1) RETURNING {}",
            User::COLUMNS
        ),
        [username],
        User::from_row,
    )
    .map_err(Error::database)
}
