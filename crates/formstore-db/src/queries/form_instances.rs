//! Form-instance queries.
//!
//! Instances are only ever inserted; there is no update path.

use formstore_common::{Error, FormId, Result};
use rusqlite::{Connection, OptionalExtension};

use crate::models::FormInstance;

/// Insert a snapshot of `fields` taken at `form_version`.
///
/// Called inside the transaction opened by
/// [`create_form`](crate::queries::forms::create_form).
pub fn insert_form_instance(
    conn: &Connection,
    form_id: FormId,
    fields: &str,
    form_version: i64,
) -> Result<FormInstance> {
    conn.query_row(
        &format!(
            "INSERT INTO form_instances (form_id, fields, form_version)
             VALUES (?1, ?2, ?3)
             RETURNING {}",
            FormInstance::COLUMNS
        ),
        rusqlite::params![form_id.get(), fields, form_version],
        FormInstance::from_row,
    )
    .map_err(Error::database)
}

/// List all instances of a form, oldest first.
pub fn list_form_instances(conn: &Connection, form_id: FormId) -> Result<Vec<FormInstance>> {
    let mut stmt = conn
        .prepare(&format!(
            "SELECT {} FROM form_instances WHERE form_id = ?1 ORDER BY id",
            FormInstance::COLUMNS
        ))
        .map_err(Error::database)?;

    let rows = stmt
        .query_map([form_id.get()], FormInstance::from_row)
        .map_err(Error::database)?;

    rows.collect::<std::result::Result<Vec<_>, _>>()
        .map_err(Error::database)
}

/// Get the most recent instance of a form.
pub fn get_latest_form_instance(
    conn: &Connection,
    form_id: FormId,
) -> Result<Option<FormInstance>> {
    conn.query_row(
        &format!(
            "SELECT {} FROM form_instances WHERE form_id = ?1 ORDER BY id DESC LIMIT 1",
            FormInstance::COLUMNS
        ),
        [form_id.get()],
        FormInstance::from_row,
    )
    .optional()
    .map_err(Error::database)
}
