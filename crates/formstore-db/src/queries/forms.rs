//! Form database queries.
//!
//! Creation writes the form row and its first instance in one transaction.
//! Updates and deletes report a missing row as [`Error::FormNotFound`] based
//! on the affected-row count.

use formstore_common::{Error, FormId, Result, UserId};
use rusqlite::{Connection, ErrorCode, OptionalExtension};

use crate::models::Form;
use crate::queries::form_instances;

/// New `updated_at` for an UPDATE: the current time, or one millisecond past
/// the stored value when the clock has not moved on, so every update
/// advances it.
const NEXT_UPDATED_AT: &str = "MAX(
    strftime('%Y-%m-%dT%H:%M:%fZ', 'now'),
    strftime('%Y-%m-%dT%H:%M:%fZ', updated_at, '+0.001 seconds')
)";

/// Create a form together with its initial field snapshot.
///
/// The instance copies the form's freshly assigned ID and version. Both
/// inserts run in one transaction; if either fails nothing is written.
///
/// # Returns
///
/// * `Ok(Form)` - The created form as stored
/// * `Err(Error::InvalidUserId)` - If `user_id` does not reference a user
/// * `Err(Error::Database)` - Any other storage failure
pub fn create_form(
    conn: &mut Connection,
    user_id: UserId,
    name: &str,
    description: Option<&str>,
    fields: &str,
) -> Result<Form> {
    let tx = conn.transaction().map_err(Error::database)?;

    let form = tx
        .query_row(
            &format!(
                "INSERT INTO forms (user_id, name, description)
                 VALUES (?1, ?2, ?3)
                 RETURNING {}",
                Form::COLUMNS
            ),
            rusqlite::params![user_id.get(), name, description],
            Form::from_row,
        )
        .map_err(|e| {
            if is_foreign_key_violation(&e) {
                Error::InvalidUserId(user_id)
            } else {
                Error::database(e)
            }
        })?;

    form_instances::insert_form_instance(&tx, form.id, fields, form.form_version)?;

    tx.commit().map_err(Error::database)?;

    Ok(form)
}

/// Get a form by ID.
pub fn get_form(conn: &Connection, id: FormId) -> Result<Option<Form>> {
    conn.query_row(
        &format!("SELECT {} FROM forms WHERE id = ?1", Form::COLUMNS),
        [id.get()],
        Form::from_row,
    )
    .optional()
    .map_err(Error::database)
}

/// Whether a form with this ID exists.
pub fn form_exists(conn: &Connection, id: FormId) -> Result<bool> {
    conn.query_row(
        "SELECT EXISTS(SELECT 1 FROM forms WHERE id = ?1)",
        [id.get()],
        |row| row.get(0),
    )
    .map_err(Error::database)
}

/// List all forms owned by a user, in ID order.
pub fn list_forms_by_user(conn: &Connection, user_id: UserId) -> Result<Vec<Form>> {
    let mut stmt = conn
        .prepare(&format!(
            "SELECT {} FROM forms WHERE user_id = ?1 ORDER BY id",
            Form::COLUMNS
        ))
        .map_err(Error::database)?;

    let rows = stmt
        .query_map([user_id.get()], Form::from_row)
        .map_err(Error::database)?;

    rows.collect::<std::result::Result<Vec<_>, _>>()
        .map_err(Error::database)
}

/// Rename a form and refresh its last-modified timestamp.
///
/// `updated_at` always ends up later than before, even when the update lands
/// in the same millisecond as the previous write.
pub fn update_form_name(conn: &Connection, id: FormId, name: &str) -> Result<()> {
    let rows_affected = conn
        .execute(
            &format!(
                "UPDATE forms SET name = ?1, updated_at = {NEXT_UPDATED_AT} WHERE id = ?2"
            ),
            rusqlite::params![name, id.get()],
        )
        .map_err(Error::database)?;

    if rows_affected == 0 {
        return Err(Error::FormNotFound(id));
    }

    Ok(())
}

/// Replace a form's description (`None` clears it) and refresh its
/// last-modified timestamp.
pub fn update_form_description(
    conn: &Connection,
    id: FormId,
    description: Option<&str>,
) -> Result<()> {
    let rows_affected = conn
        .execute(
            &format!(
                "UPDATE forms SET description = ?1, updated_at = {NEXT_UPDATED_AT} WHERE id = ?2"
            ),
            rusqlite::params![description, id.get()],
        )
        .map_err(Error::database)?;

    if rows_affected == 0 {
        return Err(Error::FormNotFound(id));
    }

    Ok(())
}

/// Delete a form. Its instances go with it through `ON DELETE CASCADE`.
pub fn delete_form(conn: &Connection, id: FormId) -> Result<()> {
    let rows_affected = conn
        .execute("DELETE FROM forms WHERE id = ?1", [id.get()])
        .map_err(Error::database)?;

    if rows_affected == 0 {
        return Err(Error::FormNotFound(id));
    }

    Ok(())
}

fn is_foreign_key_violation(err: &rusqlite::Error) -> bool {
    matches!(
        err,
        rusqlite::Error::SqliteFailure(e, _)
            if e.code == ErrorCode::ConstraintViolation
                && e.extended_code == rusqlite::ffi::SQLITE_CONSTRAINT_FOREIGNKEY
    )
}
