//! Rust models matching the database schema.
//!
//! Each model implements `from_row` for constructing itself from a
//! `rusqlite::Row` selected with the matching column list constant.

use formstore_common::{FormId, FormInstanceId, UserId};
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// User
// ---------------------------------------------------------------------------

/// Owner of forms.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct User {
    pub id: UserId,
    pub username: String,
    pub created_at: String,
}

impl User {
    pub(crate) const COLUMNS: &'static str = "id, username, created_at";

    pub fn from_row(row: &rusqlite::Row) -> rusqlite::Result<Self> {
        Ok(Self {
            id: UserId::from(row.get::<_, i64>(0)?),
            username: row.get(1)?,
            created_at: row.get(2)?,
        })
    }
}

// ---------------------------------------------------------------------------
// Form
// ---------------------------------------------------------------------------

/// A named, owned, versioned form.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Form {
    pub id: FormId,
    pub user_id: UserId,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub created_at: String,
    /// Last-modified timestamp.
    #[serde(rename = "last_modified")]
    pub updated_at: String,
    pub form_version: i64,
}

impl Form {
    pub(crate) const COLUMNS: &'static str =
        "id, user_id, name, description, created_at, updated_at, form_version";

    pub fn from_row(row: &rusqlite::Row) -> rusqlite::Result<Self> {
        Ok(Self {
            id: FormId::from(row.get::<_, i64>(0)?),
            user_id: UserId::from(row.get::<_, i64>(1)?),
            name: row.get(2)?,
            description: row.get(3)?,
            created_at: row.get(4)?,
            updated_at: row.get(5)?,
            form_version: row.get(6)?,
        })
    }
}

// ---------------------------------------------------------------------------
// FormInstance
// ---------------------------------------------------------------------------

/// Immutable snapshot of a form's fields at a given form version.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FormInstance {
    pub id: FormInstanceId,
    pub form_id: FormId,
    /// Opaque serialized field structure.
    pub fields: String,
    pub created_at: String,
    pub form_version: i64,
}

impl FormInstance {
    pub(crate) const COLUMNS: &'static str = "id, form_id, fields, created_at, form_version";

    pub fn from_row(row: &rusqlite::Row) -> rusqlite::Result<Self> {
        Ok(Self {
            id: FormInstanceId::from(row.get::<_, i64>(0)?),
            form_id: FormId::from(row.get::<_, i64>(1)?),
            fields: row.get(2)?,
            created_at: row.get(3)?,
            form_version: row.get(4)?,
        })
    }
}
