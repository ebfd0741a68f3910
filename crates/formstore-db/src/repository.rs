//! Storage capability consumed by the forms store.
//!
//! [`FormsRepository`] is the seam between the store's validation layer and
//! SQLite. [`SqliteFormsRepository`] checks a connection out of the pool for
//! the duration of each call; the connection returns to the pool when the
//! guard drops, on success and error alike.

use formstore_common::{Error, FormId, Result, UserId};

use crate::models::{Form, FormInstance};
use crate::pool::{get_conn, DbPool};
use crate::queries::{form_instances, forms};

/// Persistence operations for forms and their instances.
///
/// Implementations perform no input validation; lookups that find nothing
/// return [`Error::FormNotFound`].
pub trait FormsRepository: Send + Sync {
    /// Create a form and its first instance atomically.
    fn create_form(
        &self,
        user_id: UserId,
        name: &str,
        description: Option<&str>,
        fields: &str,
    ) -> Result<Form>;

    fn get_form(&self, id: FormId) -> Result<Form>;

    fn list_forms_by_user(&self, user_id: UserId) -> Result<Vec<Form>>;

    fn update_form_name(&self, id: FormId, name: &str) -> Result<()>;

    fn update_form_description(&self, id: FormId, description: Option<&str>) -> Result<()>;

    fn delete_form(&self, id: FormId) -> Result<()>;

    /// Instances of an existing form, oldest first.
    fn list_form_instances(&self, form_id: FormId) -> Result<Vec<FormInstance>>;

    fn get_latest_form_instance(&self, form_id: FormId) -> Result<FormInstance>;
}

/// [`FormsRepository`] backed by an r2d2 SQLite pool.
#[derive(Clone)]
pub struct SqliteFormsRepository {
    pool: DbPool,
}

impl SqliteFormsRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// The underlying pool.
    pub fn pool(&self) -> &DbPool {
        &self.pool
    }
}

impl FormsRepository for SqliteFormsRepository {
    fn create_form(
        &self,
        user_id: UserId,
        name: &str,
        description: Option<&str>,
        fields: &str,
    ) -> Result<Form> {
        let mut conn = get_conn(&self.pool)?;
        forms::create_form(&mut conn, user_id, name, description, fields)
    }

    fn get_form(&self, id: FormId) -> Result<Form> {
        let conn = get_conn(&self.pool)?;
        forms::get_form(&conn, id)?.ok_or(Error::FormNotFound(id))
    }

    fn list_forms_by_user(&self, user_id: UserId) -> Result<Vec<Form>> {
        let conn = get_conn(&self.pool)?;
        forms::list_forms_by_user(&conn, user_id)
    }

    fn update_form_name(&self, id: FormId, name: &str) -> Result<()> {
        let conn = get_conn(&self.pool)?;
        forms::update_form_name(&conn, id, name)
    }

    fn update_form_description(&self, id: FormId, description: Option<&str>) -> Result<()> {
        let conn = get_conn(&self.pool)?;
        forms::update_form_description(&conn, id, description)
    }

    fn delete_form(&self, id: FormId) -> Result<()> {
        let conn = get_conn(&self.pool)?;
        forms::delete_form(&conn, id)
    }

    fn list_form_instances(&self, form_id: FormId) -> Result<Vec<FormInstance>> {
        let conn = get_conn(&self.pool)?;
        if !forms::form_exists(&conn, form_id)? {
            return Err(Error::FormNotFound(form_id));
        }
        form_instances::list_form_instances(&conn, form_id)
    }

    fn get_latest_form_instance(&self, form_id: FormId) -> Result<FormInstance> {
        let conn = get_conn(&self.pool)?;
        form_instances::get_latest_form_instance(&conn, form_id)?
            .ok_or(Error::FormNotFound(form_id))
    }
}
