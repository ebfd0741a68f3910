//! The forms store: validated CRUD over forms and their field snapshots.
//!
//! Input checks happen here, before the repository is consulted, so an
//! invalid request never reaches storage.

use std::sync::Arc;

use formstore_common::{Error, FormId, Result, UserId};
use formstore_db::models::{Form, FormInstance};
use formstore_db::FormsRepository;

/// Validated access to forms, backed by an injected [`FormsRepository`].
#[derive(Clone)]
pub struct FormsStore {
    repo: Arc<dyn FormsRepository>,
}

impl FormsStore {
    pub fn new(repo: Arc<dyn FormsRepository>) -> Self {
        Self { repo }
    }

    /// Create a form owned by `user_id` along with its first instance.
    ///
    /// Fails with [`Error::InvalidUserId`] for a non-positive ID or an ID with
    /// no matching user, and with [`Error::InvalidInput`] for an empty name or
    /// fields payload.
    pub fn insert_form(
        &self,
        user_id: UserId,
        name: &str,
        description: Option<&str>,
        fields: &str,
    ) -> Result<Form> {
        if !user_id.is_valid() {
            return Err(Error::InvalidUserId(user_id));
        }
        if name.is_empty() {
            return Err(Error::invalid_input("form name must not be empty"));
        }
        if fields.is_empty() {
            return Err(Error::invalid_input("form fields must not be empty"));
        }

        match self.repo.create_form(user_id, name, description, fields) {
            Ok(form) => {
                tracing::info!(form_id = %form.id, user_id = %user_id, "Created form");
                Ok(form)
            }
            Err(e) => {
                tracing::warn!(user_id = %user_id, error = %e, "Failed to create form");
                Err(e)
            }
        }
    }

    pub fn get_form(&self, form_id: FormId) -> Result<Form> {
        tracing::debug!(form_id = %form_id, "Fetching form");
        self.repo.get_form(form_id)
    }

    /// All forms owned by `user_id`; empty when the user has none.
    pub fn get_forms_by_user(&self, user_id: UserId) -> Result<Vec<Form>> {
        let forms = self.repo.list_forms_by_user(user_id)?;
        tracing::debug!(user_id = %user_id, count = forms.len(), "Listed forms");
        Ok(forms)
    }

    pub fn update_form_name(&self, form_id: FormId, name: &str) -> Result<()> {
        self.repo.update_form_name(form_id, name)?;
        tracing::info!(form_id = %form_id, "Renamed form");
        Ok(())
    }

    pub fn update_form_description(
        &self,
        form_id: FormId,
        description: Option<&str>,
    ) -> Result<()> {
        self.repo.update_form_description(form_id, description)?;
        tracing::info!(form_id = %form_id, "Updated form description");
        Ok(())
    }

    pub fn delete_form(&self, form_id: FormId) -> Result<()> {
        self.repo.delete_form(form_id)?;
        tracing::info!(form_id = %form_id, "Deleted form");
        Ok(())
    }

    /// Field snapshots of a form, oldest first.
    pub fn get_form_instances(&self, form_id: FormId) -> Result<Vec<FormInstance>> {
        self.repo.list_form_instances(form_id)
    }

    pub fn get_latest_form_instance(&self, form_id: FormId) -> Result<FormInstance> {
        self.repo.get_latest_form_instance(form_id)
    }
}
