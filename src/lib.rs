//! Formstore - persistence for owned, versioned forms
//!
//! [`FormsStore`] validates requests and delegates to a
//! [`FormsRepository`]; [`open`] wires it to a pooled SQLite database.
//!
//! ```
//! use formstore::config::DatabaseConfig;
//! use formstore_common::UserId;
//!
//! let dir = tempfile::tempdir().unwrap();
//! let config = DatabaseConfig {
//!     path: dir.path().join("forms.db").to_string_lossy().into_owned(),
//!     ..DatabaseConfig::default()
//! };
//! let store = formstore::open(&config).unwrap();
//!
//! // user 1 does not exist yet, so the owner check rejects it
//! assert!(store.insert_form(UserId::from(1), "Survey", None, "{}").is_err());
//! ```

pub mod config;
pub mod logging;
pub mod store;

use std::sync::Arc;

use formstore_common::Result;
use formstore_db::pool::init_pool;

pub use formstore_common::{Error, FormId, FormInstanceId, UserId};
pub use formstore_db::models::{Form, FormInstance};
pub use formstore_db::{FormsRepository, SqliteFormsRepository};
pub use store::FormsStore;

/// Open (creating and migrating if needed) the configured database and
/// return a store backed by it.
pub fn open(config: &config::DatabaseConfig) -> Result<FormsStore> {
    tracing::info!("Initializing database at {}", config.path);
    let pool = init_pool(&config.path, config.pool_size, config.busy_timeout())?;
    Ok(FormsStore::new(Arc::new(SqliteFormsRepository::new(pool))))
}
