//! Formstore-DB: database schema, migrations, and query operations
//!
//! This crate provides the SQLite persistence for forms using rusqlite
//! with r2d2 connection pooling.
//!
//! # Modules
//!
//! - `migrations` - Embedded schema migrations
//! - `pool` - Connection pool management
//! - `models` - Rust models matching the database schema
//! - `queries` - Query functions over a single connection
//! - `repository` - The `FormsRepository` storage capability
//!
//! # Example
//!
//! ```
//! use formstore_db::pool::{get_conn, init_memory_pool};
//! use formstore_db::queries::{forms, users};
//!
//! let pool = init_memory_pool().unwrap();
//! let mut conn = get_conn(&pool).unwrap();
//!
//! let user = users::create_user(&conn, "alice").unwrap();
//! let form = forms::create_form(&mut conn, user.id, "Survey", None, "{}").unwrap();
//! assert_eq!(form.form_version, 1);
//! ```

pub mod migrations;
pub mod models;
pub mod pool;
pub mod queries;
pub mod repository;

pub use repository::{FormsRepository, SqliteFormsRepository};
