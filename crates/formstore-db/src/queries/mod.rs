//! Database query modules.
//!
//! - users: minimal owner records referenced by forms
//! - forms: form CRUD and the transactional create
//! - form_instances: append-only field snapshots

pub mod form_instances;
pub mod forms;
pub mod users;
