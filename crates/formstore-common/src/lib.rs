//! Formstore-Common: typed IDs and the shared error type.
//!
//! - **Typed IDs**: integer newtypes for users, forms and form instances
//! - **Error Handling**: the domain error taxonomy and result alias
//!
//! # Examples
//!
//! ```
//! use formstore_common::{Error, FormId, Result};
//!
//! fn lookup(id: FormId) -> Result<()> {
//!     Err(Error::FormNotFound(id))
//! }
//!
//! assert!(lookup(FormId::from(7)).is_err());
//! ```

pub mod error;
pub mod ids;

pub use error::{Error, Result};
pub use ids::*;
