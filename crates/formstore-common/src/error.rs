//! Domain error type for formstore.
//!
//! Validation and lookup failures get their own variants; everything the
//! storage layer reports beyond those is carried unchanged in
//! [`Error::Database`].

use crate::ids::{FormId, UserId};

/// Error type covering all failure modes of the forms store.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The owning user ID is out of range or does not reference a user.
    #[error("Invalid user id: {0}")]
    InvalidUserId(UserId),

    /// Required input was missing or empty.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// The requested form does not exist.
    #[error("Form not found: {0}")]
    FormNotFound(FormId),

    /// A storage operation failed for a reason not covered above.
    #[error("Database error: {source}")]
    Database {
        /// The underlying storage error.
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

impl Error {
    /// Convenience constructor for [`Error::InvalidInput`].
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Error::InvalidInput(msg.into())
    }

    /// Convenience constructor for [`Error::Database`].
    pub fn database(source: impl Into<Box<dyn std::error::Error + Send + Sync>>) -> Self {
        Error::Database {
            source: source.into(),
        }
    }
}

/// Result type alias using the formstore [`Error`].
pub type Result<T> = std::result::Result<T, Error>;
