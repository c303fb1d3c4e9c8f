//! Store error types.
//!
//! Structured errors for store operations, providing better error context
//! and type safety compared to string-based errors.

use thiserror::Error;

use crate::contact::ContactId;

/// Errors that can occur during store operations.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum StoreError {
    /// No contact exists with the given id.
    #[error("Contact not found: {id}")]
    ContactNotFound {
        /// The id that was looked up
        id: ContactId,
    },

    /// Serialization of the collection failed.
    #[error("Serialization failed")]
    SerializationFailed {
        /// The underlying serialization error
        #[source]
        source: serde_json::Error,
    },

    /// Deserialization of a persisted collection failed.
    #[error("Deserialization failed")]
    DeserializationFailed {
        /// The underlying deserialization error
        #[source]
        source: serde_json::Error,
    },

    /// File I/O error while persisting or loading.
    #[error("File I/O error")]
    FileIo {
        /// The underlying I/O error
        #[source]
        source: std::io::Error,
    },
}

impl StoreError {
    /// Check if this error indicates a contact was not found.
    pub fn is_not_found(&self) -> bool {
        matches!(self, StoreError::ContactNotFound { .. })
    }

    /// Check if this error is related to I/O or persistence.
    pub fn is_io_error(&self) -> bool {
        matches!(
            self,
            StoreError::FileIo { .. }
                | StoreError::SerializationFailed { .. }
                | StoreError::DeserializationFailed { .. }
        )
    }
}

impl From<StoreError> for crate::Error {
    fn from(err: StoreError) -> Self {
        crate::Error::Store(err)
    }
}
