//! ContactFlow: a small contact manager.
//!
//! This library provides the pieces of the system:
//!
//! * **Contacts (`contact`)**: The record type and its insert/patch payloads.
//! * **Store (`store::ContactStore`)**: A pluggable persistence layer keyed by
//!   unique contact IDs, with an in-memory implementation that can write
//!   through to a JSON file.
//! * **API (`api`)**: Stateless axum handlers translating HTTP requests into
//!   store operations and mapping failures to status codes.
//! * **Client (`client`)**: A reqwest-backed client plus the form/list state
//!   machine a UI drives: fetch, submit, delete, and local search filtering.
//!
//! The server and client communicate over HTTP/JSON. There is no server-side
//! session or cache; every mutation is followed by a full re-fetch on the
//! client.

pub mod api;
pub mod client;
pub mod clock;
pub mod contact;
pub mod store;

pub use clock::{Clock, SystemClock};
pub use contact::{Contact, ContactId, ContactPatch, NewContact};

#[cfg(any(test, feature = "testing"))]
pub use clock::FixedClock;

/// Result type used throughout the ContactFlow library.
pub type Result<T> = std::result::Result<T, Error>;

/// Common error type for the ContactFlow library.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),

    /// Structured store errors from the store module
    #[error(transparent)]
    Store(store::StoreError),

    /// Structured client errors from the client module
    #[error(transparent)]
    Client(client::ClientError),
}

impl Error {
    /// Get the originating module for this error.
    pub fn module(&self) -> &'static str {
        match self {
            Error::Store(_) => "store",
            Error::Client(_) => "client",
            Error::Io(_) => "io",
            Error::Serialize(_) => "serialize",
        }
    }

    /// Check if this error indicates a contact was not found.
    pub fn is_not_found(&self) -> bool {
        match self {
            Error::Store(store_err) => store_err.is_not_found(),
            Error::Client(client_err) => client_err.is_not_found(),
            _ => false,
        }
    }

    /// Check if this error indicates the remote end was unreachable.
    pub fn is_connection_error(&self) -> bool {
        match self {
            Error::Client(client_err) => client_err.is_connection_error(),
            _ => false,
        }
    }
}
