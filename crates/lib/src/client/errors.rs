//! Client error types.

use thiserror::Error;

/// Errors that can occur while talking to the contact API.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum ClientError {
    /// The server could not be reached at all.
    #[error("Failed to connect to {url}: {reason}")]
    Connection { url: String, reason: String },

    /// The server answered with a failure status and error envelope.
    #[error("Server returned {status}: {message}")]
    Api { status: u16, message: String },

    /// A response body could not be decoded.
    #[error("Failed to parse response: {reason}")]
    Decode { reason: String },
}

impl ClientError {
    /// Check if this error is the server reporting a missing contact.
    pub fn is_not_found(&self) -> bool {
        matches!(self, ClientError::Api { status: 404, .. })
    }

    /// Check if this error means the server was unreachable.
    pub fn is_connection_error(&self) -> bool {
        matches!(self, ClientError::Connection { .. })
    }
}

impl From<ClientError> for crate::Error {
    fn from(err: ClientError) -> Self {
        crate::Error::Client(err)
    }
}
