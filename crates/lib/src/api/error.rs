//! HTTP error mapping for the contact API.
//!
//! Every failing endpoint returns the same JSON envelope: a static `error`
//! message describing the failed operation, plus the underlying store error
//! message passed through verbatim as `details` when one exists.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// JSON error envelope returned by every failing endpoint.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

/// Errors surfaced by the contact API handlers.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Create request with a missing or empty required field. The store is
    /// not touched.
    #[error("Name, Email, and Phone are required.")]
    MissingFields,

    /// Update or delete target does not exist.
    #[error("Contact not found")]
    NotFound,

    /// Listing the collection failed.
    #[error("Failed to fetch contacts")]
    Fetch(#[source] crate::Error),

    /// Creating a record failed in the store.
    #[error("Error creating contact")]
    Create(#[source] crate::Error),

    /// Updating a record failed for a reason other than not-found.
    #[error("Update failed")]
    Update(#[source] crate::Error),

    /// Deleting a record failed for a reason other than not-found.
    #[error("Deletion failed")]
    Delete(#[source] crate::Error),
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            ApiError::MissingFields | ApiError::Create(_) | ApiError::Update(_) => {
                StatusCode::BAD_REQUEST
            }
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::Fetch(_) | ApiError::Delete(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn details(&self) -> Option<String> {
        match self {
            ApiError::Fetch(e)
            | ApiError::Create(e)
            | ApiError::Update(e)
            | ApiError::Delete(e) => Some(e.to_string()),
            ApiError::MissingFields | ApiError::NotFound => None,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ErrorBody {
            error: self.to_string(),
            details: self.details(),
        };
        (self.status(), Json(body)).into_response()
    }
}
