//! Request handlers, one per operation.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use serde::{Deserialize, Serialize};

use super::{ApiError, AppState};
use crate::contact::{Contact, ContactId, ContactPatch, NewContact};

/// Handler for `GET /` - static liveness response.
pub(super) async fn liveness() -> &'static str {
    "Contact API is running..."
}

/// Create payload with every field optional, so a missing key produces the
/// static 400 message instead of a deserializer rejection.
#[derive(Debug, Deserialize)]
pub(super) struct CreateContactBody {
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    email: Option<String>,
    #[serde(default)]
    phone: Option<String>,
    #[serde(default)]
    message: Option<String>,
}

impl CreateContactBody {
    /// Validate that name, email, and phone are present and non-empty.
    fn into_new_contact(self) -> Result<NewContact, ApiError> {
        fn required(field: Option<String>) -> Result<String, ApiError> {
            match field {
                Some(value) if !value.is_empty() => Ok(value),
                _ => Err(ApiError::MissingFields),
            }
        }

        Ok(NewContact {
            name: required(self.name)?,
            email: required(self.email)?,
            phone: required(self.phone)?,
            message: self.message,
        })
    }
}

/// Handler for `GET /api/contacts` - the full collection, most recent first.
pub(super) async fn list_contacts(
    State(state): State<AppState>,
) -> Result<Json<Vec<Contact>>, ApiError> {
    let contacts = state.store.list_all().await.map_err(|e| {
        tracing::error!(error = %e, "failed to list contacts");
        ApiError::Fetch(e)
    })?;
    Ok(Json(contacts))
}

/// Handler for `POST /api/contacts` - validate and insert, 201 on success.
pub(super) async fn create_contact(
    State(state): State<AppState>,
    Json(body): Json<CreateContactBody>,
) -> Result<(StatusCode, Json<Contact>), ApiError> {
    let fields = body.into_new_contact()?;
    let created = state.store.insert(fields).await.map_err(|e| {
        tracing::error!(error = %e, "failed to create contact");
        ApiError::Create(e)
    })?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// Handler for `PUT /api/contacts/{id}` - apply the request body as a patch.
///
/// No field-level validation: partial edits are allowed and required fields
/// are not re-checked on this path.
pub(super) async fn update_contact(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(patch): Json<ContactPatch>,
) -> Result<Json<Contact>, ApiError> {
    let id = ContactId::from(id);
    match state.store.update_by_id(&id, patch).await {
        Ok(updated) => Ok(Json(updated)),
        Err(e) if e.is_not_found() => Err(ApiError::NotFound),
        Err(e) => {
            tracing::error!(error = %e, %id, "failed to update contact");
            Err(ApiError::Update(e))
        }
    }
}

/// Confirmation body for a successful delete.
#[derive(Debug, Serialize, Deserialize)]
pub struct DeleteResponse {
    pub message: String,
}

/// Handler for `DELETE /api/contacts/{id}`.
pub(super) async fn delete_contact(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<DeleteResponse>, ApiError> {
    let id = ContactId::from(id);
    match state.store.delete_by_id(&id).await {
        Ok(_removed) => Ok(Json(DeleteResponse {
            message: "Contact successfully deleted".to_string(),
        })),
        Err(e) if e.is_not_found() => Err(ApiError::NotFound),
        Err(e) => {
            tracing::error!(error = %e, %id, "failed to delete contact");
            Err(ApiError::Delete(e))
        }
    }
}
