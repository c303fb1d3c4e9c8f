//! Client-side state: an in-memory mirror of the remote list plus the draft
//! form, with derived search filtering.

use crate::contact::{Contact, ContactId};

use super::{ContactClient, ContactForm};

/// Error message shown when the initial or any subsequent fetch fails.
pub const OFFLINE_MESSAGE: &str = "Backend is offline. Start it with 'contactflow serve'.";

/// Outcome of a submit attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Submit {
    /// The contact was created; the form was cleared and the list refreshed.
    Created,
    /// The draft form is invalid; nothing was sent.
    Invalid,
    /// The create request failed. Surface this as a blocking alert.
    Failed(String),
}

/// Mirror of the remote contact list and a pending-new-contact form.
///
/// The list is only as fresh as the last [`refresh`](ClientState::refresh);
/// there is no polling and no optimistic update.
#[derive(Debug, Default)]
pub struct ClientState {
    /// Last-fetched collection, most recent first.
    pub contacts: Vec<Contact>,
    /// Draft fields for a new contact.
    pub form: ContactForm,
    /// True while a create request is in flight.
    pub loading: bool,
    /// Last fetch-failure message, or None after a successful fetch.
    pub error: Option<String>,
    /// Free-text search input.
    pub search_term: String,
}

impl ClientState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fetch the full list. On success the mirror is replaced and the error
    /// cleared; on failure the error is set and the previous contacts kept.
    pub async fn refresh(&mut self, client: &ContactClient) {
        match client.fetch_contacts().await {
            Ok(contacts) => {
                self.contacts = contacts;
                self.error = None;
            }
            Err(e) => {
                tracing::warn!(error = %e, "fetch failed");
                self.error = Some(OFFLINE_MESSAGE.to_string());
            }
        }
    }

    /// Submit the draft form.
    ///
    /// A locally-invalid form is refused without any network call. On
    /// success the draft is cleared and the list re-fetched. `loading` is
    /// true for the duration of the request regardless of outcome.
    pub async fn submit(&mut self, client: &ContactClient) -> Submit {
        if !self.form.is_valid() {
            return Submit::Invalid;
        }
        self.loading = true;
        let outcome = match client.create_contact(&self.form.to_new_contact()).await {
            Ok(created) => {
                tracing::debug!(id = %created.id, "contact created");
                self.form.clear();
                self.refresh(client).await;
                Submit::Created
            }
            Err(e) => Submit::Failed(e.to_string()),
        };
        self.loading = false;
        outcome
    }

    /// Delete a contact by id, then re-fetch the list unconditionally.
    ///
    /// Callers are expected to have confirmed interactively first. A failed
    /// delete is not surfaced; the refreshed list is the only feedback.
    pub async fn delete(&mut self, client: &ContactClient, id: &ContactId) {
        if let Err(e) = client.delete_contact(id).await {
            tracing::warn!(error = %e, %id, "delete failed");
        }
        self.refresh(client).await;
    }

    /// The contacts whose name or email contains the search term,
    /// case-insensitively. Derived on every call, never stored; an empty
    /// term matches everything.
    pub fn filtered_contacts(&self) -> Vec<&Contact> {
        let term = self.search_term.to_lowercase();
        self.contacts
            .iter()
            .filter(|c| {
                c.name.to_lowercase().contains(&term) || c.email.to_lowercase().contains(&term)
            })
            .collect()
    }
}
