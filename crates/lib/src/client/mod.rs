//! The contact client: an HTTP wrapper around the API plus the form/list
//! state machine a UI drives.
//!
//! [`ContactClient`] is the transport (reqwest, JSON in and out, no timeout,
//! no retry). [`ClientState`] mirrors the remote list and a draft form, and
//! derives search filtering locally; every mutation is followed by a full
//! re-fetch rather than a local patch.

mod errors;
mod form;
mod state;

pub use errors::ClientError;
pub use form::ContactForm;
pub use state::{ClientState, Submit, OFFLINE_MESSAGE};

use crate::Result;
use crate::api::ErrorBody;
use crate::contact::{Contact, ContactId, ContactPatch, NewContact};

/// HTTP client bound to one contact API base URL.
pub struct ContactClient {
    http: reqwest::Client,
    base_url: String,
}

impl ContactClient {
    /// Create a client for the API at `base_url`, e.g.
    /// `http://127.0.0.1:5000`.
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            http: reqwest::Client::new(),
            base_url,
        }
    }

    fn contacts_url(&self) -> String {
        format!("{}/api/contacts", self.base_url)
    }

    fn contact_url(&self, id: &ContactId) -> String {
        format!("{}/api/contacts/{id}", self.base_url)
    }

    async fn send(&self, request: reqwest::RequestBuilder, url: &str) -> Result<reqwest::Response> {
        let response = request.send().await.map_err(|e| ClientError::Connection {
            url: url.to_string(),
            reason: e.to_string(),
        })?;

        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        // Failing endpoints answer with the {error, details?} envelope;
        // fall back to the status line when the body is something else.
        let message = match response.json::<ErrorBody>().await {
            Ok(body) => body.error,
            Err(_) => status.to_string(),
        };
        Err(ClientError::Api {
            status: status.as_u16(),
            message,
        }
        .into())
    }

    async fn decode<T: serde::de::DeserializeOwned>(response: reqwest::Response) -> Result<T> {
        response
            .json()
            .await
            .map_err(|e| {
                ClientError::Decode {
                    reason: e.to_string(),
                }
                .into()
            })
    }

    /// `GET /` - liveness text.
    pub async fn liveness(&self) -> Result<String> {
        let url = format!("{}/", self.base_url);
        let response = self.send(self.http.get(&url), &url).await?;
        response.text().await.map_err(|e| {
            ClientError::Decode {
                reason: e.to_string(),
            }
            .into()
        })
    }

    /// `GET /api/contacts` - the full collection, most recent first.
    pub async fn fetch_contacts(&self) -> Result<Vec<Contact>> {
        let url = self.contacts_url();
        let response = self.send(self.http.get(&url), &url).await?;
        Self::decode(response).await
    }

    /// `POST /api/contacts` - create a contact, returning the stored record.
    pub async fn create_contact(&self, fields: &NewContact) -> Result<Contact> {
        let url = self.contacts_url();
        let response = self.send(self.http.post(&url).json(fields), &url).await?;
        Self::decode(response).await
    }

    /// `PUT /api/contacts/{id}` - apply a partial update.
    pub async fn update_contact(&self, id: &ContactId, patch: &ContactPatch) -> Result<Contact> {
        let url = self.contact_url(id);
        let response = self.send(self.http.put(&url).json(patch), &url).await?;
        Self::decode(response).await
    }

    /// `DELETE /api/contacts/{id}`.
    pub async fn delete_contact(&self, id: &ContactId) -> Result<()> {
        let url = self.contact_url(id);
        self.send(self.http.delete(&url), &url).await?;
        Ok(())
    }
}
