//! Contact persistence.
//!
//! The [`ContactStore`] trait is the seam between the HTTP layer and
//! storage. The shipped implementation is [`InMemory`], a `HashMap` behind a
//! read-write lock that can write through to a JSON file.

mod errors;
mod memory;

pub use errors::StoreError;
pub use memory::InMemory;

use async_trait::async_trait;

use crate::Result;
use crate::contact::{Contact, ContactId, ContactPatch, NewContact};

/// Durable persistence of contact records with unique-id lookup.
///
/// Each operation is atomic on its own; the API layer adds no locking or
/// transactions on top. Concurrent updates to the same record are
/// last-write-wins with no conflict detection.
#[async_trait]
pub trait ContactStore: Send + Sync {
    /// All contacts, sorted by creation time descending (most recent first).
    /// Empty when none exist.
    async fn list_all(&self) -> Result<Vec<Contact>>;

    /// Assign a fresh unique id and the current timestamp, persist the
    /// record, and return it as stored.
    async fn insert(&self, fields: NewContact) -> Result<Contact>;

    /// Merge `patch` into the record identified by `id` and return the
    /// updated record, or [`StoreError::ContactNotFound`] if no such record
    /// exists.
    async fn update_by_id(&self, id: &ContactId, patch: ContactPatch) -> Result<Contact>;

    /// Remove and return the record identified by `id`, or
    /// [`StoreError::ContactNotFound`] if none existed.
    async fn delete_by_id(&self, id: &ContactId) -> Result<Contact>;
}
