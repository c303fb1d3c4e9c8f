//! In-memory contact store with optional JSON file persistence.
//!
//! Suitable as the single shared store behind the HTTP layer: a `HashMap`
//! guarded by a read-write lock, with `save_to_file`/`load_from_file` for
//! durability. When opened with a bound path, every mutation writes the
//! whole collection through to disk.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use async_trait::async_trait;
use serde::{Deserialize, Deserializer, Serialize};
use tokio::sync::RwLock;

use crate::clock::{Clock, SystemClock};
use crate::contact::{Contact, ContactId, ContactPatch, NewContact};
use crate::store::{ContactStore, errors::StoreError};
use crate::{Error, Result};

/// The current persistence file format version.
/// v0 indicates this is an unstable format subject to breaking changes.
const PERSISTENCE_VERSION: u8 = 0;

fn is_v0(v: &u8) -> bool {
    *v == 0
}

fn validate_persistence_version<'de, D>(deserializer: D) -> std::result::Result<u8, D::Error>
where
    D: Deserializer<'de>,
{
    let version = u8::deserialize(deserializer)?;
    if version != PERSISTENCE_VERSION {
        return Err(serde::de::Error::custom(format!(
            "unsupported persistence version {version}; only version {PERSISTENCE_VERSION} is supported"
        )));
    }
    Ok(version)
}

/// Serializable snapshot of the store for persistence.
#[derive(Serialize, Deserialize)]
struct SerializableStore {
    /// File format version for compatibility checking
    #[serde(
        rename = "_v",
        default,
        skip_serializing_if = "is_v0",
        deserialize_with = "validate_persistence_version"
    )]
    version: u8,
    contacts: HashMap<ContactId, Contact>,
}

/// A simple in-memory contact store using a `HashMap` for storage.
///
/// Provides basic persistence via [`save_to_file`](InMemory::save_to_file)
/// and [`load_from_file`](InMemory::load_from_file), serializing the
/// collection to JSON. [`open`](InMemory::open) binds a path so that every
/// mutation is written through to disk, which is how the server runs it.
#[derive(Debug)]
pub struct InMemory {
    /// Contacts keyed by id, with a read-write lock for concurrent access
    contacts: RwLock<HashMap<ContactId, Contact>>,
    /// Time source for `created_at` stamps
    clock: Arc<dyn Clock>,
    /// When set, mutations write the collection through to this file
    persist_path: Option<PathBuf>,
}

impl InMemory {
    /// Creates a new, empty store using the system clock, with no file
    /// persistence.
    pub fn new() -> Self {
        Self::with_clock(Arc::new(SystemClock))
    }

    /// Creates a new, empty store with an explicit time source.
    pub fn with_clock(clock: Arc<dyn Clock>) -> Self {
        Self {
            contacts: RwLock::new(HashMap::new()),
            clock,
            persist_path: None,
        }
    }

    /// Loads the store from `path` and binds it so that every subsequent
    /// mutation writes the collection back to the same file.
    ///
    /// A missing file opens as an empty store; a corrupt file is a
    /// deserialization error, which callers treat as startup-fatal.
    pub async fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let mut store = Self::load_from_file(&path).await?;
        store.persist_path = Some(path.as_ref().to_path_buf());
        Ok(store)
    }

    /// Number of contacts currently stored.
    pub async fn len(&self) -> usize {
        self.contacts.read().await.len()
    }

    /// True when no contacts are stored.
    pub async fn is_empty(&self) -> bool {
        self.contacts.read().await.is_empty()
    }

    /// Saves the entire collection to a file as JSON.
    pub async fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let contacts = self.contacts.read().await;
        Self::persist_to(path.as_ref(), &contacts).await
    }

    async fn persist_to(path: &Path, contacts: &HashMap<ContactId, Contact>) -> Result<()> {
        let snapshot = SerializableStore {
            version: PERSISTENCE_VERSION,
            contacts: contacts.clone(),
        };
        let json = serde_json::to_string_pretty(&snapshot)
            .map_err(|e| -> Error { StoreError::SerializationFailed { source: e }.into() })?;
        tokio::fs::write(path, json)
            .await
            .map_err(|e| -> Error { StoreError::FileIo { source: e }.into() })
    }

    /// Loads a store from a JSON file.
    ///
    /// If the file does not exist, a new, empty store is returned. The
    /// loaded store has no bound path; use [`open`](InMemory::open) for
    /// write-through behavior.
    pub async fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        match tokio::fs::read_to_string(path).await {
            Ok(json) => {
                let snapshot: SerializableStore = serde_json::from_str(&json)
                    .map_err(|e| -> Error {
                        StoreError::DeserializationFailed { source: e }.into()
                    })?;
                Ok(Self {
                    contacts: RwLock::new(snapshot.contacts),
                    clock: Arc::new(SystemClock),
                    persist_path: None,
                })
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(Self::new()),
            Err(e) => Err(StoreError::FileIo { source: e }.into()),
        }
    }

    /// Persists `contacts` when a path is bound. Called while the caller
    /// still holds the write lock, so a failed save can be rolled back
    /// before the mutation becomes visible to readers.
    async fn write_through(&self, contacts: &HashMap<ContactId, Contact>) -> Result<()> {
        if let Some(path) = &self.persist_path {
            Self::persist_to(path, contacts).await?;
        }
        Ok(())
    }
}

impl Default for InMemory {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ContactStore for InMemory {
    async fn list_all(&self) -> Result<Vec<Contact>> {
        let contacts = self.contacts.read().await;
        let mut all: Vec<Contact> = contacts.values().cloned().collect();
        // Most recent first; id breaks ties for a stable order
        all.sort_by(|a, b| {
            b.created_at
                .cmp(&a.created_at)
                .then_with(|| a.id.cmp(&b.id))
        });
        Ok(all)
    }

    async fn insert(&self, fields: NewContact) -> Result<Contact> {
        let contact = Contact {
            id: ContactId::generate(),
            name: fields.name,
            email: fields.email,
            phone: fields.phone,
            message: fields.message,
            created_at: self.clock.now(),
        };
        let mut contacts = self.contacts.write().await;
        contacts.insert(contact.id.clone(), contact.clone());
        if let Err(e) = self.write_through(&contacts).await {
            // Failed saves roll back, so readers never see an unpersisted record
            contacts.remove(&contact.id);
            return Err(e);
        }
        tracing::debug!(id = %contact.id, "inserted contact");
        Ok(contact)
    }

    async fn update_by_id(&self, id: &ContactId, patch: ContactPatch) -> Result<Contact> {
        let mut contacts = self.contacts.write().await;
        let (previous, updated) = {
            let contact = contacts
                .get_mut(id)
                .ok_or_else(|| StoreError::ContactNotFound { id: id.clone() })?;
            let previous = contact.clone();
            patch.apply(contact);
            (previous, contact.clone())
        };
        if let Err(e) = self.write_through(&contacts).await {
            contacts.insert(id.clone(), previous);
            return Err(e);
        }
        tracing::debug!(id = %id, "updated contact");
        Ok(updated)
    }

    async fn delete_by_id(&self, id: &ContactId) -> Result<Contact> {
        let mut contacts = self.contacts.write().await;
        let removed = contacts
            .remove(id)
            .ok_or_else(|| StoreError::ContactNotFound { id: id.clone() })?;
        if let Err(e) = self.write_through(&contacts).await {
            contacts.insert(id.clone(), removed);
            return Err(e);
        }
        tracing::debug!(id = %id, "deleted contact");
        Ok(removed)
    }
}
