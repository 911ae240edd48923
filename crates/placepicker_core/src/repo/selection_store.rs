//! Persistent mirror of the user's picked place ids.
//!
//! # Responsibility
//! - Read and write the ordered id list under `SELECTED_PLACES_KEY`.
//!
//! # Invariants
//! - The stored list never contains duplicate ids.
//! - Every write replaces the whole JSON array.
//! - Reads fail soft: absent, unreadable or malformed state loads as empty.

use crate::storage::{KeyValueStorage, StorageError};
use log::warn;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Storage key holding the JSON-encoded selection.
pub const SELECTED_PLACES_KEY: &str = "selectedPlaces";

pub type StoreResult<T> = Result<T, StoreError>;

/// Selection write failure.
#[derive(Debug)]
pub enum StoreError {
    Storage(StorageError),
    Encode(serde_json::Error),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Storage(err) => write!(f, "{err}"),
            Self::Encode(err) => write!(f, "failed to encode selection: {err}"),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Storage(err) => Some(err),
            Self::Encode(err) => Some(err),
        }
    }
}

impl From<StorageError> for StoreError {
    fn from(value: StorageError) -> Self {
        Self::Storage(value)
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(value: serde_json::Error) -> Self {
        Self::Encode(value)
    }
}

/// Selection store over a key-value storage backend.
pub struct SelectionStore<S: KeyValueStorage> {
    storage: S,
}

impl<S: KeyValueStorage> SelectionStore<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    /// Returns the persisted ids, most recent first.
    pub fn load(&self) -> Vec<String> {
        let raw = match self.storage.get(SELECTED_PLACES_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Vec::new(),
            Err(err) => {
                warn!(
                    "event=selection_load module=repo status=error error_code=storage_read_failed error={}",
                    err
                );
                return Vec::new();
            }
        };

        match serde_json::from_str::<Vec<String>>(&raw) {
            Ok(ids) => ids,
            Err(err) => {
                warn!(
                    "event=selection_load module=repo status=error error_code=malformed_state error={}",
                    err
                );
                Vec::new()
            }
        }
    }

    /// Prepends `id` unless already present.
    pub fn add(&self, id: &str) -> StoreResult<()> {
        let ids = self.load();
        if ids.iter().any(|stored| stored == id) {
            return Ok(());
        }

        let mut next = Vec::with_capacity(ids.len() + 1);
        next.push(id.to_string());
        next.extend(ids);
        self.write(&next)
    }

    /// Removes `id` and rewrites the list, present or not.
    pub fn remove(&self, id: &str) -> StoreResult<()> {
        let next: Vec<String> = self
            .load()
            .into_iter()
            .filter(|stored| stored != id)
            .collect();
        self.write(&next)
    }

    /// Backing storage.
    pub fn storage(&self) -> &S {
        &self.storage
    }

    fn write(&self, ids: &[String]) -> StoreResult<()> {
        let encoded = serde_json::to_string(ids)?;
        self.storage.set(SELECTED_PLACES_KEY, &encoded)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::{SelectionStore, SELECTED_PLACES_KEY};
    use crate::storage::{KeyValueStorage, MemoryStorage};

    #[test]
    fn load_treats_non_array_json_as_empty() {
        let storage = MemoryStorage::with_entry(SELECTED_PLACES_KEY, "{\"a\":1}");
        let store = SelectionStore::new(storage);
        assert!(store.load().is_empty());
    }

    #[test]
    fn add_after_malformed_state_starts_fresh() {
        let storage = MemoryStorage::with_entry(SELECTED_PLACES_KEY, "[oops");
        let store = SelectionStore::new(storage);
        store.add("p1").unwrap();
        assert_eq!(
            store.storage().get(SELECTED_PLACES_KEY).unwrap().as_deref(),
            Some(r#"["p1"]"#)
        );
    }
}
