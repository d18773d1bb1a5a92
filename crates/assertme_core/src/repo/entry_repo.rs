//! Entry collection store over key-value storage.
//!
//! # Responsibility
//! - Load, persist and mutate the one ordered collection of journal entries.
//! - Normalize both persisted schema generations into the current `Entry`
//!   shape at load time.
//!
//! # Invariants
//! - New entries are inserted at the front of the collection.
//! - `update_at` preserves the prior entry's `created_at` and stamps a fresh
//!   `updated_at`.
//! - An unparsable persisted blob is a hard error; it is never coerced into
//!   an empty collection, and the blob is left in place untouched.
//! - `clear` removes both schema-generation keys so cleared legacy data
//!   cannot resurrect through the fallback read.

use crate::model::entry::Entry;
use crate::storage::{StorageBackend, StorageError};
use chrono::Utc;
use log::{debug, info};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Key holding the current structured-schema collection.
const CURRENT_EVENTS_KEY: &str = "assertive_events";
/// Key holding the legacy plain-string-array collection.
const LEGACY_EVENTS_KEY: &str = "events";

pub type RepoResult<T> = Result<T, RepoError>;

/// Generic record store error for collection persistence operations.
#[derive(Debug)]
pub enum RepoError {
    /// Underlying key-value storage failed.
    Storage(StorageError),
    /// Persisted text exists under `key` but does not parse.
    Deserialize {
        key: &'static str,
        source: serde_json::Error,
    },
    /// The collection could not be serialized for writing.
    Serialize(serde_json::Error),
    /// Mutation target index is outside the loaded collection.
    OutOfBounds { index: usize, len: usize },
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Storage(err) => write!(f, "{err}"),
            Self::Deserialize { key, source } => {
                write!(f, "persisted collection under `{key}` is unreadable: {source}")
            }
            Self::Serialize(err) => write!(f, "failed to serialize collection: {err}"),
            Self::OutOfBounds { index, len } => {
                write!(f, "entry index {index} out of bounds for collection of {len}")
            }
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Storage(err) => Some(err),
            Self::Deserialize { source, .. } => Some(source),
            Self::Serialize(err) => Some(err),
            Self::OutOfBounds { .. } => None,
        }
    }
}

impl From<StorageError> for RepoError {
    fn from(value: StorageError) -> Self {
        Self::Storage(value)
    }
}

/// Record store interface for the journal collection.
///
/// Field-level required-ness is a caller concern; this layer enforces only
/// structural validity and index bounds.
pub trait EntryRepository {
    /// Loads the full persisted collection, newest first.
    ///
    /// Absent storage yields an empty collection; unreadable storage yields
    /// `RepoError::Deserialize`.
    fn load(&self) -> RepoResult<Vec<Entry>>;
    /// Serializes and writes the full collection in one storage write.
    fn replace_all(&self, entries: &[Entry]) -> RepoResult<()>;
    /// Inserts `entry` at the front and persists; returns the result.
    fn append(&self, entry: Entry) -> RepoResult<Vec<Entry>>;
    /// Overwrites the entry at `index`, preserving its original `created_at`
    /// and stamping `updated_at`; returns the resulting collection.
    fn update_at(&self, index: usize, entry: Entry) -> RepoResult<Vec<Entry>>;
    /// Removes the entry at `index`; later indices shift down by one.
    fn delete_at(&self, index: usize) -> RepoResult<Vec<Entry>>;
    /// Removes the entire persisted collection; a subsequent `load` is empty.
    fn clear(&self) -> RepoResult<()>;
}

/// Record store over any key-value storage backend.
pub struct KvEntryRepository<S: StorageBackend> {
    storage: S,
}

impl<S: StorageBackend> KvEntryRepository<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    fn load_current(&self) -> RepoResult<Option<Vec<Entry>>> {
        let Some(text) = self.storage.get(CURRENT_EVENTS_KEY)? else {
            return Ok(None);
        };
        let entries = serde_json::from_str(&text).map_err(|source| RepoError::Deserialize {
            key: CURRENT_EVENTS_KEY,
            source,
        })?;
        Ok(Some(entries))
    }

    fn load_legacy(&self) -> RepoResult<Option<Vec<Entry>>> {
        let Some(text) = self.storage.get(LEGACY_EVENTS_KEY)? else {
            return Ok(None);
        };
        let strings: Vec<String> =
            serde_json::from_str(&text).map_err(|source| RepoError::Deserialize {
                key: LEGACY_EVENTS_KEY,
                source,
            })?;
        Ok(Some(strings.into_iter().map(Entry::from_legacy).collect()))
    }
}

impl<S: StorageBackend> EntryRepository for KvEntryRepository<S> {
    fn load(&self) -> RepoResult<Vec<Entry>> {
        // The current key wins whenever it is present, even when it holds an
        // empty collection; the legacy key is only a fallback for installs
        // that never wrote the structured schema.
        let entries = match self.load_current()? {
            Some(entries) => entries,
            None => self.load_legacy()?.unwrap_or_default(),
        };
        debug!(
            "event=store_load module=repo status=ok count={}",
            entries.len()
        );
        Ok(entries)
    }

    fn replace_all(&self, entries: &[Entry]) -> RepoResult<()> {
        let text = serde_json::to_string(entries).map_err(RepoError::Serialize)?;
        self.storage.set(CURRENT_EVENTS_KEY, &text)?;
        Ok(())
    }

    fn append(&self, entry: Entry) -> RepoResult<Vec<Entry>> {
        let mut entries = self.load()?;
        entries.insert(0, entry);
        self.replace_all(&entries)?;
        info!(
            "event=store_append module=repo status=ok count={}",
            entries.len()
        );
        Ok(entries)
    }

    fn update_at(&self, index: usize, entry: Entry) -> RepoResult<Vec<Entry>> {
        let mut entries = self.load()?;
        if index >= entries.len() {
            return Err(RepoError::OutOfBounds {
                index,
                len: entries.len(),
            });
        }

        let mut updated = entry;
        updated.created_at = entries[index].created_at;
        updated.updated_at = Some(Utc::now());
        entries[index] = updated;

        self.replace_all(&entries)?;
        info!("event=store_update module=repo status=ok index={index}");
        Ok(entries)
    }

    fn delete_at(&self, index: usize) -> RepoResult<Vec<Entry>> {
        let mut entries = self.load()?;
        if index >= entries.len() {
            return Err(RepoError::OutOfBounds {
                index,
                len: entries.len(),
            });
        }

        entries.remove(index);
        self.replace_all(&entries)?;
        info!(
            "event=store_delete module=repo status=ok index={index} count={}",
            entries.len()
        );
        Ok(entries)
    }

    fn clear(&self) -> RepoResult<()> {
        self.storage.remove(CURRENT_EVENTS_KEY)?;
        self.storage.remove(LEGACY_EVENTS_KEY)?;
        info!("event=store_clear module=repo status=ok");
        Ok(())
    }
}
