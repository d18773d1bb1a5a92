//! Key-value storage backend abstraction.
//!
//! # Responsibility
//! - Define the minimal get/set/remove contract the record store persists
//!   through.
//! - Isolate SQLite details from collection serialization logic.
//!
//! # Invariants
//! - A `set` is observed all-or-nothing by a subsequent `get`.
//! - Backends never interpret the stored text; it is opaque at this layer.

use std::error::Error;
use std::fmt::{Display, Formatter};

mod sqlite;

pub use sqlite::SqliteStorage;

pub type StorageResult<T> = Result<T, StorageError>;

/// Failure reaching or mutating the underlying key-value storage.
#[derive(Debug)]
pub enum StorageError {
    /// SQLite-level transport failure.
    Db(crate::db::DbError),
    /// Backend could not be reached or refused the operation.
    Unavailable(String),
}

impl Display for StorageError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::Unavailable(message) => write!(f, "storage unavailable: {message}"),
        }
    }
}

impl Error for StorageError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::Unavailable(_) => None,
        }
    }
}

impl From<crate::db::DbError> for StorageError {
    fn from(value: crate::db::DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for StorageError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(crate::db::DbError::Sqlite(value))
    }
}

/// Minimal key-value contract used by the record store.
///
/// One key holds one serialized collection; backends store text verbatim.
pub trait StorageBackend {
    /// Returns the stored text for `key`, or `None` when the key is absent.
    fn get(&self, key: &str) -> StorageResult<Option<String>>;
    /// Stores `value` under `key`, replacing any previous text atomically.
    fn set(&self, key: &str, value: &str) -> StorageResult<()>;
    /// Removes `key`. Removing an absent key is not an error.
    fn remove(&self, key: &str) -> StorageResult<()>;
}
