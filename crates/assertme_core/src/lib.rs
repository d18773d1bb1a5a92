//! Core domain logic for AssertMe.
//! This crate is the single source of truth for journal persistence
//! invariants; screens and navigation live outside and call in through
//! the service layer.

pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;
pub mod storage;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::entry::{Entry, EntryDraft, EntryValidationError};
pub use repo::entry_repo::{EntryRepository, KvEntryRepository, RepoError, RepoResult};
pub use service::journal_service::{
    derive_history_preview, ActionOutcome, Confirmation, EditSession, EditTarget, JournalService,
    ServiceError, ServiceResult, Surface,
};
pub use storage::{SqliteStorage, StorageBackend, StorageError, StorageResult};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
