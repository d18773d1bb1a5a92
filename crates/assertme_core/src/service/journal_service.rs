//! Journal use-case service and view synchronization.
//!
//! # Responsibility
//! - Validate drafts and route create/edit/delete/clear actions to the
//!   record store.
//! - Replace surface snapshots wholesale on activation and after successful
//!   mutations.
//! - Derive the truncated history-card preview from an entry.
//!
//! # Invariants
//! - A failed action leaves the caller's snapshot untouched.
//! - Destructive actions run only with an explicit confirmation; cancel
//!   performs no storage operation.
//! - Validation failures are raised before any storage call.

use crate::model::entry::{Entry, EntryDraft, EntryValidationError};
use crate::repo::entry_repo::{EntryRepository, RepoError, RepoResult};
use chrono::Utc;
use once_cell::sync::Lazy;
use regex::Regex;
use std::error::Error;
use std::fmt::{Display, Formatter};

static WHITESPACE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").expect("valid ws regex"));

/// Maximum preview length in characters before ellipsis truncation.
const PREVIEW_MAX_CHARS: usize = 100;

pub type ServiceResult<T> = Result<T, ServiceError>;

/// Service error for journal use-cases.
#[derive(Debug)]
pub enum ServiceError {
    /// Draft input failed required-field validation; nothing was stored.
    Validation(EntryValidationError),
    /// Persistence-layer failure.
    Repo(RepoError),
}

impl Display for ServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::Repo(err) => write!(f, "{err}"),
        }
    }
}

impl Error for ServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Repo(err) => Some(err),
        }
    }
}

impl From<EntryValidationError> for ServiceError {
    fn from(value: EntryValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<RepoError> for ServiceError {
    fn from(value: RepoError) -> Self {
        Self::Repo(value)
    }
}

/// Disposable per-screen snapshot of the persisted collection.
///
/// Surfaces never share state; each one is refreshed wholesale by
/// [`JournalService::activate`] and becomes stale when the other surface
/// mutates the collection.
#[derive(Debug, Clone, Default)]
pub struct Surface {
    entries: Vec<Entry>,
}

impl Surface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Entries as of the last successful refresh, newest first.
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }
}

/// Edit target captured when the user navigates from the history list to
/// the form view.
///
/// The index is valid only against the collection snapshot taken at that
/// navigation moment. If the other surface mutates the collection in the
/// meantime, the index goes stale and the save targets the wrong entry or
/// fails with a bounds error. There is no stable per-entry identifier;
/// last writer wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EditTarget {
    pub index: usize,
}

/// Prefilled edit state handed to the form view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditSession {
    pub target: EditTarget,
    pub draft: EntryDraft,
}

/// User's choice in a two-option destructive-action prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Confirmation {
    Confirmed,
    Cancelled,
}

/// Result of a confirmation-gated action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionOutcome {
    /// The storage operation ran and the snapshot was refreshed.
    Applied,
    /// The user cancelled; no storage operation, no state change.
    Cancelled,
}

/// Use-case service mediating UI surfaces and the record store.
pub struct JournalService<R: EntryRepository> {
    repo: R,
}

impl<R: EntryRepository> JournalService<R> {
    /// Creates a service using the provided record store implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Refreshes `surface` with a fresh load of the full collection.
    ///
    /// # Contract
    /// - The previous snapshot is replaced entirely, never merged.
    /// - On failure the previous snapshot stays untouched.
    pub fn activate(&self, surface: &mut Surface) -> ServiceResult<()> {
        surface.entries = self.repo.load()?;
        Ok(())
    }

    /// Starts editing the entry at `index`, re-reading storage for the
    /// prefill.
    ///
    /// # Errors
    /// - `ServiceError::Repo(RepoError::OutOfBounds)` when `index` no longer
    ///   exists in the current collection.
    pub fn begin_edit(&self, index: usize) -> ServiceResult<EditSession> {
        let entries = self.repo.load()?;
        let entry = entries.get(index).ok_or(RepoError::OutOfBounds {
            index,
            len: entries.len(),
        })?;
        Ok(EditSession {
            target: EditTarget { index },
            draft: entry.to_draft(),
        })
    }

    /// Saves `draft` as a new entry, or over an existing one when `target`
    /// is supplied.
    ///
    /// # Contract
    /// - Required-field validation runs first; on failure no storage call is
    ///   made and the snapshot is untouched.
    /// - Creates insert at the front of the collection; edits preserve the
    ///   original `created_at`.
    /// - On success the snapshot is replaced with the persisted collection.
    pub fn save(
        &self,
        surface: &mut Surface,
        draft: &EntryDraft,
        target: Option<EditTarget>,
    ) -> ServiceResult<()> {
        draft.validate()?;

        let entry = Entry::from_draft(draft, Utc::now());
        let entries = match target {
            Some(target) => self.repo.update_at(target.index, entry)?,
            None => self.repo.append(entry)?,
        };
        surface.entries = entries;
        Ok(())
    }

    /// Deletes the entry at `index` after an explicit confirmation.
    ///
    /// # Contract
    /// - `Confirmation::Cancelled` performs no storage operation and leaves
    ///   the snapshot untouched.
    /// - A stale `index` surfaces the bounds error; no partial mutation.
    pub fn delete(
        &self,
        surface: &mut Surface,
        index: usize,
        confirmation: Confirmation,
    ) -> ServiceResult<ActionOutcome> {
        if confirmation == Confirmation::Cancelled {
            return Ok(ActionOutcome::Cancelled);
        }

        surface.entries = self.repo.delete_at(index)?;
        Ok(ActionOutcome::Applied)
    }

    /// Removes the entire collection after an explicit confirmation.
    pub fn clear_all(
        &self,
        surface: &mut Surface,
        confirmation: Confirmation,
    ) -> ServiceResult<ActionOutcome> {
        if confirmation == Confirmation::Cancelled {
            return Ok(ActionOutcome::Cancelled);
        }

        self.repo.clear()?;
        surface.entries = Vec::new();
        Ok(ActionOutcome::Applied)
    }

    /// Loads the full collection without touching any surface.
    ///
    /// Convenience for callers that render outside the surface protocol.
    pub fn list(&self) -> RepoResult<Vec<Entry>> {
        self.repo.load()
    }
}

/// Derives the history-card preview from an entry.
///
/// Collapses runs of whitespace, truncates to [`PREVIEW_MAX_CHARS`]
/// characters and appends an ellipsis when text was cut. Returns `None`
/// for blank descriptions so the caller can render its own placeholder.
pub fn derive_history_preview(entry: &Entry) -> Option<String> {
    let collapsed = WHITESPACE_RE
        .replace_all(entry.what_happened.trim(), " ")
        .into_owned();
    if collapsed.is_empty() {
        return None;
    }

    if collapsed.chars().count() <= PREVIEW_MAX_CHARS {
        return Some(collapsed);
    }

    let mut truncated = collapsed
        .chars()
        .take(PREVIEW_MAX_CHARS)
        .collect::<String>();
    truncated.push_str("...");
    Some(truncated)
}
