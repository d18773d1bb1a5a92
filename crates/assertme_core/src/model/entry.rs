//! Journal entry domain model.
//!
//! # Responsibility
//! - Define the canonical persisted record for one reflection.
//! - Provide draft input, required-field validation and legacy normalization.
//!
//! # Invariants
//! - `created_at` is set once at creation and never changed by edits.
//! - `updated_at` is refreshed on every successful edit.
//! - Legacy records keep absent timestamps; none are fabricated on load.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// One persisted reflection about an emotionally difficult situation.
///
/// Serialized field names are fixed camelCase because pre-existing installs
/// already hold blobs written with these names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Entry {
    /// Description of the situation. Required at save time.
    #[serde(default)]
    pub what_happened: String,
    /// Feelings and bodily reactions. Required at save time.
    #[serde(default)]
    pub what_i_felt: String,
    /// Actual behavior in the situation. Required at save time.
    #[serde(default)]
    pub what_i_done: String,
    /// True desires. May stay empty.
    #[serde(default)]
    pub what_i_wanted: String,
    /// What the user was trying to avoid. May stay empty.
    #[serde(default)]
    pub what_i_avoided: String,
    /// Creation timestamp. Absent for entries migrated from the legacy
    /// string-only schema.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    /// Last-edit timestamp. Absent for legacy-migrated entries that were
    /// never edited.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Entry {
    /// Builds an entry from validated draft input.
    ///
    /// # Contract
    /// - Does not run required-field validation; callers validate the draft
    ///   before constructing the entry.
    /// - `created_at` and `updated_at` both start at `now`.
    pub fn from_draft(draft: &EntryDraft, now: DateTime<Utc>) -> Self {
        Self {
            what_happened: draft.what_happened.clone(),
            what_i_felt: draft.what_i_felt.clone(),
            what_i_done: draft.what_i_done.clone(),
            what_i_wanted: draft.what_i_wanted.clone(),
            what_i_avoided: draft.what_i_avoided.clone(),
            created_at: Some(now),
            updated_at: Some(now),
        }
    }

    /// Normalizes one legacy string-only record into the current shape.
    ///
    /// The legacy schema stored only the situation description, so every
    /// other field stays empty and both timestamps stay absent.
    pub fn from_legacy(what_happened: impl Into<String>) -> Self {
        Self {
            what_happened: what_happened.into(),
            what_i_felt: String::new(),
            what_i_done: String::new(),
            what_i_wanted: String::new(),
            what_i_avoided: String::new(),
            created_at: None,
            updated_at: None,
        }
    }

    /// Returns a draft prefilled with this entry's text fields.
    ///
    /// Used by the edit flow to populate the form view.
    pub fn to_draft(&self) -> EntryDraft {
        EntryDraft {
            what_happened: self.what_happened.clone(),
            what_i_felt: self.what_i_felt.clone(),
            what_i_done: self.what_i_done.clone(),
            what_i_wanted: self.what_i_wanted.clone(),
            what_i_avoided: self.what_i_avoided.clone(),
        }
    }
}

/// Unsaved form input for a journal entry.
///
/// Drafts are plain values owned by one surface; resetting the form is
/// `EntryDraft::default()` and has no storage effect.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EntryDraft {
    pub what_happened: String,
    pub what_i_felt: String,
    pub what_i_done: String,
    pub what_i_wanted: String,
    pub what_i_avoided: String,
}

impl EntryDraft {
    /// Checks that the required subset of fields is non-blank.
    ///
    /// # Contract
    /// - Required fields are the first three; blank means empty after trim.
    /// - Returns the first blank field found, in form order.
    pub fn validate(&self) -> Result<(), EntryValidationError> {
        for (field, value) in [
            ("whatHappened", &self.what_happened),
            ("whatIFelt", &self.what_i_felt),
            ("whatIDone", &self.what_i_done),
        ] {
            if value.trim().is_empty() {
                return Err(EntryValidationError::BlankRequiredField(field));
            }
        }
        Ok(())
    }
}

/// Validation failure for draft input, raised before any storage call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryValidationError {
    /// A required field is empty or whitespace-only. Carries the wire name.
    BlankRequiredField(&'static str),
}

impl Display for EntryValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::BlankRequiredField(field) => {
                write!(f, "required field `{field}` must not be blank")
            }
        }
    }
}

impl Error for EntryValidationError {}
