//! Core use-case services.
//!
//! # Responsibility
//! - Bridge user-facing actions to record store calls.
//! - Keep each UI surface's snapshot consistent via reload-on-activation.
//!
//! # See also
//! - `crate::repo` for the persistence contract these services orchestrate.

pub mod journal_service;
