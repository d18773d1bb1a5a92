//! Record store layer: collection persistence contracts and KV implementation.
//!
//! # Responsibility
//! - Define the use-case oriented collection access contract.
//! - Own serialization, schema normalization and whole-collection writes.
//!
//! # Invariants
//! - Every mutation is a read-modify-write of the entire collection.
//! - Out-of-bounds mutations fail before any storage write.

pub mod entry_repo;
