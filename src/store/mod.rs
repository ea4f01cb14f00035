//! # Reminder Store
//!
//! Abstraction over the persistent record store, narrowed to the two
//! operations the reminder subsystem performs: the unsent-candidate query
//! and the conditional flip of the `sent` flag. The production document
//! store lives in the CRUD layer and implements this trait; [`MemoryStore`]
//! backs tests and local development.
//!
//! - **Version**: 1.0.0
//! - **Since**: 1.0.0
//! - **Toggleable**: false

pub mod memory;

pub use memory::MemoryStore;

use async_trait::async_trait;
use thiserror::Error;

use crate::features::reminders::ReminderCandidate;

/// Storage faults surfaced to the dispatch cycle.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The candidate query failed; the whole cycle is aborted and retried
    /// on the next tick.
    #[error("candidate query failed: {0}")]
    Query(String),

    /// The conditional update failed. When this follows a successful send
    /// it is the one acknowledged duplicate-notification risk.
    #[error("conditional update failed: {0}")]
    Update(String),
}

/// The record store as seen by the reminder subsystem.
#[async_trait]
pub trait ReminderStore: Send + Sync {
    /// Returns every candidate with `sent == false` and a non-empty
    /// recipient address. Result ordering is unspecified; callers must not
    /// rely on it.
    async fn unsent_with_recipient(&self) -> Result<Vec<ReminderCandidate>, StoreError>;

    /// Compare-and-set on the `sent` flag: flips `false → true` only if the
    /// stored value is still `false`.
    ///
    /// - `Ok(true)` — this caller committed the flip.
    /// - `Ok(false)` — the guard failed: someone else already marked the
    ///   candidate. Callers treat this as "already handled", not an error.
    /// - `Err(StoreError::Update)` — the write itself failed; the flag is
    ///   unchanged.
    async fn mark_sent(&self, id: &str) -> Result<bool, StoreError>;
}
