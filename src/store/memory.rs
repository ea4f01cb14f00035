//! In-memory reminder store.
//!
//! DashMap-backed implementation of [`ReminderStore`] used by tests and by
//! `reminderd` until it is wired to the real record store. The shard lock
//! held by `get_mut` makes `mark_sent` a true compare-and-set.

use async_trait::async_trait;
use dashmap::DashMap;

use super::{ReminderStore, StoreError};
use crate::features::reminders::ReminderCandidate;

/// Thread-safe in-memory candidate store.
#[derive(Default)]
pub struct MemoryStore {
    records: DashMap<String, ReminderCandidate>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or replaces a candidate, keyed by its id.
    pub fn insert(&self, candidate: ReminderCandidate) {
        self.records.insert(candidate.id.clone(), candidate);
    }

    /// Snapshot of a single candidate.
    pub fn get(&self, id: &str) -> Option<ReminderCandidate> {
        self.records.get(id).map(|entry| entry.value().clone())
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[async_trait]
impl ReminderStore for MemoryStore {
    async fn unsent_with_recipient(&self) -> Result<Vec<ReminderCandidate>, StoreError> {
        Ok(self
            .records
            .iter()
            .filter(|entry| !entry.sent && entry.has_recipient())
            .map(|entry| entry.value().clone())
            .collect())
    }

    async fn mark_sent(&self, id: &str) -> Result<bool, StoreError> {
        let mut entry = self
            .records
            .get_mut(id)
            .ok_or_else(|| StoreError::Update(format!("unknown candidate {id}")))?;

        if entry.sent {
            return Ok(false);
        }
        entry.sent = true;
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn candidate(recipient: Option<&str>) -> ReminderCandidate {
        ReminderCandidate::new_deadline("Ship v2", "2025-01-11", recipient.map(String::from))
    }

    #[tokio::test]
    async fn test_query_filters_sent_and_recipientless() {
        let store = MemoryStore::new();

        let eligible = candidate(Some("user@example.com"));
        let eligible_id = eligible.id.clone();
        store.insert(eligible);

        store.insert(candidate(None));
        store.insert(candidate(Some("")));

        let mut already_sent = candidate(Some("other@example.com"));
        already_sent.sent = true;
        store.insert(already_sent);

        let selected = store.unsent_with_recipient().await.unwrap();
        assert_eq!(selected.len(), 1);
        assert_eq!(selected[0].id, eligible_id);
    }

    #[tokio::test]
    async fn test_query_empty_store_returns_empty_vec() {
        let store = MemoryStore::new();
        assert!(store.unsent_with_recipient().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_mark_sent_only_first_caller_wins() {
        let store = MemoryStore::new();
        let c = candidate(Some("user@example.com"));
        let id = c.id.clone();
        store.insert(c);

        assert!(store.mark_sent(&id).await.unwrap());
        // Guard failure, not an error: the flag already flipped
        assert!(!store.mark_sent(&id).await.unwrap());
        assert!(store.get(&id).unwrap().sent);
    }

    #[tokio::test]
    async fn test_mark_sent_unknown_id_is_update_error() {
        let store = MemoryStore::new();
        match store.mark_sent("no-such-id").await {
            Err(StoreError::Update(msg)) => assert!(msg.contains("no-such-id")),
            other => panic!("expected update error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_concurrent_mark_sent_has_single_winner() {
        use std::sync::Arc;

        let store = Arc::new(MemoryStore::new());
        let c = candidate(Some("user@example.com"));
        let id = c.id.clone();
        store.insert(c);

        let mut handles = Vec::new();
        for _ in 0..8 {
            let store = Arc::clone(&store);
            let id = id.clone();
            handles.push(tokio::spawn(async move {
                store.mark_sent(&id).await.unwrap()
            }));
        }

        let mut wins = 0;
        for handle in handles {
            if handle.await.unwrap() {
                wins += 1;
            }
        }
        assert_eq!(wins, 1);
    }
}
