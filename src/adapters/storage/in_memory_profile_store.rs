//! In-Memory Profile Store Adapter
//!
//! Holds the single shared profile slot behind a `tokio::sync::RwLock`.
//! Profile data does not survive a process restart.

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::Profile;
use crate::ports::{ProfileStore, ProfileStoreError};

/// In-memory storage for the shared profile record.
///
/// Concurrent POSTs serialize on the lock; last write wins, matching the
/// documented single-slot semantics.
#[derive(Debug, Clone, Default)]
pub struct InMemoryProfileStore {
    slot: Arc<RwLock<Option<Profile>>>,
}

impl InMemoryProfileStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Clear the slot (useful for tests).
    pub async fn clear(&self) {
        *self.slot.write().await = None;
    }
}

#[async_trait]
impl ProfileStore for InMemoryProfileStore {
    async fn current(&self) -> Result<Option<Profile>, ProfileStoreError> {
        Ok(self.slot.read().await.clone())
    }

    async fn replace(&self, profile: Profile) -> Result<(), ProfileStoreError> {
        *self.slot.write().await = Some(profile);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn store_starts_empty() {
        let store = InMemoryProfileStore::new();
        assert!(store.current().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn replace_then_current_round_trips() {
        let store = InMemoryProfileStore::new();
        let profile = Profile::new("alice", "Alice").unwrap();

        store.replace(profile.clone()).await.unwrap();

        assert_eq!(store.current().await.unwrap(), Some(profile));
    }

    #[tokio::test]
    async fn second_replace_overwrites_the_first() {
        let store = InMemoryProfileStore::new();
        store
            .replace(Profile::new("alice", "Alice").unwrap())
            .await
            .unwrap();
        store
            .replace(Profile::new("bob", "Bob").unwrap())
            .await
            .unwrap();

        let current = store.current().await.unwrap().unwrap();
        assert_eq!(current.username(), "bob");
    }

    #[tokio::test]
    async fn clones_share_the_same_slot() {
        let store = InMemoryProfileStore::new();
        let view = store.clone();

        store
            .replace(Profile::new("alice", "Alice").unwrap())
            .await
            .unwrap();

        assert!(view.current().await.unwrap().is_some());
    }

    #[tokio::test]
    async fn clear_empties_the_slot() {
        let store = InMemoryProfileStore::new();
        store
            .replace(Profile::new("alice", "Alice").unwrap())
            .await
            .unwrap();

        store.clear().await;

        assert!(store.current().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn concurrent_writers_leave_a_single_winner() {
        let store = InMemoryProfileStore::new();
        let store1 = store.clone();
        let store2 = store.clone();

        let h1 = tokio::spawn(async move {
            store1
                .replace(Profile::new("alice", "Alice").unwrap())
                .await
                .unwrap();
        });
        let h2 = tokio::spawn(async move {
            store2
                .replace(Profile::new("bob", "Bob").unwrap())
                .await
                .unwrap();
        });

        h1.await.unwrap();
        h2.await.unwrap();

        let winner = store.current().await.unwrap().unwrap();
        assert!(winner.username() == "alice" || winner.username() == "bob");
    }
}
