//! Profile Store Port - Interface for the shared profile slot.
//!
//! The application holds exactly one profile record. This port makes that
//! slot an explicitly passed dependency instead of process-global state, so
//! concurrent requests go through a well-defined synchronization point.

use async_trait::async_trait;

use crate::domain::Profile;

/// Errors that can occur during profile store operations
#[derive(Debug, thiserror::Error)]
pub enum ProfileStoreError {
    #[error("Profile store backend error: {0}")]
    Backend(String),
}

/// Port for reading and replacing the shared profile record.
///
/// # Contract
///
/// - `current` returns the record as of the call; it never creates one.
/// - `replace` overwrites the whole slot. Last write wins; there is no
///   partial update and no delete.
#[async_trait]
pub trait ProfileStore: Send + Sync {
    /// Returns the current profile, or `None` before the first submission.
    async fn current(&self) -> Result<Option<Profile>, ProfileStoreError>;

    /// Overwrites the slot with a new profile record.
    async fn replace(&self, profile: Profile) -> Result<(), ProfileStoreError>;
}
