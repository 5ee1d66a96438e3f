//! UpdateProfile - Command handler for the profile portion of a submission.

use std::sync::Arc;

use tracing::{debug, info};

use crate::domain::{Profile, ValidationError};
use crate::ports::{PictureStorage, PictureStorageError, ProfileStore, ProfileStoreError};

/// An uploaded profile picture, as received from the form.
#[derive(Debug, Clone)]
pub struct PictureUpload {
    pub original_filename: String,
    pub bytes: Vec<u8>,
}

/// Command carrying the optional profile fields of a chat submission.
#[derive(Debug, Clone, Default)]
pub struct UpdateProfileCommand {
    pub username: Option<String>,
    pub name: Option<String>,
    pub picture: Option<PictureUpload>,
}

/// Result of handling the command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpdateProfileOutcome {
    /// Both identity fields were present; the slot now holds this record.
    Updated(Profile),
    /// Username or name was missing; the slot was left untouched.
    Skipped,
}

/// Errors surfaced by the update flow.
#[derive(Debug, thiserror::Error)]
pub enum UpdateProfileError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Picture(#[from] PictureStorageError),

    #[error(transparent)]
    Store(#[from] ProfileStoreError),
}

/// Handler that overwrites the shared profile slot when a submission carries
/// a complete identity.
pub struct UpdateProfileHandler {
    store: Arc<dyn ProfileStore>,
    pictures: Arc<dyn PictureStorage>,
}

impl UpdateProfileHandler {
    pub fn new(store: Arc<dyn ProfileStore>, pictures: Arc<dyn PictureStorage>) -> Self {
        Self { store, pictures }
    }

    pub async fn handle(
        &self,
        cmd: UpdateProfileCommand,
    ) -> Result<UpdateProfileOutcome, UpdateProfileError> {
        // Only a submission with both fields replaces the slot; anything less
        // skips the update entirely (no partial write).
        let (username, name) = match (
            cmd.username.filter(|u| !u.is_empty()),
            cmd.name.filter(|n| !n.is_empty()),
        ) {
            (Some(username), Some(name)) => (username, name),
            _ => {
                debug!("Submission without complete identity, profile unchanged");
                return Ok(UpdateProfileOutcome::Skipped);
            }
        };

        let mut profile = Profile::new(username, name)?;

        if let Some(picture) = cmd.picture {
            let stored = self
                .pictures
                .save(
                    profile.username(),
                    &picture.original_filename,
                    &picture.bytes,
                )
                .await?;
            info!(path = %stored.web_path, "Stored profile picture");
            profile = profile.with_picture(stored.web_path);
        }

        self.store.replace(profile.clone()).await?;
        info!(username = %profile.username(), "Profile replaced");

        Ok(UpdateProfileOutcome::Updated(profile))
    }
}
