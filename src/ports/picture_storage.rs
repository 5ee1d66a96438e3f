//! Picture Storage Port - Filesystem operations for uploaded pictures.
//!
//! Adapters persist uploaded profile-picture bytes and report back the web
//! path the page embeds. The deterministic naming scheme
//! `{username}_{original filename}` is part of the contract.

use async_trait::async_trait;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while storing an uploaded picture
#[derive(Debug, Error)]
pub enum PictureStorageError {
    #[error("Uploaded file is too large: {size} bytes (limit {max})")]
    FileTooLarge { size: u64, max: u64 },

    #[error("Unsupported picture type: '{extension}'")]
    UnsupportedType { extension: String },

    #[error("Invalid upload filename: {reason}")]
    InvalidFilename { reason: String },

    #[error("IO error: {0}")]
    Io(String),
}

impl PictureStorageError {
    pub fn io(message: impl Into<String>) -> Self {
        PictureStorageError::Io(message.into())
    }

    pub fn invalid_filename(reason: impl Into<String>) -> Self {
        PictureStorageError::InvalidFilename {
            reason: reason.into(),
        }
    }

    /// True for errors caused by the upload itself rather than the host.
    pub fn is_client_fault(&self) -> bool {
        !matches!(self, PictureStorageError::Io(_))
    }
}

/// A persisted picture: where it landed on disk and how the page links it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredPicture {
    /// Filesystem location of the written file.
    pub fs_path: PathBuf,
    /// Separator-prefixed path the rendered page references,
    /// e.g. `/static/profile_pics/bob_pic.png`.
    pub web_path: String,
}

/// Port for persisting uploaded profile pictures.
///
/// # Contract
///
/// Implementations must:
/// - Derive the target name as `{username}_{original filename}` after
///   sanitizing both parts
/// - Validate size and extension before writing
/// - Create the upload directory if it doesn't exist
/// - Allow overwriting an existing file (last write wins)
#[async_trait]
pub trait PictureStorage: Send + Sync {
    /// Persists the uploaded bytes and returns where they can be reached.
    async fn save(
        &self,
        username: &str,
        original_filename: &str,
        bytes: &[u8],
    ) -> Result<StoredPicture, PictureStorageError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_too_large_reports_both_sizes() {
        let err = PictureStorageError::FileTooLarge {
            size: 9_000_000,
            max: 5_242_880,
        };
        assert!(err.to_string().contains("9000000"));
        assert!(err.to_string().contains("5242880"));
    }

    #[test]
    fn client_fault_classification() {
        assert!(PictureStorageError::UnsupportedType {
            extension: "exe".to_string()
        }
        .is_client_fault());
        assert!(PictureStorageError::invalid_filename("empty").is_client_fault());
        assert!(!PictureStorageError::io("disk full").is_client_fault());
    }
}
