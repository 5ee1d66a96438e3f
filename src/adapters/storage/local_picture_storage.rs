//! Local Picture Storage Adapter - Implementation of PictureStorage.
//!
//! Writes uploaded profile pictures under a fixed directory, named
//! `{username}_{original filename}`. Unlike the original permissive upload
//! path, filenames are sanitized and size/type limits apply; overwrites are
//! still allowed (last write wins).

use async_trait::async_trait;
use std::path::PathBuf;
use tokio::fs;

use crate::ports::{PictureStorage, PictureStorageError, StoredPicture};

/// Local filesystem storage for uploaded profile pictures.
///
/// # Naming
///
/// ```text
/// {upload_dir}/{username}_{filename}     on disk
/// {public_prefix}/{username}_{filename}  on the page
/// ```
#[derive(Debug, Clone)]
pub struct LocalPictureStorage {
    /// Directory uploads are written into, e.g. `static/profile_pics`.
    upload_dir: PathBuf,
    /// Separator-prefixed URL prefix the page uses, e.g. `/static/profile_pics`.
    public_prefix: String,
    /// Maximum accepted upload size in bytes.
    max_bytes: u64,
    /// Accepted lowercase file extensions.
    allowed_extensions: Vec<String>,
}

impl LocalPictureStorage {
    pub fn new(
        upload_dir: impl Into<PathBuf>,
        public_prefix: impl Into<String>,
        max_bytes: u64,
        allowed_extensions: Vec<String>,
    ) -> Self {
        Self {
            upload_dir: upload_dir.into(),
            public_prefix: public_prefix.into(),
            max_bytes,
            allowed_extensions,
        }
    }

    /// Ensures the upload directory exists. Called once at startup.
    pub async fn ensure_upload_dir(&self) -> Result<(), PictureStorageError> {
        fs::create_dir_all(&self.upload_dir).await.map_err(|e| {
            PictureStorageError::io(format!(
                "Failed to create upload directory {}: {}",
                self.upload_dir.display(),
                e
            ))
        })
    }

    /// Reduces an untrusted upload filename to a safe final component.
    ///
    /// Path separators and parent references never survive: only the last
    /// component is kept and every character outside `[A-Za-z0-9._-]` is
    /// replaced with `_`.
    fn sanitize_filename(original: &str) -> Result<String, PictureStorageError> {
        let last_component = original
            .rsplit(['/', '\\'])
            .next()
            .unwrap_or_default()
            .trim();

        if last_component.is_empty() || last_component == "." || last_component == ".." {
            return Err(PictureStorageError::invalid_filename(
                "filename has no usable component",
            ));
        }

        let sanitized: String = last_component
            .chars()
            .map(|c| {
                if c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-') {
                    c
                } else {
                    '_'
                }
            })
            .collect();

        Ok(sanitized)
    }

    /// Same character whitelist for the username half of the target name.
    fn sanitize_username(username: &str) -> Result<String, PictureStorageError> {
        if username.is_empty() {
            return Err(PictureStorageError::invalid_filename("username is empty"));
        }
        Ok(username
            .chars()
            .map(|c| {
                if c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-') {
                    c
                } else {
                    '_'
                }
            })
            .collect())
    }

    fn check_extension(&self, filename: &str) -> Result<(), PictureStorageError> {
        let extension = filename
            .rsplit_once('.')
            .map(|(_, ext)| ext.to_lowercase())
            .unwrap_or_default();

        if self.allowed_extensions.iter().any(|e| *e == extension) {
            Ok(())
        } else {
            Err(PictureStorageError::UnsupportedType { extension })
        }
    }
}

#[async_trait]
impl PictureStorage for LocalPictureStorage {
    async fn save(
        &self,
        username: &str,
        original_filename: &str,
        bytes: &[u8],
    ) -> Result<StoredPicture, PictureStorageError> {
        let size = bytes.len() as u64;
        if size > self.max_bytes {
            return Err(PictureStorageError::FileTooLarge {
                size,
                max: self.max_bytes,
            });
        }

        let filename = Self::sanitize_filename(original_filename)?;
        self.check_extension(&filename)?;
        let username = Self::sanitize_username(username)?;

        let target_name = format!("{}_{}", username, filename);
        let fs_path = self.upload_dir.join(&target_name);

        self.ensure_upload_dir().await?;

        fs::write(&fs_path, bytes).await.map_err(|e| {
            PictureStorageError::io(format!("Failed to write {}: {}", fs_path.display(), e))
        })?;

        Ok(StoredPicture {
            fs_path,
            web_path: format!("{}/{}", self.public_prefix, target_name),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn create_storage() -> (LocalPictureStorage, TempDir) {
        let temp_dir = TempDir::new().unwrap();
        let storage = LocalPictureStorage::new(
            temp_dir.path().join("profile_pics"),
            "/static/profile_pics",
            1024,
            vec!["png".to_string(), "jpg".to_string(), "jpeg".to_string()],
        );
        (storage, temp_dir)
    }

    #[tokio::test]
    async fn save_writes_bytes_to_the_derived_path() {
        let (storage, temp) = create_storage();

        let stored = storage.save("bob", "pic.png", b"png-bytes").await.unwrap();

        assert_eq!(stored.web_path, "/static/profile_pics/bob_pic.png");
        assert_eq!(
            stored.fs_path,
            temp.path().join("profile_pics").join("bob_pic.png")
        );
        let written = std::fs::read(&stored.fs_path).unwrap();
        assert_eq!(written, b"png-bytes");
    }

    #[tokio::test]
    async fn save_creates_the_upload_directory() {
        let (storage, temp) = create_storage();
        assert!(!temp.path().join("profile_pics").exists());

        storage.save("bob", "pic.png", b"x").await.unwrap();

        assert!(temp.path().join("profile_pics").is_dir());
    }

    #[tokio::test]
    async fn save_overwrites_existing_file() {
        let (storage, _temp) = create_storage();

        storage.save("bob", "pic.png", b"first").await.unwrap();
        let stored = storage.save("bob", "pic.png", b"second").await.unwrap();

        assert_eq!(std::fs::read(&stored.fs_path).unwrap(), b"second");
    }

    #[tokio::test]
    async fn oversized_upload_is_rejected() {
        let (storage, _temp) = create_storage();
        let big = vec![0u8; 1025];

        let result = storage.save("bob", "pic.png", &big).await;

        assert!(matches!(
            result,
            Err(PictureStorageError::FileTooLarge { size: 1025, .. })
        ));
    }

    #[tokio::test]
    async fn unsupported_extension_is_rejected() {
        let (storage, _temp) = create_storage();

        let result = storage.save("bob", "run.exe", b"x").await;

        assert!(
            matches!(result, Err(PictureStorageError::UnsupportedType { extension }) if extension == "exe")
        );
    }

    #[tokio::test]
    async fn extension_check_is_case_insensitive() {
        let (storage, _temp) = create_storage();
        assert!(storage.save("bob", "pic.PNG", b"x").await.is_ok());
    }

    #[tokio::test]
    async fn path_traversal_is_stripped_to_the_final_component() {
        let (storage, temp) = create_storage();

        let stored = storage
            .save("bob", "../../etc/passwd.png", b"x")
            .await
            .unwrap();

        assert_eq!(stored.web_path, "/static/profile_pics/bob_passwd.png");
        assert_eq!(
            stored.fs_path,
            temp.path().join("profile_pics").join("bob_passwd.png")
        );
    }

    #[tokio::test]
    async fn odd_characters_are_replaced() {
        let (storage, _temp) = create_storage();

        let stored = storage.save("bob smith", "my pic!.png", b"x").await.unwrap();

        assert_eq!(stored.web_path, "/static/profile_pics/bob_smith_my_pic_.png");
    }

    #[tokio::test]
    async fn empty_filename_is_rejected() {
        let (storage, _temp) = create_storage();

        let result = storage.save("bob", "", b"x").await;

        assert!(matches!(
            result,
            Err(PictureStorageError::InvalidFilename { .. })
        ));
    }

    #[tokio::test]
    async fn dot_dot_filename_is_rejected() {
        let (storage, _temp) = create_storage();

        let result = storage.save("bob", "..", b"x").await;

        assert!(matches!(
            result,
            Err(PictureStorageError::InvalidFilename { .. })
        ));
    }
}
