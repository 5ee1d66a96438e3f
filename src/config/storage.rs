//! Upload storage configuration

use serde::Deserialize;

use super::error::ValidationError;

/// Configuration for the profile picture upload directory.
#[derive(Debug, Clone, Deserialize)]
pub struct StorageConfig {
    /// Directory uploaded pictures are written into. Also the directory
    /// served back under the static mount.
    #[serde(default = "default_upload_dir")]
    pub upload_dir: String,

    /// Separator-prefixed URL prefix pages use to reference uploads.
    #[serde(default = "default_public_prefix")]
    pub public_prefix: String,

    /// Root directory of the static mount (`/static`).
    #[serde(default = "default_static_dir")]
    pub static_dir: String,

    /// Maximum accepted upload size in bytes.
    #[serde(default = "default_max_upload_bytes")]
    pub max_upload_bytes: u64,

    /// Accepted picture extensions, lowercase, comma-separated in the
    /// environment.
    #[serde(default = "default_allowed_extensions")]
    pub allowed_extensions: String,
}

impl StorageConfig {
    /// Allowed extensions as a vector.
    pub fn allowed_extensions_list(&self) -> Vec<String> {
        self.allowed_extensions
            .split(',')
            .map(|s| s.trim().to_lowercase())
            .filter(|s| !s.is_empty())
            .collect()
    }

    /// Validate storage configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.upload_dir.is_empty() {
            return Err(ValidationError::EmptyUploadDir);
        }
        if !self.public_prefix.starts_with('/') {
            return Err(ValidationError::InvalidPublicPrefix(
                self.public_prefix.clone(),
            ));
        }
        if self.max_upload_bytes == 0 {
            return Err(ValidationError::InvalidUploadLimit);
        }
        if self.allowed_extensions_list().is_empty() {
            return Err(ValidationError::NoAllowedExtensions);
        }
        Ok(())
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            upload_dir: default_upload_dir(),
            public_prefix: default_public_prefix(),
            static_dir: default_static_dir(),
            max_upload_bytes: default_max_upload_bytes(),
            allowed_extensions: default_allowed_extensions(),
        }
    }
}

fn default_upload_dir() -> String {
    "static/profile_pics".to_string()
}

fn default_public_prefix() -> String {
    "/static/profile_pics".to_string()
}

fn default_static_dir() -> String {
    "static".to_string()
}

fn default_max_upload_bytes() -> u64 {
    5 * 1024 * 1024
}

fn default_allowed_extensions() -> String {
    "png,jpg,jpeg,gif,webp".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_storage_defaults() {
        let config = StorageConfig::default();
        assert_eq!(config.upload_dir, "static/profile_pics");
        assert_eq!(config.public_prefix, "/static/profile_pics");
        assert_eq!(config.static_dir, "static");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_allowed_extensions_parsing() {
        let config = StorageConfig {
            allowed_extensions: "PNG, jpg ,webp".to_string(),
            ..Default::default()
        };
        assert_eq!(config.allowed_extensions_list(), vec!["png", "jpg", "webp"]);
    }

    #[test]
    fn test_prefix_must_start_with_separator() {
        let config = StorageConfig {
            public_prefix: "static/profile_pics".to_string(),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_zero_upload_limit_is_rejected() {
        let config = StorageConfig {
            max_upload_bytes: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_empty_extension_list_is_rejected() {
        let config = StorageConfig {
            allowed_extensions: " , ".to_string(),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }
}
