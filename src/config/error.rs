//! Configuration error types

use thiserror::Error;

/// Errors raised while loading configuration from the environment.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to load configuration: {0}")]
    Load(#[from] config::ConfigError),
}

/// Errors raised by semantic validation of loaded configuration.
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Server port must be non-zero")]
    InvalidPort,

    #[error("Request timeout must be between 1 and 300 seconds")]
    InvalidTimeout,

    #[error("Invalid host address: {0}")]
    InvalidHost(String),

    #[error("Upload directory cannot be empty")]
    EmptyUploadDir,

    #[error("Public prefix must start with '/': {0}")]
    InvalidPublicPrefix(String),

    #[error("Maximum upload size must be non-zero")]
    InvalidUploadLimit,

    #[error("At least one allowed picture extension is required")]
    NoAllowedExtensions,
}
