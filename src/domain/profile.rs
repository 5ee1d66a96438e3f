//! Profile - the single user-identity record held by the process.

use serde::{Deserialize, Serialize};

use super::errors::ValidationError;

/// The user profile shown on the chat page.
///
/// There is exactly one profile slot per process. A submission replaces the
/// whole record; there is no partial update and no delete.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    username: String,
    name: String,
    picture_path: Option<String>,
}

impl Profile {
    /// Creates a profile from the submitted form fields.
    ///
    /// Both fields must be non-empty; a submission that leaves either blank
    /// never reaches this constructor (the update is skipped instead).
    pub fn new(username: impl Into<String>, name: impl Into<String>) -> Result<Self, ValidationError> {
        let username = username.into();
        let name = name.into();

        if username.is_empty() {
            return Err(ValidationError::empty_field("username"));
        }
        if name.is_empty() {
            return Err(ValidationError::empty_field("name"));
        }

        Ok(Self {
            username,
            name,
            picture_path: None,
        })
    }

    /// Attaches the web path of an uploaded profile picture.
    pub fn with_picture(mut self, picture_path: impl Into<String>) -> Self {
        self.picture_path = Some(picture_path.into());
        self
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn picture_path(&self) -> Option<&str> {
        self.picture_path.as_deref()
    }
}
