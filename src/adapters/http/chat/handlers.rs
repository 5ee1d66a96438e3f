//! HTTP handlers for the chat page.

use std::sync::Arc;

use axum::{
    extract::{Multipart, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use tracing::{error, warn};

use crate::application::handlers::{
    ComposeReplyCommand, ComposeReplyHandler, PickDailyTipsHandler, PictureUpload,
    UpdateProfileCommand, UpdateProfileError, UpdateProfileHandler,
};
use crate::ports::ProfileStore;

use super::render::{render_chat_page, PageContext};

// ════════════════════════════════════════════════════════════════════════════
// Handler state
// ════════════════════════════════════════════════════════════════════════════

#[derive(Clone)]
pub struct ChatHandlers {
    profile_store: Arc<dyn ProfileStore>,
    update_profile: Arc<UpdateProfileHandler>,
    compose_reply: Arc<ComposeReplyHandler>,
    pick_tips: Arc<PickDailyTipsHandler>,
}

impl ChatHandlers {
    pub fn new(
        profile_store: Arc<dyn ProfileStore>,
        update_profile: Arc<UpdateProfileHandler>,
        compose_reply: Arc<ComposeReplyHandler>,
        pick_tips: Arc<PickDailyTipsHandler>,
    ) -> Self {
        Self {
            profile_store,
            update_profile,
            compose_reply,
            pick_tips,
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// HTTP handlers
// ════════════════════════════════════════════════════════════════════════════

/// GET / - Render the chat page with fresh tips and no reply.
pub async fn get_chat_page(State(handlers): State<ChatHandlers>) -> Response {
    let profile = match handlers.profile_store.current().await {
        Ok(profile) => profile,
        Err(e) => {
            error!(error = %e, "Failed to read profile");
            return internal_error();
        }
    };

    let page = render_chat_page(&PageContext {
        profile,
        reply: None,
        tips: handlers.pick_tips.handle(),
    });
    Html(page).into_response()
}

/// POST / - Accept a chat submission, update the profile, compose a reply,
/// and re-render the page.
pub async fn post_chat_message(
    State(handlers): State<ChatHandlers>,
    multipart: Multipart,
) -> Response {
    let form = match ChatForm::from_multipart(multipart).await {
        Ok(form) => form,
        Err(response) => return response,
    };

    let message = match form.message {
        Some(message) if !message.is_empty() => message,
        _ => {
            warn!("Submission without a message");
            return bad_request("The 'message' field is required");
        }
    };

    if let Err(e) = handlers
        .update_profile
        .handle(UpdateProfileCommand {
            username: form.username,
            name: form.name,
            picture: form.picture,
        })
        .await
    {
        return handle_update_error(e);
    }

    let reply = match handlers.compose_reply.handle(ComposeReplyCommand { message }) {
        Ok(reply) => reply,
        Err(e) => {
            warn!(error = %e, "Invalid message");
            return bad_request(&e.to_string());
        }
    };

    let profile = match handlers.profile_store.current().await {
        Ok(profile) => profile,
        Err(e) => {
            error!(error = %e, "Failed to read profile");
            return internal_error();
        }
    };

    let page = render_chat_page(&PageContext {
        profile,
        reply: Some(reply),
        tips: handlers.pick_tips.handle(),
    });
    Html(page).into_response()
}

// ════════════════════════════════════════════════════════════════════════════
// Form parsing
// ════════════════════════════════════════════════════════════════════════════

/// The parsed multipart submission.
#[derive(Debug, Default)]
struct ChatForm {
    message: Option<String>,
    username: Option<String>,
    name: Option<String>,
    picture: Option<PictureUpload>,
}

impl ChatForm {
    /// Collects the known form fields; unknown fields are ignored.
    async fn from_multipart(mut multipart: Multipart) -> Result<Self, Response> {
        let mut form = ChatForm::default();

        loop {
            let field = match multipart.next_field().await {
                Ok(Some(field)) => field,
                Ok(None) => break,
                Err(e) => {
                    warn!(error = %e, "Malformed multipart body");
                    return Err(bad_request("Malformed form submission"));
                }
            };

            let Some(name) = field.name().map(str::to_owned) else {
                continue;
            };

            match name.as_str() {
                "message" => form.message = Some(read_text(field).await?),
                "username" => form.username = Some(read_text(field).await?),
                "name" => form.name = Some(read_text(field).await?),
                "profile_pic" => {
                    let filename = field.file_name().map(str::to_owned).unwrap_or_default();
                    let bytes = field.bytes().await.map_err(|e| {
                        warn!(error = %e, "Failed to read uploaded file");
                        bad_request("Malformed file upload")
                    })?;
                    // A file input left empty still submits a nameless,
                    // zero-byte part; treat that as no upload.
                    if !filename.is_empty() && !bytes.is_empty() {
                        form.picture = Some(PictureUpload {
                            original_filename: filename,
                            bytes: bytes.to_vec(),
                        });
                    }
                }
                _ => {}
            }
        }

        Ok(form)
    }
}

async fn read_text(field: axum::extract::multipart::Field<'_>) -> Result<String, Response> {
    field.text().await.map_err(|e| {
        warn!(error = %e, "Failed to read form field");
        bad_request("Malformed form submission")
    })
}

// ════════════════════════════════════════════════════════════════════════════
// Error handling
// ════════════════════════════════════════════════════════════════════════════

fn handle_update_error(error: UpdateProfileError) -> Response {
    match &error {
        UpdateProfileError::Picture(e) if e.is_client_fault() => {
            warn!(error = %e, "Rejected profile picture");
            bad_request(&e.to_string())
        }
        UpdateProfileError::Validation(e) => {
            warn!(error = %e, "Invalid profile fields");
            bad_request(&e.to_string())
        }
        _ => {
            error!(error = %error, "Profile update failed");
            internal_error()
        }
    }
}

fn bad_request(message: &str) -> Response {
    (StatusCode::BAD_REQUEST, message.to_string()).into_response()
}

fn internal_error() -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        "An unexpected error occurred".to_string(),
    )
        .into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ValidationError;
    use crate::ports::PictureStorageError;

    #[test]
    fn client_fault_picture_error_maps_to_400() {
        let error = UpdateProfileError::Picture(PictureStorageError::UnsupportedType {
            extension: "exe".to_string(),
        });
        let response = handle_update_error(error);
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn io_picture_error_maps_to_500() {
        let error = UpdateProfileError::Picture(PictureStorageError::io("disk full"));
        let response = handle_update_error(error);
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn validation_error_maps_to_400() {
        let error = UpdateProfileError::Validation(ValidationError::empty_field("username"));
        let response = handle_update_error(error);
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
