//! HTTP routes for the chat page.

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use super::handlers::{get_chat_page, post_chat_message, ChatHandlers};

/// Headroom added on top of the picture cap for multipart framing and the
/// text fields that travel alongside the file.
const MULTIPART_OVERHEAD_BYTES: u64 = 64 * 1024;

/// Creates the chat router with both page endpoints.
///
/// The request body limit is raised above the configured picture cap so that
/// an oversized upload reaches the storage-level size check and gets a
/// precise rejection instead of a generic body-limit error.
pub fn chat_routes(handlers: ChatHandlers, max_upload_bytes: u64) -> Router {
    let body_limit = (max_upload_bytes + MULTIPART_OVERHEAD_BYTES) as usize;
    Router::new()
        .route("/", get(get_chat_page))
        .route("/", post(post_chat_message))
        .layer(DefaultBodyLimit::max(body_limit))
        .with_state(handlers)
}
