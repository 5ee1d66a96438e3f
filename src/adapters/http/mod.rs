//! HTTP adapters - the web surface of the chat application.

pub mod chat;

// Re-export key types for convenience
pub use chat::chat_routes;
pub use chat::ChatHandlers;
