//! Chat page HTTP adapter.

pub mod handlers;
pub mod render;
pub mod routes;

pub use handlers::ChatHandlers;
pub use routes::chat_routes;
