//! Domain layer - pure types and logic, no I/O.

pub mod content;
pub mod errors;
pub mod knowledge;
pub mod profile;

pub use content::{ContentLibrary, DailyTips, REPLY_TEMPLATES};
pub use errors::ValidationError;
pub use knowledge::{KnowledgeBase, KnowledgeEntry};
pub use profile::Profile;
