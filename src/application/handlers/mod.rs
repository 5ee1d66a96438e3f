//! Application handlers for the chat page.

mod compose_reply;
mod pick_daily_tips;
mod update_profile;

pub use compose_reply::{ComposeReplyCommand, ComposeReplyHandler};
pub use pick_daily_tips::PickDailyTipsHandler;
pub use update_profile::{
    PictureUpload, UpdateProfileCommand, UpdateProfileError, UpdateProfileHandler,
    UpdateProfileOutcome,
};
