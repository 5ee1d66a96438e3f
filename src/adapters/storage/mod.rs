//! Storage adapters.

mod in_memory_profile_store;
mod local_picture_storage;

pub use in_memory_profile_store::InMemoryProfileStore;
pub use local_picture_storage::LocalPictureStorage;
