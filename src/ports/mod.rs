//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `ProfileStore` - the single shared profile slot
//! - `PictureStorage` - persistence for uploaded profile pictures
//! - `RandomSource` - seedable randomness for content selection

mod picture_storage;
mod profile_store;
mod random_source;

pub use picture_storage::{PictureStorage, PictureStorageError, StoredPicture};
pub use profile_store::{ProfileStore, ProfileStoreError};
pub use random_source::{random_pick, RandomSource};
