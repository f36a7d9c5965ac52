//! Repository Layer
//!
//! Data access abstractions and implementations.

mod traits;
mod remote_item_repo;
mod memory_item_repo;
mod prefs_store;


pub use traits::{ItemRepository, PreferenceStore};
pub use remote_item_repo::RemoteItemRepository;
pub use memory_item_repo::MemoryItemRepository;
pub use prefs_store::{JsonPreferenceStore, MemoryPreferenceStore, PREFS_KEY};
