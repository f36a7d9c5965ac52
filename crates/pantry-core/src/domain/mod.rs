//! Domain Layer
//!
//! Contains all domain entities and core abstractions.
//! This layer has NO I/O (serde and chrono only).

mod entity;
mod pantry_item;
mod group;
mod status;
mod preferences;

pub use entity::{DomainError, DomainResult};
pub use pantry_item::{ItemDraft, ItemId, NewPantryItem, PantryItem};
pub use group::{group_items, ItemGroup};
pub use status::{days_until, status_for, status_now, ExpiryPolicy, ExpiryStatus};
pub use preferences::{Preferences, SortOrder};
