//! Frontend Models
//!
//! Pantry entities come from `pantry-core`; only IPC-specific shapes live here.

use serde::{Deserialize, Serialize};

pub use pantry_core::domain::{
    group_items, status_now, ExpiryPolicy, ItemGroup, ItemId, PantryItem, Preferences, SortOrder,
};

/// Remote backend settings (matches backend, key arrives masked)
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RemoteConfig {
    pub url: String,
    pub api_key: String,
    pub table: String,
}

/// Screen selected in the bottom navigation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MobileView {
    Pantry,
    Settings,
}
