//! User Preferences
//!
//! Theme and list ordering. Persisted as `{ "dark": bool, "sort": "..." }`.

use serde::{Deserialize, Serialize};

/// Ordering applied to the grouped list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum SortOrder {
    /// Nearest expiry first
    #[default]
    #[serde(rename = "data-asc")]
    DateAsc,
    #[serde(rename = "data-desc")]
    DateDesc,
    #[serde(rename = "nome-asc")]
    NameAsc,
    #[serde(rename = "nome-desc")]
    NameDesc,
}

impl SortOrder {
    pub const ALL: [SortOrder; 4] = [
        SortOrder::DateAsc,
        SortOrder::DateDesc,
        SortOrder::NameAsc,
        SortOrder::NameDesc,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SortOrder::DateAsc => "data-asc",
            SortOrder::DateDesc => "data-desc",
            SortOrder::NameAsc => "nome-asc",
            SortOrder::NameDesc => "nome-desc",
        }
    }

    /// Label shown on the settings screen
    pub fn label(&self) -> &'static str {
        match self {
            SortOrder::DateAsc => "Expiry (soonest)",
            SortOrder::DateDesc => "Expiry (latest)",
            SortOrder::NameAsc => "Name (A-Z)",
            SortOrder::NameDesc => "Name (Z-A)",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Preferences {
    #[serde(rename = "dark")]
    pub dark_mode: bool,
    #[serde(rename = "sort")]
    pub sort_order: SortOrder,
}
