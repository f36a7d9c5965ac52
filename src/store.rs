//! Pantry Screen State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. Groups are not
//! stored here; they are recomputed from `items` on every render.

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::commands;
use crate::models::PantryItem;

/// Pantry screen state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct PantryState {
    /// Last fetched list, in fetch order
    pub items: Vec<PantryItem>,
    /// True only while the first fetch is running
    pub loading: bool,
    /// An explicit refresh is running
    pub refreshing: bool,
    /// Names of the group cards currently expanded
    pub expanded: Vec<String>,
}

/// Type alias for the store
pub type PantryStore = Store<PantryState>;

/// Get the pantry store from context
pub fn use_pantry_store() -> PantryStore {
    expect_context::<PantryStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Replace the item list with a fresh fetch result
pub fn store_set_items(store: &PantryStore, items: Vec<PantryItem>) {
    web_sys::console::log_1(&format!("[STORE] {} items", items.len()).into());
    store.items().set(items);
}

/// Fetch the full list; failures are reported through a blocking alert
///
/// `initial` drives the loading indicator, otherwise the refresh flag is used.
pub fn store_fetch_items(store: PantryStore, initial: bool) {
    let (loading, refreshing) = fetch_indicators(initial);
    store.loading().set(loading);
    store.refreshing().set(refreshing);
    spawn_local(async move {
        match commands::list_items().await {
            Ok(items) => store_set_items(&store, items),
            Err(e) => commands::alert(&e),
        }
        store.loading().set(false);
        store.refreshing().set(false);
    });
}

pub fn store_is_expanded(store: &PantryStore, name: &str) -> bool {
    store.expanded().read().iter().any(|n| n == name)
}

/// Expand a collapsed card or collapse an expanded one
pub fn store_toggle_expanded(store: &PantryStore, name: &str) {
    toggle_name(&mut store.expanded().write(), name);
}

pub fn store_is_loading(store: &PantryStore) -> bool {
    store.loading().get()
}

pub fn store_is_refreshing(store: &PantryStore) -> bool {
    store.refreshing().get()
}

pub fn store_items(store: &PantryStore) -> Vec<PantryItem> {
    store.items().get()
}

/// `(loading, refreshing)` while a fetch runs: only the first load shows
/// the full loading indicator
fn fetch_indicators(initial: bool) -> (bool, bool) {
    (initial, !initial)
}

/// Remove `name` if present, add it otherwise
fn toggle_name(expanded: &mut Vec<String>, name: &str) {
    if let Some(pos) = expanded.iter().position(|n| n == name) {
        expanded.remove(pos);
    } else {
        expanded.push(name.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_name_expands_then_collapses() {
        let mut expanded = Vec::new();
        toggle_name(&mut expanded, "Milk");
        toggle_name(&mut expanded, "Eggs");
        assert_eq!(expanded, vec!["Milk", "Eggs"]);

        toggle_name(&mut expanded, "Milk");
        assert_eq!(expanded, vec!["Eggs"]);
    }

    #[test]
    fn test_toggle_name_is_exact() {
        let mut expanded = vec!["Milk".to_string()];
        toggle_name(&mut expanded, "milk");
        assert_eq!(expanded, vec!["Milk", "milk"]);
    }

    #[test]
    fn test_only_first_fetch_shows_loading() {
        assert_eq!(fetch_indicators(true), (true, false));
        assert_eq!(fetch_indicators(false), (false, true));
    }
}
