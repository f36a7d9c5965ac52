//! Preference Commands
//!
//! Writes go through `Settings`, which persists and logs failures itself,
//! so these never fail.

use tauri::State;

use pantry_core::domain::{Preferences, SortOrder};
use crate::AppState;

#[tauri::command]
pub async fn load_preferences(state: State<'_, AppState>) -> Result<Preferences, String> {
    Ok(state.settings.lock().await.preferences())
}

#[tauri::command]
pub async fn set_dark_mode(state: State<'_, AppState>, enabled: bool) -> Result<Preferences, String> {
    Ok(state.settings.lock().await.set_dark_mode(enabled).await)
}

#[tauri::command]
pub async fn set_sort_order(
    state: State<'_, AppState>,
    sort_order: SortOrder,
) -> Result<Preferences, String> {
    Ok(state.settings.lock().await.set_sort_order(sort_order).await)
}
