//! Remote Backend Commands
//!
//! Read and replace the hosted table configuration from the settings screen.

use tauri::State;

use pantry_core::config::RemoteConfig;
use pantry_core::domain::PantryItem;
use pantry_core::repository::{ItemRepository, RemoteItemRepository};
use crate::AppState;
use super::alert_text;

/// Current configuration with the API key masked
#[tauri::command]
pub async fn get_remote_config(state: State<'_, AppState>) -> Result<Option<RemoteConfig>, String> {
    Ok(state.remote_config.lock().await.as_ref().map(RemoteConfig::masked))
}

/// Validate, persist and switch to a new backend
///
/// A masked key (as returned by `get_remote_config`) keeps the current key.
/// Answers with the items of the new table.
#[tauri::command]
pub async fn save_remote_config(
    state: State<'_, AppState>,
    url: String,
    api_key: String,
    table: Option<String>,
) -> Result<Vec<PantryItem>, String> {
    let api_key = if api_key.starts_with("****") {
        state
            .remote_config
            .lock()
            .await
            .as_ref()
            .map(|c| c.api_key.clone())
            .unwrap_or_default()
    } else {
        api_key
    };

    let config = RemoteConfig::new(url.trim(), api_key.trim(), table.unwrap_or_default().trim());
    if !config.is_complete() {
        return Err("URL and API key are required".to_string());
    }

    // Validate connection first
    let repo = RemoteItemRepository::new(config.clone());
    let items = repo.list_all().await.map_err(|e| {
        log::warn!("[cmd] connection check for {} failed: {}", config.base_url(), e);
        alert_text(e)
    })?;

    config.save(&state.config_path).map_err(alert_text)?;
    state.replace_remote(config).await;
    let _ = rolling_logger::info("Remote backend configuration saved");

    Ok(items)
}
