//! Tauri Commands for Pantry Items
//!
//! Every mutation answers with the freshly re-fetched list.

use chrono::NaiveDate;
use tauri::State;

use pantry_core::domain::{DomainError, ItemDraft, ItemId, PantryItem};
use pantry_core::service::PantryService;
use crate::AppState;
use super::alert_text;

async fn pantry(state: &AppState) -> Result<PantryService, String> {
    state
        .pantry
        .lock()
        .await
        .clone()
        .ok_or_else(|| alert_text(DomainError::NotConfigured))
}

/// List all items in server order
#[tauri::command]
pub async fn list_items(state: State<'_, AppState>) -> Result<Vec<PantryItem>, String> {
    let service = pantry(&state).await?;
    service.fetch().await.map_err(alert_text)
}

/// Insert `quantity` copies of one item
#[tauri::command]
pub async fn add_items(
    state: State<'_, AppState>,
    name: String,
    expires_on: NaiveDate,
    quantity: u32,
) -> Result<Vec<PantryItem>, String> {
    let service = pantry(&state).await?;
    let draft = ItemDraft::new(name, expires_on, quantity);
    service.add(&draft).await.map_err(|e| {
        log::warn!("[cmd] add_items failed: {}", e);
        alert_text(e)
    })
}

/// Delete a single item
#[tauri::command]
pub async fn delete_item(state: State<'_, AppState>, id: ItemId) -> Result<Vec<PantryItem>, String> {
    let service = pantry(&state).await?;
    service.remove(&id).await.map_err(|e| {
        log::warn!("[cmd] delete_item {} failed: {}", id, e);
        alert_text(e)
    })
}
