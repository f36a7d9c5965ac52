//! Remote Backend Command Wrappers

use serde::Serialize;
use wasm_bindgen::JsValue;

use crate::models::{PantryItem, RemoteConfig};
use super::{call, to_args};

#[derive(Serialize)]
struct SaveRemoteConfigArgs<'a> {
    url: &'a str,
    #[serde(rename = "apiKey")]
    api_key: &'a str,
    table: Option<&'a str>,
}

/// Current backend settings (API key masked)
pub async fn get_remote_config() -> Result<Option<RemoteConfig>, String> {
    call("get_remote_config", JsValue::NULL).await
}

/// Validate and switch backend; answers with the new table's items
pub async fn save_remote_config(url: &str, api_key: &str, table: &str) -> Result<Vec<PantryItem>, String> {
    let table = Some(table.trim()).filter(|t| !t.is_empty());
    call("save_remote_config", to_args(&SaveRemoteConfigArgs { url, api_key, table })?).await
}
