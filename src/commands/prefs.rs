//! Preference Commands

use serde::Serialize;
use wasm_bindgen::JsValue;

use crate::models::{Preferences, SortOrder};
use super::{call, to_args};

#[derive(Serialize)]
struct DarkModeArgs {
    enabled: bool,
}

#[derive(Serialize)]
struct SortOrderArgs {
    #[serde(rename = "sortOrder")]
    sort_order: SortOrder,
}

pub async fn load_preferences() -> Result<Preferences, String> {
    call("load_preferences", JsValue::NULL).await
}

pub async fn set_dark_mode(enabled: bool) -> Result<Preferences, String> {
    call("set_dark_mode", to_args(&DarkModeArgs { enabled })?).await
}

pub async fn set_sort_order(sort_order: SortOrder) -> Result<Preferences, String> {
    call("set_sort_order", to_args(&SortOrderArgs { sort_order })?).await
}
