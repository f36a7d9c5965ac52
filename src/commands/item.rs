//! Item Commands
//!
//! Frontend bindings for pantry item commands. Mutations answer with the
//! re-fetched list.

use chrono::NaiveDate;
use serde::Serialize;
use wasm_bindgen::JsValue;

use crate::models::{ItemId, PantryItem};
use super::{call, to_args};

// ========================
// Argument Structs
// ========================

#[derive(Serialize)]
struct AddItemsArgs<'a> {
    name: &'a str,
    #[serde(rename = "expiresOn")]
    expires_on: NaiveDate,
    quantity: u32,
}

#[derive(Serialize)]
struct IdArgs<'a> {
    id: &'a ItemId,
}

// ========================
// Commands
// ========================

pub async fn list_items() -> Result<Vec<PantryItem>, String> {
    call("list_items", JsValue::NULL).await
}

pub async fn add_items(name: &str, expires_on: NaiveDate, quantity: u32) -> Result<Vec<PantryItem>, String> {
    let js_args = to_args(&AddItemsArgs { name, expires_on, quantity })?;
    call("add_items", js_args).await
}

pub async fn delete_item(id: &ItemId) -> Result<Vec<PantryItem>, String> {
    let js_args = to_args(&IdArgs { id })?;
    call("delete_item", js_args).await
}
