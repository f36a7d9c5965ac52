//! Tauri Command Wrappers
//!
//! Frontend bindings to backend commands, organized by domain.

mod item;
mod prefs;
mod config;
mod dialog;

use serde::de::DeserializeOwned;
use serde::Serialize;
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(catch, js_namespace = ["window", "__TAURI__", "core"])]
    async fn invoke(cmd: &str, args: JsValue) -> Result<JsValue, JsValue>;
}

// Re-export all public items
pub use item::*;
pub use prefs::*;
pub use config::*;
pub use dialog::*;

fn to_args<T: Serialize>(args: &T) -> Result<JsValue, String> {
    serde_wasm_bindgen::to_value(args).map_err(|e| e.to_string())
}

/// Invoke and decode; a rejected promise carries the backend's error string
async fn call<R: DeserializeOwned>(cmd: &str, args: JsValue) -> Result<R, String> {
    match invoke(cmd, args).await {
        Ok(value) => serde_wasm_bindgen::from_value(value).map_err(|e| e.to_string()),
        Err(err) => Err(err.as_string().unwrap_or_else(|| format!("{:?}", err))),
    }
}
