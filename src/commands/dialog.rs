use leptos::task::spawn_local;
use serde::Serialize;
use wasm_bindgen::JsValue;

use super::{call, to_args};

#[derive(Serialize)]
struct MessageArgs<'a> {
    message: &'a str,
}

/// Blocking-style alert with the raw error message
///
/// Uses the native dialog; falls back to `window.alert` if the command
/// itself fails.
pub fn alert(message: &str) {
    let message = message.to_string();
    web_sys::console::error_1(&format!("[PANTRY] {}", message).into());
    spawn_local(async move {
        let shown: Result<(), String> = match to_args(&MessageArgs { message: &message }) {
            Ok(args) => call("show_error", args).await,
            Err(e) => Err(e),
        };
        if shown.is_err() {
            if let Some(window) = web_sys::window() {
                let _ = window.alert_with_message(&message);
            }
        }
    });
}

pub async fn recent_logs() -> Result<Vec<String>, String> {
    call("recent_logs", JsValue::NULL).await
}
