//! Commands Layer
//!
//! Tauri command handlers that bridge frontend to backend services.
//! Errors cross IPC as the bare message the alert shows.

mod item_cmd;
mod prefs_cmd;
mod config_cmd;
mod dialog_cmd;

pub use item_cmd::*;
pub use prefs_cmd::*;
pub use config_cmd::*;
pub use dialog_cmd::*;

use pantry_core::domain::DomainError;

/// Text shown in the error alert: the server's own message, without the
/// category prefix `Display` adds
pub(crate) fn alert_text(e: DomainError) -> String {
    e.message().to_string()
}
