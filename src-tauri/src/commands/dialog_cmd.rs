use tauri::{command, AppHandle, Runtime};
use tauri_plugin_dialog::{DialogExt, MessageDialogKind};

/// Native error alert carrying the raw message
#[command]
pub fn show_error<R: Runtime>(app: AppHandle<R>, message: String) {
    app.dialog()
        .message(message)
        .title("Error")
        .kind(MessageDialogKind::Error)
        .show(|_| {});
}

/// Newest lines from the in-memory log buffer
#[command]
pub fn recent_logs() -> Vec<String> {
    rolling_logger::recent_lines()
}
