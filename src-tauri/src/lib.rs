//! Pantry Backend
//!
//! Layered architecture:
//! - pantry-core: domain, grouping engine, remote table, preference storage
//! - commands: Tauri command handlers
//!
//! This crate only wires those together and owns the app directories.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use tauri::Manager;
use tokio::sync::Mutex;

use pantry_core::config::{RemoteConfig, CONFIG_FILE_NAME};
use pantry_core::repository::{JsonPreferenceStore, RemoteItemRepository};
use pantry_core::service::PantryService;
use pantry_core::settings::Settings;

mod commands;

const PREFS_FILE_NAME: &str = "prefs.json";

/// Application state shared across commands
pub struct AppState {
    /// `None` until a remote backend is configured
    pub pantry: Mutex<Option<PantryService>>,
    pub remote_config: Mutex<Option<RemoteConfig>>,
    pub settings: Mutex<Settings>,
    pub config_path: PathBuf,
}

impl AppState {
    pub async fn init(data_dir: &Path, config_dir: &Path) -> Self {
        let config_path = config_dir.join(CONFIG_FILE_NAME);
        let remote_config = RemoteConfig::load(&config_path);
        let pantry = remote_config.clone().map(pantry_service);

        let store = Arc::new(JsonPreferenceStore::new(data_dir.join(PREFS_FILE_NAME)));
        let settings = Settings::load(store).await;

        Self {
            pantry: Mutex::new(pantry),
            remote_config: Mutex::new(remote_config),
            settings: Mutex::new(settings),
            config_path,
        }
    }

    /// Point the app at a different remote table
    pub async fn replace_remote(&self, config: RemoteConfig) {
        *self.pantry.lock().await = Some(pantry_service(config.clone()));
        *self.remote_config.lock().await = Some(config);
    }
}

fn pantry_service(config: RemoteConfig) -> PantryService {
    log::info!("[app] using remote table {} at {}", config.table, config.base_url());
    PantryService::new(Arc::new(RemoteItemRepository::new(config)))
}

#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
    tauri::Builder::default()
        .plugin(tauri_plugin_dialog::init())
        .setup(|app| {
            // Single instance check - must be first!
            #[cfg(desktop)]
            app.handle().plugin(tauri_plugin_single_instance::init(|app, _args, _cwd| {
                if let Some(window) = app.get_webview_window("main") {
                    let _ = window.set_focus();
                }
            }))?;

            let app_handle = app.handle().clone();

            if let Err(e) = rolling_logger::init_logger(app_handle.path().app_log_dir()?, "Pantry") {
                eprintln!("[{}] Logger init failed: {}", chrono::Local::now().format("%H:%M:%S%.3f"), e);
            }

            let data_dir = app_handle.path().app_data_dir()?;
            let config_dir = app_handle.path().app_config_dir()?;
            let state = tauri::async_runtime::block_on(AppState::init(&data_dir, &config_dir));
            app.manage(state);
            let _ = rolling_logger::info("App setup done");
            Ok(())
        })
        .invoke_handler(tauri::generate_handler![
            // Pantry items
            commands::list_items,
            commands::add_items,
            commands::delete_item,
            // Preferences
            commands::load_preferences,
            commands::set_dark_mode,
            commands::set_sort_order,
            // Remote backend
            commands::get_remote_config,
            commands::save_remote_config,
            // Dialogs + diagnostics
            commands::show_error,
            commands::recent_logs,
        ])
        .run(tauri::generate_context!())
        .expect("error while running tauri application");
}
