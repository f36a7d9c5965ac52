//! Application Context
//!
//! Shared state provided via Leptos Context API.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::commands;
use crate::models::{MobileView, Preferences, SortOrder};

/// Theme and ordering, mirrored from the backend preference record
#[derive(Clone, Copy)]
pub struct SettingsContext {
    /// Current preferences - read
    pub prefs: ReadSignal<Preferences>,
    /// Current preferences - write
    set_prefs: WriteSignal<Preferences>,
}

impl SettingsContext {
    pub fn new(prefs: (ReadSignal<Preferences>, WriteSignal<Preferences>)) -> Self {
        Self {
            prefs: prefs.0,
            set_prefs: prefs.1,
        }
    }

    pub fn preferences(&self) -> Preferences {
        self.prefs.get()
    }

    pub fn is_dark_mode(&self) -> bool {
        self.prefs.get().dark_mode
    }

    pub fn sort_order(&self) -> SortOrder {
        self.prefs.get().sort_order
    }

    /// Replace the in-memory copy with what the backend has stored
    pub fn load(&self) {
        let set_prefs = self.set_prefs;
        spawn_local(async move {
            match commands::load_preferences().await {
                Ok(prefs) => set_prefs.set(prefs),
                Err(e) => log_error("load_preferences", &e),
            }
        });
    }

    /// Takes effect immediately; the write happens in the background
    pub fn set_dark_mode(&self, enabled: bool) {
        self.set_prefs.update(|p| p.dark_mode = enabled);
        spawn_local(async move {
            if let Err(e) = commands::set_dark_mode(enabled).await {
                log_error("set_dark_mode", &e);
            }
        });
    }

    pub fn set_sort_order(&self, order: SortOrder) {
        self.set_prefs.update(|p| p.sort_order = order);
        spawn_local(async move {
            if let Err(e) = commands::set_sort_order(order).await {
                log_error("set_sort_order", &e);
            }
        });
    }
}

/// Get the settings context
pub fn use_settings() -> SettingsContext {
    expect_context::<SettingsContext>()
}

/// Which screen the bottom navigation shows
#[derive(Clone, Copy)]
pub struct NavContext {
    pub current_view: ReadSignal<MobileView>,
    set_current_view: WriteSignal<MobileView>,
}

impl NavContext {
    pub fn new(current_view: (ReadSignal<MobileView>, WriteSignal<MobileView>)) -> Self {
        Self {
            current_view: current_view.0,
            set_current_view: current_view.1,
        }
    }

    pub fn show(&self, view: MobileView) {
        self.set_current_view.set(view);
    }
}

pub fn use_nav() -> NavContext {
    expect_context::<NavContext>()
}

fn log_error(cmd: &str, message: &str) {
    web_sys::console::error_1(&format!("[SETTINGS] {} failed: {}", cmd, message).into());
}
