//! Settings
//!
//! The current preferences plus the store they persist to. Passed around
//! explicitly; every mutator updates memory first, then writes through.
//! Write failures never reach the caller, they are logged instead.

use std::sync::Arc;

use crate::domain::{Preferences, SortOrder};
use crate::repository::PreferenceStore;

pub struct Settings {
    store: Arc<dyn PreferenceStore>,
    current: Preferences,
}

impl Settings {
    /// Read saved preferences, falling back to defaults
    pub async fn load(store: Arc<dyn PreferenceStore>) -> Self {
        let current = match store.load().await {
            Ok(Some(prefs)) => prefs,
            Ok(None) => Preferences::default(),
            Err(e) => {
                log::warn!("[settings] failed to load preferences, using defaults: {}", e);
                Preferences::default()
            }
        };
        log::info!(
            "[settings] dark_mode={} sort={}",
            current.dark_mode,
            current.sort_order.as_str()
        );
        Self { store, current }
    }

    pub fn preferences(&self) -> Preferences {
        self.current
    }

    pub fn is_dark_mode(&self) -> bool {
        self.current.dark_mode
    }

    pub fn sort_order(&self) -> SortOrder {
        self.current.sort_order
    }

    pub async fn set_dark_mode(&mut self, enabled: bool) -> Preferences {
        self.current.dark_mode = enabled;
        self.persist().await;
        self.current
    }

    pub async fn set_sort_order(&mut self, order: SortOrder) -> Preferences {
        self.current.sort_order = order;
        self.persist().await;
        self.current
    }

    async fn persist(&self) {
        if let Err(e) = self.store.save(&self.current).await {
            log::warn!("[settings] failed to save preferences: {}", e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    use crate::repository::MemoryPreferenceStore;

    /// Keeps every record so tests can look for their warning
    struct CaptureLogger {
        lines: Mutex<Vec<String>>,
    }

    impl log::Log for CaptureLogger {
        fn enabled(&self, _: &log::Metadata) -> bool {
            true
        }

        fn log(&self, record: &log::Record) {
            if let Ok(mut lines) = self.lines.lock() {
                lines.push(format!("{} {}", record.level(), record.args()));
            }
        }

        fn flush(&self) {}
    }

    static CAPTURE: CaptureLogger = CaptureLogger {
        lines: Mutex::new(Vec::new()),
    };

    fn capture_logs() {
        // Another test may have installed it already
        let _ = log::set_logger(&CAPTURE);
        log::set_max_level(log::LevelFilter::Info);
    }

    #[tokio::test]
    async fn test_defaults_when_nothing_saved() {
        let settings = Settings::load(Arc::new(MemoryPreferenceStore::new())).await;
        assert_eq!(settings.preferences(), Preferences::default());
    }

    #[tokio::test]
    async fn test_loads_saved_preferences() {
        let saved = Preferences {
            dark_mode: true,
            sort_order: SortOrder::NameAsc,
        };
        let settings = Settings::load(Arc::new(MemoryPreferenceStore::with(saved))).await;
        assert!(settings.is_dark_mode());
        assert_eq!(settings.sort_order(), SortOrder::NameAsc);
    }

    #[tokio::test]
    async fn test_mutators_write_through() {
        let store = Arc::new(MemoryPreferenceStore::new());
        let mut settings = Settings::load(store.clone()).await;

        settings.set_dark_mode(true).await;
        assert_eq!(store.saved().await.map(|p| p.dark_mode), Some(true));

        let prefs = settings.set_sort_order(SortOrder::DateDesc).await;
        assert_eq!(prefs.sort_order, SortOrder::DateDesc);
        assert_eq!(store.saved().await, Some(prefs));
    }

    #[tokio::test]
    async fn test_failed_write_keeps_in_memory_value() {
        let mut settings = Settings::load(Arc::new(MemoryPreferenceStore::failing())).await;
        let prefs = settings.set_dark_mode(true).await;
        assert!(prefs.dark_mode);
        assert!(settings.is_dark_mode());
    }

    #[tokio::test]
    async fn test_failed_write_is_logged() {
        capture_logs();
        let mut settings = Settings::load(Arc::new(MemoryPreferenceStore::failing())).await;
        settings.set_sort_order(SortOrder::NameDesc).await;

        let lines = CAPTURE.lines.lock().unwrap().clone();
        assert!(lines
            .iter()
            .any(|l| l.starts_with("WARN") && l.contains("failed to save preferences") && l.contains("read-only")));
    }
}
