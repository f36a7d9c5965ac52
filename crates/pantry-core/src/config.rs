//! Remote Backend Configuration
//!
//! Where the hosted pantry table lives. Read from `remote_config.json` in
//! the app config directory, with environment variables taking precedence.

use std::env;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::domain::{DomainError, DomainResult};

pub const CONFIG_FILE_NAME: &str = "remote_config.json";
pub const DEFAULT_TABLE: &str = "itens_despensa";

/// Keys this short are masked completely
const MASK_MIN_KEY_LEN: usize = 8;

pub const ENV_URL: &str = "PANTRY_REMOTE_URL";
pub const ENV_KEY: &str = "PANTRY_REMOTE_KEY";
pub const ENV_TABLE: &str = "PANTRY_REMOTE_TABLE";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemoteConfig {
    /// Project URL, e.g. `https://xyz.supabase.co`
    pub url: String,
    /// Public (anon) API key
    pub api_key: String,
    #[serde(default = "default_table")]
    pub table: String,
}

fn default_table() -> String {
    DEFAULT_TABLE.to_string()
}

impl RemoteConfig {
    pub fn new(url: impl Into<String>, api_key: impl Into<String>, table: impl Into<String>) -> Self {
        let table = table.into();
        Self {
            url: url.into(),
            api_key: api_key.into(),
            table: if table.trim().is_empty() { default_table() } else { table },
        }
    }

    /// URL without surrounding whitespace or trailing slashes
    pub fn base_url(&self) -> &str {
        self.url.trim().trim_end_matches('/')
    }

    pub fn is_complete(&self) -> bool {
        !self.base_url().is_empty() && !self.api_key.trim().is_empty()
    }

    /// Copy safe to hand to the UI: only the last four key characters
    /// survive, and none at all for keys too short to hide the rest
    pub fn masked(&self) -> Self {
        let chars: Vec<char> = self.api_key.chars().collect();
        let tail: String = if chars.len() > MASK_MIN_KEY_LEN {
            chars[chars.len() - 4..].iter().collect()
        } else {
            String::new()
        };
        Self {
            url: self.url.clone(),
            api_key: format!("****{}", tail),
            table: self.table.clone(),
        }
    }

    /// Load from `path` and the process environment
    pub fn load(path: &Path) -> Option<Self> {
        Self::load_with(path, |key| env::var(key).ok())
    }

    /// Load from `path`, letting `lookup` override individual fields
    ///
    /// Returns `None` unless both URL and key end up non-empty.
    pub fn load_with(path: &Path, lookup: impl Fn(&str) -> Option<String>) -> Option<Self> {
        let mut config = read_file(path).unwrap_or_else(|| RemoteConfig::new("", "", DEFAULT_TABLE));

        if let Some(url) = lookup(ENV_URL).filter(|v| !v.trim().is_empty()) {
            log::info!("[config] {} set, overriding url", ENV_URL);
            config.url = url;
        }
        if let Some(key) = lookup(ENV_KEY).filter(|v| !v.trim().is_empty()) {
            log::info!("[config] {} set, overriding api key", ENV_KEY);
            config.api_key = key;
        }
        if let Some(table) = lookup(ENV_TABLE).filter(|v| !v.trim().is_empty()) {
            log::info!("[config] {} set, using table {}", ENV_TABLE, table);
            config.table = table;
        }

        if config.is_complete() {
            Some(config)
        } else {
            log::warn!("[config] remote backend not configured");
            None
        }
    }

    pub fn save(&self, path: &Path) -> DomainResult<()> {
        if let Some(dir) = path.parent() {
            std::fs::create_dir_all(dir).map_err(|e| DomainError::Storage(e.to_string()))?;
        }
        let json = serde_json::to_string_pretty(self).map_err(|e| DomainError::Storage(e.to_string()))?;
        std::fs::write(path, json).map_err(|e| DomainError::Storage(e.to_string()))
    }
}

fn read_file(path: &Path) -> Option<RemoteConfig> {
    let raw = std::fs::read_to_string(path).ok()?;
    serde_json::from_str(&raw)
        .map_err(|e| {
            log::warn!("[config] invalid {}: {}", path.display(), e);
        })
        .ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn no_env(_: &str) -> Option<String> {
        None
    }

    #[test]
    fn test_missing_file_and_env_is_unconfigured() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(RemoteConfig::load_with(&dir.path().join(CONFIG_FILE_NAME), no_env), None);
    }

    #[test]
    fn test_save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join(CONFIG_FILE_NAME);
        let config = RemoteConfig::new("https://abc.supabase.co", "anon-key", "");
        config.save(&path).unwrap();

        let loaded = RemoteConfig::load_with(&path, no_env).unwrap();
        assert_eq!(loaded, config);
        assert_eq!(loaded.table, DEFAULT_TABLE);
    }

    #[test]
    fn test_env_overrides_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        RemoteConfig::new("https://file.example", "file-key", "pantry").save(&path).unwrap();

        let env: HashMap<&str, &str> = HashMap::from([(ENV_URL, "https://env.example/"), (ENV_TABLE, "items")]);
        let loaded = RemoteConfig::load_with(&path, |k| env.get(k).map(|v| v.to_string())).unwrap();

        assert_eq!(loaded.base_url(), "https://env.example");
        assert_eq!(loaded.api_key, "file-key");
        assert_eq!(loaded.table, "items");
    }

    #[test]
    fn test_env_alone_is_enough() {
        let dir = tempfile::tempdir().unwrap();
        let env: HashMap<&str, &str> = HashMap::from([(ENV_URL, "https://env.example"), (ENV_KEY, "k")]);
        let loaded =
            RemoteConfig::load_with(&dir.path().join(CONFIG_FILE_NAME), |k| env.get(k).map(|v| v.to_string()))
                .unwrap();
        assert_eq!(loaded.table, DEFAULT_TABLE);
    }

    #[test]
    fn test_malformed_file_is_ignored() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        std::fs::write(&path, "{ not json").unwrap();
        assert_eq!(RemoteConfig::load_with(&path, no_env), None);
    }

    #[test]
    fn test_masked_keeps_tail_only() {
        let config = RemoteConfig::new("https://x", "abcdefgh1234", "t");
        assert_eq!(config.masked().api_key, "****1234");
    }

    #[test]
    fn test_masked_hides_short_keys_entirely() {
        assert_eq!(RemoteConfig::new("https://x", "ab", "t").masked().api_key, "****");
        assert_eq!(RemoteConfig::new("https://x", "abcd", "t").masked().api_key, "****");
        assert_eq!(RemoteConfig::new("https://x", "abcdefgh", "t").masked().api_key, "****");
        assert_eq!(RemoteConfig::new("https://x", "abcdefgh9", "t").masked().api_key, "****fgh9");
    }
}
