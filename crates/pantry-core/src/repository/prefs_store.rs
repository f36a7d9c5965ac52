//! Preference Storage
//!
//! A small JSON key/value file in the app data directory. The preferences
//! record lives under a single key so other records can share the file.

use std::io::ErrorKind;
use std::path::PathBuf;

use async_trait::async_trait;
use serde_json::{Map, Value};
use tokio::sync::Mutex;

use crate::domain::{DomainError, DomainResult, Preferences};
use super::traits::PreferenceStore;

/// Storage key of the preferences record
pub const PREFS_KEY: &str = "@prefs";

pub struct JsonPreferenceStore {
    path: PathBuf,
}

impl JsonPreferenceStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Read the whole key/value file; a missing or malformed document is empty
    async fn read_document(&self) -> DomainResult<Map<String, Value>> {
        let raw = match tokio::fs::read_to_string(&self.path).await {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Map::new()),
            Err(e) => return Err(DomainError::Storage(e.to_string())),
        };

        match serde_json::from_str::<Map<String, Value>>(&raw) {
            Ok(doc) => Ok(doc),
            Err(e) => {
                log::warn!("[prefs] ignoring malformed {}: {}", self.path.display(), e);
                Ok(Map::new())
            }
        }
    }
}

#[async_trait]
impl PreferenceStore for JsonPreferenceStore {
    async fn load(&self) -> DomainResult<Option<Preferences>> {
        let doc = self.read_document().await?;
        let Some(record) = doc.get(PREFS_KEY) else {
            return Ok(None);
        };

        match serde_json::from_value::<Preferences>(record.clone()) {
            Ok(prefs) => Ok(Some(prefs)),
            Err(e) => {
                log::warn!("[prefs] ignoring malformed {} record: {}", PREFS_KEY, e);
                Ok(None)
            }
        }
    }

    async fn save(&self, prefs: &Preferences) -> DomainResult<()> {
        let mut doc = self.read_document().await?;
        let record = serde_json::to_value(prefs).map_err(|e| DomainError::Storage(e.to_string()))?;
        doc.insert(PREFS_KEY.to_string(), record);

        if let Some(dir) = self.path.parent() {
            tokio::fs::create_dir_all(dir)
                .await
                .map_err(|e| DomainError::Storage(e.to_string()))?;
        }
        let json = serde_json::to_string_pretty(&doc).map_err(|e| DomainError::Storage(e.to_string()))?;
        tokio::fs::write(&self.path, json)
            .await
            .map_err(|e| DomainError::Storage(e.to_string()))?;
        Ok(())
    }
}

/// Volatile store; `failing()` rejects every save
#[derive(Default)]
pub struct MemoryPreferenceStore {
    saved: Mutex<Option<Preferences>>,
    fail_writes: bool,
}

impl MemoryPreferenceStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(prefs: Preferences) -> Self {
        Self {
            saved: Mutex::new(Some(prefs)),
            fail_writes: false,
        }
    }

    pub fn failing() -> Self {
        Self {
            saved: Mutex::new(None),
            fail_writes: true,
        }
    }

    pub async fn saved(&self) -> Option<Preferences> {
        *self.saved.lock().await
    }
}

#[async_trait]
impl PreferenceStore for MemoryPreferenceStore {
    async fn load(&self) -> DomainResult<Option<Preferences>> {
        Ok(*self.saved.lock().await)
    }

    async fn save(&self, prefs: &Preferences) -> DomainResult<()> {
        if self.fail_writes {
            return Err(DomainError::Storage("storage is read-only".to_string()));
        }
        *self.saved.lock().await = Some(*prefs);
        Ok(())
    }
}
