//! Durable key-value preferences
//!
//! The browser-local-storage equivalent: a flat JSON object of string
//! values in `<data_dir>/devfolio/preferences.json`.

pub mod view_mode;

pub use view_mode::{ViewMode, ViewModeStore, VIEW_MODE_KEY};

use crate::error::{DevfolioError, Result};
use serde_json::{Map, Value};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// File name of the preferences store inside the data directory
pub const PREFERENCES_FILE: &str = "preferences.json";

/// Minimal string key-value storage
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
}

/// JSON-file backed store, written through on every `set`
pub struct StateStore {
    data: Map<String, Value>,
    path: PathBuf,
}

impl StateStore {
    /// Open the store at `path`; a missing file is an empty store
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let mut store = Self {
            data: Map::new(),
            path: path.into(),
        };
        store.load()?;
        Ok(store)
    }

    /// Open the store, starting empty when the file is unreadable
    ///
    /// The broken file is replaced on the next write.
    pub fn open_or_empty(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        match Self::open(&path) {
            Ok(store) => store,
            Err(e) => {
                match &e {
                    DevfolioError::Preferences { source, .. } => {
                        crate::warn_log!("Starting with empty preferences: {}: {}", e, source);
                    }
                    _ => {
                        crate::warn_log!("Starting with empty preferences: {}", e);
                    }
                }
                Self {
                    data: Map::new(),
                    path,
                }
            }
        }
    }

    /// `<dir>/preferences.json`
    pub fn in_dir(dir: &Path) -> Self {
        Self::open_or_empty(dir.join(PREFERENCES_FILE))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn load(&mut self) -> Result<()> {
        if !self.path.exists() {
            return Ok(());
        }

        let content = std::fs::read_to_string(&self.path)?;
        if content.trim().is_empty() {
            return Ok(());
        }

        self.data = serde_json::from_str(&content).map_err(|source| DevfolioError::Preferences {
            path: self.path.clone(),
            source,
        })?;
        Ok(())
    }

    pub fn save(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(&self.data)?;
        std::fs::write(&self.path, content)?;
        Ok(())
    }

    pub fn list(&self) -> Vec<String> {
        self.data.keys().cloned().collect()
    }
}

impl KeyValueStore for StateStore {
    fn get(&self, key: &str) -> Option<String> {
        self.data.get(key).and_then(Value::as_str).map(str::to_string)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.data.insert(key.to_string(), Value::String(value.to_string()));
        self.save()
    }
}

/// Process-local store, used by the one-shot CLI and tests
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    data: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_entry(key: &str, value: &str) -> Self {
        let mut store = Self::new();
        store.data.insert(key.to_string(), value.to_string());
        store
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.data.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.data.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_is_empty() {
        let dir = TempDir::new().unwrap();
        let store = StateStore::open(dir.path().join(PREFERENCES_FILE)).unwrap();
        assert!(store.list().is_empty());
        assert_eq!(store.get("viewMode"), None);
    }

    #[test]
    fn test_set_writes_through() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("sub").join(PREFERENCES_FILE);

        let mut store = StateStore::open(&path).unwrap();
        store.set("viewMode", "devMode").unwrap();

        let reopened = StateStore::open(&path).unwrap();
        assert_eq!(reopened.get("viewMode").as_deref(), Some("devMode"));
    }

    #[test]
    fn test_corrupt_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(PREFERENCES_FILE);
        std::fs::write(&path, "{not json").unwrap();

        assert!(matches!(
            StateStore::open(&path),
            Err(DevfolioError::Preferences { .. })
        ));

        let mut store = StateStore::open_or_empty(&path);
        assert_eq!(store.get("viewMode"), None);
        store.set("viewMode", "landing").unwrap();
        assert_eq!(
            StateStore::open(&path).unwrap().get("viewMode").as_deref(),
            Some("landing")
        );
    }

    #[test]
    fn test_non_string_values_read_as_absent() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(PREFERENCES_FILE);
        std::fs::write(&path, r#"{"viewMode": 42}"#).unwrap();

        let store = StateStore::open(&path).unwrap();
        assert_eq!(store.get("viewMode"), None);
    }
}
