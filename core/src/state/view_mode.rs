//! Landing vs dev presentation, persisted across restarts.

use super::KeyValueStore;
use crate::error::DevfolioError;
use std::fmt;
use std::str::FromStr;

/// Preference key holding the view mode
pub const VIEW_MODE_KEY: &str = "viewMode";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewMode {
    #[default]
    Landing,
    Dev,
}

impl ViewMode {
    /// Persisted representation
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Landing => "landing",
            Self::Dev => "devMode",
        }
    }

    /// Parse a persisted value; anything else is treated as absent
    pub fn from_stored(value: &str) -> Option<Self> {
        match value {
            "landing" => Some(Self::Landing),
            "devMode" => Some(Self::Dev),
            _ => None,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::Landing => Self::Dev,
            Self::Dev => Self::Landing,
        }
    }
}

impl fmt::Display for ViewMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Accepts the persisted names plus the short `dev`, case-insensitively
impl FromStr for ViewMode {
    type Err = DevfolioError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "landing" => Ok(Self::Landing),
            "dev" | "devmode" => Ok(Self::Dev),
            _ => Err(DevfolioError::UnknownViewMode {
                value: s.to_string(),
            }),
        }
    }
}

/// Owner of the process-wide view mode
///
/// Every mutation is written to the backing store. Write failures are
/// logged, never surfaced: the in-memory mode always changes.
pub struct ViewModeStore<S: KeyValueStore> {
    mode: ViewMode,
    store: S,
}

impl<S: KeyValueStore> ViewModeStore<S> {
    /// Read the persisted mode, defaulting to landing
    pub fn load(store: S) -> Self {
        let mode = store
            .get(VIEW_MODE_KEY)
            .and_then(|value| ViewMode::from_stored(&value))
            .unwrap_or_default();
        crate::debug_log!("view mode loaded: {}", mode);
        Self { mode, store }
    }

    pub fn get(&self) -> ViewMode {
        self.mode
    }

    pub fn set(&mut self, mode: ViewMode) {
        self.mode = mode;
        self.persist();
    }

    pub fn toggle(&mut self) -> ViewMode {
        self.set(self.mode.toggled());
        self.mode
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    fn persist(&mut self) {
        if let Err(e) = self.store.set(VIEW_MODE_KEY, self.mode.as_str()) {
            crate::warn_log!("Failed to persist view mode {}: {}", self.mode, e);
        }
    }
}
