//! Light/dark theme flag shared by the terminal `theme` command and the renderer.

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Dark,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Dark => "dark",
            Self::Light => "light",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The single theme flag of a running app
#[derive(Debug, Clone, Default)]
pub struct ThemeFlag {
    current: Theme,
}

impl ThemeFlag {
    pub fn new(initial: Theme) -> Self {
        Self { current: initial }
    }

    pub fn get(&self) -> Theme {
        self.current
    }

    /// Flip the flag and return the new theme
    pub fn toggle(&mut self) -> Theme {
        self.current = self.current.toggled();
        self.current
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_round_trip() {
        let mut flag = ThemeFlag::new(Theme::Dark);
        assert_eq!(flag.toggle(), Theme::Light);
        assert_eq!(flag.get(), Theme::Light);
        assert_eq!(flag.toggle(), Theme::Dark);
    }
}
