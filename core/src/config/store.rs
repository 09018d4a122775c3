//! Configuration Store
//!
//! Handles loading/saving the TOML config file and resolving the
//! per-user directories devfolio reads from and writes to.

use crate::error::{DevfolioError, Result};
use crate::theme::Theme;
use log::LevelFilter;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Application directory name under the platform config/data dirs
pub const APP_DIR: &str = "devfolio";

/// Unified devfolio configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    /// Config file format version
    #[serde(default = "default_version")]
    pub version: String,

    /// Who the portfolio is about
    #[serde(default)]
    pub profile: ProfileConfig,

    /// Social links shown by `social`, the sidebar and the landing view
    #[serde(default)]
    pub links: LinksConfig,

    /// Where `download cv` copies from and to
    #[serde(default)]
    pub download: DownloadConfig,

    /// Rendering settings
    #[serde(default)]
    pub ui: UiConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            version: default_version(),
            profile: ProfileConfig::default(),
            links: LinksConfig::default(),
            download: DownloadConfig::default(),
            ui: UiConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl Config {
    /// Load configuration from file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|source| DevfolioError::ConfigParse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Save configuration to file
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content = toml::to_string_pretty(self)?;
        if let Some(parent) = path.as_ref().parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Load from the default location, falling back to defaults
    ///
    /// A broken file is logged and ignored rather than refusing to start.
    pub fn load_or_default() -> Self {
        let Some(path) = Self::default_path() else {
            return Self::default();
        };
        if !path.exists() {
            return Self::default();
        }
        match Self::load(&path) {
            Ok(config) => config,
            Err(DevfolioError::ConfigParse { path, source }) => {
                crate::warn_log!("Ignoring unreadable config {}: {}", path.display(), source);
                Self::default()
            }
            Err(e) => {
                crate::warn_log!("Ignoring unreadable config: {}", e);
                Self::default()
            }
        }
    }

    /// `<config_dir>/devfolio/config.toml`
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join(APP_DIR).join("config.toml"))
    }

    /// `<data_dir>/devfolio`, home of the preferences file and logs
    pub fn default_data_dir() -> Option<PathBuf> {
        dirs::data_dir().map(|d| d.join(APP_DIR))
    }
}

fn default_version() -> String {
    "1.0".to_string()
}

/// Profile shown in the sidebar and the landing hero
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ProfileConfig {
    pub name: String,
    pub title: String,
    pub location: String,
    pub tagline: String,
    /// Lines cycled through by the landing headline
    #[serde(default = "default_roles")]
    pub roles: Vec<String>,
}

impl Default for ProfileConfig {
    fn default() -> Self {
        Self {
            name: "Isaac Ayorinde".to_string(),
            title: "Full Stack Developer & Blockchain Researcher".to_string(),
            location: "Lagos, Nigeria".to_string(),
            tagline: "Passionate about creating innovative web solutions and exploring \
                      blockchain technology. Building digital experiences that make a difference."
                .to_string(),
            roles: default_roles(),
        }
    }
}

fn default_roles() -> Vec<String> {
    vec![
        "Isaac Ayorinde".to_string(),
        "a Full Stack Developer".to_string(),
        "a Blockchain Researcher".to_string(),
    ]
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct LinksConfig {
    pub github: String,
    pub linkedin: String,
    pub twitter: String,
}

impl Default for LinksConfig {
    fn default() -> Self {
        Self {
            github: "https://github.com/yourusername".to_string(),
            linkedin: "https://linkedin.com/in/yourusername".to_string(),
            twitter: "https://twitter.com/yourusername".to_string(),
        }
    }
}

impl LinksConfig {
    /// Label/URL pairs in display order
    pub fn entries(&self) -> [(&'static str, &str); 3] {
        [
            ("GitHub", self.github.as_str()),
            ("LinkedIn", self.linkedin.as_str()),
            ("Twitter", self.twitter.as_str()),
        ]
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DownloadConfig {
    /// CV file; relative paths are resolved against the data directory
    #[serde(default = "default_cv_source")]
    pub source: PathBuf,
    /// Name given to the downloaded copy
    #[serde(default = "default_cv_file_name")]
    pub file_name: String,
    /// Destination directory, defaults to the platform downloads dir
    #[serde(default)]
    pub target_dir: Option<PathBuf>,
}

impl Default for DownloadConfig {
    fn default() -> Self {
        Self {
            source: default_cv_source(),
            file_name: default_cv_file_name(),
            target_dir: None,
        }
    }
}

impl DownloadConfig {
    pub fn resolve_source(&self, data_dir: &Path) -> PathBuf {
        if self.source.is_absolute() {
            self.source.clone()
        } else {
            data_dir.join(&self.source)
        }
    }

    pub fn resolve_target(&self) -> Option<PathBuf> {
        self.target_dir
            .clone()
            .or_else(dirs::download_dir)
            .or_else(dirs::home_dir)
            .map(|dir| dir.join(&self.file_name))
    }
}

fn default_cv_source() -> PathBuf {
    PathBuf::from("resume.pdf")
}

fn default_cv_file_name() -> String {
    "Isaac_Ayorinde_Resume.pdf".to_string()
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UiConfig {
    /// Event loop tick in milliseconds
    #[serde(default = "default_tick_rate")]
    pub tick_rate_ms: u64,
    /// Panel height units covered by one terminal row
    #[serde(default = "default_row_height")]
    pub row_height: u16,
    #[serde(default)]
    pub theme: Theme,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate(),
            row_height: default_row_height(),
            theme: Theme::default(),
        }
    }
}

fn default_tick_rate() -> u64 {
    16
}

fn default_row_height() -> u16 {
    18
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LoggingConfig {
    /// One of off, error, warn, info, debug, trace
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Append to `debug.log` in the data directory
    #[serde(default = "default_true")]
    pub file: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            file: true,
        }
    }
}

impl LoggingConfig {
    pub fn level_filter(&self) -> LevelFilter {
        self.level.parse().unwrap_or(LevelFilter::Info)
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_true() -> bool {
    true
}
