//! Configuration management
//!
//! All configuration types are exported from this module.

pub mod store;

pub use store::{
    Config, DownloadConfig, LinksConfig, LoggingConfig, ProfileConfig, UiConfig,
};
