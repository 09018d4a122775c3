//! Structured error types for devfolio
//!
//! Only the edges of the system produce these: loading configuration,
//! reading/writing the preferences file, parsing CLI input. The interactive
//! core (terminal session, panel sizing, view mode toggling) never fails.

use std::path::PathBuf;
use thiserror::Error;

/// Primary error type for devfolio operations
#[derive(Error, Debug)]
pub enum DevfolioError {
    // =========================================================================
    // Configuration Errors
    // =========================================================================
    /// Config file exists but could not be parsed
    #[error("invalid configuration in {path}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    /// Config could not be rendered back to TOML
    #[error("failed to serialize configuration: {0}")]
    ConfigSerialize(#[from] toml::ser::Error),

    /// The platform has no config/data directory (e.g. $HOME unset)
    #[error("could not determine the {what} directory")]
    MissingDirectory { what: &'static str },

    // =========================================================================
    // Preference Store Errors
    // =========================================================================
    /// Preferences file is not a JSON object of strings
    #[error("corrupt preferences file {path}")]
    Preferences {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Value that does not name a view mode
    #[error("unknown view mode '{value}' (expected 'landing' or 'dev')")]
    UnknownViewMode { value: String },

    // =========================================================================
    // User Input Errors
    // =========================================================================
    /// Contact form rejected before submission
    #[error("invalid contact form: {reason}")]
    InvalidContactForm { reason: &'static str },

    /// CV source missing when a download was requested
    #[error("CV source not found: {path}")]
    CvNotFound { path: PathBuf },

    // =========================================================================
    // External Error Wrappers
    // =========================================================================
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl DevfolioError {
    /// Short message suitable for a status line
    pub fn user_message(&self) -> String {
        match self {
            Self::InvalidContactForm { reason } => (*reason).to_string(),
            Self::MissingDirectory { what } => format!("No {} directory available", what),
            Self::CvNotFound { .. } => "CV file is not available".to_string(),
            other => other.to_string(),
        }
    }
}

/// Result alias used across the core crate
pub type Result<T> = std::result::Result<T, DevfolioError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_message_for_form_errors() {
        let err = DevfolioError::InvalidContactForm {
            reason: "Email address is required",
        };
        assert_eq!(err.user_message(), "Email address is required");
        assert_eq!(
            err.to_string(),
            "invalid contact form: Email address is required"
        );
    }

    #[test]
    fn test_wrapped_causes_are_reported_once() {
        let toml_err = toml::from_str::<toml::Value>("profile = [").unwrap_err();
        let toml_cause = toml_err.to_string();
        let err = DevfolioError::ConfigParse {
            path: PathBuf::from("/etc/devfolio/config.toml"),
            source: toml_err,
        };
        assert_eq!(err.to_string(), "invalid configuration in /etc/devfolio/config.toml");
        assert_eq!(
            std::error::Error::source(&err).map(|cause| cause.to_string()),
            Some(toml_cause)
        );

        let json_err = serde_json::from_str::<serde_json::Value>("{broken").unwrap_err();
        let json_cause = json_err.to_string();
        let err = DevfolioError::Preferences {
            path: PathBuf::from("/tmp/preferences.json"),
            source: json_err,
        };
        assert!(!err.to_string().contains(&json_cause));
        assert_eq!(
            std::error::Error::source(&err).map(|cause| cause.to_string()),
            Some(json_cause)
        );
    }

    #[test]
    fn test_io_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err: DevfolioError = io.into();
        assert!(matches!(err, DevfolioError::Io(_)));
    }
}
