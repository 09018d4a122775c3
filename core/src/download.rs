//! CV download: copies the configured CV file into the user's downloads
//! directory under its download name.

use crate::config::DownloadConfig;
use crate::error::{DevfolioError, Result};
use std::path::{Path, PathBuf};

/// Source and destination for one download
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CvDownload {
    pub source: PathBuf,
    pub target: PathBuf,
}

impl CvDownload {
    pub fn plan(config: &DownloadConfig, data_dir: &Path) -> Result<Self> {
        let target = config
            .resolve_target()
            .ok_or(DevfolioError::MissingDirectory { what: "download" })?;
        Ok(Self {
            source: config.resolve_source(data_dir),
            target,
        })
    }

    /// Blocking copy, used by the one-shot CLI
    pub fn run(&self) -> Result<PathBuf> {
        if !self.source.is_file() {
            return Err(DevfolioError::CvNotFound {
                path: self.source.clone(),
            });
        }
        if let Some(parent) = self.target.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::copy(&self.source, &self.target)?;
        crate::info_log!("CV copied to {}", self.target.display());
        Ok(self.target.clone())
    }

    /// Non-blocking copy for the interactive UI
    pub async fn run_async(&self) -> Result<PathBuf> {
        if !tokio::fs::try_exists(&self.source).await.unwrap_or(false) {
            return Err(DevfolioError::CvNotFound {
                path: self.source.clone(),
            });
        }
        if let Some(parent) = self.target.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }
        tokio::fs::copy(&self.source, &self.target).await?;
        crate::info_log!("CV copied to {}", self.target.display());
        Ok(self.target.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn config_into(dir: &Path) -> DownloadConfig {
        DownloadConfig {
            target_dir: Some(dir.join("downloads")),
            ..DownloadConfig::default()
        }
    }

    #[test]
    fn test_copies_relative_source_from_data_dir() {
        let data = tempdir().unwrap();
        std::fs::write(data.path().join("resume.pdf"), b"%PDF").unwrap();

        let download = CvDownload::plan(&config_into(data.path()), data.path()).unwrap();
        let written = download.run().unwrap();

        assert_eq!(
            written,
            data.path().join("downloads").join("Isaac_Ayorinde_Resume.pdf")
        );
        assert_eq!(std::fs::read(written).unwrap(), b"%PDF");
    }

    #[test]
    fn test_missing_source() {
        let data = tempdir().unwrap();
        let download = CvDownload::plan(&config_into(data.path()), data.path()).unwrap();
        assert!(matches!(download.run(), Err(DevfolioError::CvNotFound { .. })));
    }

    #[tokio::test]
    async fn test_async_copy() {
        let data = tempdir().unwrap();
        std::fs::write(data.path().join("resume.pdf"), b"cv").unwrap();

        let download = CvDownload::plan(&config_into(data.path()), data.path()).unwrap();
        let written = download.run_async().await.unwrap();
        assert_eq!(tokio::fs::read(written).await.unwrap(), b"cv");
    }
}
