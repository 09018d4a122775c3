//! One-shot `devfolio exec` host
//!
//! Runs a single command through a fresh terminal session. There is no
//! page to switch and no UI to restyle, so navigation and theme changes
//! are reported on stdout instead, and `download cv` copies synchronously.

use console::Style;
use devfolio_core::config::DownloadConfig;
use devfolio_core::download::CvDownload;
use devfolio_core::terminal::{Submitted, TerminalHost, TerminalSession};
use devfolio_core::{Config, Route, Theme, ThemeFlag};
use std::path::{Path, PathBuf};

pub struct ExecHost {
    pub route: Option<Route>,
    pub theme: ThemeFlag,
    pub download: DownloadConfig,
    pub data_dir: PathBuf,
    pub notices: Vec<String>,
}

impl ExecHost {
    pub fn new(config: &Config, data_dir: &Path) -> Self {
        Self {
            route: None,
            theme: ThemeFlag::new(config.ui.theme),
            download: config.download.clone(),
            data_dir: data_dir.to_path_buf(),
            notices: Vec::new(),
        }
    }
}

impl TerminalHost for ExecHost {
    fn navigate(&mut self, route: Route) {
        self.route = Some(route);
    }

    fn toggle_theme(&mut self) -> Theme {
        self.theme.toggle()
    }

    fn download_cv(&mut self) {
        let result = CvDownload::plan(&self.download, &self.data_dir).and_then(|d| d.run());
        match result {
            Ok(path) => self.notices.push(format!("Saved to {}", path.display())),
            Err(e) => {
                devfolio_core::warn_log!("CV download failed: {}", e);
                self.notices.push(e.user_message());
            }
        }
    }
}

/// Run `line` and print what the in-app terminal would show
pub fn run(line: &str, config: &Config, data_dir: &Path) {
    let formatter = devfolio_core::output::OutputFormatter::new();
    let mut host = ExecHost::new(config, data_dir);
    let mut session = TerminalSession::new(config.links.clone());

    match session.submit(line, &mut host) {
        Submitted::Ignored => {}
        Submitted::Cleared => println!("{}", Style::new().dim().apply_to("(scrollback cleared)")),
        Submitted::Appended => {
            if let Some(record) = session.scrollback().last() {
                formatter.print_record(record);
            }
        }
    }

    let dim = Style::new().dim();
    if let Some(route) = host.route {
        println!("{}", dim.apply_to(format!("→ {}", route.path())));
    }
    for notice in &host.notices {
        println!("{}", dim.apply_to(notice));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_exec_host_records_navigation() {
        let dir = tempdir().unwrap();
        let config = Config::default();
        let mut host = ExecHost::new(&config, dir.path());
        let mut session = TerminalSession::new(config.links.clone());

        session.submit("projects", &mut host);
        assert_eq!(host.route, Some(Route::Projects));
    }

    #[test]
    fn test_exec_host_download_missing_cv() {
        let dir = tempdir().unwrap();
        let mut config = Config::default();
        config.download.target_dir = Some(dir.path().join("out"));
        let mut host = ExecHost::new(&config, dir.path());

        host.download_cv();
        assert_eq!(host.notices, vec!["CV file is not available".to_string()]);
    }

    #[test]
    fn test_exec_host_download_copies() {
        let dir = tempdir().unwrap();
        std::fs::write(dir.path().join("resume.pdf"), b"pdf").unwrap();
        let mut config = Config::default();
        config.download.target_dir = Some(dir.path().join("out"));
        let mut host = ExecHost::new(&config, dir.path());

        host.download_cv();
        assert!(dir.path().join("out").join("Isaac_Ayorinde_Resume.pdf").exists());
    }
}
