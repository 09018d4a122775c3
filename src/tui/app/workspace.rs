//! Everything the in-app terminal can reach: the active page, the contact
//! form on it, the theme flag and the CV download.

use devfolio_core::config::DownloadConfig;
use devfolio_core::download::CvDownload;
use devfolio_core::terminal::TerminalHost;
use devfolio_core::{ContactEvent, ContactForm, Route, Router, Theme, ThemeFlag};
use std::path::PathBuf;
use tokio::sync::mpsc;

pub struct Workspace {
    pub router: Router,
    pub theme: ThemeFlag,
    pub contact: ContactForm,
    pub contact_tx: mpsc::UnboundedSender<ContactEvent>,
    /// First visible line of the code viewer
    pub viewer_scroll: u16,
    download: DownloadConfig,
    data_dir: PathBuf,
}

impl Workspace {
    pub fn new(
        theme: Theme,
        download: DownloadConfig,
        data_dir: PathBuf,
        contact_tx: mpsc::UnboundedSender<ContactEvent>,
    ) -> Self {
        Self {
            router: Router::new(),
            theme: ThemeFlag::new(theme),
            contact: ContactForm::new(),
            contact_tx,
            viewer_scroll: 0,
            download,
            data_dir,
        }
    }

    pub fn route(&self) -> Route {
        self.router.current()
    }

    /// Switch pages, tearing down whatever the old page had in flight
    pub fn open(&mut self, route: Route) {
        if let Some(left) = self.router.navigate(route) {
            if left == Route::Contact {
                self.contact.teardown();
            }
            self.viewer_scroll = 0;
        }
    }

    pub fn submit_contact(&mut self) {
        if let Err(e) = self.contact.submit(self.contact_tx.clone()) {
            devfolio_core::debug_log!("contact form rejected: {}", e);
        }
    }

    pub fn scroll_viewer(&mut self, delta: i32, line_count: usize) {
        let max = line_count.saturating_sub(1).min(u16::MAX as usize) as i32;
        let next = (i32::from(self.viewer_scroll) + delta).clamp(0, max);
        self.viewer_scroll = next as u16;
    }
}

impl TerminalHost for Workspace {
    fn navigate(&mut self, route: Route) {
        self.open(route);
    }

    fn toggle_theme(&mut self) -> Theme {
        let theme = self.theme.toggle();
        devfolio_core::info_log!("theme switched to {}", theme);
        theme
    }

    /// Copies in the background; the terminal has already said "Downloading CV..."
    fn download_cv(&mut self) {
        let download = match CvDownload::plan(&self.download, &self.data_dir) {
            Ok(download) => download,
            Err(e) => {
                devfolio_core::warn_log!("CV download unavailable: {}", e);
                return;
            }
        };
        tokio::spawn(async move {
            if let Err(e) = download.run_async().await {
                devfolio_core::warn_log!("CV download failed: {}", e);
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use devfolio_core::contact::SubmissionStatus;

    fn workspace() -> (Workspace, mpsc::UnboundedReceiver<ContactEvent>) {
        let (tx, rx) = mpsc::unbounded_channel();
        let ws = Workspace::new(Theme::Dark, DownloadConfig::default(), PathBuf::from("."), tx);
        (ws, rx)
    }

    #[tokio::test(start_paused = true)]
    async fn test_leaving_contact_cancels_submission() {
        let (mut ws, mut rx) = workspace();
        ws.open(Route::Contact);
        ws.contact.name = "Ada".to_string();
        ws.contact.email = "ada@example.com".to_string();
        ws.contact.message = "hi".to_string();
        ws.submit_contact();
        assert_eq!(ws.contact.status(), SubmissionStatus::Sending);

        ws.open(Route::About);
        assert_eq!(ws.contact.status(), SubmissionStatus::Idle);

        // Only the workspace's own sender remains; nothing arrives
        let waited = tokio::time::timeout(std::time::Duration::from_secs(10), rx.recv()).await;
        assert!(waited.is_err());
    }

    #[test]
    fn test_viewer_scroll_bounds() {
        let (mut ws, _rx) = workspace();
        ws.scroll_viewer(-5, 40);
        assert_eq!(ws.viewer_scroll, 0);
        ws.scroll_viewer(100, 40);
        assert_eq!(ws.viewer_scroll, 39);
    }

    #[test]
    fn test_navigation_resets_scroll() {
        let (mut ws, _rx) = workspace();
        ws.scroll_viewer(10, 40);
        ws.open(Route::Projects);
        assert_eq!(ws.viewer_scroll, 0);
        assert_eq!(ws.route(), Route::Projects);
    }
}
