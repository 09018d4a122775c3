//! Application state management
//!
//! `App` ties the persisted view mode, the terminal session, the panel
//! sizing state machine and the page workspace together, and remembers
//! where the last frame put clickable things.

use super::workspace::Workspace;
use devfolio_core::contact::ContactField;
use devfolio_core::state::{StateStore, ViewMode, ViewModeStore};
use devfolio_core::terminal::{TerminalPanel, TerminalSession};
use devfolio_core::{Config, ContactEvent, Route};
use ratatui::layout::Rect;
use std::path::PathBuf;
use std::time::Instant;
use tokio::sync::mpsc;

/// Which component receives plain key presses in the dev view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    Terminal,
    Contact,
}

/// Clickable regions recorded while drawing the last frame
#[derive(Debug, Clone, Default)]
pub struct HitAreas {
    pub tabs: Vec<(Rect, Route)>,
    pub explorer: Vec<(Rect, Route)>,
    pub back_to_landing: Option<Rect>,
    pub mode_toggle: Option<Rect>,
    pub viewer: Option<Rect>,
    pub panel: Option<Rect>,
    pub panel_header: Option<Rect>,
    pub collapse_button: Option<Rect>,
    pub maximize_button: Option<Rect>,
    pub terminal_input: Option<Rect>,
    pub suggestions: Vec<(Rect, &'static str)>,
    pub contact_fields: Vec<(Rect, ContactField)>,
    pub contact_submit: Option<Rect>,
}

pub fn contains(area: Rect, column: u16, row: u16) -> bool {
    column >= area.x
        && column < area.x.saturating_add(area.width)
        && row >= area.y
        && row < area.y.saturating_add(area.height)
}

pub struct App {
    pub config: Config,
    pub view_mode: ViewModeStore<StateStore>,
    pub session: TerminalSession,
    pub panel: TerminalPanel,
    pub workspace: Workspace,
    pub focus: Focus,
    /// Lines scrolled up from the bottom of the scrollback
    pub terminal_scroll: u16,
    pub landing_scroll: u16,
    pub show_logs: bool,
    pub should_quit: bool,
    pub areas: HitAreas,
    pub started: Instant,
}

impl App {
    pub fn new(config: Config, data_dir: PathBuf, contact_tx: mpsc::UnboundedSender<ContactEvent>) -> Self {
        let view_mode = ViewModeStore::load(StateStore::in_dir(&data_dir));
        let session = TerminalSession::with_welcome(config.links.clone());
        let workspace = Workspace::new(
            config.ui.theme,
            config.download.clone(),
            data_dir,
            contact_tx,
        );
        Self {
            config,
            view_mode,
            session,
            panel: TerminalPanel::new(),
            workspace,
            focus: Focus::Terminal,
            terminal_scroll: 0,
            landing_scroll: 0,
            show_logs: false,
            should_quit: false,
            areas: HitAreas::default(),
            started: Instant::now(),
        }
    }

    pub fn mode(&self) -> ViewMode {
        self.view_mode.get()
    }

    pub fn toggle_view_mode(&mut self) {
        let mode = self.view_mode.toggle();
        self.after_mode_change(mode);
    }

    pub fn set_view_mode(&mut self, mode: ViewMode) {
        self.view_mode.set(mode);
        self.after_mode_change(mode);
    }

    fn after_mode_change(&mut self, mode: ViewMode) {
        devfolio_core::info_log!("view mode is now {}", mode);
        self.areas = HitAreas::default();
        match mode {
            // The landing view only has the root page
            ViewMode::Landing => self.workspace.open(Route::About),
            ViewMode::Dev => self.focus_terminal(),
        }
    }

    pub fn navigate(&mut self, route: Route) {
        self.workspace.open(route);
        if route != Route::Contact && self.focus == Focus::Contact {
            self.focus_terminal();
        }
    }

    pub fn focus_terminal(&mut self) {
        self.focus = Focus::Terminal;
        self.session.on_focus();
    }

    /// F4: move between the contact form and the terminal
    pub fn toggle_contact_focus(&mut self) {
        if self.focus == Focus::Contact {
            self.focus_terminal();
        } else if self.workspace.route() == Route::Contact {
            self.session.hide_suggestions();
            self.focus = Focus::Contact;
        }
    }

    /// One row up/down in panel height units
    pub fn resize_panel_rows(&mut self, rows: i32) {
        let step = i32::from(self.config.ui.row_height.max(1));
        let height = i32::from(self.panel.height()) + rows * step;
        self.panel.set_height_safe(height);
    }

    /// Rows the panel occupies on screen, header included
    pub fn panel_rows(&self) -> u16 {
        (self.panel.height() / self.config.ui.row_height.max(1)).max(2)
    }

    /// Pointer row expressed in panel height units
    pub fn pointer_units(&self, row: u16) -> i32 {
        i32::from(row) * i32::from(self.config.ui.row_height.max(1))
    }

    pub fn scroll_terminal(&mut self, delta: i32) {
        let next = (i32::from(self.terminal_scroll) + delta).max(0);
        self.terminal_scroll = next.min(i32::from(u16::MAX)) as u16;
    }

    pub fn on_contact_event(&mut self, event: ContactEvent) {
        self.workspace.contact.apply(event);
    }
}
