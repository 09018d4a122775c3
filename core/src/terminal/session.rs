//! Interactive terminal session
//!
//! Owns the input line, scrollback, command history and the Konami
//! detector, and dispatches submitted commands. Effects that reach
//! outside the terminal (page navigation, theme, CV download) go through
//! [`TerminalHost`].

use super::konami::{KeyInput, KonamiDetector};
use super::output::{CommandRecord, Output, OutputLine};
use super::registry::{
    self, easter_egg, help_output, skills_output, SkillCategory, DOWNLOADING_CV, DOWNLOAD_USAGE,
    EASTER_EGGS_HINT, NOT_FOUND_MESSAGE, NO_HISTORY, WELCOME_MESSAGE,
};
use crate::config::LinksConfig;
use crate::router::Route;
use crate::theme::Theme;

/// Collaborators a session reaches out to
pub trait TerminalHost {
    /// Switch the active page
    fn navigate(&mut self, route: Route);
    /// Flip the shared theme flag and return the new theme
    fn toggle_theme(&mut self) -> Theme;
    /// Start the CV download; fire-and-forget
    fn download_cv(&mut self);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HistoryDirection {
    Older,
    Newer,
}

/// What a submission did to the scrollback
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Submitted {
    /// Blank input, nothing happened
    Ignored,
    /// One record appended
    Appended,
    /// Scrollback emptied by `clear`
    Cleared,
}

pub struct TerminalSession {
    input: String,
    /// Cursor within `input`, in chars
    cursor: usize,
    scrollback: Vec<CommandRecord>,
    history: Vec<String>,
    /// Steps back from the newest history entry; None when not recalling
    history_cursor: Option<usize>,
    suggestions_visible: bool,
    konami: KonamiDetector,
    links: LinksConfig,
}

impl TerminalSession {
    pub fn new(links: LinksConfig) -> Self {
        Self {
            input: String::new(),
            cursor: 0,
            scrollback: Vec::new(),
            history: Vec::new(),
            history_cursor: None,
            suggestions_visible: false,
            konami: KonamiDetector::new(),
            links,
        }
    }

    /// Session greeted with the welcome record, as shown on startup
    pub fn with_welcome(links: LinksConfig) -> Self {
        let mut session = Self::new(links);
        session
            .scrollback
            .push(CommandRecord::new("help", Output::text(WELCOME_MESSAGE)));
        session
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn scrollback(&self) -> &[CommandRecord] {
        &self.scrollback
    }

    pub fn history(&self) -> &[String] {
        &self.history
    }

    pub fn history_cursor(&self) -> Option<usize> {
        self.history_cursor
    }

    pub fn konami_progress(&self) -> usize {
        self.konami.progress()
    }

    // =========================================================================
    // Submission
    // =========================================================================

    /// Submit the current input line and clear it
    pub fn submit_input(&mut self, host: &mut dyn TerminalHost) -> Submitted {
        if self.input.trim().is_empty() {
            return Submitted::Ignored;
        }
        let line = std::mem::take(&mut self.input);
        self.cursor = 0;
        self.submit(&line, host)
    }

    /// Run one command line
    pub fn submit(&mut self, raw: &str, host: &mut dyn TerminalHost) -> Submitted {
        if raw.trim().is_empty() {
            return Submitted::Ignored;
        }

        self.history.push(raw.to_string());
        self.history_cursor = None;
        self.suggestions_visible = false;

        let lowered = raw.to_lowercase();
        let mut tokens = lowered.split_whitespace();
        let command = tokens.next().unwrap_or_default();
        let args: Vec<&str> = tokens.collect();

        crate::debug_log!("terminal command: {:?} args={:?}", command, args);

        if let Some(egg) = easter_egg(command) {
            self.scrollback.push(CommandRecord::new(raw, egg.render()));
            return Submitted::Appended;
        }

        let output = match command {
            "help" => help_output(),
            "about" => navigate(host, Route::About),
            "projects" => navigate(host, Route::Projects),
            "experience" => navigate(host, Route::Experience),
            "contact" => navigate(host, Route::Contact),
            "skills" => skills_output(args.first().and_then(|arg| SkillCategory::parse(arg))),
            "theme" => {
                let theme = host.toggle_theme();
                Output::text(format!("Theme switched to {} mode.", theme))
            }
            "download" => {
                if args.first() == Some(&"cv") {
                    host.download_cv();
                    Output::text(DOWNLOADING_CV)
                } else {
                    Output::text(DOWNLOAD_USAGE)
                }
            }
            "clear" => {
                self.scrollback.clear();
                return Submitted::Cleared;
            }
            "social" => self.social_output(),
            "history" => self.history_output(),
            "eastereggs" => Output::text(EASTER_EGGS_HINT),
            _ => Output::text(NOT_FOUND_MESSAGE),
        };

        self.scrollback.push(CommandRecord::new(raw, output));
        Submitted::Appended
    }

    fn social_output(&self) -> Output {
        let mut lines = vec![OutputLine::heading("Connect with me:")];
        lines.extend(self.links.entries().into_iter().map(|(label, url)| OutputLine::Link {
            label: label.to_string(),
            url: url.to_string(),
        }));
        Output::Block(lines)
    }

    /// History as it stood before the `history` command itself
    fn history_output(&self) -> Output {
        let earlier = &self.history[..self.history.len().saturating_sub(1)];
        if earlier.is_empty() {
            return Output::text(NO_HISTORY);
        }
        let mut lines = vec![OutputLine::heading("Command history:")];
        lines.extend(earlier.iter().map(|entry| OutputLine::bullet(entry.as_str())));
        Output::Block(lines)
    }

    // =========================================================================
    // History recall
    // =========================================================================

    pub fn navigate_history(&mut self, direction: HistoryDirection) {
        self.suggestions_visible = false;
        match direction {
            HistoryDirection::Older => {
                let next = self.history_cursor.map_or(0, |cursor| cursor + 1);
                if next < self.history.len() {
                    self.history_cursor = Some(next);
                    self.recall(next);
                }
            }
            HistoryDirection::Newer => match self.history_cursor {
                Some(0) => {
                    self.history_cursor = None;
                    self.set_line(String::new());
                }
                Some(cursor) => {
                    self.history_cursor = Some(cursor - 1);
                    self.recall(cursor - 1);
                }
                None => {}
            },
        }
    }

    fn recall(&mut self, steps_back: usize) {
        let entry = self.history[self.history.len() - 1 - steps_back].clone();
        self.set_line(entry);
    }

    // =========================================================================
    // Input and suggestions
    // =========================================================================

    /// Replace the input line; suggestions follow from it
    pub fn update_input(&mut self, text: impl Into<String>) {
        self.set_line(text.into());
    }

    fn set_line(&mut self, text: String) {
        self.cursor = text.chars().count();
        self.input = text;
    }

    /// Vocabulary entries matching the current input, in declaration order
    pub fn suggestions(&self) -> Vec<&'static str> {
        registry::suggest(&self.input)
    }

    /// Suggestions to display: empty unless the list is shown
    pub fn visible_suggestions(&self) -> Vec<&'static str> {
        if self.suggestions_visible {
            self.suggestions()
        } else {
            Vec::new()
        }
    }

    pub fn suggestions_visible(&self) -> bool {
        self.suggestions_visible
    }

    pub fn show_suggestions(&mut self) {
        self.suggestions_visible = true;
    }

    pub fn hide_suggestions(&mut self) {
        self.suggestions_visible = false;
    }

    /// Input gained focus: reveal suggestions for a non-empty line
    pub fn on_focus(&mut self) {
        if !self.input.trim().is_empty() {
            self.suggestions_visible = true;
        }
    }

    /// Complete to the first suggestion; false when nothing matched
    pub fn autocomplete(&mut self) -> bool {
        match self.suggestions().first() {
            Some(first) => {
                self.set_line(first.to_string());
                self.suggestions_visible = false;
                true
            }
            None => false,
        }
    }

    pub fn select_suggestion(&mut self, choice: &str) {
        self.set_line(choice.to_string());
        self.suggestions_visible = false;
    }

    // =========================================================================
    // Line editing
    // =========================================================================

    fn byte_index(&self, char_index: usize) -> usize {
        self.input
            .char_indices()
            .nth(char_index)
            .map_or(self.input.len(), |(i, _)| i)
    }

    pub fn enter_char(&mut self, c: char) {
        let at = self.byte_index(self.cursor);
        let mut text = self.input.clone();
        text.insert(at, c);
        let cursor = self.cursor + 1;
        self.update_input(text);
        self.cursor = cursor;
    }

    /// Backspace
    pub fn delete_char(&mut self) {
        if self.cursor == 0 {
            return;
        }
        let start = self.byte_index(self.cursor - 1);
        let end = self.byte_index(self.cursor);
        let mut text = self.input.clone();
        text.replace_range(start..end, "");
        let cursor = self.cursor - 1;
        self.update_input(text);
        self.cursor = cursor;
    }

    pub fn delete_at_cursor(&mut self) {
        if self.cursor >= self.input.chars().count() {
            return;
        }
        let start = self.byte_index(self.cursor);
        let end = self.byte_index(self.cursor + 1);
        let mut text = self.input.clone();
        text.replace_range(start..end, "");
        let cursor = self.cursor;
        self.update_input(text);
        self.cursor = cursor;
    }

    pub fn move_cursor_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_cursor_right(&mut self) {
        self.cursor = (self.cursor + 1).min(self.input.chars().count());
    }

    pub fn move_cursor_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_cursor_end(&mut self) {
        self.cursor = self.input.chars().count();
    }

    // =========================================================================
    // Global key tap
    // =========================================================================

    /// Observe any key press in the app; runs `konami` when the code completes
    pub fn on_global_key(&mut self, key: KeyInput, host: &mut dyn TerminalHost) -> bool {
        if self.konami.observe(key) {
            crate::info_log!("konami code entered");
            self.submit("konami", host);
            return true;
        }
        false
    }
}

fn navigate(host: &mut dyn TerminalHost, route: Route) -> Output {
    host.navigate(route);
    Output::text(format!("Navigating to {} page...", route.title()))
}
