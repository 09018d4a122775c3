//! Event Loop Module
//!
//! Handles keyboard and mouse events for the TUI.

use crossterm::event::{
    KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use devfolio_core::content::page_source;
use devfolio_core::state::ViewMode;
use devfolio_core::terminal::{HistoryDirection, KeyInput, Submitted};
use devfolio_core::Route;

use crate::tui::app::state::{contains, App, Focus};

/// Viewer lines moved by PageUp/PageDown
const PAGE_STEP: i32 = 10;

/// Map a crossterm key onto the detector's key identity
///
/// Chorded keys are shortcuts, never sequence steps.
pub fn key_input(key: &KeyEvent) -> KeyInput {
    if key
        .modifiers
        .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
    {
        return KeyInput::Other;
    }
    match key.code {
        KeyCode::Up => KeyInput::Up,
        KeyCode::Down => KeyInput::Down,
        KeyCode::Left => KeyInput::Left,
        KeyCode::Right => KeyInput::Right,
        KeyCode::Char(c) => KeyInput::Char(c),
        _ => KeyInput::Other,
    }
}

/// Handle key events
pub fn handle_key_event(app: &mut App, key: KeyEvent) -> LoopAction {
    if key.kind != KeyEventKind::Press {
        return LoopAction::Continue;
    }

    // Read-only tap: every press reaches the detector whatever has focus
    if app.session.on_global_key(key_input(&key), &mut app.workspace) {
        app.terminal_scroll = 0;
    }

    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

    // Global shortcuts
    match key.code {
        KeyCode::Char('c') | KeyCode::Char('q') if ctrl => {
            app.should_quit = true;
            return LoopAction::Break;
        }
        KeyCode::F(2) => {
            app.toggle_view_mode();
            return LoopAction::Continue;
        }
        KeyCode::F(12) => {
            app.show_logs = !app.show_logs;
            return LoopAction::Continue;
        }
        KeyCode::Esc if app.show_logs => {
            app.show_logs = false;
            return LoopAction::Continue;
        }
        _ => {}
    }

    match app.mode() {
        ViewMode::Landing => handle_landing_key(app, key),
        ViewMode::Dev => handle_dev_key(app, key),
    }
}

fn handle_landing_key(app: &mut App, key: KeyEvent) -> LoopAction {
    match key.code {
        KeyCode::Char('q') => {
            app.should_quit = true;
            LoopAction::Break
        }
        KeyCode::Enter | KeyCode::Char('d') => {
            app.set_view_mode(ViewMode::Dev);
            LoopAction::Continue
        }
        KeyCode::Up => {
            app.landing_scroll = app.landing_scroll.saturating_sub(1);
            LoopAction::Continue
        }
        KeyCode::Down => {
            app.landing_scroll = app.landing_scroll.saturating_add(1);
            LoopAction::Continue
        }
        KeyCode::PageUp => {
            app.landing_scroll = app.landing_scroll.saturating_sub(PAGE_STEP as u16);
            LoopAction::Continue
        }
        KeyCode::PageDown => {
            app.landing_scroll = app.landing_scroll.saturating_add(PAGE_STEP as u16);
            LoopAction::Continue
        }
        KeyCode::Home => {
            app.landing_scroll = 0;
            LoopAction::Continue
        }
        _ => LoopAction::Continue,
    }
}

fn handle_dev_key(app: &mut App, key: KeyEvent) -> LoopAction {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    let alt = key.modifiers.contains(KeyModifiers::ALT);

    // Dev view shortcuts
    match key.code {
        KeyCode::Char(c @ '1'..='4') if alt => {
            let index = c as usize - '1' as usize;
            app.navigate(Route::ALL[index]);
            return LoopAction::Continue;
        }
        KeyCode::Char('t') if ctrl => {
            app.panel.toggle();
            return LoopAction::Continue;
        }
        KeyCode::Char('r') if ctrl => {
            app.panel.minimize();
            return LoopAction::Continue;
        }
        KeyCode::F(11) => {
            app.panel.maximize();
            return LoopAction::Continue;
        }
        KeyCode::Up if ctrl => {
            app.resize_panel_rows(1);
            return LoopAction::Continue;
        }
        KeyCode::Down if ctrl => {
            app.resize_panel_rows(-1);
            return LoopAction::Continue;
        }
        KeyCode::PageUp => {
            scroll_viewer(app, -PAGE_STEP);
            return LoopAction::Continue;
        }
        KeyCode::PageDown => {
            scroll_viewer(app, PAGE_STEP);
            return LoopAction::Continue;
        }
        KeyCode::F(4) => {
            app.toggle_contact_focus();
            return LoopAction::Continue;
        }
        _ => {}
    }

    // Focus-specific handling
    match app.focus {
        Focus::Terminal => handle_terminal_focus(app, key),
        Focus::Contact => handle_contact_focus(app, key),
    }
}

fn scroll_viewer(app: &mut App, delta: i32) {
    let route = app.workspace.route();
    let lines = page_source(route).lines().count();
    app.workspace.scroll_viewer(delta, lines);
}

fn handle_terminal_focus(app: &mut App, key: KeyEvent) -> LoopAction {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    match key.code {
        KeyCode::Enter => {
            if app.session.submit_input(&mut app.workspace) != Submitted::Ignored {
                app.terminal_scroll = 0;
            }
        }
        // Ctrl+Space arrives as a control-modified space
        KeyCode::Char(' ') if ctrl => app.session.show_suggestions(),
        KeyCode::Char('a') if ctrl => app.session.move_cursor_home(),
        KeyCode::Char('e') if ctrl => app.session.move_cursor_end(),
        KeyCode::Char(c) if !ctrl => app.session.enter_char(c),
        KeyCode::Tab => {
            app.session.autocomplete();
        }
        KeyCode::Esc => app.session.hide_suggestions(),
        KeyCode::Up => app.session.navigate_history(HistoryDirection::Older),
        KeyCode::Down => app.session.navigate_history(HistoryDirection::Newer),
        KeyCode::Backspace => app.session.delete_char(),
        KeyCode::Delete => app.session.delete_at_cursor(),
        KeyCode::Left => app.session.move_cursor_left(),
        KeyCode::Right => app.session.move_cursor_right(),
        KeyCode::Home => app.session.move_cursor_home(),
        KeyCode::End => app.session.move_cursor_end(),
        _ => {}
    }
    LoopAction::Continue
}

fn handle_contact_focus(app: &mut App, key: KeyEvent) -> LoopAction {
    match key.code {
        KeyCode::Esc => app.focus_terminal(),
        KeyCode::Tab | KeyCode::Down => app.workspace.contact.focus_next(),
        KeyCode::Enter => app.workspace.submit_contact(),
        KeyCode::Backspace => app.workspace.contact.delete_char(),
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.workspace.contact.enter_char(c)
        }
        _ => {}
    }
    LoopAction::Continue
}

/// Handle mouse events
pub fn handle_mouse_event(app: &mut App, mouse: MouseEvent) {
    let (column, row) = (mouse.column, mouse.row);
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => handle_click(app, column, row),
        MouseEventKind::Drag(MouseButton::Left) => {
            if app.panel.is_dragging() {
                let y = app.pointer_units(row);
                app.panel.drag_to(y);
            }
        }
        // Release anywhere ends the drag
        MouseEventKind::Up(_) => app.panel.end_drag(),
        MouseEventKind::ScrollUp => scroll_at(app, column, row, -3),
        MouseEventKind::ScrollDown => scroll_at(app, column, row, 3),
        _ => {}
    }
}

fn handle_click(app: &mut App, column: u16, row: u16) {
    let hit = |area: Option<ratatui::layout::Rect>| area.is_some_and(|a| contains(a, column, row));

    if hit(app.areas.mode_toggle) {
        app.toggle_view_mode();
        return;
    }
    if app.mode() == ViewMode::Landing {
        return;
    }

    let areas = &app.areas;
    if let Some(&(_, choice)) = areas.suggestions.iter().find(|(a, _)| contains(*a, column, row)) {
        app.session.select_suggestion(choice);
        return;
    }
    if hit(areas.collapse_button) {
        app.panel.toggle();
        return;
    }
    if hit(areas.maximize_button) {
        app.panel.maximize();
        return;
    }
    if hit(areas.panel_header) {
        let y = app.pointer_units(row);
        app.panel.begin_drag(y);
        return;
    }
    let route = areas
        .tabs
        .iter()
        .chain(areas.explorer.iter())
        .find(|(a, _)| contains(*a, column, row))
        .map(|&(_, route)| route);
    if let Some(route) = route {
        app.navigate(route);
        return;
    }
    if hit(areas.back_to_landing) {
        app.set_view_mode(ViewMode::Landing);
        return;
    }
    if let Some(&(_, field)) = areas.contact_fields.iter().find(|(a, _)| contains(*a, column, row)) {
        app.session.hide_suggestions();
        app.focus = Focus::Contact;
        app.workspace.contact.focus(field);
        return;
    }
    if hit(areas.contact_submit) {
        app.workspace.submit_contact();
        return;
    }
    if hit(areas.terminal_input) || hit(areas.panel) {
        app.focus_terminal();
    }
}

fn scroll_at(app: &mut App, column: u16, row: u16, delta: i32) {
    match app.mode() {
        ViewMode::Landing => {
            let next = (i32::from(app.landing_scroll) + delta).max(0);
            app.landing_scroll = next as u16;
        }
        ViewMode::Dev => {
            if app.areas.panel.is_some_and(|a| contains(a, column, row)) {
                // Wheel down moves toward the newest output
                app.scroll_terminal(-delta);
            } else if app.areas.viewer.is_some_and(|a| contains(a, column, row)) {
                scroll_viewer(app, delta);
            }
        }
    }
}

/// Action to take after handling an event
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LoopAction {
    /// Continue the event loop
    Continue,
    /// Break out of the event loop
    Break,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEventState;
    use devfolio_core::terminal::{PanelState, DEFAULT_PANEL_HEIGHT, KONAMI_SEQUENCE};
    use devfolio_core::Config;
    use ratatui::layout::Rect;
    use tempfile::TempDir;
    use tokio::sync::mpsc;

    fn dev_app() -> (App, TempDir) {
        let dir = tempfile::tempdir().unwrap();
        let (tx, _rx) = mpsc::unbounded_channel();
        let mut app = App::new(Config::default(), dir.path().to_path_buf(), tx);
        app.set_view_mode(ViewMode::Dev);
        (app, dir)
    }

    fn press(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent {
            code,
            modifiers,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        }
    }

    fn key(code: KeyCode) -> KeyEvent {
        press(code, KeyModifiers::NONE)
    }

    fn mouse(kind: MouseEventKind, column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    fn type_line(app: &mut App, line: &str) {
        for c in line.chars() {
            handle_key_event(app, key(KeyCode::Char(c)));
        }
        handle_key_event(app, key(KeyCode::Enter));
    }

    #[test]
    fn test_typed_command_navigates() {
        let (mut app, _dir) = dev_app();
        type_line(&mut app, "projects");
        assert_eq!(app.workspace.route(), Route::Projects);
        assert_eq!(app.session.scrollback().len(), 2);
        assert_eq!(app.session.input(), "");
    }

    #[test]
    fn test_konami_through_key_events() {
        let (mut app, _dir) = dev_app();
        for step in KONAMI_SEQUENCE {
            let code = match step {
                KeyInput::Up => KeyCode::Up,
                KeyInput::Down => KeyCode::Down,
                KeyInput::Left => KeyCode::Left,
                KeyInput::Right => KeyCode::Right,
                KeyInput::Char(c) => KeyCode::Char(c),
                KeyInput::Other => KeyCode::Null,
            };
            handle_key_event(&mut app, key(code));
        }
        let last = app.session.scrollback().last().unwrap();
        assert_eq!(last.input, "konami");
    }

    #[test]
    fn test_chorded_keys_are_not_sequence_steps() {
        assert_eq!(
            key_input(&press(KeyCode::Up, KeyModifiers::CONTROL)),
            KeyInput::Other
        );
        assert_eq!(
            key_input(&press(KeyCode::Char('a'), KeyModifiers::CONTROL)),
            KeyInput::Other
        );
        assert_eq!(
            key_input(&press(KeyCode::Char('b'), KeyModifiers::ALT)),
            KeyInput::Other
        );
        assert_eq!(key_input(&key(KeyCode::Up)), KeyInput::Up);
        assert_eq!(
            key_input(&press(KeyCode::Char('B'), KeyModifiers::SHIFT)),
            KeyInput::Char('B')
        );
    }

    #[test]
    fn test_panel_resize_does_not_feed_konami() {
        let (mut app, _dir) = dev_app();
        handle_key_event(&mut app, press(KeyCode::Up, KeyModifiers::CONTROL));
        handle_key_event(&mut app, press(KeyCode::Up, KeyModifiers::CONTROL));
        for step in &KONAMI_SEQUENCE[2..] {
            let code = match *step {
                KeyInput::Down => KeyCode::Down,
                KeyInput::Left => KeyCode::Left,
                KeyInput::Right => KeyCode::Right,
                KeyInput::Char(c) => KeyCode::Char(c),
                _ => KeyCode::Null,
            };
            handle_key_event(&mut app, key(code));
        }
        assert!(app
            .session
            .scrollback()
            .iter()
            .all(|record| record.input != "konami"));
    }

    #[test]
    fn test_release_events_are_ignored() {
        let (mut app, _dir) = dev_app();
        let mut release = key(KeyCode::Char('x'));
        release.kind = KeyEventKind::Release;
        handle_key_event(&mut app, release);
        assert_eq!(app.session.input(), "");
    }

    #[test]
    fn test_quit_shortcuts() {
        let (mut app, _dir) = dev_app();
        assert_eq!(
            handle_key_event(&mut app, press(KeyCode::Char('q'), KeyModifiers::CONTROL)),
            LoopAction::Break
        );

        // Plain `q` is just a character in the dev view
        let (mut app, _dir) = dev_app();
        assert_eq!(handle_key_event(&mut app, key(KeyCode::Char('q'))), LoopAction::Continue);
        assert_eq!(app.session.input(), "q");
    }

    #[test]
    fn test_panel_shortcuts() {
        let (mut app, _dir) = dev_app();
        handle_key_event(&mut app, press(KeyCode::Char('t'), KeyModifiers::CONTROL));
        assert_eq!(app.panel.state(), PanelState::Collapsed);
        handle_key_event(&mut app, key(KeyCode::F(11)));
        assert_eq!(app.panel.state(), PanelState::Maximized);
        handle_key_event(&mut app, press(KeyCode::Char('r'), KeyModifiers::CONTROL));
        assert_eq!(app.panel.height(), DEFAULT_PANEL_HEIGHT);
    }

    #[test]
    fn test_alt_number_switches_route() {
        let (mut app, _dir) = dev_app();
        handle_key_event(&mut app, press(KeyCode::Char('3'), KeyModifiers::ALT));
        assert_eq!(app.workspace.route(), Route::Experience);
    }

    #[test]
    fn test_f2_toggles_mode_and_landing_enter_returns() {
        let (mut app, _dir) = dev_app();
        handle_key_event(&mut app, key(KeyCode::F(2)));
        assert_eq!(app.mode(), ViewMode::Landing);
        handle_key_event(&mut app, key(KeyCode::Enter));
        assert_eq!(app.mode(), ViewMode::Dev);
    }

    #[test]
    fn test_header_drag_resizes_panel() {
        let (mut app, _dir) = dev_app();
        app.areas.panel_header = Some(Rect::new(30, 20, 50, 1));

        handle_mouse_event(&mut app, mouse(MouseEventKind::Down(MouseButton::Left), 40, 20));
        assert!(app.panel.is_dragging());
        handle_mouse_event(&mut app, mouse(MouseEventKind::Drag(MouseButton::Left), 40, 18));
        assert_eq!(app.panel.height(), DEFAULT_PANEL_HEIGHT + 2 * 18);

        // Released outside the header
        handle_mouse_event(&mut app, mouse(MouseEventKind::Up(MouseButton::Left), 0, 0));
        assert!(!app.panel.is_dragging());
    }

    #[test]
    fn test_click_suggestion() {
        let (mut app, _dir) = dev_app();
        app.areas.suggestions = vec![(Rect::new(30, 10, 20, 1), "skills backend")];
        handle_mouse_event(&mut app, mouse(MouseEventKind::Down(MouseButton::Left), 35, 10));
        assert_eq!(app.session.input(), "skills backend");
        assert!(!app.session.suggestions_visible());
    }

    #[test]
    fn test_click_tab() {
        let (mut app, _dir) = dev_app();
        app.areas.tabs = vec![(Rect::new(30, 0, 14, 1), Route::Contact)];
        handle_mouse_event(&mut app, mouse(MouseEventKind::Down(MouseButton::Left), 31, 0));
        assert_eq!(app.workspace.route(), Route::Contact);
    }
}
