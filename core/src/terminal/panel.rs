//! Terminal panel sizing state machine.
//!
//! The panel is collapsed, normal or maximized, and its height always
//! agrees with that state: at MIN it is collapsed, at MAX it is
//! maximized, anything in between is normal. `previous_height` remembers
//! the last height to return to when leaving collapsed/maximized.

pub const MIN_PANEL_HEIGHT: u16 = 36;
pub const MAX_PANEL_HEIGHT: u16 = 500;
pub const DEFAULT_PANEL_HEIGHT: u16 = 250;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelState {
    Collapsed,
    Normal,
    Maximized,
}

/// Pointer position and height captured at drag start
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct DragOrigin {
    start_y: i32,
    start_height: u16,
}

#[derive(Debug, Clone)]
pub struct TerminalPanel {
    state: PanelState,
    height: u16,
    previous_height: u16,
    drag: Option<DragOrigin>,
}

impl Default for TerminalPanel {
    fn default() -> Self {
        Self {
            state: PanelState::Normal,
            height: DEFAULT_PANEL_HEIGHT,
            previous_height: DEFAULT_PANEL_HEIGHT,
            drag: None,
        }
    }
}

impl TerminalPanel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> PanelState {
        self.state
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    pub fn previous_height(&self) -> u16 {
        self.previous_height
    }

    pub fn is_content_visible(&self) -> bool {
        self.state != PanelState::Collapsed
    }

    /// Collapse, or restore from collapsed
    pub fn toggle(&mut self) {
        if self.state == PanelState::Collapsed {
            self.height = self.previous_height;
            self.state = PanelState::Normal;
        } else {
            self.previous_height = self.height;
            self.height = MIN_PANEL_HEIGHT;
            self.state = PanelState::Collapsed;
        }
    }

    /// Maximize, or restore from maximized
    pub fn maximize(&mut self) {
        if self.state == PanelState::Maximized {
            self.height = self.previous_height;
            self.state = PanelState::Normal;
            return;
        }
        // Collapsed height is never worth returning to
        if self.state != PanelState::Collapsed {
            self.previous_height = self.height;
        }
        self.height = MAX_PANEL_HEIGHT;
        self.state = PanelState::Maximized;
    }

    /// Back to the default size
    pub fn minimize(&mut self) {
        self.state = PanelState::Normal;
        self.height = DEFAULT_PANEL_HEIGHT;
    }

    /// Clamp into bounds and derive the state from the result
    pub fn set_height_safe(&mut self, height: i32) {
        let clamped = height.clamp(i32::from(MIN_PANEL_HEIGHT), i32::from(MAX_PANEL_HEIGHT));
        // Clamped into u16 range above
        self.height = clamped as u16;
        self.state = if self.height <= MIN_PANEL_HEIGHT {
            PanelState::Collapsed
        } else if self.height >= MAX_PANEL_HEIGHT {
            PanelState::Maximized
        } else {
            PanelState::Normal
        };
    }

    pub fn begin_drag(&mut self, pointer_y: i32) {
        self.drag = Some(DragOrigin {
            start_y: pointer_y,
            start_height: self.height,
        });
    }

    /// Dragging up grows the panel. No-op when no drag is active.
    pub fn drag_to(&mut self, pointer_y: i32) {
        if let Some(origin) = self.drag {
            let delta = origin.start_y - pointer_y;
            self.set_height_safe(i32::from(origin.start_height) + delta);
        }
    }

    pub fn end_drag(&mut self) {
        self.drag = None;
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state() {
        let panel = TerminalPanel::new();
        assert_eq!(panel.state(), PanelState::Normal);
        assert_eq!(panel.height(), DEFAULT_PANEL_HEIGHT);
        assert!(panel.is_content_visible());
        assert!(!panel.is_dragging());
    }

    #[test]
    fn test_toggle_collapses_and_restores() {
        let mut panel = TerminalPanel::new();
        panel.set_height_safe(300);

        panel.toggle();
        assert_eq!(panel.state(), PanelState::Collapsed);
        assert_eq!(panel.height(), MIN_PANEL_HEIGHT);
        assert_eq!(panel.previous_height(), 300);
        assert!(!panel.is_content_visible());

        panel.toggle();
        assert_eq!(panel.state(), PanelState::Normal);
        assert_eq!(panel.height(), 300);
    }

    #[test]
    fn test_toggle_from_maximized_collapses() {
        let mut panel = TerminalPanel::new();
        panel.maximize();
        panel.toggle();
        assert_eq!(panel.state(), PanelState::Collapsed);
        assert_eq!(panel.previous_height(), MAX_PANEL_HEIGHT);

        panel.toggle();
        assert_eq!(panel.state(), PanelState::Normal);
        assert_eq!(panel.height(), MAX_PANEL_HEIGHT);
    }

    #[test]
    fn test_maximize_and_restore() {
        let mut panel = TerminalPanel::new();
        panel.set_height_safe(120);

        panel.maximize();
        assert_eq!(panel.state(), PanelState::Maximized);
        assert_eq!(panel.height(), MAX_PANEL_HEIGHT);
        assert_eq!(panel.previous_height(), 120);

        panel.maximize();
        assert_eq!(panel.state(), PanelState::Normal);
        assert_eq!(panel.height(), 120);
    }

    #[test]
    fn test_maximize_while_collapsed_keeps_last_normal_height() {
        let mut panel = TerminalPanel::new();
        panel.set_height_safe(180);
        panel.toggle();
        assert_eq!(panel.previous_height(), 180);

        panel.maximize();
        assert_eq!(panel.state(), PanelState::Maximized);
        assert_eq!(panel.height(), MAX_PANEL_HEIGHT);
        assert_eq!(panel.previous_height(), 180);

        panel.maximize();
        assert_eq!(panel.height(), 180);
    }

    #[test]
    fn test_minimize_resets_to_default() {
        let mut panel = TerminalPanel::new();
        panel.maximize();
        panel.minimize();
        assert_eq!(panel.state(), PanelState::Normal);
        assert_eq!(panel.height(), DEFAULT_PANEL_HEIGHT);
    }

    #[test]
    fn test_set_height_safe_clamps_and_derives_state() {
        let mut panel = TerminalPanel::new();

        for (requested, height, state) in [
            (-40, MIN_PANEL_HEIGHT, PanelState::Collapsed),
            (0, MIN_PANEL_HEIGHT, PanelState::Collapsed),
            (35, MIN_PANEL_HEIGHT, PanelState::Collapsed),
            (36, MIN_PANEL_HEIGHT, PanelState::Collapsed),
            (37, 37, PanelState::Normal),
            (250, 250, PanelState::Normal),
            (499, 499, PanelState::Normal),
            (500, MAX_PANEL_HEIGHT, PanelState::Maximized),
            (90_000, MAX_PANEL_HEIGHT, PanelState::Maximized),
        ] {
            panel.set_height_safe(requested);
            assert_eq!(panel.height(), height, "height for {}", requested);
            assert_eq!(panel.state(), state, "state for {}", requested);

            // Idempotent
            panel.set_height_safe(requested);
            assert_eq!(panel.height(), height);
            assert_eq!(panel.state(), state);
        }
    }

    #[test]
    fn test_drag_resizes_relative_to_start() {
        let mut panel = TerminalPanel::new();
        panel.begin_drag(600);
        assert!(panel.is_dragging());

        panel.drag_to(550);
        assert_eq!(panel.height(), DEFAULT_PANEL_HEIGHT + 50);

        panel.drag_to(700);
        assert_eq!(panel.height(), DEFAULT_PANEL_HEIGHT - 100);

        panel.drag_to(-1000);
        assert_eq!(panel.state(), PanelState::Maximized);

        panel.end_drag();
        assert!(!panel.is_dragging());
        panel.drag_to(600);
        assert_eq!(panel.height(), MAX_PANEL_HEIGHT);
    }

    #[test]
    fn test_drag_down_collapses() {
        let mut panel = TerminalPanel::new();
        panel.begin_drag(100);
        panel.drag_to(100 + i32::from(DEFAULT_PANEL_HEIGHT));
        assert_eq!(panel.state(), PanelState::Collapsed);
        assert_eq!(panel.height(), MIN_PANEL_HEIGHT);
    }
}
