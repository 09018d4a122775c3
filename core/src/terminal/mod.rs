//! The simulated shell of the dev view: command interpreter, Konami
//! detector and the sizing state machine of the panel hosting it.

pub mod konami;
pub mod output;
pub mod panel;
pub mod registry;
pub mod session;


pub use konami::{KeyInput, KonamiDetector, KONAMI_SEQUENCE};
pub use output::{display_url, CommandRecord, Output, OutputLine};
pub use panel::{
    PanelState, TerminalPanel, DEFAULT_PANEL_HEIGHT, MAX_PANEL_HEIGHT, MIN_PANEL_HEIGHT,
};
pub use registry::{SkillCategory, VOCABULARY};
pub use session::{HistoryDirection, Submitted, TerminalHost, TerminalSession};
