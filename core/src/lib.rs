pub mod logger;
pub mod config;
pub mod contact;
pub mod content;
pub mod download;
pub mod error;
pub mod output;
pub mod router;
pub mod state;
pub mod terminal;
pub mod theme;

// Re-exports for convenience
pub use config::Config;
pub use contact::{ContactEvent, ContactForm};
pub use error::{DevfolioError, Result};
pub use router::{Route, Router};
pub use state::{StateStore, ViewMode, ViewModeStore};
pub use terminal::{TerminalPanel, TerminalSession};
pub use theme::{Theme, ThemeFlag};
