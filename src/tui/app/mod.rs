//! TUI application state

pub mod state;
pub mod workspace;

pub use state::{App, Focus, HitAreas};
