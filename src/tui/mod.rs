//! TUI Session - the interactive portfolio
//!
//! Architecture:
//! - Landing view: scrollable one-page summary
//! - Dev view: sidebar, tabs, code viewer and the terminal panel
//! - Event loop: a render tick that polls crossterm, plus the contact form's
//!   submission timer events

use crate::tui::app::App;
use crossterm::event::{self, DisableMouseCapture, EnableMouseCapture, Event};
use devfolio_core::{Config, ContactEvent};
use std::io;
use std::path::PathBuf;
use std::time::Duration;
use tokio::sync::mpsc;

// UI modules
pub mod app;
pub mod draw;
pub mod event_loop;
pub mod ui;

use crate::tui::event_loop::{handle_key_event, handle_mouse_event, LoopAction};

/// Main entry point for the TUI
pub async fn run_tui_session(config: Config, data_dir: PathBuf) -> io::Result<()> {
    use crossterm::{
        execute,
        terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    };
    use ratatui::{backend::CrosstermBackend, Terminal};

    let (contact_tx, contact_rx) = mpsc::unbounded_channel();
    let mut app = App::new(config, data_dir, contact_tx);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    if let Err(e) = execute!(stdout, EnterAlternateScreen, EnableMouseCapture) {
        let _ = disable_raw_mode();
        return Err(e);
    }
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = match Terminal::new(backend) {
        Ok(terminal) => terminal,
        Err(e) => {
            let _ = disable_raw_mode();
            let _ = execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture);
            return Err(e);
        }
    };

    devfolio_core::info_log!("tui started in {} mode", app.mode());

    // Main event loop
    let result = run_event_loop(&mut terminal, &mut app, contact_rx).await;

    // Restore terminal, whatever the loop returned
    let restored = disable_raw_mode().and_then(|()| {
        execute!(
            terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableMouseCapture
        )
    });
    terminal.show_cursor()?;

    // Cancel anything still in flight before the runtime goes away
    app.workspace.contact.teardown();
    devfolio_core::info_log!("tui stopped");

    result.and(restored)
}

/// Main event loop
async fn run_event_loop<B: ratatui::backend::Backend>(
    terminal: &mut ratatui::Terminal<B>,
    app: &mut App,
    mut contact_rx: mpsc::UnboundedReceiver<ContactEvent>,
) -> io::Result<()> {
    let tick_rate = Duration::from_millis(app.config.ui.tick_rate_ms.max(1));

    loop {
        // Draw UI
        terminal.draw(|f| crate::tui::ui::render(f, app))?;

        if app.should_quit {
            break;
        }

        tokio::select! {
            _ = tokio::time::sleep(tick_rate) => {
                // Drain everything that queued up during the tick
                while event::poll(Duration::from_secs(0))? {
                    match event::read()? {
                        Event::Key(key) => {
                            if handle_key_event(app, key) == LoopAction::Break {
                                return Ok(());
                            }
                        }
                        Event::Mouse(mouse) => handle_mouse_event(app, mouse),
                        Event::Resize(width, height) => {
                            log::debug!("terminal resized to {}x{}", width, height);
                        }
                        _ => {}
                    }
                }
            }

            Some(event) = contact_rx.recv() => {
                app.on_contact_event(event);
            }
        }
    }

    Ok(())
}
