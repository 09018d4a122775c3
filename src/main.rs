//! `devfolio` - a developer portfolio that lives in your terminal
//!
//! Runs the interactive portfolio (landing view and IDE-style dev view)
//! and exposes its terminal commands, view mode and configuration from the
//! command line.

use anyhow::{Context, Result};
use clap::Parser;
use console::Style;
use std::path::{Path, PathBuf};

use crate::cli::{Cli, Commands, ConfigCommand, ModeCommand};
use devfolio_core::config::Config;
use devfolio_core::logger::{self, LOG_FILE_NAME};
use devfolio_core::output::OutputFormatter;
use devfolio_core::state::{StateStore, ViewMode, ViewModeStore};

mod cli;
mod tui;

/// Main entry point for the portfolio CLI
#[tokio::main]
async fn main() -> Result<()> {
    // Parse command-line arguments
    let cli = Cli::parse();

    // Handle version separately if explicitly requested
    if cli.version {
        let blue = Style::new().blue();
        println!(
            "{} v{} ({})",
            blue.apply_to("devfolio"),
            env!("CARGO_PKG_VERSION"),
            env!("GIT_HASH")
        );
        return Ok(());
    }

    let data_dir = resolve_data_dir(cli.data_dir.clone())?;

    // Load configuration
    let config = Config::load_or_default();
    let log_dir = config.logging.file.then(|| data_dir.clone());
    logger::init(log_dir, config.logging.level_filter());

    // Setup output formatting
    let formatter = OutputFormatter::new();

    // Handle different commands
    match &cli.command {
        None => {
            tui::run_tui_session(config, data_dir)
                .await
                .context("Terminal UI failed")?;
        }

        Some(Commands::Exec { command }) => {
            cli::exec::run(&command.join(" "), &config, &data_dir);
        }

        Some(Commands::Mode { cmd }) => {
            handle_mode_command(cmd.as_ref(), &data_dir, &formatter)?;
        }

        Some(Commands::Config { cmd }) => {
            handle_config_command(cmd.as_ref(), &config, &formatter)?;
        }

        Some(Commands::Logs { lines }) => {
            let path = data_dir.join(LOG_FILE_NAME);
            if !path.exists() {
                println!("No log file at {}", path.display());
                return Ok(());
            }
            let tail = logger::read_tail(&path, *lines)
                .with_context(|| format!("Failed to read {}", path.display()))?;
            for line in tail {
                println!("{}", line);
            }
        }
    }

    Ok(())
}

fn resolve_data_dir(overridden: Option<PathBuf>) -> Result<PathBuf> {
    match overridden {
        Some(dir) => Ok(dir),
        None => Config::default_data_dir().context("Could not find data directory"),
    }
}

fn handle_mode_command(cmd: Option<&ModeCommand>, data_dir: &Path, formatter: &OutputFormatter) -> Result<()> {
    let mode = apply_mode_command(cmd, data_dir)?;
    formatter.print_view_mode(mode);
    Ok(())
}

/// Run a `mode` subcommand against the preferences in `data_dir`
///
/// A missing or corrupt preferences file reads as landing, like the TUI.
fn apply_mode_command(cmd: Option<&ModeCommand>, data_dir: &Path) -> Result<ViewMode> {
    let mut modes = ViewModeStore::load(StateStore::in_dir(data_dir));

    match cmd {
        None | Some(ModeCommand::Show) => {}
        Some(ModeCommand::Set { mode }) => {
            modes.set(mode.parse::<ViewMode>()?);
        }
        Some(ModeCommand::Toggle) => {
            modes.toggle();
        }
    }

    Ok(modes.get())
}

fn handle_config_command(cmd: Option<&ConfigCommand>, config: &Config, formatter: &OutputFormatter) -> Result<()> {
    match cmd {
        Some(ConfigCommand::Path) => {
            let path = Config::default_path().context("Could not find config directory")?;
            println!("{}", path.display());
        }
        Some(ConfigCommand::Init { force }) => {
            let path = Config::default_path().context("Could not find config directory")?;
            if path.exists() && !*force {
                println!("Config already exists at {} (use --force to overwrite)", path.display());
                return Ok(());
            }
            Config::default()
                .save(&path)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            println!("{} {}", Style::new().green().apply_to("Wrote"), path.display());
        }
        None | Some(ConfigCommand::Show) => formatter.print_config(config),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use devfolio_core::state::PREFERENCES_FILE;
    use tempfile::TempDir;

    #[test]
    fn test_mode_show_on_corrupt_preferences_is_landing() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join(PREFERENCES_FILE), "{broken").unwrap();

        let mode = apply_mode_command(Some(&ModeCommand::Show), dir.path()).unwrap();
        assert_eq!(mode, ViewMode::Landing);
        assert!(handle_mode_command(None, dir.path(), &OutputFormatter::new()).is_ok());
    }

    #[test]
    fn test_mode_toggle_repairs_corrupt_preferences() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join(PREFERENCES_FILE), "{broken").unwrap();

        let mode = apply_mode_command(Some(&ModeCommand::Toggle), dir.path()).unwrap();
        assert_eq!(mode, ViewMode::Dev);
        assert_eq!(apply_mode_command(None, dir.path()).unwrap(), ViewMode::Dev);
    }

    #[test]
    fn test_mode_set_rejects_unknown_names() {
        let dir = TempDir::new().unwrap();
        let set = ModeCommand::Set {
            mode: "fullscreen".to_string(),
        };
        assert!(apply_mode_command(Some(&set), dir.path()).is_err());
        assert_eq!(apply_mode_command(None, dir.path()).unwrap(), ViewMode::Landing);
    }
}
