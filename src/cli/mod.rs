//! CLI argument parsing using clap 4.x derive macros

pub mod exec;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// A developer portfolio that lives in your terminal
///
/// Runs the interactive portfolio when no subcommand is given. The same
/// command interpreter used by the in-app terminal is available through
/// `exec`.
#[derive(Parser, Debug)]
#[command(name = "devfolio")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
#[command(disable_version_flag = true)]
pub struct Cli {
    /// The command to execute
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Directory for preferences and logs (defaults to the platform data dir)
    #[arg(long, global = true)]
    pub data_dir: Option<PathBuf>,

    /// Print version information
    #[arg(long)]
    pub version: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run one terminal command and print its output
    Exec {
        /// Command line, e.g. `skills frontend`
        #[arg(num_args = 1.., required = true)]
        command: Vec<String>,
    },

    /// Show or change the persisted view mode
    Mode {
        #[command(subcommand)]
        cmd: Option<ModeCommand>,
    },

    /// Manage the configuration file
    Config {
        #[command(subcommand)]
        cmd: Option<ConfigCommand>,
    },

    /// Show recent debug log lines
    Logs {
        /// Number of lines to show
        #[arg(short = 'n', long, default_value_t = 50)]
        lines: usize,
    },
}

#[derive(Subcommand, Debug)]
pub enum ModeCommand {
    /// Print the current view mode
    Show,
    /// Set the view mode (landing or dev)
    Set {
        mode: String,
    },
    /// Switch between landing and dev
    Toggle,
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// Print the config file location
    Path,
    /// Print the effective configuration
    Show,
    /// Write the default configuration file
    Init {
        /// Overwrite an existing file
        #[arg(short, long)]
        force: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exec_collects_words() {
        let cli = Cli::parse_from(["devfolio", "exec", "skills", "frontend"]);
        match cli.command {
            Some(Commands::Exec { command }) => assert_eq!(command, vec!["skills", "frontend"]),
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_global_data_dir() {
        let cli = Cli::parse_from(["devfolio", "mode", "--data-dir", "/tmp/df", "toggle"]);
        assert_eq!(cli.data_dir, Some(PathBuf::from("/tmp/df")));
        assert!(matches!(
            cli.command,
            Some(Commands::Mode {
                cmd: Some(ModeCommand::Toggle)
            })
        ));
    }

    #[test]
    fn test_no_command_runs_tui() {
        let cli = Cli::parse_from(["devfolio"]);
        assert!(cli.command.is_none());
        assert!(!cli.version);
    }
}
