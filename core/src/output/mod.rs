//! Output formatting module
//!
//! Prints terminal records, view mode and configuration for the one-shot
//! CLI using colored output.
use crate::config::Config;
use crate::state::ViewMode;
use crate::terminal::{display_url, CommandRecord, Output, OutputLine};
use console::Style;

/// Output formatter for CLI results
pub struct OutputFormatter {
    // Styles
    blue: Style,
    green: Style,
    yellow: Style,
    dim: Style,
    bold: Style,
}

impl Default for OutputFormatter {
    fn default() -> Self {
        Self {
            blue: Style::new().blue(),
            green: Style::new().green(),
            yellow: Style::new().yellow(),
            dim: Style::new().dim(),
            bold: Style::new().bold(),
        }
    }
}

impl OutputFormatter {
    /// Create a new formatter
    pub fn new() -> Self {
        Self::default()
    }

    /// Render one record the way the terminal panel shows it
    pub fn format_record(&self, record: &CommandRecord) -> Vec<String> {
        let mut lines = vec![format!(
            "{} {}",
            self.green.apply_to("$"),
            record.input
        )];
        match &record.output {
            Output::Text(text) => lines.extend(text.lines().map(str::to_string)),
            Output::Block(block) => lines.extend(block.iter().map(|line| self.format_line(line))),
        }
        lines
    }

    fn format_line(&self, line: &OutputLine) -> String {
        match line {
            OutputLine::Heading(text) => self.bold.apply_to(text).to_string(),
            OutputLine::Text(text) => text.clone(),
            OutputLine::Entry { name, description } => {
                format!("  {} - {}", self.yellow.apply_to(name), description)
            }
            OutputLine::Bullet(text) => format!("  • {}", text),
            OutputLine::Link { label, url } => {
                format!("  {}: {}", label, self.blue.apply_to(display_url(url)))
            }
            OutputLine::Note(text) => self.dim.apply_to(text).to_string(),
            OutputLine::Glyphs(text) => self.green.apply_to(text).to_string(),
        }
    }

    /// Print a command record
    pub fn print_record(&self, record: &CommandRecord) {
        for line in self.format_record(record) {
            println!("{}", line);
        }
    }

    /// Print the current view mode
    pub fn print_view_mode(&self, mode: ViewMode) {
        println!("View mode: {}", self.green.apply_to(mode));
    }

    /// Print the effective configuration
    pub fn print_config(&self, config: &Config) {
        println!();
        println!("{}", self.bold.apply_to("Current Configuration:"));
        println!("- Name: {}", self.green.apply_to(&config.profile.name));
        println!("- Title: {}", config.profile.title);
        for (label, url) in config.links.entries() {
            println!("- {}: {}", label, self.blue.apply_to(url));
        }
        println!("- CV source: {}", config.download.source.display());
        println!("- Theme: {}", config.ui.theme);
        println!("- Log level: {}", config.logging.level);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_lines() {
        console::set_colors_enabled(false);
        let formatter = OutputFormatter::new();
        let record = CommandRecord::new(
            "social",
            Output::Block(vec![
                OutputLine::heading("Connect with me:"),
                OutputLine::Link {
                    label: "GitHub".to_string(),
                    url: "https://github.com/someone".to_string(),
                },
            ]),
        );
        assert_eq!(
            formatter.format_record(&record),
            vec!["$ social", "Connect with me:", "  GitHub: github.com/someone"]
        );
    }
}
