//! Scrollback records and their structured output.

/// One line of a structured output block
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputLine {
    /// Bold lead-in line ("Available commands:")
    Heading(String),
    Text(String),
    /// Highlighted command name followed by its description
    Entry { name: String, description: String },
    Bullet(String),
    Link { label: String, url: String },
    /// Secondary, dimmed text
    Note(String),
    /// Raw glyph row (matrix rain)
    Glyphs(String),
}

impl OutputLine {
    pub fn heading(text: impl Into<String>) -> Self {
        Self::Heading(text.into())
    }

    pub fn text(text: impl Into<String>) -> Self {
        Self::Text(text.into())
    }

    pub fn bullet(text: impl Into<String>) -> Self {
        Self::Bullet(text.into())
    }

    pub fn note(text: impl Into<String>) -> Self {
        Self::Note(text.into())
    }

    /// Plain-text rendering used by the CLI and tests
    pub fn plain(&self) -> String {
        match self {
            Self::Heading(text) | Self::Text(text) | Self::Note(text) | Self::Glyphs(text) => {
                text.clone()
            }
            Self::Entry { name, description } => format!("{} - {}", name, description),
            Self::Bullet(text) => format!("• {}", text),
            Self::Link { label, url } => format!("{}: {}", label, display_url(url)),
        }
    }
}

/// Strip the scheme for display, the way link text is shown
pub fn display_url(url: &str) -> &str {
    url.strip_prefix("https://")
        .or_else(|| url.strip_prefix("http://"))
        .unwrap_or(url)
}

/// Output of one command: a plain message or a structured block
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Output {
    Text(String),
    Block(Vec<OutputLine>),
}

impl Output {
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text(text.into())
    }

    pub fn plain_lines(&self) -> Vec<String> {
        match self {
            Self::Text(text) => text.lines().map(str::to_string).collect(),
            Self::Block(lines) => lines.iter().map(OutputLine::plain).collect(),
        }
    }

    /// Bullet items of a block, in order
    pub fn bullets(&self) -> Vec<&str> {
        match self {
            Self::Text(_) => Vec::new(),
            Self::Block(lines) => lines
                .iter()
                .filter_map(|line| match line {
                    OutputLine::Bullet(item) => Some(item.as_str()),
                    _ => None,
                })
                .collect(),
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            Self::Block(_) => None,
        }
    }
}

/// A submitted command and what it printed; immutable once appended
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandRecord {
    pub input: String,
    pub output: Output,
}

impl CommandRecord {
    pub fn new(input: impl Into<String>, output: Output) -> Self {
        Self {
            input: input.into(),
            output,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_rendering() {
        let output = Output::Block(vec![
            OutputLine::heading("Connect with me:"),
            OutputLine::Link {
                label: "GitHub".to_string(),
                url: "https://github.com/yourusername".to_string(),
            },
            OutputLine::Entry {
                name: "help".to_string(),
                description: "Display available commands".to_string(),
            },
            OutputLine::bullet("React"),
        ]);

        assert_eq!(
            output.plain_lines(),
            vec![
                "Connect with me:",
                "GitHub: github.com/yourusername",
                "help - Display available commands",
                "• React",
            ]
        );
        assert_eq!(output.bullets(), vec!["React"]);
    }

    #[test]
    fn test_multiline_text() {
        let output = Output::text("one\ntwo");
        assert_eq!(output.plain_lines(), vec!["one", "two"]);
        assert!(output.bullets().is_empty());
    }
}
