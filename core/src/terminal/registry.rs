//! Command registry and fixed command content.
//!
//! Holds the autocomplete vocabulary, the hidden Easter-egg table, the
//! skill catalogue and the help listing. The help listing is written out by
//! hand and does not derive from [`VOCABULARY`]; the two are kept in step
//! manually (a test checks every top-level vocabulary command is listed).

use super::output::{Output, OutputLine};
use rand::Rng;

pub const WELCOME_MESSAGE: &str = "Welcome! Type 'help' to see available commands.";
pub const NOT_FOUND_MESSAGE: &str = "Command not found. Type 'help' for available commands.";
pub const DOWNLOAD_USAGE: &str = "Please specify what to download. Try 'download cv'";
pub const DOWNLOADING_CV: &str = "Downloading CV...";
pub const NO_HISTORY: &str = "No command history available.";
pub const EASTER_EGGS_HINT: &str =
    "Nice try! Find them yourself 😉 (Hint: Try common terminal commands, greetings, or gaming references)";

/// Autocomplete vocabulary in declaration order; excludes Easter eggs
pub const VOCABULARY: &[&str] = &[
    "help",
    "about",
    "projects",
    "experience",
    "contact",
    "skills",
    "skills frontend",
    "skills backend",
    "skills database",
    "skills devops",
    "skills tools",
    "theme",
    "download cv",
    "clear",
    "social",
    "history",
];

/// Output of a hidden command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EasterEgg {
    Text(&'static str),
    /// Freshly generated binary rain on every run
    Matrix,
}

/// Hidden commands, matched before anything else
pub const EASTER_EGGS: &[(&str, EasterEgg)] = &[
    (
        "sudo",
        EasterEgg::Text("Nice try! You don't have admin privileges in this browser."),
    ),
    ("matrix", EasterEgg::Matrix),
    (
        "coffee",
        EasterEgg::Text(
            "Error: Coffee machine not connected. Would you like some virtual coffee instead? ☕",
        ),
    ),
    (
        "hello",
        EasterEgg::Text("Hello there! Nice to meet you. How can I help you today?"),
    ),
    ("ping", EasterEgg::Text("pong! 🏓")),
    ("flip", EasterEgg::Text("(╯°□°）╯︵ ┻━┻")),
    ("unflip", EasterEgg::Text("┬─┬ ノ( ゜-゜ノ)")),
    ("party", EasterEgg::Text("🎉 🎊 🎈 🥳 Let's party! 🎵 🎶 💃 🕺")),
    (
        "joke",
        EasterEgg::Text("Why do programmers prefer dark mode? Because light attracts bugs!"),
    ),
    (
        "quote",
        EasterEgg::Text("\"The best way to predict the future is to invent it.\" - Alan Kay"),
    ),
    (
        "easter",
        EasterEgg::Text(
            "🥚 You found an Easter egg! There are several more hidden commands to discover...",
        ),
    ),
    (
        "konami",
        EasterEgg::Text(
            "⬆️⬆️⬇️⬇️⬅️➡️⬅️➡️🅱️🅰️ - Cheat code activated! Unlimited power! (not really)",
        ),
    ),
];

pub fn easter_egg(name: &str) -> Option<EasterEgg> {
    EASTER_EGGS
        .iter()
        .find(|(key, _)| *key == name)
        .map(|(_, egg)| *egg)
}

impl EasterEgg {
    pub fn render(self) -> Output {
        match self {
            Self::Text(text) => Output::text(text),
            Self::Matrix => matrix_rain(&mut rand::thread_rng()),
        }
    }
}

const MATRIX_ROWS: usize = 10;

fn matrix_rain<R: Rng>(rng: &mut R) -> Output {
    let mut lines: Vec<OutputLine> = (0..MATRIX_ROWS)
        .map(|_| {
            let width = rng.gen_range(10..40);
            let row: String = (0..width)
                .map(|_| if rng.gen_bool(0.5) { '1' } else { '0' })
                .collect();
            OutputLine::Glyphs(row)
        })
        .collect();
    lines.push(OutputLine::text(
        "Matrix mode activated. Welcome to the digital realm.",
    ));
    Output::Block(lines)
}

/// Closed set of `skills` categories
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkillCategory {
    Frontend,
    Backend,
    Database,
    Devops,
    Tools,
}

impl SkillCategory {
    pub const ALL: [SkillCategory; 5] = [
        SkillCategory::Frontend,
        SkillCategory::Backend,
        SkillCategory::Database,
        SkillCategory::Devops,
        SkillCategory::Tools,
    ];

    /// Expects an already lowercased token
    pub fn parse(token: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|category| category.name() == token)
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Frontend => "frontend",
            Self::Backend => "backend",
            Self::Database => "database",
            Self::Devops => "devops",
            Self::Tools => "tools",
        }
    }

    pub fn skills(self) -> &'static [&'static str] {
        match self {
            Self::Frontend => &[
                "React",
                "TypeScript",
                "JavaScript",
                "HTML5",
                "CSS3",
                "Tailwind CSS",
                "Redux",
            ],
            Self::Backend => &[
                "Node.js",
                "Express",
                "Python",
                "Django",
                "GraphQL",
                "RESTful APIs",
            ],
            Self::Database => &["MongoDB", "PostgreSQL", "MySQL", "Firebase"],
            Self::Devops => &["Docker", "Git", "CI/CD", "AWS", "Vercel", "Netlify"],
            Self::Tools => &["VS Code", "Figma", "Postman", "Jest", "Webpack"],
        }
    }
}

pub fn skills_output(category: Option<SkillCategory>) -> Output {
    match category {
        Some(category) => {
            let mut lines = vec![OutputLine::heading(format!(
                "My {} skills:",
                category.name()
            ))];
            lines.extend(category.skills().iter().map(|skill| OutputLine::bullet(*skill)));
            Output::Block(lines)
        }
        None => {
            let mut lines = vec![
                OutputLine::heading("My skills by category:"),
                OutputLine::text("Type skills [category] to see specific skills."),
                OutputLine::text("Available categories:"),
            ];
            lines.extend(
                SkillCategory::ALL
                    .iter()
                    .map(|category| OutputLine::bullet(category.name())),
            );
            Output::Block(lines)
        }
    }
}

/// A help listing entry
#[derive(Debug, Clone)]
pub struct HelpEntry {
    pub command: &'static str,
    pub description: &'static str,
}

pub const HELP_ENTRIES: &[HelpEntry] = &[
    HelpEntry {
        command: "help",
        description: "Display available commands",
    },
    HelpEntry {
        command: "about",
        description: "Navigate to About page",
    },
    HelpEntry {
        command: "projects",
        description: "Navigate to Projects page",
    },
    HelpEntry {
        command: "experience",
        description: "Navigate to Experience page",
    },
    HelpEntry {
        command: "contact",
        description: "Navigate to Contact page",
    },
    HelpEntry {
        command: "skills",
        description: "Display skills (try 'skills frontend', 'skills backend', etc.)",
    },
    HelpEntry {
        command: "theme",
        description: "Toggle dark/light theme",
    },
    HelpEntry {
        command: "download cv",
        description: "Download my CV/resume",
    },
    HelpEntry {
        command: "clear",
        description: "Clear terminal history",
    },
    HelpEntry {
        command: "social",
        description: "Display social media links",
    },
    HelpEntry {
        command: "history",
        description: "Display command history",
    },
];

pub const HELP_TIPS: &[&str] = &[
    "- Use up/down arrow keys to navigate command history",
    "- Press Tab to autocomplete commands",
    "- Press Ctrl+Space to show command suggestions",
    "- There might be some hidden easter eggs... 🥚",
];

pub fn help_output() -> Output {
    let mut lines = vec![OutputLine::heading("Available commands:")];
    lines.extend(HELP_ENTRIES.iter().map(|entry| OutputLine::Entry {
        name: entry.command.to_string(),
        description: entry.description.to_string(),
    }));
    lines.push(OutputLine::note("Tips:"));
    lines.extend(HELP_TIPS.iter().map(|tip| OutputLine::note(*tip)));
    Output::Block(lines)
}

/// Vocabulary entries starting with `input` (trimmed, case-insensitive)
pub fn suggest(input: &str) -> Vec<&'static str> {
    let needle = input.trim().to_lowercase();
    if needle.is_empty() {
        return Vec::new();
    }
    VOCABULARY
        .iter()
        .copied()
        .filter(|command| command.starts_with(&needle))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_suggest_ski() {
        assert_eq!(
            suggest("ski"),
            vec![
                "skills",
                "skills frontend",
                "skills backend",
                "skills database",
                "skills devops",
                "skills tools",
            ]
        );
    }

    #[test]
    fn test_suggest_is_case_insensitive_and_trimmed() {
        assert_eq!(suggest("  HIS "), vec!["history"]);
        assert_eq!(suggest("Download"), vec!["download cv"]);
    }

    #[test]
    fn test_suggest_empty_input() {
        assert!(suggest("").is_empty());
        assert!(suggest("   ").is_empty());
    }

    #[test]
    fn test_easter_eggs_never_suggested() {
        for (name, _) in EASTER_EGGS {
            assert!(
                !suggest(name).contains(name),
                "{} leaked into autocomplete",
                name
            );
            assert!(!VOCABULARY.contains(name));
        }
        assert!(suggest("eastereggs").is_empty());
    }

    #[test]
    fn test_help_lists_every_top_level_command() {
        let listed: Vec<&str> = HELP_ENTRIES.iter().map(|entry| entry.command).collect();
        for command in VOCABULARY {
            let top = if command.starts_with("skills") { "skills" } else { *command };
            assert!(listed.contains(&top), "help is missing {}", top);
        }
        for (egg, _) in EASTER_EGGS {
            assert!(!listed.contains(egg));
        }
    }

    #[test]
    fn test_skill_categories() {
        assert_eq!(SkillCategory::parse("devops"), Some(SkillCategory::Devops));
        assert_eq!(SkillCategory::parse("cooking"), None);
        assert_eq!(
            SkillCategory::Backend.skills(),
            &["Node.js", "Express", "Python", "Django", "GraphQL", "RESTful APIs"]
        );
    }

    #[test]
    fn test_matrix_shape() {
        let mut rng = StdRng::seed_from_u64(7);
        let Output::Block(lines) = matrix_rain(&mut rng) else {
            panic!("matrix should be a block");
        };
        assert_eq!(lines.len(), MATRIX_ROWS + 1);
        for line in &lines[..MATRIX_ROWS] {
            let OutputLine::Glyphs(row) = line else {
                panic!("expected glyph row");
            };
            assert!((10..40).contains(&row.chars().count()));
            assert!(row.chars().all(|c| c == '0' || c == '1'));
        }
        assert_eq!(
            lines[MATRIX_ROWS].plain(),
            "Matrix mode activated. Welcome to the digital realm."
        );
    }
}
