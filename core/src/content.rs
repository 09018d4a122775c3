//! Static portfolio content: page sources for the code viewer and the
//! landing view copy.

use crate::router::Route;

const ABOUT_SOURCE: &str = include_str!("../assets/pages/about.tsx");
const PROJECTS_SOURCE: &str = include_str!("../assets/pages/projects.tsx");
const EXPERIENCE_SOURCE: &str = include_str!("../assets/pages/experience.tsx");
const CONTACT_SOURCE: &str = include_str!("../assets/pages/contact.tsx");

/// Source shown in the code viewer for a page
pub fn page_source(route: Route) -> &'static str {
    match route {
        Route::About => ABOUT_SOURCE,
        Route::Projects => PROJECTS_SOURCE,
        Route::Experience => EXPERIENCE_SOURCE,
        Route::Contact => CONTACT_SOURCE,
    }
}

/// Greeting typed above the about page source
pub const ABOUT_BANNER: &str = "Welcome to my portfolio!";

pub const CONTACT_EMAIL: &str = "isaac@example.com";

pub const ABOUT_PARAGRAPHS: [&str; 2] = [
    "I'm Isaac Ayorinde, a passionate Full Stack Developer and Blockchain Researcher \
     with over 5 years of experience in creating innovative digital solutions.",
    "My journey in technology began with a fascination for how digital products are \
     built. This curiosity led me to explore various technologies and frameworks, \
     ultimately specializing in modern web development and blockchain applications.",
];

/// Self-assessed proficiency, in percent
pub const SKILL_LEVELS: [(&str, u16); 5] = [
    ("Frontend Development", 90),
    ("Backend Development", 85),
    ("Database Management", 80),
    ("DevOps & Deployment", 75),
    ("Blockchain Technology", 70),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeaturedProject {
    pub title: &'static str,
    pub description: &'static str,
    pub tags: &'static [&'static str],
}

pub const FEATURED_PROJECTS: [FeaturedProject; 3] = [
    FeaturedProject {
        title: "Code Editor Portfolio",
        description: "A developer portfolio with VS Code-inspired interface and interactive terminal.",
        tags: &["React", "TypeScript", "Tailwind CSS"],
    },
    FeaturedProject {
        title: "Blockchain Explorer",
        description: "A web application for tracking and analyzing blockchain transactions.",
        tags: &["Next.js", "Ethereum", "Web3.js"],
    },
    FeaturedProject {
        title: "AI-Powered Task Manager",
        description: "Task management app with AI-based prioritization and suggestions.",
        tags: &["React", "Node.js", "Machine Learning"],
    },
];
