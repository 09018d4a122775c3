//! Page routes of the dev view.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Route {
    #[default]
    About,
    Projects,
    Experience,
    Contact,
}

impl Route {
    /// Display order of tabs and explorer entries
    pub const ALL: [Route; 4] = [Route::About, Route::Projects, Route::Experience, Route::Contact];

    pub fn path(self) -> &'static str {
        match self {
            Self::About => "/",
            Self::Projects => "/projects",
            Self::Experience => "/experience",
            Self::Contact => "/contact",
        }
    }

    /// Map a path to a route; anything unknown lands on `/`
    pub fn resolve(path: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|route| route.path() == path)
            .unwrap_or_default()
    }

    /// File-like label used by tabs and the explorer
    pub fn file_name(self) -> &'static str {
        match self {
            Self::About => "about.tsx",
            Self::Projects => "projects.tsx",
            Self::Experience => "experience.tsx",
            Self::Contact => "contact.tsx",
        }
    }

    /// Page title used in navigation messages
    pub fn title(self) -> &'static str {
        match self {
            Self::About => "About",
            Self::Projects => "Projects",
            Self::Experience => "Experience",
            Self::Contact => "Contact",
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

/// Tracks the active page
#[derive(Debug, Clone, Default)]
pub struct Router {
    current: Route,
}

impl Router {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> Route {
        self.current
    }

    /// Switch pages; returns the page that was left when it changed
    pub fn navigate(&mut self, route: Route) -> Option<Route> {
        if self.current == route {
            return None;
        }
        let previous = self.current;
        self.current = route;
        crate::debug_log!("navigate {} -> {}", previous, route);
        Some(previous)
    }

    pub fn navigate_path(&mut self, path: &str) -> Option<Route> {
        self.navigate(Route::resolve(path))
    }
}
