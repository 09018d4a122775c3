use crate::tui::app::{App, HitAreas};
use crate::tui::draw;
use devfolio_core::content::{ABOUT_PARAGRAPHS, CONTACT_EMAIL, FEATURED_PROJECTS, SKILL_LEVELS};
use devfolio_core::state::ViewMode;
use devfolio_core::terminal::display_url;
use devfolio_core::Theme;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

/// Colors for one theme
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    pub bg: Color,
    pub fg: Color,
    pub muted: Color,
    pub accent: Color,
    pub border: Color,
    pub surface: Color,
    pub keyword: Color,
    pub string: Color,
    pub comment: Color,
    pub success: Color,
    pub warning: Color,
}

impl Palette {
    pub fn for_theme(theme: Theme) -> Self {
        match theme {
            Theme::Dark => Self {
                bg: Color::Rgb(30, 30, 30),
                fg: Color::Rgb(212, 212, 212),
                muted: Color::Rgb(133, 133, 133),
                accent: Color::Rgb(0, 122, 204),
                border: Color::Rgb(60, 60, 60),
                surface: Color::Rgb(37, 37, 38),
                keyword: Color::Rgb(86, 156, 214),
                string: Color::Rgb(206, 145, 120),
                comment: Color::Rgb(106, 153, 85),
                success: Color::Rgb(78, 201, 176),
                warning: Color::Rgb(220, 220, 170),
            },
            Theme::Light => Self {
                bg: Color::Rgb(255, 255, 255),
                fg: Color::Rgb(36, 41, 46),
                muted: Color::Rgb(106, 115, 125),
                accent: Color::Rgb(0, 92, 197),
                border: Color::Rgb(209, 213, 218),
                surface: Color::Rgb(246, 248, 250),
                keyword: Color::Rgb(215, 58, 73),
                string: Color::Rgb(3, 47, 98),
                comment: Color::Rgb(106, 115, 125),
                success: Color::Rgb(34, 134, 58),
                warning: Color::Rgb(176, 136, 0),
            },
        }
    }

    pub fn base(&self) -> Style {
        Style::default().fg(self.fg).bg(self.bg)
    }
}

pub fn render(frame: &mut Frame, app: &mut App) {
    let palette = Palette::for_theme(app.workspace.theme.get());
    app.areas = HitAreas::default();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)])
        .split(frame.area());

    frame.render_widget(Block::default().style(palette.base()), frame.area());

    match app.mode() {
        ViewMode::Landing => render_landing(frame, app, chunks[0], &palette),
        ViewMode::Dev => draw::draw_dev(frame, app, chunks[0], &palette),
    }

    render_status_bar(frame, app, chunks[1], &palette);

    if app.show_logs {
        render_log_overlay(frame, frame.area(), &palette);
    }
}

// =========================================================================
// Landing view
// =========================================================================

fn section_title<'a>(title: &'a str, palette: &Palette) -> Vec<Line<'a>> {
    vec![
        Line::from(""),
        Line::from(Span::styled(
            title,
            Style::default().fg(palette.accent).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled("────", Style::default().fg(palette.accent))),
    ]
}

fn skill_bar(name: &str, value: u16, width: u16, palette: &Palette) -> Vec<Line<'static>> {
    let filled = (u32::from(width) * u32::from(value) / 100) as usize;
    let empty = usize::from(width).saturating_sub(filled);
    vec![
        Line::from(vec![
            Span::raw(format!("{:<28}", name)),
            Span::styled(format!("{}%", value), Style::default().fg(palette.muted)),
        ]),
        Line::from(vec![
            Span::styled("█".repeat(filled), Style::default().fg(palette.accent)),
            Span::styled("░".repeat(empty), Style::default().fg(palette.border)),
        ]),
    ]
}

/// Headline cycles through the configured roles every two seconds
fn current_role(app: &App) -> String {
    let roles = &app.config.profile.roles;
    if roles.is_empty() {
        return app.config.profile.name.clone();
    }
    let index = (app.started.elapsed().as_secs() / 2) as usize % roles.len();
    roles[index].clone()
}

fn render_landing(frame: &mut Frame, app: &mut App, area: Rect, palette: &Palette) {
    let profile = &app.config.profile;
    let bold = Style::default().add_modifier(Modifier::BOLD);
    let muted = Style::default().fg(palette.muted);

    let mut lines: Vec<Line> = vec![
        Line::from(""),
        Line::from(vec![
            Span::raw("Hello, I'm "),
            Span::styled(current_role(app), bold.fg(palette.accent)),
            Span::styled("▌", Style::default().fg(palette.accent)),
        ]),
        Line::from(""),
        Line::from(Span::styled(profile.tagline.clone(), muted)),
        Line::from(""),
        Line::from(vec![
            Span::styled(" Enter ", Style::default().fg(palette.bg).bg(palette.accent)),
            Span::raw(" Switch to Dev Mode   "),
            Span::styled(" ↓ ", Style::default().fg(palette.bg).bg(palette.muted)),
            Span::raw(" Learn More"),
        ]),
    ];

    lines.extend(section_title("About Me", palette));
    lines.push(Line::from(Span::styled("My Journey", bold)));
    for paragraph in ABOUT_PARAGRAPHS {
        lines.push(Line::from(paragraph));
        lines.push(Line::from(""));
    }
    lines.push(Line::from(Span::styled(
        "Type `download cv` in Dev Mode to grab my resume.",
        muted,
    )));
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled("My Skills", bold)));
    let bar_width = area.width.saturating_sub(8).min(40);
    for (name, value) in SKILL_LEVELS {
        lines.extend(skill_bar(name, value, bar_width, palette));
    }

    lines.extend(section_title("My Projects", palette));
    lines.push(Line::from(Span::styled(
        "Check out some of my recent work. For more technical details, switch to Dev Mode.",
        muted,
    )));
    for project in FEATURED_PROJECTS {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(format!("▸ {}", project.title), bold)));
        lines.push(Line::from(format!("  {}", project.description)));
        let tags: Vec<Span> = project
            .tags
            .iter()
            .flat_map(|tag| {
                [
                    Span::styled(format!(" {} ", tag), Style::default().fg(palette.accent).bg(palette.surface)),
                    Span::raw(" "),
                ]
            })
            .collect();
        lines.push(Line::from([vec![Span::raw("  ")], tags].concat()));
    }

    lines.extend(section_title("Get In Touch", palette));
    lines.push(Line::from(vec![Span::styled("Email     ", muted), Span::raw(CONTACT_EMAIL)]));
    lines.push(Line::from(vec![
        Span::styled("Location  ", muted),
        Span::raw(profile.location.clone()),
    ]));
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled("Connect With Me", bold)));
    for (label, url) in app.config.links.entries() {
        lines.push(Line::from(vec![
            Span::styled(format!("{:<10}", label), muted),
            Span::styled(display_url(url).to_string(), Style::default().fg(palette.accent)),
        ]));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        format!("© {}. Built with Rust.", profile.name),
        muted,
    )));

    let max_scroll = (lines.len() as u16).saturating_sub(area.height / 2);
    app.landing_scroll = app.landing_scroll.min(max_scroll);

    let inner = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(4), Constraint::Min(0), Constraint::Length(4)])
        .split(area)[1];
    let body = Paragraph::new(lines)
        .style(palette.base())
        .wrap(Wrap { trim: false })
        .scroll((app.landing_scroll, 0));
    frame.render_widget(body, inner);

    render_mode_toggle(frame, app, area, "[ </> Dev Mode ]", palette);
}

/// Floating toggle button in the top-right corner of either view
pub fn render_mode_toggle(frame: &mut Frame, app: &mut App, area: Rect, label: &str, palette: &Palette) {
    let width = label.chars().count() as u16;
    if area.width <= width {
        return;
    }
    let button = Rect::new(area.x + area.width - width - 1, area.y, width, 1);
    frame.render_widget(
        Paragraph::new(label).style(Style::default().fg(palette.bg).bg(palette.accent)),
        button,
    );
    app.areas.mode_toggle = Some(button);
}

// =========================================================================
// Status bar and overlays
// =========================================================================

fn render_status_bar(frame: &mut Frame, app: &App, area: Rect, palette: &Palette) {
    let hints = match app.mode() {
        ViewMode::Landing => " Enter: Dev Mode │ ↑↓ PgUp/PgDn: Scroll │ F2: Toggle Mode │ F12: Logs │ q: Quit",
        ViewMode::Dev => {
            " Alt+1-4: Pages │ Ctrl+T: Panel │ F11: Maximize │ Ctrl+↑↓: Resize │ F4: Contact Form │ F2: Landing │ F12: Logs │ Ctrl+Q: Quit"
        }
    };
    let right = format!(
        " {} │ {} │ {} ",
        app.mode(),
        app.workspace.theme.get(),
        app.workspace.route().file_name()
    );

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(0), Constraint::Length(right.chars().count() as u16)])
        .split(area);

    let style = Style::default().fg(Color::White).bg(palette.accent);
    frame.render_widget(Paragraph::new(hints).style(style), chunks[0]);
    frame.render_widget(
        Paragraph::new(right).style(style).alignment(Alignment::Right),
        chunks[1],
    );
}

fn render_log_overlay(frame: &mut Frame, area: Rect, palette: &Palette) {
    let popup = centered_rect(80, 70, area);
    let height = popup.height.saturating_sub(2) as usize;
    let mut entries = devfolio_core::logger::get_recent_logs(height);
    entries.reverse();

    let lines: Vec<Line> = entries
        .into_iter()
        .map(|entry| {
            let color = if entry.contains("[ERROR]") {
                Color::Red
            } else if entry.contains("[WARN]") {
                palette.warning
            } else if entry.contains("[DEBUG]") || entry.contains("[TRACE]") {
                palette.muted
            } else {
                palette.fg
            };
            Line::from(Span::styled(entry, Style::default().fg(color)))
        })
        .collect();

    let block = Block::default()
        .title(" Debug Log (F12/Esc to close) ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(palette.warning))
        .style(Style::default().bg(palette.surface).fg(palette.fg));

    frame.render_widget(Clear, popup);
    frame.render_widget(
        Paragraph::new(lines).block(block).wrap(Wrap { trim: false }),
        popup,
    );
}

/// Rect of `percent_x` by `percent_y` centered in `area`
pub fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1])[1]
}
