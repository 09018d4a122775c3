//! Dev View Rendering
//!
//! Sidebar, tabs, code viewer (with the contact form beside it on the
//! contact page) and the resizable terminal panel. Every clickable region
//! drawn here is recorded in `app.areas` for the mouse handler.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::tui::app::{App, Focus};
use crate::tui::ui::{render_mode_toggle, Palette};
use devfolio_core::contact::{ContactField, SubmissionStatus};
use devfolio_core::content::{page_source, ABOUT_BANNER};
use devfolio_core::terminal::{display_url, CommandRecord, Output, OutputLine, PanelState};
use devfolio_core::Route;

const SIDEBAR_WIDTH: u16 = 28;
const GUTTER_WIDTH: usize = 4;

const KEYWORDS: &[&str] = &[
    "interface", "const", "let", "function", "return", "class", "private", "public", "async",
    "await", "try", "catch", "new", "string", "void", "Promise", "export", "default", "import",
    "from",
];

/// Draw the complete dev view
pub fn draw_dev(f: &mut Frame, app: &mut App, area: Rect, palette: &Palette) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(SIDEBAR_WIDTH), Constraint::Min(20)])
        .split(area);

    draw_sidebar(f, app, columns[0], palette);

    let main = columns[1];
    // Leave the tab bar and a few viewer rows whatever the panel asks for
    let panel_rows = app.panel_rows().min(main.height.saturating_sub(4)).max(2);
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(3),
            Constraint::Length(panel_rows),
        ])
        .split(main);

    draw_tabs(f, app, rows[0], palette);
    render_mode_toggle(f, app, rows[0], "[ Normal Mode ]", palette);

    if app.workspace.route() == Route::Contact {
        let split = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
            .split(rows[1]);
        let preview = app.workspace.contact.code_preview();
        draw_code_viewer(f, app, split[0], &preview, None, palette);
        draw_contact_form(f, app, split[1], palette);
    } else {
        let route = app.workspace.route();
        let banner = (route == Route::About).then_some(ABOUT_BANNER);
        draw_code_viewer(f, app, rows[1], page_source(route), banner, palette);
    }

    draw_terminal_panel(f, app, rows[2], palette);
}

// =========================================================================
// Sidebar and tabs
// =========================================================================

fn draw_sidebar(f: &mut Frame, app: &mut App, area: Rect, palette: &Palette) {
    let block = Block::default()
        .borders(Borders::RIGHT)
        .border_style(Style::default().fg(palette.border))
        .style(Style::default().bg(palette.surface).fg(palette.fg));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let profile = &app.config.profile;
    let heading = Style::default().fg(palette.muted).add_modifier(Modifier::BOLD);
    let mut lines = vec![
        Line::from(Span::styled(
            profile.name.clone(),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(profile.title.clone(), Style::default().fg(palette.muted))),
        Line::from(""),
        Line::from(Span::styled("EXPLORER", heading)),
    ];
    let explorer_top = inner.y + lines.len() as u16;
    let current = app.workspace.route();
    for route in Route::ALL {
        let style = if route == current {
            Style::default().fg(palette.fg).bg(palette.border)
        } else {
            Style::default().fg(palette.muted)
        };
        lines.push(Line::from(Span::styled(format!("  📄 {}", route.file_name()), style)));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled("CONNECT", heading)));
    for (label, url) in app.config.links.entries() {
        lines.push(Line::from(vec![
            Span::raw(format!("  {} ", label)),
            Span::styled(display_url(url).to_string(), Style::default().fg(palette.accent)),
        ]));
    }

    // No wrapping, so explorer rows stay where they were counted
    f.render_widget(Paragraph::new(lines), inner);

    for (index, route) in Route::ALL.into_iter().enumerate() {
        let row = explorer_top + index as u16;
        if row < inner.y + inner.height {
            app.areas.explorer.push((Rect::new(inner.x, row, inner.width, 1), route));
        }
    }

    if inner.height > 0 {
        let back = Rect::new(inner.x, inner.y + inner.height - 1, inner.width, 1);
        f.render_widget(
            Paragraph::new("← Back to Normal Mode").style(Style::default().fg(palette.accent)),
            back,
        );
        app.areas.back_to_landing = Some(back);
    }
}

fn draw_tabs(f: &mut Frame, app: &mut App, area: Rect, palette: &Palette) {
    f.render_widget(
        Block::default().style(Style::default().bg(palette.surface)),
        area,
    );
    let current = app.workspace.route();
    let mut x = area.x;
    for route in Route::ALL {
        let label = format!(" {} ", route.file_name());
        let width = (label.chars().count() as u16).min(area.right().saturating_sub(x));
        if width == 0 {
            break;
        }
        let style = if route == current {
            Style::default()
                .fg(palette.fg)
                .bg(palette.bg)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(palette.muted).bg(palette.surface)
        };
        let tab = Rect::new(x, area.y, width, 1);
        f.render_widget(Paragraph::new(label).style(style), tab);
        app.areas.tabs.push((tab, route));
        x += width + 1;
    }
}

// =========================================================================
// Code viewer
// =========================================================================

/// Color keywords, string literals and line comments
fn highlight_line(line: &str, palette: &Palette) -> Vec<Span<'static>> {
    if line.trim_start().starts_with("//") {
        return vec![Span::styled(line.to_string(), Style::default().fg(palette.comment))];
    }

    let mut spans = Vec::new();
    let mut chars = line.chars();
    let mut word = String::new();

    let flush = |word: &mut String, spans: &mut Vec<Span<'static>>| {
        if word.is_empty() {
            return;
        }
        let style = if KEYWORDS.contains(&word.as_str()) {
            Style::default().fg(palette.keyword)
        } else {
            Style::default().fg(palette.fg)
        };
        spans.push(Span::styled(std::mem::take(word), style));
    };

    while let Some(c) = chars.next() {
        if c == '"' || c == '\'' || c == '`' {
            flush(&mut word, &mut spans);
            let mut literal = c.to_string();
            for next in chars.by_ref() {
                literal.push(next);
                if next == c {
                    break;
                }
            }
            spans.push(Span::styled(literal, Style::default().fg(palette.string)));
        } else if c.is_alphanumeric() || c == '_' {
            word.push(c);
        } else {
            flush(&mut word, &mut spans);
            spans.push(Span::styled(c.to_string(), Style::default().fg(palette.fg)));
        }
    }
    flush(&mut word, &mut spans);
    spans
}

fn draw_code_viewer(
    f: &mut Frame,
    app: &mut App,
    area: Rect,
    source: &str,
    banner: Option<&str>,
    palette: &Palette,
) {
    let mut block = Block::default()
        .borders(Borders::NONE)
        .style(palette.base());
    if let Some(banner) = banner {
        block = block.title(Span::styled(
            format!(" {} ", banner),
            Style::default().add_modifier(Modifier::BOLD),
        ));
    }
    let inner = if banner.is_some() {
        Rect::new(area.x, area.y + 1, area.width, area.height.saturating_sub(1))
    } else {
        area
    };
    f.render_widget(block, area);

    let lines: Vec<Line> = source
        .lines()
        .enumerate()
        .map(|(index, line)| {
            let mut spans = vec![Span::styled(
                format!("{:>width$} ", index + 1, width = GUTTER_WIDTH),
                Style::default().fg(palette.muted),
            )];
            spans.extend(highlight_line(line, palette));
            Line::from(spans)
        })
        .collect();

    let max_scroll = (lines.len() as u16).saturating_sub(1);
    if app.workspace.viewer_scroll > max_scroll {
        app.workspace.viewer_scroll = max_scroll;
    }

    f.render_widget(
        Paragraph::new(lines).scroll((app.workspace.viewer_scroll, 0)),
        inner,
    );
    app.areas.viewer = Some(area);
}

// =========================================================================
// Contact form
// =========================================================================

fn draw_contact_form(f: &mut Frame, app: &mut App, area: Rect, palette: &Palette) {
    let focused = app.focus == Focus::Contact;
    let block = Block::default()
        .title(" Send Me a Message (F4) ")
        .borders(Borders::LEFT)
        .border_style(Style::default().fg(if focused { palette.accent } else { palette.border }))
        .style(palette.base());
    let inner = block.inner(area);
    f.render_widget(block, area);

    let form = &app.workspace.contact;
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(3),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(inner);

    let mut field_areas = Vec::new();
    for (field, rect) in ContactField::ALL.into_iter().zip(rows.iter().copied()) {
        let active = focused && form.focused() == field;
        let border = if active { palette.accent } else { palette.border };
        let input = Paragraph::new(form.field(field).to_string())
            .wrap(Wrap { trim: false })
            .block(
                Block::default()
                    .title(format!(" {} ", field.label()))
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(border)),
            );
        f.render_widget(input, rect);
        field_areas.push((rect, field));

        if active {
            let value = form.field(field);
            let width = rect.width.saturating_sub(2).max(1);
            let len = value.chars().count() as u16;
            let x = rect.x + 1 + len % width;
            let y = rect.y + 1 + (len / width).min(rect.height.saturating_sub(3));
            f.set_cursor_position((x, y));
        }
    }

    let status = form.status();
    let button_style = match status {
        SubmissionStatus::Sent => Style::default().fg(palette.bg).bg(palette.success),
        SubmissionStatus::Error => Style::default().fg(palette.bg).bg(ratatui::style::Color::Red),
        _ => Style::default().fg(palette.bg).bg(palette.accent),
    };
    let label = format!(" {} ", status.label());
    let button = Rect::new(rows[3].x, rows[3].y, (label.chars().count() as u16).min(rows[3].width), rows[3].height);
    f.render_widget(Paragraph::new(label).style(button_style), button);

    if let Some(reason) = form.last_error() {
        f.render_widget(
            Paragraph::new(reason).style(Style::default().fg(palette.warning)),
            rows[4],
        );
    }

    app.areas.contact_fields = field_areas;
    app.areas.contact_submit = Some(button);
}

// =========================================================================
// Terminal panel
// =========================================================================

fn record_lines(record: &CommandRecord, palette: &Palette) -> Vec<Line<'static>> {
    let mut lines = vec![Line::from(vec![
        Span::styled("$ ", Style::default().fg(palette.success)),
        Span::styled(record.input.clone(), Style::default().fg(palette.fg)),
    ])];
    match &record.output {
        Output::Text(text) => {
            lines.extend(text.lines().map(|line| Line::from(line.to_string())));
        }
        Output::Block(block) => lines.extend(block.iter().map(|line| output_line(line, palette))),
    }
    lines
}

fn output_line(line: &OutputLine, palette: &Palette) -> Line<'static> {
    match line {
        OutputLine::Heading(text) => Line::from(Span::styled(
            text.clone(),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        OutputLine::Text(text) => Line::from(text.clone()),
        OutputLine::Entry { name, description } => Line::from(vec![
            Span::raw("  "),
            Span::styled(name.clone(), Style::default().fg(palette.warning)),
            Span::raw(format!(" - {}", description)),
        ]),
        OutputLine::Bullet(text) => Line::from(format!("  • {}", text)),
        OutputLine::Link { label, url } => Line::from(vec![
            Span::raw(format!("  {}: ", label)),
            Span::styled(
                display_url(url).to_string(),
                Style::default().fg(palette.accent).add_modifier(Modifier::UNDERLINED),
            ),
        ]),
        OutputLine::Note(text) => Line::from(Span::styled(text.clone(), Style::default().fg(palette.muted))),
        OutputLine::Glyphs(text) => Line::from(Span::styled(text.clone(), Style::default().fg(palette.success))),
    }
}

fn draw_terminal_panel(f: &mut Frame, app: &mut App, area: Rect, palette: &Palette) {
    let focused = app.focus == Focus::Terminal;
    let block = Block::default()
        .title(Span::styled(" TERMINAL ", Style::default().add_modifier(Modifier::BOLD)))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(if focused { palette.accent } else { palette.border }))
        .style(Style::default().bg(palette.surface).fg(palette.fg));
    let inner = block.inner(area);
    f.render_widget(block, area);

    app.areas.panel = Some(area);
    app.areas.panel_header = Some(Rect::new(area.x, area.y, area.width, 1));

    // Header buttons sit on the top border, right-aligned
    let collapse_label = if app.panel.state() == PanelState::Collapsed { "[▴]" } else { "[▾]" };
    let maximize_label = if app.panel.state() == PanelState::Maximized { "[❐]" } else { "[□]" };
    if area.width > 10 {
        let maximize = Rect::new(area.right() - 5, area.y, 3, 1);
        let collapse = Rect::new(area.right() - 9, area.y, 3, 1);
        let button = Style::default().fg(palette.muted);
        f.render_widget(Paragraph::new(collapse_label).style(button), collapse);
        f.render_widget(Paragraph::new(maximize_label).style(button), maximize);
        app.areas.collapse_button = Some(collapse);
        app.areas.maximize_button = Some(maximize);
    }

    if !app.panel.is_content_visible() || inner.height == 0 {
        return;
    }

    let mut lines: Vec<Line> = app
        .session
        .scrollback()
        .iter()
        .flat_map(|record| record_lines(record, palette))
        .collect();

    let prompt = "$ ";
    lines.push(Line::from(vec![
        Span::styled(prompt, Style::default().fg(palette.success)),
        Span::raw(app.session.input().to_string()),
    ]));

    let total = lines.len() as u16;
    let height = inner.height;
    let max_scroll = total.saturating_sub(height);
    app.terminal_scroll = app.terminal_scroll.min(max_scroll);
    let top = max_scroll - app.terminal_scroll;

    f.render_widget(Paragraph::new(lines).scroll((top, 0)), inner);

    // Input row is the last line; only on screen when following the bottom
    if app.terminal_scroll != 0 {
        return;
    }
    let input_row = inner.y + (total - 1 - top).min(height - 1);
    let input_area = Rect::new(inner.x, input_row, inner.width, 1);
    app.areas.terminal_input = Some(input_area);

    if focused {
        let cursor = (prompt.len() + app.session.cursor()) as u16;
        f.set_cursor_position((inner.x + cursor.min(inner.width.saturating_sub(1)), input_row));
    }

    draw_suggestions(f, app, inner, input_row, palette);
}

fn draw_suggestions(f: &mut Frame, app: &mut App, inner: Rect, input_row: u16, palette: &Palette) {
    let suggestions = app.session.visible_suggestions();
    if suggestions.is_empty() {
        return;
    }
    let room = input_row.saturating_sub(inner.y);
    let shown = (suggestions.len() as u16).min(room.saturating_sub(2));
    if shown == 0 {
        return;
    }

    let width = suggestions
        .iter()
        .map(|s| s.chars().count() as u16 + 4)
        .max()
        .unwrap_or(0)
        .min(inner.width);
    let popup = Rect::new(inner.x + 2, input_row - shown - 2, width, shown + 2);
    f.render_widget(Clear, popup);
    f.render_widget(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(palette.border))
            .style(Style::default().bg(palette.bg)),
        popup,
    );

    for (index, choice) in suggestions.into_iter().take(shown as usize).enumerate() {
        let row = Rect::new(popup.x + 1, popup.y + 1 + index as u16, width.saturating_sub(2), 1);
        let style = if index == 0 {
            Style::default().fg(palette.fg).bg(palette.border)
        } else {
            Style::default().fg(palette.fg)
        };
        f.render_widget(Paragraph::new(format!(" {}", choice)).style(style), row);
        app.areas.suggestions.push((row, choice));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use devfolio_core::Theme;

    #[test]
    fn test_highlight_splits_keywords_and_strings() {
        let palette = Palette::for_theme(Theme::Dark);
        let spans = highlight_line("const name = \"Ada\";", &palette);
        let keyword = spans.iter().find(|s| s.content == "const").unwrap();
        assert_eq!(keyword.style.fg, Some(palette.keyword));
        let literal = spans.iter().find(|s| s.content == "\"Ada\"").unwrap();
        assert_eq!(literal.style.fg, Some(palette.string));

        let text: String = spans.iter().map(|s| s.content.as_ref()).collect();
        assert_eq!(text, "const name = \"Ada\";");
    }

    #[test]
    fn test_comment_lines() {
        let palette = Palette::for_theme(Theme::Dark);
        let spans = highlight_line("  // Display all projects", &palette);
        assert_eq!(spans.len(), 1);
        assert_eq!(spans[0].style.fg, Some(palette.comment));
    }

    #[test]
    fn test_record_lines_prefix_prompt() {
        let palette = Palette::for_theme(Theme::Light);
        let record = CommandRecord::new("foo", Output::text("Command not found."));
        let lines = record_lines(&record, &palette);
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].spans[1].content, "foo");
    }
}
