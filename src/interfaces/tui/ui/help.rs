use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use super::widgets::Popup;
use crate::interfaces::tui::constants::popup;

fn section(title: &'static str) -> Line<'static> {
    Line::from(Span::styled(
        title,
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
    ))
}

fn key_line(keys: &'static str, description: &'static str, color: Color) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("  {:<17}", keys), Style::default().fg(color)),
        Span::styled(description, Style::default().fg(Color::White)),
    ])
}

pub fn draw_help_screen(frame: &mut Frame, area: Rect) {
    let inner_area = Popup::new("Help - Keyboard Shortcuts", popup::HELP).render(frame, area);

    let help_text = vec![
        section("NAVIGATION"),
        key_line("Up/Down, j/k", "Move the cursor", Color::Cyan),
        key_line("Home, g", "Jump to top", Color::Cyan),
        key_line("End, G", "Jump to bottom", Color::Cyan),
        key_line("1-4", "Dashboard / Global stats / All links / Settings", Color::Cyan),
        key_line("Tab", "Switch focus between sidebar and view", Color::Cyan),
        key_line("b", "Collapse or expand the sidebar", Color::Blue),
        key_line("Esc", "Back to the dashboard from key statistics", Color::Cyan),
        Line::from(""),
        section("DASHBOARD"),
        key_line("Enter, Space", "Toggle group / open key statistics", Color::Cyan),
        key_line("e", "Edit group or link under the cursor", Color::Yellow),
        key_line("d", "Delete group or link under the cursor", Color::Red),
        key_line("c, y", "Copy short link", Color::Green),
        key_line("n", "Create new link (not available yet)", Color::Green),
        key_line("/", "Search (not available yet)", Color::Green),
        Line::from(""),
        section("FORMS"),
        key_line("Tab", "Switch field", Color::Cyan),
        key_line("Enter", "Save / confirm", Color::Green),
        key_line("Esc, n", "Cancel", Color::Red),
        Line::from(""),
        section("GENERAL"),
        key_line("?", "Show this help", Color::Cyan),
        key_line("q", "Quit application", Color::Magenta),
    ];

    frame.render_widget(Paragraph::new(help_text), inner_area);
}
