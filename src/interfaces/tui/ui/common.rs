use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use crate::interfaces::tui::app::{App, Focus, Overlay};
use crate::interfaces::tui::constants::colors;
use crate::store::{Modal, View};

/// Draw header with product name, active view, search box and the create-link affordance
pub fn draw_header(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(colors::PRIMARY));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(10),
            Constraint::Length(20),
            Constraint::Length(24),
        ])
        .split(inner);

    let state = app.state();
    let title = Line::from(vec![
        Span::styled(
            "LinkFlow",
            Style::default()
                .fg(colors::PRIMARY)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!(" v{} ", env!("CARGO_PKG_VERSION")),
            Style::default().fg(colors::MUTED),
        ),
        Span::styled("| ", Style::default().fg(colors::MUTED)),
        Span::styled(
            state.view.title(),
            Style::default()
                .fg(colors::WARNING)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!(
                "  {} groups · {} links",
                state.groups.len(),
                state.total_links()
            ),
            Style::default().fg(colors::MUTED),
        ),
    ]);
    frame.render_widget(Paragraph::new(title), chunks[0]);

    let create = Line::from(vec![
        Span::styled(
            "[n]",
            Style::default()
                .fg(colors::SUCCESS)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(" + Create new link", Style::default().fg(Color::White)),
    ]);
    let search = Line::from(vec![
        Span::styled("[/] ", Style::default().fg(colors::MUTED)),
        Span::styled(
            "Search...",
            Style::default()
                .fg(colors::MUTED)
                .add_modifier(Modifier::ITALIC),
        ),
    ]);
    frame.render_widget(Paragraph::new(search), chunks[1]);

    frame.render_widget(
        Paragraph::new(create).alignment(Alignment::Right),
        chunks[2],
    );
}

/// Draw status bar
pub fn draw_status_bar(frame: &mut Frame, app: &App, area: Rect) {
    let (status_text, status_style) = if !app.error_message.is_empty() {
        (
            format!("[ERROR] {}", app.error_message),
            Style::default()
                .fg(Color::White)
                .bg(Color::Red)
                .add_modifier(Modifier::BOLD),
        )
    } else if !app.status_message.is_empty() {
        (
            format!("[SUCCESS] {}", app.status_message),
            Style::default()
                .fg(Color::Black)
                .bg(Color::Green)
                .add_modifier(Modifier::BOLD),
        )
    } else {
        ("Ready".to_string(), Style::default().fg(colors::PRIMARY))
    };

    let status = Paragraph::new(status_text)
        .style(status_style)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .alignment(Alignment::Center);

    frame.render_widget(status, area);
}

fn shortcuts(app: &App) -> Vec<(&'static str, &'static str, Color)> {
    match &app.overlay {
        Some(Overlay::CopyNotice(_)) => return vec![("Enter", "Continue", Color::Green)],
        Some(Overlay::Exiting) => {
            return vec![("y", "Yes", Color::Green), ("n", "No", Color::Red)];
        }
        Some(Overlay::Help) => return vec![("q/Esc", "Close", Color::Red)],
        None => {}
    }

    match &app.state().modal {
        Some(Modal::EditLink { .. }) => {
            return vec![
                ("Tab", "Switch Field", Color::Cyan),
                ("Enter", "Save", Color::Green),
                ("Esc", "Cancel", Color::Red),
            ];
        }
        Some(Modal::EditGroup(_)) => {
            return vec![("Enter", "Save", Color::Green), ("Esc", "Cancel", Color::Red)];
        }
        Some(Modal::DeleteGroup(_) | Modal::DeleteLink { .. }) => {
            return vec![("y", "Delete", Color::Red), ("n", "Cancel", Color::Green)];
        }
        None => {}
    }

    if app.focus == Focus::Sidebar {
        return vec![
            ("Up/Down", "Navigate", Color::Cyan),
            ("Enter", "Open", Color::Green),
            ("Tab", "Back", Color::Cyan),
            ("b", "Collapse", Color::Blue),
            ("q", "Quit", Color::Magenta),
        ];
    }

    match app.state().view {
        View::Dashboard => vec![
            ("Up/Down", "Navigate", Color::Cyan),
            ("Enter", "Open", Color::Cyan),
            ("c", "Copy", Color::Green),
            ("e", "Edit", Color::Yellow),
            ("d", "Delete", Color::Red),
            ("Tab", "Sidebar", Color::Cyan),
            ("?", "Help", Color::Blue),
            ("q", "Quit", Color::Magenta),
        ],
        View::KeyStats => vec![
            ("Esc", "Back", Color::Cyan),
            ("1-4", "Navigate", Color::Cyan),
            ("?", "Help", Color::Blue),
            ("q", "Quit", Color::Magenta),
        ],
        View::GlobalStats | View::AllLinks | View::Settings => vec![
            ("1-4", "Navigate", Color::Cyan),
            ("Tab", "Sidebar", Color::Cyan),
            ("?", "Help", Color::Blue),
            ("q", "Quit", Color::Magenta),
        ],
    }
}

/// Draw footer with keyboard shortcuts
pub fn draw_footer(frame: &mut Frame, app: &App, area: Rect) {
    let mut spans = Vec::new();
    for (i, (key, desc, color)) in shortcuts(app).iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" | ", Style::default().fg(colors::MUTED)));
        }
        spans.push(Span::styled(
            format!("[{}]", key),
            Style::default().fg(*color).add_modifier(Modifier::BOLD),
        ));
        spans.push(Span::styled(
            format!(" {}", desc),
            Style::default().fg(Color::White),
        ));
    }

    let footer = Paragraph::new(Line::from(spans)).alignment(Alignment::Center);
    frame.render_widget(footer, area);
}
