use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use crate::interfaces::tui::app::{App, Focus, NAV_ENTRIES};
use crate::interfaces::tui::constants::colors;
use crate::store::View;

/// Draw the navigation sidebar, full labels when open, icon rail when collapsed
pub fn draw_sidebar(frame: &mut Frame, app: &App, area: Rect) {
    let open = app.state().sidebar_open;
    let focused = app.focus == Focus::Sidebar;

    let block = Block::default()
        .title(if open { " LinkFlow " } else { " LF " })
        .title_style(
            Style::default()
                .fg(colors::PRIMARY)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(if focused {
            colors::PRIMARY
        } else {
            colors::MUTED
        }));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(2)])
        .split(inner);

    // 详情视图在导航上归属仪表盘
    let active_view = match app.state().view {
        View::KeyStats => View::Dashboard,
        view => view,
    };

    let mut lines = vec![Line::from("")];
    for (index, entry) in NAV_ENTRIES.iter().enumerate() {
        let mut style = if entry.view == active_view {
            Style::default()
                .fg(colors::PRIMARY)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(ratatui::style::Color::White)
        };
        if focused && index == app.sidebar_index {
            style = style
                .fg(colors::HIGHLIGHT_FG)
                .bg(colors::HIGHLIGHT_BG);
        }

        let text = if open {
            format!(" {} {:<14}{}", entry.icon, entry.label, index + 1)
        } else {
            format!("  {}", entry.icon)
        };
        lines.push(Line::from(Span::styled(text, style)));
    }
    frame.render_widget(Paragraph::new(lines), chunks[0]);

    let footer = if open {
        vec![
            Line::from(Span::styled(
                " ☺ Account",
                Style::default().fg(colors::MUTED),
            )),
            Line::from(Span::styled(
                " [b] collapse",
                Style::default().fg(colors::MUTED),
            )),
        ]
    } else {
        vec![
            Line::from(Span::styled("  ☺", Style::default().fg(colors::MUTED))),
            Line::from(Span::styled(" [b]", Style::default().fg(colors::MUTED))),
        ]
    };
    frame.render_widget(Paragraph::new(footer), chunks[1]);
}
