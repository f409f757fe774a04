use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use crate::interfaces::tui::constants::colors;
use crate::store::View;

/// Navigation targets without a view implementation
pub fn draw_stub_view(frame: &mut Frame, view: View, area: Rect) {
    let text = vec![
        Line::from(""),
        Line::from(Span::styled(
            format!("{} is not available yet.", view.title()),
            Style::default()
                .fg(colors::MUTED)
                .add_modifier(Modifier::ITALIC),
        )),
        Line::from(Span::styled(
            "Press [1] to return to the dashboard",
            Style::default().fg(colors::MUTED),
        )),
    ];

    let paragraph = Paragraph::new(text).alignment(Alignment::Center).block(
        Block::default()
            .title(format!(" {} ", view.title()))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(colors::MUTED)),
    );
    frame.render_widget(paragraph, area);
}
