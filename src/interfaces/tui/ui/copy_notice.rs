use ratatui::{
    Frame,
    layout::{Alignment, Margin, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use super::widgets::Popup;
use crate::interfaces::tui::constants::popup;

/// Blocking notice shown when the clipboard could not be written
pub fn draw_copy_notice_screen(frame: &mut Frame, text: &str, area: Rect) {
    let inner_area = Popup::new("Copy Short Link", popup::COPY_NOTICE)
        .theme_color(Color::Yellow)
        .margin(Margin::new(2, 1))
        .render(frame, area);

    let lines = vec![
        Line::from("Clipboard is not available. Copy this link manually:"),
        Line::from(""),
        Line::from(Span::styled(
            text.to_string(),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Press [Enter] to continue",
            Style::default().fg(Color::DarkGray),
        )),
    ];

    frame.render_widget(
        Paragraph::new(lines).alignment(Alignment::Center),
        inner_area,
    );
}
