use ratatui::{
    Frame,
    layout::{Alignment, Margin, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
};

use super::widgets::Popup;
use crate::interfaces::tui::constants::popup;
use crate::store::Modal;

/// Shared confirmation for group and link deletion
pub fn draw_delete_confirm_screen(frame: &mut Frame, modal: &Modal, area: Rect) {
    let inner_area = Popup::new(modal.title(), popup::DELETE_CONFIRM)
        .theme_color(Color::Red)
        .margin(Margin::new(2, 2))
        .render(frame, area);

    let (question, label) = match modal {
        Modal::DeleteGroup(_) => ("Are you sure you want to delete this group?", "Group: "),
        _ => ("Are you sure you want to delete this link?", "Key: "),
    };

    let mut text = vec![
        Line::from(Span::styled(
            format!("WARNING: {}", question),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled(label, Style::default().fg(Color::DarkGray)),
            Span::styled(
                modal.target_name().to_string(),
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
    ];

    if let Modal::DeleteGroup(group) = modal {
        text.push(Line::from(Span::styled(
            format!(
                "All {} links inside this group will be deleted too.",
                group.links.len()
            ),
            Style::default().fg(Color::White),
        )));
    }

    text.extend([
        Line::from(""),
        Line::from(Span::styled(
            "This action cannot be undone!",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Press [y] to delete, [n] to cancel",
            Style::default().fg(Color::DarkGray),
        )),
    ]);

    let paragraph = Paragraph::new(text)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: false });
    frame.render_widget(paragraph, inner_area);
}
