use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use super::widgets::{InputField, Popup};
use crate::interfaces::tui::app::{App, EditingField};
use crate::interfaces::tui::constants::{colors, popup};
use crate::store::LinkGroup;

pub fn draw_edit_group_screen(frame: &mut Frame, app: &App, group: &LinkGroup, area: Rect) {
    let inner_area = Popup::new("Edit Link Group", popup::EDIT_GROUP)
        .theme_color(Color::Yellow)
        .render(frame, area);

    let field = InputField::new(
        EditingField::GroupName.display_title(),
        &app.form.group_name,
    )
    .active(true)
    .required()
    .error(
        app.form
            .get_error(EditingField::GroupName)
            .map(String::as_str),
    );

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Length(field.height()),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(inner_area);

    let current = Line::from(vec![
        Span::styled("Current name: ", Style::default().fg(colors::MUTED)),
        Span::styled(
            group.name.clone(),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        ),
    ]);
    frame.render_widget(Paragraph::new(current), chunks[0]);

    field.render(frame, chunks[1]);

    let hints = Line::from(Span::styled(
        "[Enter] Save   [Esc] Cancel",
        Style::default().fg(colors::MUTED),
    ));
    frame.render_widget(Paragraph::new(hints), chunks[3]);
}
