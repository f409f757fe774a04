use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use super::widgets::{InputField, Popup};
use crate::interfaces::tui::app::{App, EditingField};
use crate::interfaces::tui::constants::{colors, popup};
use crate::store::Link;
use crate::utils::format_thousands;

pub fn draw_edit_link_screen(frame: &mut Frame, app: &App, link: &Link, area: Rect) {
    let title = format!("Edit Link ({})", link.key);
    let inner_area = Popup::new(&title, popup::EDIT_LINK)
        .theme_color(Color::Yellow)
        .render(frame, area);

    let editing = app.form.currently_editing;
    let key_field = InputField::new(EditingField::Key.display_title(), &app.form.key)
        .active(editing == Some(EditingField::Key))
        .required()
        .placeholder("e.g. /fb")
        .error(app.form.get_error(EditingField::Key).map(String::as_str));
    let url_field = InputField::new(
        EditingField::OriginalUrl.display_title(),
        &app.form.original_url,
    )
    .active(editing == Some(EditingField::OriginalUrl))
    .required()
    .placeholder("https://...")
    .error(
        app.form
            .get_error(EditingField::OriginalUrl)
            .map(String::as_str),
    );

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(key_field.height()),
            Constraint::Length(url_field.height()),
            Constraint::Length(2),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(inner_area);

    key_field.render(frame, chunks[0]);
    url_field.render(frame, chunks[1]);

    // 点击数与状态不可编辑
    let info = Line::from(Span::styled(
        format!(
            "Clicks: {}   Status: {}",
            format_thousands(link.clicks),
            link.status
        ),
        Style::default().fg(colors::MUTED),
    ));
    frame.render_widget(Paragraph::new(info), chunks[2]);

    let hints = Line::from(Span::styled(
        "[Tab] Switch field   [Enter] Save   [Esc] Cancel",
        Style::default().fg(colors::MUTED),
    ));
    frame.render_widget(Paragraph::new(hints), chunks[4]);
}
