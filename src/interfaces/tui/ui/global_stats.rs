use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, BorderType, Borders},
};

use super::widgets::{StatCard, draw_placeholder_panel};
use crate::interfaces::tui::app::App;
use crate::interfaces::tui::constants::colors;

const ACCENTS: [Color; 4] = [
    colors::PRIMARY,
    colors::SUCCESS,
    colors::WARNING,
    Color::Magenta,
];

/// Draw the global statistics view: metric cards and placeholder panels
pub fn draw_global_stats(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .title(" Global Statistics ")
        .title_style(
            Style::default()
                .fg(colors::PRIMARY)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(colors::PRIMARY));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4),
            Constraint::Min(4),
            Constraint::Min(4),
        ])
        .split(inner);

    let metrics = app.stats.overview();
    let count = metrics.len().max(1) as u32;
    let cards = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(metrics.iter().map(|_| Constraint::Ratio(1, count)))
        .split(chunks[0]);
    for (index, metric) in metrics.iter().enumerate() {
        StatCard::new(&metric.label, &metric.value)
            .accent(ACCENTS[index % ACCENTS.len()])
            .render(frame, cards[index]);
    }

    draw_placeholder_panel(
        frame,
        chunks[1],
        "Clicks over time",
        "Click history chart will appear here",
    );

    let bottom = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(chunks[2]);
    draw_placeholder_panel(
        frame,
        bottom[0],
        "Traffic sources",
        "Referrer breakdown will appear here",
    );
    draw_placeholder_panel(
        frame,
        bottom[1],
        "Top links",
        "Most clicked links will appear here",
    );
}
