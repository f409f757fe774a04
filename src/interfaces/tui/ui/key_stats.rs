use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use super::widgets::{StatCard, draw_placeholder_panel};
use crate::interfaces::tui::app::App;
use crate::interfaces::tui::constants::colors;
use crate::store::Link;
use crate::utils::{format_thousands, outbound_host, short_link};

/// Draw the per-key statistics view for the selected link
pub fn draw_key_stats(frame: &mut Frame, app: &App, link: &Link, area: Rect) {
    let block = Block::default()
        .title(format!(" Statistics for {} ", link.key))
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
            Constraint::Length(3),
            Constraint::Length(4),
            Constraint::Min(4),
            Constraint::Min(4),
        ])
        .split(inner);

    let mut destination = vec![
        Span::styled("Destination: ", Style::default().fg(colors::MUTED)),
        Span::styled(
            link.original_url.clone(),
            Style::default()
                .fg(colors::LINK)
                .add_modifier(Modifier::UNDERLINED),
        ),
    ];
    if let Some(host) = outbound_host(&link.original_url) {
        destination.push(Span::styled(
            format!("  ↗ {}", host),
            Style::default().fg(colors::MUTED),
        ));
    }

    let summary = vec![
        Line::from(vec![
            Span::styled("Key: ", Style::default().fg(colors::MUTED)),
            Span::styled(
                link.key.clone(),
                Style::default()
                    .fg(colors::PRIMARY)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!("   {}", short_link(&app.short_domain, &link.key)),
                Style::default().fg(colors::MUTED),
            ),
        ]),
        Line::from(destination),
        Line::from(Span::styled(
            "Press [Esc] to return to the dashboard",
            Style::default().fg(colors::MUTED),
        )),
    ];
    frame.render_widget(Paragraph::new(summary), chunks[0]);

    let clicks = format_thousands(link.clicks);
    let windows = app.stats.key_windows(&link.key);
    let count = (windows.len() + 1) as u32;
    let cards = Layout::default()
        .direction(Direction::Horizontal)
        .constraints((0..count).map(|_| Constraint::Ratio(1, count)))
        .split(chunks[1]);

    StatCard::new("Total clicks", &clicks)
        .accent(Color::White)
        .render(frame, cards[0]);
    for (index, metric) in windows.iter().enumerate() {
        StatCard::new(&metric.label, &metric.value)
            .accent(colors::SUCCESS)
            .render(frame, cards[index + 1]);
    }

    draw_placeholder_panel(
        frame,
        chunks[2],
        &format!("Clicks over time for {}", link.key),
        "Hourly and daily click chart will appear here",
    );

    let bottom = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(chunks[3]);
    draw_placeholder_panel(
        frame,
        bottom[0],
        &format!("Referrers for {}", link.key),
        "Referrer list will appear here",
    );
    draw_placeholder_panel(
        frame,
        bottom[1],
        &format!("Geography for {}", link.key),
        "Visitor locations will appear here",
    );
}
