//! Grouped link table
//!
//! Each group renders as a header row; expanded groups add a column header
//! and one row per link. Only header and link rows are selectable, so the
//! app cursor is mapped onto list indices here.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, ListState, Paragraph},
};

use super::widgets::StatusBadge;
use crate::interfaces::tui::app::{App, DashboardRow, Focus};
use crate::interfaces::tui::constants::{
    CLICKS_COLUMN_WIDTH, KEY_COLUMN_WIDTH, MIN_URL_COLUMN_WIDTH, STATUS_COLUMN_WIDTH, colors,
};
use crate::store::{Link, LinkGroup};
use crate::utils::{format_thousands, short_link, truncate_chars};

const INDENT: &str = "  ";
const ACTIONS: &str = "[c] [e] [d]";

/// Column widths for link rows
struct Columns {
    url: usize,
}

impl Columns {
    fn fit(width: usize, url_truncate_length: usize) -> Self {
        let fixed = INDENT.len()
            + KEY_COLUMN_WIDTH
            + 1
            + 1
            + CLICKS_COLUMN_WIDTH
            + 2
            + STATUS_COLUMN_WIDTH
            + 1
            + ACTIONS.len();
        let available = width.saturating_sub(fixed);
        Self {
            url: url_truncate_length.min(available).max(MIN_URL_COLUMN_WIDTH),
        }
    }
}

fn group_header_line(group: &LinkGroup) -> Line<'static> {
    let indicator = if group.is_expanded { "▼ " } else { "▶ " };
    let count = match group.links.len() {
        1 => "1 link".to_string(),
        n => format!("{} links", n),
    };
    Line::from(vec![
        Span::styled(indicator, Style::default().fg(colors::WARNING)),
        Span::styled(
            group.name.clone(),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(format!("  ({})", count), Style::default().fg(colors::MUTED)),
        Span::styled("   e edit · d delete", Style::default().fg(colors::MUTED)),
    ])
}

fn column_header_line(columns: &Columns) -> Line<'static> {
    let text = format!(
        "{INDENT}{:<key$} {:<url$} {:>clicks$}  {:<status$} {}",
        "KEY",
        "ORIGINAL URL",
        "CLICKS",
        "STATUS",
        "ACTIONS",
        key = KEY_COLUMN_WIDTH,
        url = columns.url,
        clicks = CLICKS_COLUMN_WIDTH,
        status = STATUS_COLUMN_WIDTH,
    );
    Line::from(Span::styled(
        text,
        Style::default()
            .fg(colors::WARNING)
            .add_modifier(Modifier::BOLD),
    ))
}

fn link_line(link: &Link, columns: &Columns) -> Line<'static> {
    Line::from(vec![
        Span::raw(INDENT),
        Span::styled(
            format!(
                "{:<width$}",
                truncate_chars(&link.key, KEY_COLUMN_WIDTH),
                width = KEY_COLUMN_WIDTH
            ),
            Style::default()
                .fg(colors::PRIMARY)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
        ),
        Span::raw(" "),
        Span::styled(
            format!(
                "{:<width$}",
                truncate_chars(&link.original_url, columns.url),
                width = columns.url
            ),
            Style::default().fg(Color::Gray),
        ),
        Span::raw(" "),
        Span::styled(
            format!(
                "{:>width$}",
                format_thousands(link.clicks),
                width = CLICKS_COLUMN_WIDTH
            ),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("  "),
        StatusBadge::new(link.status).span(STATUS_COLUMN_WIDTH),
        Span::raw(" "),
        Span::styled(ACTIONS, Style::default().fg(colors::MUTED)),
    ])
}

/// Full value of the row under the cursor
fn preview_line(app: &App) -> Line<'static> {
    match app.current_row() {
        Some(DashboardRow::Link(target)) => match app.store.link(&target) {
            Some(link) => Line::from(vec![
                Span::styled("↳ ", Style::default().fg(colors::MUTED)),
                Span::styled(
                    link.original_url.clone(),
                    Style::default()
                        .fg(colors::LINK)
                        .add_modifier(Modifier::UNDERLINED),
                ),
                Span::styled(
                    format!("  {}", short_link(&app.short_domain, &link.key)),
                    Style::default().fg(colors::MUTED),
                ),
            ]),
            None => Line::from(""),
        },
        Some(DashboardRow::Group(group_id)) => match app.store.group(group_id) {
            Some(group) => Line::from(Span::styled(
                format!(
                    "↳ {}  (Enter to {})",
                    group.name,
                    if group.is_expanded { "collapse" } else { "expand" }
                ),
                Style::default().fg(colors::MUTED),
            )),
            None => Line::from(""),
        },
        None => Line::from(""),
    }
}

pub fn draw_dashboard(frame: &mut Frame, app: &mut App, area: Rect) {
    let state = app.store.snapshot();

    let block = Block::default()
        .title(" Link Groups ")
        .title_style(
            Style::default()
                .fg(colors::PRIMARY)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(if app.focus == Focus::Main {
            colors::PRIMARY
        } else {
            colors::MUTED
        }));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if state.groups.is_empty() {
        let empty = Paragraph::new("No link groups").style(Style::default().fg(colors::MUTED));
        frame.render_widget(empty, inner);
        return;
    }

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(1)])
        .split(inner);

    // two columns are taken by the highlight symbol
    let columns = Columns::fit(
        (chunks[0].width as usize).saturating_sub(2),
        app.url_truncate_length,
    );

    let mut items = Vec::new();
    let mut selectable = Vec::new();
    for (index, group) in state.groups.iter().enumerate() {
        if index > 0 {
            items.push(ListItem::new(Line::from("")));
        }
        selectable.push(items.len());
        items.push(ListItem::new(group_header_line(group)));

        if !group.is_expanded {
            continue;
        }
        if group.links.is_empty() {
            items.push(ListItem::new(Line::from(Span::styled(
                format!("{INDENT}(no links in this group)"),
                Style::default().fg(colors::MUTED),
            ))));
            continue;
        }
        items.push(ListItem::new(column_header_line(&columns)));
        for link in &group.links {
            selectable.push(items.len());
            items.push(ListItem::new(link_line(link, &columns)));
        }
    }

    let list = List::new(items)
        .highlight_style(Style::default().bg(Color::DarkGray).fg(Color::White))
        .highlight_symbol("▶ ");

    let mut list_state = ListState::default()
        .with_offset(app.list_offset)
        .with_selected(selectable.get(app.cursor).copied());
    frame.render_stateful_widget(list, chunks[0], &mut list_state);
    app.list_offset = list_state.offset();

    frame.render_widget(Paragraph::new(preview_line(app)), chunks[1]);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_columns_respect_configured_truncation() {
        assert_eq!(Columns::fit(200, 40).url, 40);
        assert_eq!(Columns::fit(60, 40).url, MIN_URL_COLUMN_WIDTH);
    }

    #[test]
    fn test_link_line_formats_clicks() {
        let link = Link::new(
            "a3",
            "/tiktok",
            "https://tiktok.com/campaign-name",
            10500,
            crate::store::LinkStatus::Active,
        );
        let line = link_line(&link, &Columns { url: 20 });
        let text: String = line.spans.iter().map(|s| s.content.as_ref()).collect();
        assert!(text.contains("/tiktok"));
        assert!(text.contains("10,500"));
        assert!(text.contains("[active]"));
        assert!(text.contains("https://tiktok.co..."));
    }
}
