//! 统计卡片与占位面板

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
};

use crate::interfaces::tui::constants::colors;

/// 单个数值卡片：标签 + 大号数值
pub struct StatCard<'a> {
    label: &'a str,
    value: &'a str,
    accent: Color,
}

impl<'a> StatCard<'a> {
    pub fn new(label: &'a str, value: &'a str) -> Self {
        Self {
            label,
            value,
            accent: colors::PRIMARY,
        }
    }

    pub fn accent(mut self, color: Color) -> Self {
        self.accent = color;
        self
    }

    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let text = vec![
            Line::from(Span::styled(self.label, Style::default().fg(colors::MUTED))),
            Line::from(Span::styled(
                self.value,
                Style::default()
                    .fg(self.accent)
                    .add_modifier(Modifier::BOLD),
            )),
        ];

        let card = Paragraph::new(text).alignment(Alignment::Center).block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(colors::MUTED)),
        );
        frame.render_widget(card, area);
    }
}

/// 尚未接入数据的面板，只显示标题与说明
pub fn draw_placeholder_panel(frame: &mut Frame, area: Rect, title: &str, note: &str) {
    let body = Paragraph::new(vec![
        Line::from(""),
        Line::from(Span::styled(
            note.to_string(),
            Style::default()
                .fg(colors::MUTED)
                .add_modifier(Modifier::ITALIC),
        )),
    ])
    .alignment(Alignment::Center)
    .wrap(Wrap { trim: true })
    .block(
        Block::default()
            .title(format!(" {} ", title))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(colors::MUTED)),
    );
    frame.render_widget(body, area);
}
