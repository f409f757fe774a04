//! 链接状态徽章
//!
//! `active` 使用绿色，其余状态统一显示为中性的 `archived`

use ratatui::{
    style::{Color, Modifier, Style},
    text::Span,
};

use crate::interfaces::tui::constants::{colors, status_text};
use crate::store::LinkStatus;

pub struct StatusBadge {
    status: LinkStatus,
}

impl StatusBadge {
    pub fn new(status: LinkStatus) -> Self {
        Self { status }
    }

    pub fn text(&self) -> &'static str {
        if self.status.is_active() {
            status_text::ACTIVE
        } else {
            status_text::ARCHIVED
        }
    }

    pub fn color(&self) -> Color {
        if self.status.is_active() {
            colors::SUCCESS
        } else {
            colors::MUTED
        }
    }

    /// 固定宽度的徽章 span
    pub fn span(&self, width: usize) -> Span<'static> {
        Span::styled(
            format!("{:<width$}", format!("[{}]", self.text()), width = width),
            Style::default()
                .fg(self.color())
                .add_modifier(Modifier::BOLD),
        )
    }
}
