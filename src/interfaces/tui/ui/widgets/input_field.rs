//! 通用输入框组件
//!
//! 用于表单中的文本输入，支持：
//! - 激活状态高亮
//! - 验证错误显示
//! - 字符计数

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use crate::interfaces::tui::constants::colors;

/// 输入框组件
///
/// ```rust,ignore
/// InputField::new("Key", &app.form.key)
///     .active(true)
///     .error(app.form.get_error(EditingField::Key).map(String::as_str))
///     .placeholder("e.g. /fb")
///     .required()
///     .render(frame, area);
/// ```
pub struct InputField<'a> {
    /// 字段标题
    title: &'a str,
    /// 输入值
    value: &'a str,
    /// 是否处于激活状态
    is_active: bool,
    /// 验证错误信息
    error: Option<&'a str>,
    /// 占位符文本，仅在值为空时显示在标题里
    placeholder: Option<&'a str>,
    /// 是否必填（标题后加 `*`）
    required: bool,
}

impl<'a> InputField<'a> {
    /// 创建新的输入框
    pub fn new(title: &'a str, value: &'a str) -> Self {
        Self {
            title,
            value,
            is_active: false,
            error: None,
            placeholder: None,
            required: false,
        }
    }

    /// 设置激活状态
    pub fn active(mut self, active: bool) -> Self {
        self.is_active = active;
        self
    }

    /// 设置验证错误，显示在输入框下方
    pub fn error(mut self, error: Option<&'a str>) -> Self {
        self.error = error;
        self
    }

    /// 设置占位符
    pub fn placeholder(mut self, placeholder: &'a str) -> Self {
        self.placeholder = Some(placeholder);
        self
    }

    /// 标记为必填
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// 计算所需的高度（输入框 + 错误行）
    pub fn height(&self) -> u16 {
        if self.error.is_some() { 4 } else { 3 }
    }

    /// 标题：必填标记 + 占位符或字符计数
    fn display_title(&self) -> String {
        let mut title = self.title.to_string();

        if self.required {
            title.push_str(" *");
        }

        if self.value.is_empty() {
            if let Some(placeholder) = self.placeholder {
                title = format!("{} ({})", title, placeholder);
            }
        } else {
            title = format!("{} ({} chars)", title, self.value.chars().count());
        }

        title
    }

    /// 边框样式：错误优先于激活
    fn border_style(&self) -> Style {
        if self.error.is_some() {
            Style::default().fg(colors::ERROR)
        } else if self.is_active {
            Style::default()
                .fg(colors::HIGHLIGHT_FG)
                .bg(colors::HIGHLIGHT_BG)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::White)
        }
    }

    /// 渲染输入框；激活时在末尾显示光标块
    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(3), Constraint::Length(1)])
            .split(area);

        let value = if self.is_active {
            format!("{}█", self.value)
        } else {
            self.value.to_string()
        };

        let input = Paragraph::new(value).block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .title(self.display_title())
                .border_style(self.border_style()),
        );
        frame.render_widget(input, chunks[0]);

        if let Some(error) = self.error {
            let error_text = Paragraph::new(error).style(Style::default().fg(colors::ERROR));
            frame.render_widget(error_text, chunks[1]);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_field_title() {
        let field = InputField::new("Key", "/fb");
        assert_eq!(field.display_title(), "Key (3 chars)");

        let field = InputField::new("Key", "").required();
        assert_eq!(field.display_title(), "Key *");

        let field = InputField::new("Key", "").required().placeholder("e.g. /fb");
        assert_eq!(field.display_title(), "Key * (e.g. /fb)");
    }

    #[test]
    fn test_input_field_height() {
        let field = InputField::new("Name", "test");
        assert_eq!(field.height(), 3);

        let field = InputField::new("Name", "").error(Some("Group Name is required"));
        assert_eq!(field.height(), 4);
    }
}
