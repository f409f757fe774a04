//! TUI 常量定义
//!
//! 集中管理所有 UI 相关的常量，避免魔法数字分散在代码各处

/// 侧边栏展开宽度
pub const SIDEBAR_WIDTH: u16 = 24;

/// 侧边栏收起后的图标栏宽度
pub const SIDEBAR_RAIL_WIDTH: u16 = 7;

/// 链接表格 key 列宽度
pub const KEY_COLUMN_WIDTH: usize = 14;

/// 点击数列宽度
pub const CLICKS_COLUMN_WIDTH: usize = 9;

/// 状态徽章列宽度
pub const STATUS_COLUMN_WIDTH: usize = 10;

/// URL 列的最小宽度
pub const MIN_URL_COLUMN_WIDTH: usize = 12;

/// 弹窗尺寸配置
#[derive(Debug, Clone, Copy)]
pub struct PopupSize {
    /// 宽度百分比 (0-100)
    pub width: u16,
    /// 高度百分比 (0-100)
    pub height: u16,
}

impl PopupSize {
    pub const fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// 各弹窗的尺寸配置
pub mod popup {
    use super::PopupSize;

    /// 编辑分组弹窗
    pub const EDIT_GROUP: PopupSize = PopupSize::new(60, 40);
    /// 编辑链接弹窗
    pub const EDIT_LINK: PopupSize = PopupSize::new(70, 50);
    /// 删除确认弹窗
    pub const DELETE_CONFIRM: PopupSize = PopupSize::new(60, 45);
    /// 复制确认弹窗
    pub const COPY_NOTICE: PopupSize = PopupSize::new(55, 30);
    /// 帮助弹窗
    pub const HELP: PopupSize = PopupSize::new(80, 90);
    /// 退出确认
    pub const EXITING: PopupSize = PopupSize::new(50, 25);
}

/// 颜色主题
pub mod colors {
    use ratatui::style::Color;

    /// 主色调
    pub const PRIMARY: Color = Color::Cyan;
    /// 成功色
    pub const SUCCESS: Color = Color::Green;
    /// 警告色
    pub const WARNING: Color = Color::Yellow;
    /// 错误色
    pub const ERROR: Color = Color::Red;
    /// 次要文本色
    pub const MUTED: Color = Color::DarkGray;
    /// 外链颜色
    pub const LINK: Color = Color::Blue;
    /// 高亮背景色
    pub const HIGHLIGHT_BG: Color = Color::Yellow;
    /// 高亮前景色
    pub const HIGHLIGHT_FG: Color = Color::Black;
}

/// 链接状态文本
pub mod status_text {
    /// 活跃状态
    pub const ACTIVE: &str = "active";
    /// 已归档
    pub const ARCHIVED: &str = "archived";
}
