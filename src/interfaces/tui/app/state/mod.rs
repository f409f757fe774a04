//! App state definition and basic state management
//!
//! 领域数据全部在 `Store` 中；这里只保存终端界面自己的状态：
//! 焦点、光标、表单输入和覆盖层。

mod form_state;

pub use form_state::{EditingField, FormState};

use std::sync::Arc;

use crate::config::UiConfig;
use crate::interfaces::tui::clipboard::{self, ClipboardBackend};
use crate::stats::{PlaceholderStats, StatsSource};
use crate::store::{AppState, Store};

/// 键盘焦点所在区域
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    Sidebar,
    #[default]
    Main,
}

/// 叠加在视图和弹窗之上的界面层
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Overlay {
    Help,
    Exiting,
    /// 剪贴板不可用时的阻塞提示，携带要复制的完整短链接
    CopyNotice(String),
}

pub struct App {
    pub store: Store,
    pub stats: Arc<dyn StatsSource>,
    pub clipboard: Box<dyn ClipboardBackend>,

    // Display settings
    pub short_domain: String,
    pub url_truncate_length: usize,

    // Navigation
    pub focus: Focus,
    pub sidebar_index: usize,
    /// 仪表盘光标，指向可选中行（分组标题或链接）
    pub cursor: usize,
    pub list_offset: usize,

    // Form state for edit modals
    pub form: FormState,

    pub overlay: Option<Overlay>,
    pub status_message: String,
    pub error_message: String,
}

impl App {
    pub fn new(store: Store, ui: &UiConfig) -> Self {
        Self {
            store,
            stats: PlaceholderStats::arc(),
            clipboard: clipboard::from_config(ui.clipboard),
            short_domain: ui.short_domain.clone(),
            url_truncate_length: ui.url_truncate_length,
            focus: Focus::Main,
            sidebar_index: 0,
            cursor: 0,
            list_offset: 0,
            form: FormState::new(),
            overlay: None,
            status_message: String::new(),
            error_message: String::new(),
        }
    }

    pub fn with_clipboard(mut self, clipboard: Box<dyn ClipboardBackend>) -> Self {
        self.clipboard = clipboard;
        self
    }

    pub fn state(&self) -> &AppState {
        self.store.state()
    }

    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = message.into();
        self.error_message.clear();
    }

    pub fn set_error(&mut self, message: impl Into<String>) {
        self.error_message = message.into();
        self.status_message.clear();
    }

    pub fn clear_messages(&mut self) {
        self.status_message.clear();
        self.error_message.clear();
    }
}
