//! Navigation and selection logic

use tracing::debug;

use super::state::{App, Focus};
use crate::store::{Action, AppState, GroupId, LinkRef, View};

/// 仪表盘中可被光标选中的一行
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DashboardRow {
    Group(GroupId),
    Link(LinkRef),
}

/// 按显示顺序列出可选中行；折叠分组只贡献标题行
pub fn dashboard_rows(state: &AppState) -> Vec<DashboardRow> {
    let mut rows = Vec::with_capacity(state.groups.len() + state.total_links());
    for group in &state.groups {
        rows.push(DashboardRow::Group(group.id));
        if group.is_expanded {
            rows.extend(
                group
                    .links
                    .iter()
                    .map(|link| DashboardRow::Link(group.link_ref(link))),
            );
        }
    }
    rows
}

/// 侧边栏导航入口
#[derive(Debug, Clone, Copy)]
pub struct NavEntry {
    pub view: View,
    pub label: &'static str,
    pub icon: &'static str,
}

pub const NAV_ENTRIES: [NavEntry; 4] = [
    NavEntry {
        view: View::Dashboard,
        label: "Dashboard",
        icon: "⌂",
    },
    NavEntry {
        view: View::GlobalStats,
        label: "Global stats",
        icon: "▤",
    },
    NavEntry {
        view: View::AllLinks,
        label: "All links",
        icon: "≡",
    },
    NavEntry {
        view: View::Settings,
        label: "Settings",
        icon: "✱",
    },
];

impl App {
    /// 执行 Action，之后把光标限制在有效范围内
    pub fn dispatch(&mut self, action: Action) {
        if action.is_noop() {
            return;
        }
        let name = action.name();
        if let Err(e) = self.store.dispatch(action) {
            debug!("Action {} rejected: {}", name, e);
            self.set_error(e.message());
        }
        self.clamp_cursor();
    }

    pub fn rows(&self) -> Vec<DashboardRow> {
        dashboard_rows(self.state())
    }

    /// 光标下的行
    pub fn current_row(&self) -> Option<DashboardRow> {
        self.rows().into_iter().nth(self.cursor)
    }

    pub fn move_cursor_up(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_cursor_down(&mut self) {
        let len = self.rows().len();
        if self.cursor + 1 < len {
            self.cursor += 1;
        }
    }

    pub fn jump_to_top(&mut self) {
        self.cursor = 0;
        self.list_offset = 0;
    }

    pub fn jump_to_bottom(&mut self) {
        self.cursor = self.rows().len().saturating_sub(1);
    }

    pub fn clamp_cursor(&mut self) {
        let len = self.rows().len();
        if self.cursor >= len {
            self.cursor = len.saturating_sub(1);
        }
    }

    /// 激活光标所在行：分组标题切换展开，链接打开详情
    pub fn activate_row(&mut self) {
        let action = match self.current_row() {
            Some(DashboardRow::Group(group_id)) => Action::ToggleGroup(group_id),
            Some(DashboardRow::Link(target)) => Action::SelectLink(target),
            None => Action::Noop,
        };
        self.dispatch(action);
        self.sync_sidebar_index();
    }

    // ========== 侧边栏 ==========

    pub fn toggle_focus(&mut self) {
        self.focus = match self.focus {
            Focus::Main => Focus::Sidebar,
            Focus::Sidebar => Focus::Main,
        };
    }

    pub fn sidebar_up(&mut self) {
        self.sidebar_index = self.sidebar_index.saturating_sub(1);
    }

    pub fn sidebar_down(&mut self) {
        if self.sidebar_index + 1 < NAV_ENTRIES.len() {
            self.sidebar_index += 1;
        }
    }

    /// 跳转到第 `index` 个导航入口
    pub fn navigate_to_entry(&mut self, index: usize) {
        let Some(entry) = NAV_ENTRIES.get(index) else {
            return;
        };
        self.sidebar_index = index;
        self.navigate_to(entry.view);
    }

    pub fn navigate_to(&mut self, view: View) {
        self.dispatch(Action::SetView(view));
        self.sync_sidebar_index();
        self.clear_messages();
    }

    pub fn toggle_sidebar(&mut self) {
        self.dispatch(Action::ToggleSidebar);
    }

    /// 让侧边栏高亮跟随当前视图；详情视图归属仪表盘
    fn sync_sidebar_index(&mut self) {
        let view = match self.state().view {
            View::KeyStats => View::Dashboard,
            other => other,
        };
        if let Some(index) = NAV_ENTRIES.iter().position(|entry| entry.view == view) {
            self.sidebar_index = index;
        }
    }
}
