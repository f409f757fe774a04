//! 应用状态持有者
//!
//! 唯一能修改领域数据的地方。每次状态迁移都基于当前快照构造一个新的
//! `AppState` 并整体替换，之前发布的快照保持不变。

use std::sync::Arc;

use tracing::{debug, warn};

use super::action::Action;
use super::models::{GroupId, Link, LinkGroup, LinkPatch, LinkRef};
use super::state::{AppState, Modal, View};
use crate::errors::{LinkflowError, Result};

/// 校验必填文本，返回去除首尾空白后的值
pub fn require_text(field: &str, value: &str) -> Result<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        Err(LinkflowError::validation(format!("{} is required", field)))
    } else {
        Ok(trimmed.to_string())
    }
}

#[derive(Debug, Clone)]
pub struct Store {
    state: Arc<AppState>,
}

impl Default for Store {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl Store {
    pub fn new(groups: Vec<LinkGroup>) -> Self {
        Self::with_state(AppState::new(groups))
    }

    pub fn with_state(state: AppState) -> Self {
        Self {
            state: Arc::new(state),
        }
    }

    /// 设置侧边栏初始状态
    pub fn sidebar_open(mut self, open: bool) -> Self {
        if self.state.sidebar_open != open {
            self.toggle_sidebar();
        }
        self
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// 获取当前快照；之后的状态迁移不会影响它
    pub fn snapshot(&self) -> Arc<AppState> {
        Arc::clone(&self.state)
    }

    pub fn group(&self, group_id: GroupId) -> Option<&LinkGroup> {
        self.state.group(group_id)
    }

    pub fn link(&self, target: &LinkRef) -> Option<&Link> {
        self.state.link(target)
    }

    pub fn selected_link(&self) -> Option<&Link> {
        self.state.selected_link()
    }

    pub fn total_links(&self) -> usize {
        self.state.total_links()
    }

    fn transition(&mut self, operation: &'static str, update: impl FnOnce(&mut AppState)) {
        let mut next = AppState::clone(&self.state);
        update(&mut next);
        debug!(
            operation,
            groups = next.groups.len(),
            links = next.total_links(),
            view = next.view.as_ref(),
            modal = next.modal.as_ref().map(Modal::title),
            "State transition"
        );
        self.state = Arc::new(next);
    }

    // ========== 分组 ==========

    pub fn toggle_group_expansion(&mut self, group_id: GroupId) {
        if self.state.group(group_id).is_none() {
            debug!("toggle_group_expansion: group {} not found, ignored", group_id);
            return;
        }
        self.transition("toggle_group_expansion", |state| {
            if let Some(group) = state.group_mut(group_id) {
                group.is_expanded = !group.is_expanded;
            }
        });
    }

    pub fn rename_group(&mut self, group_id: GroupId, new_name: &str) -> Result<()> {
        let name = require_text("Group name", new_name).inspect_err(|e| {
            warn!("rename_group rejected for group {}: {}", group_id, e);
        })?;
        self.transition("rename_group", |state| {
            if let Some(group) = state.group_mut(group_id) {
                group.name = name;
            }
            state.modal = None;
        });
        Ok(())
    }

    /// 删除分组及其全部链接，单次迁移完成
    pub fn delete_group(&mut self, group_id: GroupId) {
        self.transition("delete_group", |state| {
            state.groups.retain(|group| group.id != group_id);
            if state
                .selected
                .as_ref()
                .is_some_and(|target| target.group_id == group_id)
            {
                state.selected = None;
            }
            state.modal = None;
        });
    }

    // ========== 链接 ==========

    pub fn update_link(&mut self, target: &LinkRef, patch: LinkPatch) -> Result<()> {
        let patch = LinkPatch {
            key: patch
                .key
                .as_deref()
                .map(|key| require_text("Key", key))
                .transpose()?,
            original_url: patch
                .original_url
                .as_deref()
                .map(|url| require_text("Original URL", url))
                .transpose()?,
        };

        if self.state.link(target).is_none() {
            debug!("update_link: link {} not found", target);
        }

        self.transition("update_link", |state| {
            if let Some(group) = state.group_mut(target.group_id)
                && let Some(link) = group.links.iter_mut().find(|l| l.id == target.link_id)
            {
                *link = patch.apply_to(link);
            }
            state.modal = None;
        });
        Ok(())
    }

    /// 删除单个链接；分组即使被清空也保留
    pub fn delete_link(&mut self, target: &LinkRef) {
        self.transition("delete_link", |state| {
            if let Some(group) = state.group_mut(target.group_id) {
                group.links.retain(|link| link.id != target.link_id);
            }
            if state.selected.as_ref() == Some(target) {
                state.selected = None;
            }
            state.modal = None;
        });
    }

    // ========== 导航 ==========

    /// 切换视图，总是清除详情选中
    pub fn set_active_view(&mut self, view: View) {
        self.transition("set_active_view", |state| {
            state.view = view;
            state.selected = None;
        });
    }

    /// 选中链接并切换到详情视图（一次迁移）
    pub fn select_link_for_detail(&mut self, target: LinkRef) {
        if self.state.link(&target).is_none() {
            debug!("select_link_for_detail: link {} not found, ignored", target);
            return;
        }
        self.transition("select_link_for_detail", |state| {
            state.selected = Some(target);
            state.view = View::KeyStats;
        });
    }

    pub fn toggle_sidebar(&mut self) {
        self.transition("toggle_sidebar", |state| {
            state.sidebar_open = !state.sidebar_open;
        });
    }

    // ========== 弹窗 ==========

    /// 打开弹窗，已有弹窗直接被替换
    pub fn open_modal(&mut self, modal: Modal) {
        self.transition("open_modal", |state| {
            state.modal = Some(modal);
        });
    }

    pub fn close_modal(&mut self) {
        if self.state.modal.is_none() {
            return;
        }
        self.transition("close_modal", |state| {
            state.modal = None;
        });
    }

    /// 执行 Action
    pub fn dispatch(&mut self, action: Action) -> Result<()> {
        match action {
            Action::ToggleGroup(group_id) => self.toggle_group_expansion(group_id),
            Action::RenameGroup { group_id, name } => self.rename_group(group_id, &name)?,
            Action::DeleteGroup(group_id) => self.delete_group(group_id),
            Action::UpdateLink { target, patch } => self.update_link(&target, patch)?,
            Action::DeleteLink(target) => self.delete_link(&target),
            Action::SetView(view) => self.set_active_view(view),
            Action::SelectLink(target) => self.select_link_for_detail(target),
            Action::ToggleSidebar => self.toggle_sidebar(),
            Action::OpenModal(modal) => self.open_modal(modal),
            Action::CloseModal => self.close_modal(),
            Action::Noop => {}
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::models::LinkStatus;

    fn store() -> Store {
        Store::new(vec![
            LinkGroup::new(
                GroupId(1),
                "Campaign",
                vec![
                    Link::new("a1", "/ytb", "https://youtube.com/c", 1200, LinkStatus::Active),
                    Link::new("a2", "/fb", "https://facebook.com/c", 2500, LinkStatus::Active),
                ],
            ),
            LinkGroup::new(
                GroupId(2),
                "Social",
                vec![Link::new("b1", "/website", "https://example.com", 50, LinkStatus::Archived)],
            )
            .collapsed(),
        ])
    }

    #[test]
    fn test_require_text() {
        assert_eq!(require_text("Name", "  x  ").unwrap(), "x");
        assert!(require_text("Name", "").unwrap_err().is_validation());
        assert!(require_text("Name", " \t ").is_err());
    }

    #[test]
    fn test_toggle_unknown_group_keeps_snapshot() {
        let mut store = store();
        let before = store.snapshot();
        store.toggle_group_expansion(GroupId(99));
        assert!(Arc::ptr_eq(&before, &store.snapshot()));
    }

    #[test]
    fn test_open_modal_replaces_existing() {
        let mut store = store();
        let group = store.group(GroupId(1)).unwrap().clone();
        store.open_modal(Modal::EditGroup(group.clone()));
        store.open_modal(Modal::DeleteGroup(group));
        assert!(matches!(store.state().modal, Some(Modal::DeleteGroup(_))));

        store.close_modal();
        assert!(store.state().modal.is_none());
    }

    #[test]
    fn test_rename_trims_and_closes_modal() {
        let mut store = store();
        let group = store.group(GroupId(1)).unwrap().clone();
        store.open_modal(Modal::EditGroup(group));

        store.rename_group(GroupId(1), "  Spring sale  ").unwrap();
        assert_eq!(store.group(GroupId(1)).unwrap().name, "Spring sale");
        assert!(store.state().modal.is_none());
    }

    #[test]
    fn test_update_link_rejects_blank_key() {
        let mut store = store();
        let target = LinkRef::new(GroupId(1), "a2");
        let before = store.snapshot();

        let result = store.update_link(&target, LinkPatch::new("  ", "https://e.com"));
        assert!(result.is_err());
        assert!(Arc::ptr_eq(&before, &store.snapshot()));
    }

    #[test]
    fn test_select_unknown_link_is_noop() {
        let mut store = store();
        store.select_link_for_detail(LinkRef::new(GroupId(2), "zz"));
        assert_eq!(store.state().view, View::Dashboard);
        assert!(store.state().selected.is_none());
    }

    #[test]
    fn test_dispatch_routes_actions() {
        let mut store = store();
        store.dispatch(Action::ToggleSidebar).unwrap();
        assert!(!store.state().sidebar_open);

        store
            .dispatch(Action::SelectLink(LinkRef::new(GroupId(1), "a1")))
            .unwrap();
        assert_eq!(store.state().view, View::KeyStats);
        assert_eq!(store.selected_link().unwrap().key, "/ytb");

        let err = store
            .dispatch(Action::RenameGroup {
                group_id: GroupId(1),
                name: String::new(),
            })
            .unwrap_err();
        assert!(err.is_validation());
    }

    #[test]
    fn test_deleting_selected_link_clears_selection() {
        let mut store = store();
        let target = LinkRef::new(GroupId(1), "a1");
        store.select_link_for_detail(target.clone());
        store.delete_link(&target);
        assert!(store.state().selected.is_none());
        assert!(store.selected_link().is_none());
    }
}
