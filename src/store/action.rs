//! Action 系统
//!
//! 视图层不直接修改状态，而是产生 Action 交给 Store 处理。

use super::models::{GroupId, LinkPatch, LinkRef};
use super::state::{Modal, View};

/// Store 可以执行的所有命令
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Action {
    // ========== 分组 ==========
    /// 展开/折叠分组
    ToggleGroup(GroupId),
    /// 重命名分组
    RenameGroup { group_id: GroupId, name: String },
    /// 删除分组（连同其中所有链接）
    DeleteGroup(GroupId),

    // ========== 链接 ==========
    /// 合并补丁到链接
    UpdateLink { target: LinkRef, patch: LinkPatch },
    /// 删除单个链接
    DeleteLink(LinkRef),

    // ========== 导航 ==========
    /// 切换视图（同时清除选中链接）
    SetView(View),
    /// 打开链接详情视图
    SelectLink(LinkRef),
    /// 展开/收起侧边栏
    ToggleSidebar,

    // ========== 弹窗 ==========
    OpenModal(Modal),
    CloseModal,

    /// 无操作
    #[default]
    Noop,
}

impl Action {
    /// 判断是否是无操作
    pub fn is_noop(&self) -> bool {
        matches!(self, Action::Noop)
    }

    /// 操作名称，用于日志
    pub fn name(&self) -> &'static str {
        match self {
            Action::ToggleGroup(_) => "toggle_group",
            Action::RenameGroup { .. } => "rename_group",
            Action::DeleteGroup(_) => "delete_group",
            Action::UpdateLink { .. } => "update_link",
            Action::DeleteLink(_) => "delete_link",
            Action::SetView(_) => "set_view",
            Action::SelectLink(_) => "select_link",
            Action::ToggleSidebar => "toggle_sidebar",
            Action::OpenModal(_) => "open_modal",
            Action::CloseModal => "close_modal",
            Action::Noop => "noop",
        }
    }
}
